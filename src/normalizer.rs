use crate::core::domain::{CompileOutcome, CompilerReport};
use crate::core::errors::CompileError;

/// Parses the compiler's stdout as exactly one JSON document and converts it
/// into the stable response shape. A parse failure means this service could
/// not understand the compiler's answer, which is a different situation from
/// a valid report with `hasErrors: true` and is classified separately.
pub fn normalize(stdout: &str) -> Result<CompileOutcome, CompileError> {
    let report: CompilerReport =
        serde_json::from_str(stdout).map_err(|e| CompileError::MalformedOutput {
            msg: e.to_string(),
        })?;

    Ok(report.into())
}
