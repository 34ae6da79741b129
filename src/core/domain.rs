use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::CompileError;

/// A validated compile request. `filename` never influences compilation, it
/// only labels diagnostics.
#[derive(Clone, Debug)]
pub struct CompileRequest {
    pub code: String,
    pub filename: Option<String>,
}

impl CompileRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            filename: None,
        }
    }

    pub fn label(&self) -> &str {
        self.filename.as_deref().unwrap_or("unnamed.code")
    }
}

impl TryFrom<Value> for CompileRequest {
    type Error = CompileError;

    fn try_from(body: Value) -> Result<Self, CompileError> {
        let Some(code) = body.get("code") else {
            return Err(CompileError::InvalidRequest {
                msg: "missing \"code\" field in request body".to_string(),
            });
        };
        let Some(code) = code.as_str() else {
            return Err(CompileError::InvalidRequest {
                msg: "\"code\" field must be a string".to_string(),
            });
        };

        let filename = body
            .get("filename")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            code: code.to_string(),
            filename,
        })
    }
}

/// The document the external compiler prints on stdout when invoked with
/// `--json`. The compiler is versioned independently of this service, so
/// every field is optional and error/token/symbol/AST internals stay opaque.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompilerReport {
    pub has_errors: bool,
    pub error_count: i64,
    pub errors: Vec<Value>,
    pub symbol_table: Map<String, Value>,
    pub tokens: Vec<Value>,
    #[serde(default = "empty_object")]
    pub ast: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// The stable response contract. `success` is computed here instead of being
/// read from the report, so the API keeps its meaning even if the compiler
/// changes its own success conventions.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOutcome {
    pub success: bool,
    pub errors: Vec<Value>,
    pub symbol_table: Map<String, Value>,
    pub error_count: i64,
    pub has_errors: bool,
    pub tokens: Vec<Value>,
    pub ast: Value,
}

impl From<CompilerReport> for CompileOutcome {
    fn from(report: CompilerReport) -> Self {
        Self {
            success: !report.has_errors,
            errors: report.errors,
            symbol_table: report.symbol_table,
            error_count: report.error_count,
            has_errors: report.has_errors,
            tokens: report.tokens,
            ast: report.ast,
        }
    }
}

/// One entry of the example catalog.
#[derive(Clone, Debug)]
pub struct ExampleProgram {
    pub key: &'static str,
    pub name: &'static str,
    pub code: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_with_code_and_filename_is_accepted() {
        let request =
            CompileRequest::try_from(json!({"code": "nexus {}", "filename": "demo.code"}))
                .unwrap();

        assert_eq!(request.code, "nexus {}");
        assert_eq!(request.label(), "demo.code");
    }

    #[test]
    fn request_without_filename_gets_default_label() {
        let request = CompileRequest::try_from(json!({"code": "nexus {}"})).unwrap();

        assert_eq!(request.filename, None);
        assert_eq!(request.label(), "unnamed.code");
    }

    #[test]
    fn request_missing_code_is_rejected() {
        let result = CompileRequest::try_from(json!({"filename": "demo.code"}));

        assert!(matches!(
            result,
            Err(CompileError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn request_with_non_string_code_is_rejected() {
        let result = CompileRequest::try_from(json!({"code": 42}));

        assert!(matches!(
            result,
            Err(CompileError::InvalidRequest { .. })
        ));
    }

    #[test]
    fn outcome_success_is_negation_of_has_errors() {
        let clean = CompilerReport {
            has_errors: false,
            ..CompilerReport::default()
        };
        let broken = CompilerReport {
            has_errors: true,
            error_count: 1,
            ..CompilerReport::default()
        };

        assert!(CompileOutcome::from(clean).success);
        assert!(!CompileOutcome::from(broken).success);
    }

    #[test]
    fn report_fields_default_when_absent() {
        let report: CompilerReport = serde_json::from_str("{}").unwrap();

        assert!(!report.has_errors);
        assert_eq!(report.error_count, 0);
        assert!(report.errors.is_empty());
        assert!(report.symbol_table.is_empty());
        assert!(report.tokens.is_empty());
        assert_eq!(report.ast, serde_json::json!({}));
    }
}
