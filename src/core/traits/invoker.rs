use std::path::Path;

use crate::core::errors::CompileError;

/// Captured output of one compiler invocation. The exit code is recorded but
/// never interpreted beyond logging; language-level errors travel inside the
/// JSON payload on stdout.
#[derive(Clone, Debug)]
pub struct InvokerOutput {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

#[mockall::automock]
#[async_trait::async_trait]
pub trait CompilerInvoker: std::fmt::Debug + Send + Sync {
    /// Runs the compiler against a materialized source file. One invocation
    /// per request, no retries.
    async fn invoke(&self, source_path: &Path) -> Result<InvokerOutput, CompileError>;
}
