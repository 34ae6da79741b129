use std::path::Path;

use tokio::time::Duration;

use crate::core::errors::CompileError;
use crate::core::traits::invoker::{CompilerInvoker, InvokerOutput};

/// Invoker that returns a canned result after an optional delay. Lets tests
/// and local development exercise the full orchestration path without a
/// compiler binary on disk.
#[derive(Debug, Clone)]
pub struct InvokerStub {
    result: Result<InvokerOutput, CompileError>,
    delay: Duration,
}

impl InvokerStub {
    pub fn new(result: Result<InvokerOutput, CompileError>, delay: Duration) -> Self {
        Self { result, delay }
    }

    /// Stub that prints the given document on stdout with a zero exit code.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self::new(
            Ok(InvokerOutput {
                status: 0,
                stdout: stdout.into(),
                stderr: String::new(),
            }),
            Duration::ZERO,
        )
    }
}

#[async_trait::async_trait]
impl CompilerInvoker for InvokerStub {
    #[tracing::instrument]
    async fn invoke(&self, source_path: &Path) -> Result<InvokerOutput, CompileError> {
        tracing::debug!(source = %source_path.display(), "stub invocation");
        tokio::time::sleep(self.delay).await;
        tracing::debug!("stub result: {:?}", self.result);

        self.result.clone()
    }
}
