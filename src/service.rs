use std::path::PathBuf;
use std::sync::Arc;

use crate::core::domain::{CompileOutcome, CompileRequest};
use crate::core::errors::CompileError;
use crate::core::traits::invoker::CompilerInvoker;
use crate::normalizer;
use crate::workspace::SourceFile;

/// Shared orchestration for one compile request: materialize the source,
/// invoke the compiler once, normalize its answer. Both the HTTP API and the
/// CLI front end go through here. The invoker is absent when no compiler
/// binary was resolved at startup; in that case requests fail fast without
/// touching the filesystem.
#[derive(Clone, Debug)]
pub struct CompileService {
    invoker: Option<Arc<dyn CompilerInvoker>>,
    scratch_dir: PathBuf,
}

impl CompileService {
    pub fn new(invoker: Option<Arc<dyn CompilerInvoker>>, scratch_dir: PathBuf) -> Self {
        Self {
            invoker,
            scratch_dir,
        }
    }

    #[tracing::instrument(skip(self, request), fields(filename = request.label()))]
    pub async fn compile(&self, request: &CompileRequest) -> Result<CompileOutcome, CompileError> {
        let Some(invoker) = &self.invoker else {
            return Err(CompileError::CompilerUnavailable {
                msg: "no compiler binary was resolved at startup".to_string(),
            });
        };

        let source = SourceFile::materialize(&self.scratch_dir, &request.code).await?;
        tracing::debug!(source = %source.path().display(), "source materialized");

        // The source file is removed before the invocation result is
        // inspected, so no outcome can leak it.
        let invoked = invoker.invoke(source.path()).await;
        source.cleanup().await;

        let output = invoked?;
        if !output.stderr.is_empty() {
            tracing::debug!(stderr = %output.stderr, "compiler stderr");
        }

        normalizer::normalize(&output.stdout)
    }
}
