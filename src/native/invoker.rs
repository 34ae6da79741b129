use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tokio::time::{Duration, timeout};

use crate::core::errors::CompileError;
use crate::core::traits::invoker::{CompilerInvoker, InvokerOutput};

/// Invokes the resolved compiler binary as `compiler <sourcePath> --json`
/// under a hard wall-clock timeout.
#[derive(Clone, Debug)]
pub struct NativeInvoker {
    compiler_path: PathBuf,
    timeout: Duration,
}

impl NativeInvoker {
    pub fn new<P: AsRef<Path>>(compiler_path: P, timeout: Duration) -> Self {
        Self {
            compiler_path: compiler_path.as_ref().into(),
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl CompilerInvoker for NativeInvoker {
    #[tracing::instrument(skip(self), fields(compiler = %self.compiler_path.display()))]
    async fn invoke(&self, source_path: &Path) -> Result<InvokerOutput, CompileError> {
        let mut cmd = Command::new(&self.compiler_path);
        cmd.arg(source_path)
            .arg("--json")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // When the timed-out wait future is dropped, the child is killed
            // and reaped by the runtime.
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|e| CompileError::CompilerUnavailable {
            msg: format!(
                "failed to spawn {}: {e}",
                self.compiler_path.display()
            ),
        })?;

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| CompileError::Internal {
                msg: format!("failed to collect compiler output: {e}"),
            })?,
            Err(_) => {
                tracing::warn!(source = %source_path.display(), "compiler invocation timed out");
                return Err(CompileError::Timeout {
                    timeout_ms: self.timeout.as_millis() as u64,
                });
            }
        };

        let status = output.status.code().unwrap_or(-1);
        tracing::debug!(status, "compiler exited");

        Ok(InvokerOutput {
            status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use tokio::time::Instant;

    use super::*;

    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[tokio::test]
    async fn captures_stdout_of_a_fast_compiler() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "compiler",
            "#!/bin/sh\nprintf '{\"hasErrors\": false, \"errorCount\": 0}'\n",
        );
        let source = dir.path().join("program.code");
        std::fs::write(&source, "nexus {}").unwrap();

        let invoker = NativeInvoker::new(&script, Duration::from_secs(5));
        let output = invoker.invoke(&source).await.unwrap();

        assert_eq!(output.status, 0);
        assert_eq!(output.stdout, "{\"hasErrors\": false, \"errorCount\": 0}");
        assert_eq!(output.stderr, "");
    }

    #[tokio::test]
    async fn passes_source_path_then_json_flag() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "compiler",
            "#!/bin/sh\nif [ \"$2\" = \"--json\" ]; then cat \"$1\"; else echo wrong-args; fi\n",
        );
        let source = dir.path().join("program.code");
        std::fs::write(&source, "nexus { broadcast 1; }").unwrap();

        let invoker = NativeInvoker::new(&script, Duration::from_secs(5));
        let output = invoker.invoke(&source).await.unwrap();

        assert_eq!(output.stdout, "nexus { broadcast 1; }");
    }

    #[tokio::test]
    async fn stderr_is_captured_separately() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(
            dir.path(),
            "compiler",
            "#!/bin/sh\nprintf '{}'\necho 'warning: unused channel' >&2\nexit 1\n",
        );
        let source = dir.path().join("program.code");
        std::fs::write(&source, "nexus {}").unwrap();

        let invoker = NativeInvoker::new(&script, Duration::from_secs(5));
        let output = invoker.invoke(&source).await.unwrap();

        assert_eq!(output.status, 1);
        assert_eq!(output.stdout, "{}");
        assert_eq!(output.stderr, "warning: unused channel\n");
    }

    #[tokio::test]
    async fn slow_compiler_times_out_within_bounded_margin() {
        let dir = tempfile::tempdir().unwrap();
        let script = write_script(dir.path(), "compiler", "#!/bin/sh\nsleep 30\n");
        let source = dir.path().join("program.code");
        std::fs::write(&source, "nexus {}").unwrap();

        let invoker = NativeInvoker::new(&script, Duration::from_millis(200));
        let started = Instant::now();
        let result = invoker.invoke(&source).await;
        let elapsed = started.elapsed();

        assert!(matches!(
            result,
            Err(CompileError::Timeout { timeout_ms: 200 })
        ));
        assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
    }

    #[tokio::test]
    async fn missing_binary_fails_as_unavailable_not_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("program.code");
        std::fs::write(&source, "nexus {}").unwrap();

        let invoker = NativeInvoker::new(
            dir.path().join("no-such-compiler"),
            Duration::from_secs(5),
        );
        let result = invoker.invoke(&source).await;

        assert!(matches!(
            result,
            Err(CompileError::CompilerUnavailable { .. })
        ));
    }
}
