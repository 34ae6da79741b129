/// Classified failures of a compile request. Every request either produces a
/// normalized payload or exactly one of these.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error("invalid request: {msg}")]
    InvalidRequest { msg: String },

    #[error("compiler binary is not available: {msg}")]
    CompilerUnavailable { msg: String },

    #[error("compilation timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("compiler produced output this service could not parse: {msg}")]
    MalformedOutput { msg: String },

    #[error("internal error: {msg}")]
    Internal { msg: String },
}
