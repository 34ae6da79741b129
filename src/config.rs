use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::resolver;

pub const DEFAULT_COMPILE_TIMEOUT: Duration = Duration::from_secs(5);

/// Process-wide configuration, fixed at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub compile_timeout: Duration,
    pub candidates: Vec<PathBuf>,
    pub scratch_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            compile_timeout: DEFAULT_COMPILE_TIMEOUT,
            candidates: resolver::default_candidates(),
            scratch_dir: std::env::temp_dir().join("fiftyninelang"),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("FIFTYNINE_BIND_ADDR").ok(),
            std::env::var("FIFTYNINE_COMPILE_TIMEOUT_MS").ok(),
            std::env::var("FIFTYNINE_COMPILER_PATH").ok(),
        )
    }

    fn from_vars(
        bind_addr: Option<String>,
        timeout_ms: Option<String>,
        compiler_path: Option<String>,
    ) -> Self {
        let mut config = Self::default();

        if let Some(addr) = bind_addr {
            match addr.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(e) => tracing::warn!(value = %addr, error = %e, "ignoring invalid FIFTYNINE_BIND_ADDR"),
            }
        }

        if let Some(ms) = timeout_ms {
            match ms.parse::<u64>() {
                Ok(ms) => config.compile_timeout = Duration::from_millis(ms),
                Err(e) => tracing::warn!(value = %ms, error = %e, "ignoring invalid FIFTYNINE_COMPILE_TIMEOUT_MS"),
            }
        }

        // An explicitly configured path outranks every default candidate.
        if let Some(path) = compiler_path {
            config.candidates.insert(0, PathBuf::from(path));
        }

        config
    }
}
