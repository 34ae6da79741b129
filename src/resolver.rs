use std::path::{Path, PathBuf};

/// Candidate locations for the 59LANG compiler executable, highest priority
/// first: CI artifact directory, local build directories, then a bare name
/// resolved against the working directory.
pub fn default_candidates() -> Vec<PathBuf> {
    [
        "artifact/compiler",
        "artifact/compiler.exe",
        "build/Release/compiler.exe",
        "build/compiler.exe",
        "build/compiler",
        "compiler",
        "compiler.exe",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

/// Picks the first candidate that exists on disk. Evaluated once at startup;
/// the result is held as immutable process-wide state and never rescanned
/// per request.
pub fn resolve(candidates: &[PathBuf]) -> Option<PathBuf> {
    let resolved = candidates.iter().find(|path| path.exists()).cloned();

    match &resolved {
        Some(path) => tracing::info!(compiler_path = %path.display(), "resolved compiler binary"),
        None => tracing::warn!(
            candidates = candidates.len(),
            "no compiler binary found; compile requests will be rejected"
        ),
    }

    resolved
}

/// Whether a previously resolved path still exists. Used by the health
/// endpoint; never spawns the compiler.
pub fn is_available(resolved: Option<&Path>) -> bool {
    resolved.is_some_and(Path::exists)
}
