/// Native module contains the process-spawning implementation of the
/// invoker trait, talking to the external compiler binary directly.
pub mod invoker;
