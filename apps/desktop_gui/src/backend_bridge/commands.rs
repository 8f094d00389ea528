//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// Fetch the parameter list and the model again.
    Load,
}
