//! Backend side of the GUI: a worker thread with its own tokio runtime.

pub mod commands;
pub mod runtime;
