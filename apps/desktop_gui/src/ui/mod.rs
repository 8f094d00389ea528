//! UI layer for the desktop editor: loading screen, parameter table and actions.

pub mod app;

pub use app::{ParamsEditorApp, StartupConfig};
