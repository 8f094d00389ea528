//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{LoadError, LoadOutcome};
use editor_core::EditError;

pub enum UiEvent {
    Info(String),
    Loaded(LoadOutcome),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Config,
    Transport,
    Server,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    Load,
    Edit,
    Clipboard,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_load_error(err: &LoadError) -> Self {
        let category = match err {
            LoadError::InvalidUrl { .. } => UiErrorCategory::Config,
            LoadError::Transport { .. } => UiErrorCategory::Transport,
            LoadError::Status { .. } => UiErrorCategory::Server,
            LoadError::Malformed { .. } => UiErrorCategory::Validation,
        };
        Self {
            category,
            context: UiErrorContext::Load,
            message: err.to_string(),
        }
    }

    pub fn from_edit_error(err: &EditError) -> Self {
        Self {
            category: UiErrorCategory::Validation,
            context: UiErrorContext::Edit,
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Config => "Configuration",
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::Server => "Server",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
