//! Editor screen state and the transitions driven by backend events and edits.
//!
//! The screen owns the edited values; widgets only report edits back and read
//! rows and the snapshot through `editor_core`'s pure derivations.

use client_core::{LoadOutcome, LoadState};
use editor_core::{Edit, EditedValues, EditorRow, ParamsEditor};
use shared::{domain::ParamId, protocol::Model};

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Default)]
pub struct EditorScreen {
    pub load: LoadState,
    pub editor: ParamsEditor,
    pub values: EditedValues,
    pub status: String,
    pub error: Option<UiError>,
}

impl EditorScreen {
    pub fn new() -> Self {
        Self {
            status: "Loading".to_string(),
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Back to the loading indicator; the next `Loaded` event re-seeds the values.
    pub fn begin_reload(&mut self) {
        self.load = LoadState::Loading;
        self.error = None;
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::Info(message) => {
                self.status = message;
            }
            UiEvent::Loaded(outcome) => self.finish_load(outcome),
            UiEvent::Error(err) => {
                tracing::warn!(context = ?err.context(), "{}", err.message());
                // A dead backend never answers; stop showing the spinner.
                if err.context() == UiErrorContext::BackendStartup && self.is_loading() {
                    self.finish_load(LoadOutcome::default());
                }
                self.status = err.message().to_string();
                self.error = Some(err);
            }
        }
    }

    fn finish_load(&mut self, outcome: LoadOutcome) {
        let LoadOutcome {
            params,
            model,
            error,
        } = outcome;
        self.editor = ParamsEditor::new(&params, model);
        self.values = self.editor.initial_values();
        match error {
            Some(err) => {
                self.status = "Load failed".to_string();
                self.error = Some(UiError::from_load_error(&err));
            }
            None => {
                self.status = format!(
                    "Loaded {} parameters, {} rows",
                    params.len(),
                    self.editor.model().param_values.len()
                );
            }
        }
        self.load = LoadState::Ready;
    }

    pub fn apply_edit(&mut self, edit: &Edit) {
        match self.values.merged(edit) {
            Ok(values) => {
                tracing::debug!(key = %edit.key, "edit applied");
                self.values = values;
                if self
                    .error
                    .as_ref()
                    .is_some_and(|err| err.context() == UiErrorContext::Edit)
                {
                    self.error = None;
                }
            }
            Err(err) => {
                tracing::warn!(key = %edit.key, "edit rejected: {err}");
                self.error = Some(UiError::from_edit_error(&err));
            }
        }
    }

    pub fn rows(&self) -> Vec<EditorRow> {
        self.editor.rows(&self.values)
    }

    pub fn changed_ids(&self) -> Vec<ParamId> {
        self.editor.changed_ids(&self.values)
    }

    pub fn snapshot(&self) -> Model {
        self.values.snapshot()
    }
}
