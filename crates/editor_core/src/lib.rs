//! Editing state for a parameter model: label lookup, edited values, row
//! derivation and snapshot reconstruction.
//!
//! The caller owns an [`EditedValues`] and feeds it back into the pure
//! derivations here; nothing in this crate holds mutable state of its own.

use std::collections::HashMap;

use shared::{
    domain::ParamId,
    protocol::{Model, Parameter},
};

mod error;
mod key;
mod rows;
mod values;

pub use error::EditError;
pub use key::{Edit, EditKey};
pub use rows::{EditorRow, InputField, InputKind};
pub use values::EditedValues;

/// Immutable inputs of the editor: the parameter labels and the model as loaded.
#[derive(Debug, Clone, Default)]
pub struct ParamsEditor {
    names: HashMap<ParamId, String>,
    model: Model,
}

impl ParamsEditor {
    pub fn new(params: &[Parameter], model: Model) -> Self {
        let names = params
            .iter()
            .map(|param| (param.id, param.name.clone()))
            .collect();
        tracing::debug!(
            params = params.len(),
            values = model.param_values.len(),
            "params editor initialized"
        );
        Self { names, model }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Label for `param_id`, blank when the parameter list does not name it.
    pub fn label(&self, param_id: ParamId) -> &str {
        self.names.get(&param_id).map(String::as_str).unwrap_or("")
    }

    /// Starting state for the caller to own and edit.
    pub fn initial_values(&self) -> EditedValues {
        EditedValues::from_model(&self.model)
    }

    /// One row per value in the loaded model, showing `values` where present
    /// and the loaded value otherwise.
    pub fn rows(&self, values: &EditedValues) -> Vec<EditorRow> {
        self.model
            .param_values
            .iter()
            .map(|item| {
                let current = values.get(item.param_id).unwrap_or(&item.value);
                EditorRow {
                    param_id: item.param_id,
                    label: self.label(item.param_id).to_string(),
                    inputs: rows::inputs_for(item.param_id, current),
                }
            })
            .collect()
    }

    pub fn changed_ids(&self, values: &EditedValues) -> Vec<ParamId> {
        values.changed_ids(&self.model)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
