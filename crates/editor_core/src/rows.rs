use serde::Serialize;
use shared::domain::{ParamId, ParamValue};

use crate::key::EditKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputField {
    pub key: EditKey,
    pub kind: InputKind,
    pub value: String,
}

/// One table row: the parameter label and its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorRow {
    pub param_id: ParamId,
    pub label: String,
    pub inputs: Vec<InputField>,
}

pub(crate) fn inputs_for(param_id: ParamId, value: &ParamValue) -> Vec<InputField> {
    match value {
        ParamValue::List(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| InputField {
                key: EditKey::Element { param_id, index },
                kind: InputKind::Text,
                value: item.to_string(),
            })
            .collect(),
        ParamValue::Scalar(scalar) => vec![InputField {
            key: EditKey::Param(param_id),
            kind: if scalar.is_number() {
                InputKind::Number
            } else {
                InputKind::Text
            },
            value: scalar.to_string(),
        }],
    }
}
