use serde::{Deserialize, Serialize};

use crate::domain::{ParamId, ParamKind, ParamValue};

pub const MODEL_PATH: &str = "model";
pub const PARAMS_PATH: &str = "params";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: ParamId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterValue {
    pub param_id: ParamId,
    pub value: ParamValue,
}

impl ParameterValue {
    pub fn new(param_id: ParamId, value: impl Into<ParamValue>) -> Self {
        Self {
            param_id,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub param_values: Vec<ParameterValue>,
}

impl Model {
    pub fn is_empty(&self) -> bool {
        self.param_values.is_empty()
    }
}
