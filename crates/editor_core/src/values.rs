use indexmap::IndexMap;
use shared::{
    domain::{ParamId, ParamValue, Scalar},
    protocol::{Model, ParameterValue},
};

use crate::{
    error::EditError,
    key::{Edit, EditKey},
};

/// Current value of every parameter in the loaded model, in first-seen order.
///
/// The set of ids is fixed when the map is seeded; edits only replace values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditedValues {
    entries: IndexMap<ParamId, ParamValue>,
}

impl EditedValues {
    /// Seeds from the model. A repeated id keeps its first position and takes
    /// the last value seen.
    pub fn from_model(model: &Model) -> Self {
        let entries = model
            .param_values
            .iter()
            .map(|item| (item.param_id, item.value.clone()))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, param_id: ParamId) -> Option<&ParamValue> {
        self.entries.get(&param_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ParamId> + '_ {
        self.entries.keys().copied()
    }

    /// Returns a new map with `edit` merged in. `self` is left untouched, also
    /// when the edit is rejected.
    pub fn merged(&self, edit: &Edit) -> Result<Self, EditError> {
        let mut next = self.clone();
        next.apply(edit)?;
        Ok(next)
    }

    fn apply(&mut self, edit: &Edit) -> Result<(), EditError> {
        let param_id = edit.key.param_id();
        let slot = self
            .entries
            .get_mut(&param_id)
            .ok_or(EditError::UnknownParam(param_id))?;

        match (edit.key, slot) {
            (EditKey::Param(_), ParamValue::List(_)) => Err(EditError::NotAScalar(param_id)),
            (EditKey::Param(_), ParamValue::Scalar(scalar)) => {
                *scalar = Scalar::text(edit.value.as_str());
                Ok(())
            }
            (EditKey::Element { .. }, ParamValue::Scalar(_)) => Err(EditError::NotAList(param_id)),
            (EditKey::Element { index, .. }, ParamValue::List(items)) => {
                let len = items.len();
                let item = items.get_mut(index).ok_or(EditError::IndexOutOfRange {
                    param_id,
                    index,
                    len,
                })?;
                *item = Scalar::text(edit.value.as_str());
                Ok(())
            }
        }
    }

    /// Rebuilds a model from the current values, one entry per id, in map order.
    pub fn snapshot(&self) -> Model {
        Model {
            param_values: self
                .entries
                .iter()
                .map(|(param_id, value)| ParameterValue {
                    param_id: *param_id,
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// Ids whose current value differs from what `initial` seeded.
    pub fn changed_ids(&self, initial: &Model) -> Vec<ParamId> {
        let seeded = Self::from_model(initial);
        self.entries
            .iter()
            .filter(|(id, value)| seeded.get(**id) != Some(*value))
            .map(|(id, _)| *id)
            .collect()
    }
}
