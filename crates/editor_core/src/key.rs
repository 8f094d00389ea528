use std::{fmt, str::FromStr};

use serde::Serialize;
use shared::domain::ParamId;

use crate::error::EditError;

/// Address of one input: the whole value of a parameter, or one element of a
/// list-valued parameter. Text form is `"{id}"` or `"{id}-{index}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum EditKey {
    Param(ParamId),
    Element { param_id: ParamId, index: usize },
}

impl EditKey {
    pub fn param_id(self) -> ParamId {
        match self {
            Self::Param(id) => id,
            Self::Element { param_id, .. } => param_id,
        }
    }
}

impl fmt::Display for EditKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Param(id) => write!(f, "{id}"),
            Self::Element { param_id, index } => write!(f, "{param_id}-{index}"),
        }
    }
}

impl From<EditKey> for String {
    fn from(value: EditKey) -> Self {
        value.to_string()
    }
}

impl FromStr for EditKey {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let invalid = || EditError::InvalidKey(s.to_string());

        // Skip the first char so a negative id is not read as a separator.
        let separator = raw
            .char_indices()
            .skip(1)
            .find(|(_, c)| *c == '-')
            .map(|(at, _)| at);

        match separator {
            None => raw.parse().map(Self::Param).map_err(|_| invalid()),
            Some(at) => {
                let param_id = raw[..at].parse().map_err(|_| invalid())?;
                let index = raw[at + 1..].parse().map_err(|_| invalid())?;
                Ok(Self::Element { param_id, index })
            }
        }
    }
}

/// One change event: the addressed input now holds `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub key: EditKey,
    pub value: String,
}

impl Edit {
    pub fn new(key: EditKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }
}

/// Parses `KEY=VALUE`; everything after the first `=` is the value.
impl FromStr for Edit {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| EditError::InvalidKey(s.to_string()))?;
        Ok(Self::new(key.parse()?, value))
    }
}
