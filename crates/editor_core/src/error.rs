use shared::domain::ParamId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("invalid edit key '{0}': expected ID or ID-INDEX")]
    InvalidKey(String),
    #[error("parameter {0} is not part of the loaded model")]
    UnknownParam(ParamId),
    #[error("parameter {0} holds a single value, not a list")]
    NotAList(ParamId),
    #[error("parameter {0} holds a list; edit its elements as {0}-INDEX")]
    NotAScalar(ParamId),
    #[error("index {index} is out of range for parameter {param_id} (len {len})")]
    IndexOutOfRange {
        param_id: ParamId,
        index: usize,
        len: usize,
    },
}
