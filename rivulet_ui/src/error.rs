use thiserror::Error;

use crate::form::FieldId;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum UiError {
    #[error("Expected a field belonging to this form, got {0:?}")]
    UnknownField(FieldId),
    #[error("A field can not be chained to itself, got {0:?}")]
    SelfChained(FieldId),
    #[error("Ran out of field ids for this form")]
    FormFull,
}
