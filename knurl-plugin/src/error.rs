use crate::controls::kind::ControlKind;
use crate::controls::ControlId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid control declaration")]
    InvalidDeclaration,

    #[error("declaration does not decode: {0}")]
    Declaration(#[from] serde_json::Error),

    #[error("unknown control id {0}")]
    UnknownControlId(ControlId),

    #[error("{value} value committed to {control} control")]
    KindMismatch {
        control: ControlKind,
        value: ControlKind,
    },
}
