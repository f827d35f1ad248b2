//! IR errors definitions.

use thiserror::Error;

/// An alias for result that can be an [`IrError`].
pub type IrResult<T> = Result<T, IrError>;

/// The IR error type.
#[derive(Debug, Error)]
pub enum IrError {
    #[error("could not convert {} into {}", from, to)]
    Conversion { from: String, to: String },

    #[error("invalid type")]
    InvalidType,
}
