//! Allocation errors definitions.

use da_ir::registers::Reg;
use thiserror::Error;

/// An alias for result that can be an [`AllocError`].
pub type AllocResult<T> = Result<T, AllocError>;

/// The allocation error type.
#[derive(Debug, Error)]
pub enum AllocError {
    #[error("out of bounds register: {0}")]
    OutOfBoundsRegister(Reg),
}
