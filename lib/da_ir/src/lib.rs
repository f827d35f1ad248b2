//! Normalized Dalvik instruction representation for the `DexAlloc` register
//! allocator.
//!
//! The crate defines the instruction set the allocator runs on, once upstream
//! passes have resolved constant pool references and bound method parameters
//! to registers. It carries no dex file parsing: instructions are built
//! programmatically by the normalization pipeline and consumed by analysis
//! and allocation passes.

pub mod errors;
pub mod fields;
pub mod instrs;
pub mod methods;
pub mod registers;
pub mod types;

pub use crate::fields::FieldRef;
pub use crate::instrs::{Instr, Instruction};
pub use crate::methods::{MethodRef, Proto};
pub use crate::registers::{Reg, RegList, RegRange};
pub use crate::types::Type;
