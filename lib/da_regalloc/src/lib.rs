//! Register kind lattice and per-instruction classifier for the `DexAlloc`
//! Dalvik register allocator.
//!
//! The allocator needs to know, for every instruction, which kind of value it
//! writes and which kinds it reads, so that it can merge the information
//! flowing into a register from every control flow predecessor and emit the
//! right `move`, `move-wide` or `move-object` when splitting or spilling.
//! [`classify`] holds the per-opcode tables, [`lattice`] the join semilattice
//! the merged information lives in, and [`kinds`] a register-wise summary
//! over whole method bodies.
//!
//! Everything in this crate is pure and immutable after initialization, so
//! per-method allocation jobs can query it concurrently without
//! synchronization.

pub mod classify;
pub mod errors;
pub mod kinds;
pub mod lattice;

pub use crate::classify::{dest_kind, make_move, src_kind};
pub use crate::kinds::method_kinds;
pub use crate::lattice::{Lattice, RegisterKind, KIND_LATTICE};
