//! UVM common types and instruction encoding.
//!
//! This crate provides the foundational data structures for the UVM
//! instruction set:
//!
//! - [`Opcode`] — the four operations and their 4-bit selectors
//! - [`pack`] / [`unpack`] — raw 3-byte word codec with field range checks
//! - [`Instruction`] — a decoded opcode/operand pair
//! - [`Program`] — a sequence of instructions and its binary image
//! - [`EncodeError`] / [`DecodeError`] — codec failures
//!
//! # Word layout
//!
//! Each instruction is one 24-bit little-endian word:
//! ```text
//! bits 0-3:   opcode  (field A)
//! bits 4-18:  operand (field B, 0..=32767 when encoding)
//! ```
//!
//! # Dependencies
//!
//! This crate uses `thiserror` and has no other dependencies.

pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;

// Re-export commonly used types at the crate root.
pub use error::{DecodeError, EncodeError};
pub use instruction::{pack, unpack, Instruction, INSTRUCTION_SIZE, OPCODE_MAX, OPERAND_MAX};
pub use opcode::Opcode;
pub use program::Program;
