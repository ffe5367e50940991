//! Encode and decode errors for UVM instruction words.

use thiserror::Error;

/// A field value does not fit its bit width.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Field A must fit in 4 bits.
    #[error("opcode {0} out of range (must fit in 4 bits: 0..=15)")]
    OpcodeOutOfRange(i64),

    /// Field B must fit in 15 bits.
    #[error("operand {0} out of range (must fit in 15 bits: 0..=32767)")]
    OperandOutOfRange(i64),
}

/// Errors that occur while decoding instruction words.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An instruction slot is not exactly 3 bytes.
    #[error("invalid instruction length: {0} bytes (expected 3)")]
    InvalidLength(usize),

    /// A whole image whose length is not a multiple of 3.
    #[error("invalid image length: {0} (must be multiple of 3)")]
    InvalidImageLength(usize),

    /// Field A decoded to a value outside the instruction set.
    #[error("unknown opcode: {0}")]
    UnknownOpcode(u8),
}
