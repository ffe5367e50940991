//! Instruction word encoding and decoding.
//!
//! Every instruction is exactly 3 bytes. The bytes are the little-endian
//! form of the 24-bit value `opcode | (operand << 4)`:
//! ```text
//! Byte 0:   operand bits 0-3 (high nibble) | opcode (low nibble)
//! Byte 1:   operand bits 4-11
//! Byte 2:   operand bits 12-19
//! ```
//! Encoding only accepts 15-bit operands. Decoding takes whatever
//! `value >> 4` yields, which can be up to 20 bits wide.

use std::fmt;

use crate::error::{DecodeError, EncodeError};
use crate::opcode::Opcode;

/// Size of one encoded instruction in bytes.
pub const INSTRUCTION_SIZE: usize = 3;

/// Largest value field A can hold.
pub const OPCODE_MAX: i64 = (1 << 4) - 1;

/// Largest value field B can hold when encoding.
pub const OPERAND_MAX: i64 = (1 << 15) - 1;

/// Pack raw field values into one 3-byte word.
///
/// No check is made that `opcode` names a recognized operation; only the
/// bit widths are validated, and nothing is produced if either is violated.
pub fn pack(opcode: i64, operand: i64) -> Result<[u8; INSTRUCTION_SIZE], EncodeError> {
    if !(0..=OPCODE_MAX).contains(&opcode) {
        return Err(EncodeError::OpcodeOutOfRange(opcode));
    }
    if !(0..=OPERAND_MAX).contains(&operand) {
        return Err(EncodeError::OperandOutOfRange(operand));
    }

    let value = (opcode as u32) | ((operand as u32) << 4);
    let le = value.to_le_bytes();
    Ok([le[0], le[1], le[2]])
}

/// Split one 3-byte word back into its raw `(opcode, operand)` fields.
pub fn unpack(bytes: &[u8]) -> Result<(u8, u32), DecodeError> {
    let word: [u8; INSTRUCTION_SIZE] = bytes
        .try_into()
        .map_err(|_| DecodeError::InvalidLength(bytes.len()))?;

    let value = u32::from_le_bytes([word[0], word[1], word[2], 0]);
    Ok(((value & 0x0F) as u8, value >> 4))
}

/// A single decoded UVM instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub opcode: Opcode,
    /// Immediate constant or memory address, depending on the opcode.
    pub operand: u32,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(opcode: Opcode, operand: u32) -> Self {
        Self { opcode, operand }
    }

    /// Encode this instruction to 3 bytes (little-endian).
    ///
    /// Fails if the operand is wider than 15 bits, which can only happen
    /// for instructions built by hand or decoded from foreign images.
    pub fn encode(&self) -> Result<[u8; INSTRUCTION_SIZE], EncodeError> {
        pack(i64::from(self.opcode as u8), i64::from(self.operand))
    }

    /// Decode one instruction slot.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let (a, b) = unpack(bytes)?;
        let opcode = Opcode::try_from(a)?;
        Ok(Self { opcode, operand: b })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.operand)
    }
}
