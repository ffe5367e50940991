//! Opcode definitions for the UVM instruction set.

use std::fmt;

use crate::error::DecodeError;

/// Identifies the operation to perform (field A of the instruction word).
///
/// The `#[repr(u8)]` values are the fixed 4-bit selectors written to the
/// binary image.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push the operand itself onto the stack.
    LoadConst = 14,
    /// Push `memory[operand]` onto the stack.
    ReadValue = 11,
    /// Pop the top of stack into `memory[operand]`.
    WriteValue = 7,
    /// Push the sign (-1, 0 or 1) of `memory[operand]`.
    Sgn = 4,
}

/// All valid opcodes, in definition order. Useful for exhaustive testing.
pub const ALL_OPCODES: [Opcode; 4] = [
    Opcode::LoadConst,
    Opcode::ReadValue,
    Opcode::WriteValue,
    Opcode::Sgn,
];

impl TryFrom<u8> for Opcode {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            14 => Ok(Opcode::LoadConst),
            11 => Ok(Opcode::ReadValue),
            7 => Ok(Opcode::WriteValue),
            4 => Ok(Opcode::Sgn),
            _ => Err(DecodeError::UnknownOpcode(value)),
        }
    }
}

impl Opcode {
    /// Returns the assembly mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Opcode::LoadConst => "load_const",
            Opcode::ReadValue => "read_value",
            Opcode::WriteValue => "write_value",
            Opcode::Sgn => "sgn",
        }
    }

    /// Look up an opcode by its exact (lowercase) mnemonic.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ALL_OPCODES
            .iter()
            .find(|op| op.mnemonic() == mnemonic)
            .copied()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
