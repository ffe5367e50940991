//! Program representation for UVM binary images.
//!
//! A program is a sequence of 3-byte instructions. Binary images are raw
//! concatenations of instruction words with no header.

use crate::error::{DecodeError, EncodeError};
use crate::instruction::{Instruction, INSTRUCTION_SIZE};

/// A UVM program: a sequence of instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Encode the entire program to its binary image.
    ///
    /// The result length is always `instructions.len() * 3`.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut bytes = Vec::with_capacity(self.instructions.len() * INSTRUCTION_SIZE);
        for instr in &self.instructions {
            bytes.extend_from_slice(&instr.encode()?);
        }
        Ok(bytes)
    }

    /// Decode a whole binary image into a program.
    ///
    /// Fails on the first slot that does not decode.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() % INSTRUCTION_SIZE != 0 {
            return Err(DecodeError::InvalidImageLength(bytes.len()));
        }

        let instructions = bytes
            .chunks_exact(INSTRUCTION_SIZE)
            .map(Instruction::decode)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { instructions })
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
