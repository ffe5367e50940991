//! Runtime errors for the UVM.
//!
//! Every error includes the instruction pointer (`at`) of the instruction
//! that faulted. The pointer is never advanced past a faulting instruction.

use thiserror::Error;
use uvm_common::DecodeError;

/// Errors that end a run early.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The instruction slot could not be decoded.
    #[error("cannot decode instruction at {at}: {source}")]
    Decode { at: usize, source: DecodeError },

    /// Pop or peek on an empty stack.
    #[error("stack underflow at instruction {at}")]
    StackUnderflow { at: usize },

    /// Memory access outside `[0, size)`.
    #[error("address {address} out of range (memory size {size}) at instruction {at}")]
    AddressOutOfRange {
        at: usize,
        address: usize,
        size: usize,
    },
}

impl RuntimeError {
    /// Instruction pointer of the faulting instruction.
    pub fn at(&self) -> usize {
        match self {
            RuntimeError::Decode { at, .. }
            | RuntimeError::StackUnderflow { at }
            | RuntimeError::AddressOutOfRange { at, .. } => *at,
        }
    }
}
