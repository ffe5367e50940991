//! Error types for the UVM assembler.

use thiserror::Error;
use uvm_common::EncodeError;

/// Errors produced during assembly of text to binary.
///
/// `WrongTokenCount` and `InvalidNumber` come from the parse phase; the
/// other two come from the encode phase, which only runs once every line
/// has parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// A non-blank line did not split into exactly two tokens.
    #[error("line {line}: expected '<command> <argument>', got '{text}'")]
    WrongTokenCount { line: usize, text: String },

    /// The argument token is not a base-10 integer.
    #[error("line {line}: argument must be an integer, got '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// The command name is not one of the four mnemonics.
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    /// The argument does not fit the operand field.
    #[error("line {line}: {source}")]
    OutOfRange { line: usize, source: EncodeError },
}

impl AsmError {
    /// 1-based source line the error refers to.
    pub fn line(&self) -> usize {
        match self {
            AsmError::WrongTokenCount { line, .. }
            | AsmError::InvalidNumber { line, .. }
            | AsmError::UnknownCommand { line, .. }
            | AsmError::OutOfRange { line, .. } => *line,
        }
    }
}
