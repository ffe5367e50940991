//! Two-phase translation of assembly lines into instructions.
//!
//! Phase 1 ([`parse_line`]) checks line shape and the integer literal.
//! Phase 2 ([`encode_statement`]) resolves the mnemonic and checks that the
//! argument fits the operand field. Keeping them apart means a malformed
//! line anywhere in the source is reported before any mnemonic or range
//! problem.

use crate::error::AsmError;
use crate::lexer::{strip_comment, tokenize_line};
use uvm_common::{pack, Instruction, Opcode, INSTRUCTION_SIZE};

/// One parsed source line: a command name and its integer argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Statement {
    /// 1-based source line number.
    pub line: usize,
    pub command: String,
    pub argument: i64,
}

/// Parse one line. Returns `Ok(None)` for blank and comment-only lines.
pub(crate) fn parse_line(line: &str, line_num: usize) -> Result<Option<Statement>, AsmError> {
    let tokens = tokenize_line(line);
    match tokens.as_slice() {
        [] => Ok(None),
        [command, argument] => {
            let argument = argument.parse::<i64>().map_err(|_| AsmError::InvalidNumber {
                line: line_num,
                token: argument.to_string(),
            })?;
            Ok(Some(Statement {
                line: line_num,
                command: command.to_string(),
                argument,
            }))
        }
        _ => Err(AsmError::WrongTokenCount {
            line: line_num,
            text: strip_comment(line).to_string(),
        }),
    }
}

/// Resolve and encode one statement.
pub(crate) fn encode_statement(
    stmt: &Statement,
) -> Result<(Instruction, [u8; INSTRUCTION_SIZE]), AsmError> {
    let opcode = Opcode::from_mnemonic(&stmt.command).ok_or_else(|| AsmError::UnknownCommand {
        line: stmt.line,
        command: stmt.command.clone(),
    })?;

    let bytes = pack(i64::from(opcode as u8), stmt.argument).map_err(|source| {
        AsmError::OutOfRange {
            line: stmt.line,
            source,
        }
    })?;

    // pack() accepted the argument, so it is within 0..=32767.
    let instr = Instruction::new(opcode, stmt.argument as u32);
    Ok((instr, bytes))
}
