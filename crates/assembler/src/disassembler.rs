//! Disassembler: binary image → canonical assembly text.
//!
//! Output is flat text, one `<mnemonic> <operand>` per line, no comments
//! and no blank lines.

use uvm_common::{DecodeError, Program};

/// Disassemble an image into canonical assembly text.
///
/// For any image produced by the assembler,
/// `assemble(disassemble(image)).image == image`.
pub fn disassemble(image: &[u8]) -> Result<String, DecodeError> {
    let program = Program::decode(image)?;
    Ok(program
        .instructions
        .iter()
        .map(|instr| format!("{instr}\n"))
        .collect())
}
