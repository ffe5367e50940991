//! Test-mode listing: instruction list, raw bytes, and per-instruction bytes.

use std::fmt::Write;

use uvm_common::INSTRUCTION_SIZE;

use crate::Assembly;

/// Render the listing printed by `uvm assemble --test`.
pub fn listing(assembly: &Assembly) -> String {
    let mut out = String::new();
    let instrs = &assembly.program.instructions;

    out.push_str("--- Instructions ---\n");
    for (i, instr) in instrs.iter().enumerate() {
        let _ = writeln!(out, "[{i:02}] {:<12} {}", instr.opcode.mnemonic(), instr.operand);
    }

    out.push_str("\n--- Bytes ---\n");
    let bytes: Vec<String> = assembly.image.iter().map(|b| format!("0x{b:02X}")).collect();
    let _ = writeln!(out, "{}", bytes.join(" "));

    out.push_str("\n--- Per instruction (3 bytes each) ---\n");
    for (i, (instr, word)) in instrs
        .iter()
        .zip(assembly.image.chunks(INSTRUCTION_SIZE))
        .enumerate()
    {
        let hex: Vec<String> = word.iter().map(|b| format!("{b:02X}")).collect();
        let _ = writeln!(
            out,
            "[{i:02}] {:<12} | bytes: {} | operand: {}",
            instr.opcode.mnemonic(),
            hex.join(" "),
            instr.operand
        );
    }

    out
}
