//! Assemble-and-run in one call, for front ends that work on source text.

use uvm_assembler::{assemble, AsmError, Assembly};
use uvm_vm::{run, Machine, Report};

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct Session {
    pub assembly: Assembly,
    /// Final machine state, including after a halted run.
    pub machine: Machine,
    pub report: Report,
}

/// Assemble `source` and run it on a fresh machine with `memory_size` cells.
///
/// Only assembly failures are errors; runtime faults are in the report.
pub fn assemble_and_run(source: &str, memory_size: usize) -> Result<Session, AsmError> {
    let assembly = assemble(source)?;
    let mut machine = Machine::with_memory_size(memory_size);
    let report = run(&assembly.image, &mut machine);
    Ok(Session {
        assembly,
        machine,
        report,
    })
}
