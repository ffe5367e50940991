//! Main execution loop and opcode dispatch for the UVM.

use tracing::{debug, warn};
use uvm_common::{Instruction, Opcode, INSTRUCTION_SIZE};

use crate::error::RuntimeError;
use crate::machine::Machine;
use crate::trace::Trace;

/// Number of leading memory cells shown in the trace footer.
const TRACE_MEMORY_PREVIEW: usize = 16;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The instruction pointer reached the end of the image.
    Completed,
    /// A decode or execution fault stopped the run at `error.at()`.
    Halted(RuntimeError),
}

/// Result of one run. The final machine state stays with the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    /// Number of instructions that executed successfully.
    pub steps: usize,
    pub trace: Trace,
}

impl Report {
    /// Returns true if the run reached the end of the image.
    pub fn is_completed(&self) -> bool {
        self.outcome == Outcome::Completed
    }

    /// The fault that halted the run, if any.
    pub fn error(&self) -> Option<&RuntimeError> {
        match &self.outcome {
            Outcome::Completed => None,
            Outcome::Halted(e) => Some(e),
        }
    }
}

impl Machine {
    /// Execute `image` from the current instruction pointer until the end
    /// of the image or the first fault.
    ///
    /// Slots are `image[3i..3i + 3]`; a trailing partial slot is only an
    /// error once the pointer reaches it.
    pub fn execute(&mut self, image: &[u8]) -> Report {
        let slots: Vec<&[u8]> = image.chunks(INSTRUCTION_SIZE).collect();
        let mut trace = Trace::new();
        let mut steps = 0;

        trace.push(format!("run started: {} instructions", slots.len()));
        trace.push(format!("initial stack: {:?}", self.stack()));

        let outcome = loop {
            let Some(slot) = slots.get(self.ip()) else {
                break Outcome::Completed;
            };

            match self.step(slot, &mut trace) {
                Ok(()) => {
                    self.advance();
                    steps += 1;
                }
                Err(e) => {
                    warn!(ip = self.ip(), error = %e, "run halted");
                    trace.push(format!("[RUNTIME ERROR] {e}"));
                    break Outcome::Halted(e);
                }
            }
        };

        trace.push(format!("finished at ip={}", self.ip()));
        trace.push(format!("final stack: {:?}", self.stack()));
        let preview = self.memory().len().min(TRACE_MEMORY_PREVIEW);
        trace.push(format!(
            "memory[0..{preview}]: {:?}",
            &self.memory()[..preview]
        ));

        Report {
            outcome,
            steps,
            trace,
        }
    }

    /// Decode, log, and execute the instruction in one slot.
    fn step(&mut self, slot: &[u8], trace: &mut Trace) -> Result<(), RuntimeError> {
        let at = self.ip();
        let instr =
            Instruction::decode(slot).map_err(|source| RuntimeError::Decode { at, source })?;

        debug!(
            ip = at,
            op = instr.opcode.mnemonic(),
            operand = instr.operand,
            depth = self.stack_depth(),
            "step"
        );
        trace.push(format!(
            "[{at:03}] {:<12} | operand: {} | stack: {:?}",
            instr.opcode.mnemonic(),
            instr.operand,
            self.stack()
        ));

        let operand = instr.operand as usize;
        match instr.opcode {
            Opcode::LoadConst => self.exec_load_const(instr.operand),
            Opcode::ReadValue => self.exec_read_value(operand)?,
            Opcode::WriteValue => self.exec_write_value(operand)?,
            Opcode::Sgn => self.exec_sgn(operand)?,
        }
        Ok(())
    }

    fn exec_load_const(&mut self, constant: u32) {
        self.push(i64::from(constant));
    }

    fn exec_read_value(&mut self, address: usize) -> Result<(), RuntimeError> {
        let value = self.read(address)?;
        self.push(value);
        Ok(())
    }

    fn exec_write_value(&mut self, address: usize) -> Result<(), RuntimeError> {
        let value = self.pop()?;
        self.write(address, value)
    }

    fn exec_sgn(&mut self, address: usize) -> Result<(), RuntimeError> {
        let value = self.read(address)?;
        self.push(value.signum());
        Ok(())
    }
}
