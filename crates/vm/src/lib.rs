//! UVM virtual machine — runs binary images against a flat memory.
//!
//! The machine state is:
//! - An operand stack of signed integers
//! - A fixed-size data memory, zeroed at creation
//! - An instruction pointer counted in whole instructions
//!
//! Control flow is strictly linear, so a run over `n` instruction slots
//! takes at most `n` steps.
//!
//! # Usage
//!
//! ```
//! use uvm_common::{Instruction, Opcode, Program};
//! use uvm_vm::{run, Machine, Outcome};
//!
//! let image = Program::new(vec![
//!     Instruction::new(Opcode::LoadConst, 5),
//!     Instruction::new(Opcode::WriteValue, 0),
//! ])
//! .encode()
//! .unwrap();
//!
//! let mut machine = Machine::new();
//! let report = run(&image, &mut machine);
//! assert_eq!(report.outcome, Outcome::Completed);
//! assert_eq!(machine.read(0), Ok(5));
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod trace;

pub use error::RuntimeError;
pub use execute::{Outcome, Report};
pub use machine::{Machine, DEFAULT_MEMORY_SIZE};
pub use trace::Trace;

/// Execute a binary image against `machine` until it completes or halts.
///
/// This is the primary entry point for the VM. Runtime faults do not
/// surface as `Err`: they end the run and are recorded in the returned
/// [`Report`], and `machine` keeps whatever state the run left behind.
pub fn run(image: &[u8], machine: &mut Machine) -> Report {
    machine.execute(image)
}
