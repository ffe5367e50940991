//! UVM assembler — text ↔ binary translation.
//!
//! Source is line oriented: `<command> <integer>`, with optional trailing
//! `# comment`. Blank lines are ignored.
//!
//! # Usage
//!
//! ```
//! use uvm_assembler::{assemble, disassemble};
//!
//! let text = "load_const 5\nwrite_value 0\n";
//! let assembly = assemble(text).unwrap();
//! assert_eq!(assembly.program.len(), 2);
//! assert_eq!(assembly.image.len(), 6);
//! assert_eq!(disassemble(&assembly.image).unwrap(), text);
//! ```
//!
//! # Error ordering
//!
//! Every line is parsed before anything is encoded. A syntax error on any
//! line therefore wins over an unknown command or out-of-range argument on
//! an earlier line. No partial image is ever returned.

pub mod error;

mod disassembler;
mod lexer;
mod listing;
mod parser;

pub use disassembler::disassemble;
pub use error::AsmError;
pub use listing::listing;

use parser::{encode_statement, parse_line};
use tracing::debug;
use uvm_common::{Program, INSTRUCTION_SIZE};

/// Output of a successful assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assembly {
    /// Concatenated 3-byte instruction words.
    pub image: Vec<u8>,
    /// The instruction list, in source order.
    pub program: Program,
}

/// Assemble text into a binary image and instruction list.
///
/// Returns the first error encountered. Fix one error at a time.
pub fn assemble(text: &str) -> Result<Assembly, AsmError> {
    let mut statements = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(stmt) = parse_line(line, idx + 1)? {
            statements.push(stmt);
        }
    }

    let mut image = Vec::with_capacity(statements.len() * INSTRUCTION_SIZE);
    let mut instructions = Vec::with_capacity(statements.len());
    for stmt in &statements {
        let (instr, bytes) = encode_statement(stmt)?;
        instructions.push(instr);
        image.extend_from_slice(&bytes);
    }

    debug!(
        instructions = instructions.len(),
        bytes = image.len(),
        "assembled"
    );

    Ok(Assembly {
        image,
        program: Program::new(instructions),
    })
}
