//! CSV memory dump and `START:END` range parsing.

use std::fmt::Write;

use thiserror::Error;
use uvm_vm::Machine;

/// Malformed command-line input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// The range has no `:` separator.
    #[error("dump range must be START:END, got '{0}'")]
    MissingColon(String),

    /// One side of the range is not a non-negative integer.
    #[error("invalid address '{0}' in dump range")]
    InvalidBound(String),

    /// START is greater than END.
    #[error("dump range start {start} is greater than end {end}")]
    Reversed { start: usize, end: usize },
}

/// Parse an inclusive `START:END` address range.
pub fn parse_range(text: &str) -> Result<(usize, usize), UsageError> {
    let (start, end) = text
        .split_once(':')
        .ok_or_else(|| UsageError::MissingColon(text.to_string()))?;

    let bound = |s: &str| {
        s.trim()
            .parse::<usize>()
            .map_err(|_| UsageError::InvalidBound(s.to_string()))
    };
    let (start, end) = (bound(start)?, bound(end)?);

    if start > end {
        return Err(UsageError::Reversed { start, end });
    }
    Ok((start, end))
}

/// Render the machine state as CSV.
///
/// Rows: stack size, stack elements top first, the instruction pointer,
/// the requested range label, then one row per memory cell in
/// `[start, min(end, size - 1)]`.
pub fn dump_csv(machine: &Machine, start: usize, end: usize) -> String {
    let mut out = String::from("Type,Address/Index,Value\n");

    let _ = writeln!(out, "STACK,SIZE,{}", machine.stack_depth());
    for (i, value) in machine.stack().iter().rev().enumerate() {
        let _ = writeln!(out, "STACK,stack[{i}],{value}");
    }

    let _ = writeln!(out, "REGISTERS,IP,{}", machine.ip());

    let _ = writeln!(out, "MEMORY,RANGE,{start}-{end}");
    let stop = end.saturating_add(1).min(machine.memory_size());
    for addr in start..stop {
        let _ = writeln!(out, "MEMORY,{addr},{}", machine.memory()[addr]);
    }

    out
}
