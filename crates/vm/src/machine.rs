//! Machine state: operand stack, data memory, instruction pointer.
//!
//! The stack and memory are private; every mutation goes through the
//! bounds-checked primitives below.

use crate::error::RuntimeError;

/// Number of data memory cells in a default machine.
pub const DEFAULT_MEMORY_SIZE: usize = 2048;

/// State of one UVM run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    /// Operand stack, bottom first.
    stack: Vec<i64>,
    /// Flat data memory.
    memory: Vec<i64>,
    /// Index of the next instruction slot.
    ip: usize,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// Create a machine with [`DEFAULT_MEMORY_SIZE`] zeroed cells.
    pub fn new() -> Self {
        Self::with_memory_size(DEFAULT_MEMORY_SIZE)
    }

    /// Create a machine with `size` zeroed cells.
    pub fn with_memory_size(size: usize) -> Self {
        Self {
            stack: Vec::new(),
            memory: vec![0; size],
            ip: 0,
        }
    }

    /// Push a value onto the stack. The stack has no depth limit.
    pub fn push(&mut self, value: i64) {
        self.stack.push(value);
    }

    /// Pop a value from the stack.
    pub fn pop(&mut self) -> Result<i64, RuntimeError> {
        self.stack
            .pop()
            .ok_or(RuntimeError::StackUnderflow { at: self.ip })
    }

    /// Return the top of the stack without removing it.
    pub fn peek(&self) -> Result<i64, RuntimeError> {
        self.stack
            .last()
            .copied()
            .ok_or(RuntimeError::StackUnderflow { at: self.ip })
    }

    /// Read one memory cell.
    pub fn read(&self, address: usize) -> Result<i64, RuntimeError> {
        self.memory
            .get(address)
            .copied()
            .ok_or_else(|| self.out_of_range(address))
    }

    /// Write one memory cell.
    pub fn write(&mut self, address: usize, value: i64) -> Result<(), RuntimeError> {
        if address >= self.memory.len() {
            return Err(self.out_of_range(address));
        }
        self.memory[address] = value;
        Ok(())
    }

    /// Current number of values on the stack.
    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    /// The stack, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// The whole data memory.
    pub fn memory(&self) -> &[i64] {
        &self.memory
    }

    /// Number of addressable cells.
    pub fn memory_size(&self) -> usize {
        self.memory.len()
    }

    /// Index of the next instruction to execute.
    pub fn ip(&self) -> usize {
        self.ip
    }

    /// Move to the next instruction slot after a successful step.
    pub(crate) fn advance(&mut self) {
        self.ip += 1;
    }

    fn out_of_range(&self, address: usize) -> RuntimeError {
        RuntimeError::AddressOutOfRange {
            at: self.ip,
            address,
            size: self.memory.len(),
        }
    }
}
