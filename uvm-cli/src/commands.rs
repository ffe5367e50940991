//! CLI command implementations.
//!
//! Each command returns `Err(exit_code)` after printing its own message.

use std::fs;

use uvm_vm::{run, Machine, Outcome, DEFAULT_MEMORY_SIZE};

use crate::dump::{dump_csv, parse_range};
use crate::pipeline::assemble_and_run;

/// Exit code for usage, I/O, assembly, and decode failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for a run that halted on a runtime error.
pub const EXIT_RUNTIME: i32 = 3;

/// Flags shared by the commands, split from positional arguments.
#[derive(Debug, Default)]
struct Options<'a> {
    positional: Vec<&'a str>,
    test: bool,
    memory_size: Option<usize>,
}

fn parse_options(args: &[String]) -> Result<Options<'_>, i32> {
    let mut opts = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-t" | "--test" => opts.test = true,
            "--memory-size" => {
                let value = iter.next().ok_or_else(|| {
                    eprintln!("error: --memory-size requires a value");
                    EXIT_FAILURE
                })?;
                match value.parse::<usize>() {
                    Ok(n) if n > 0 => opts.memory_size = Some(n),
                    _ => {
                        eprintln!("error: invalid memory size '{value}'");
                        return Err(EXIT_FAILURE);
                    }
                }
            }
            flag if flag.starts_with('-') => {
                eprintln!("error: unknown option '{flag}'");
                return Err(EXIT_FAILURE);
            }
            other => opts.positional.push(other),
        }
    }

    Ok(opts)
}

/// Assemble a source file to a binary image.
pub fn assemble(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let [input, output] = opts.positional[..] else {
        eprintln!("error: assemble requires an input and an output file");
        eprintln!("Usage: uvm assemble <input.asm> <output.bin> [-t|--test]");
        return Err(EXIT_FAILURE);
    };

    let text = read_source(input)?;

    let assembly = uvm_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_FAILURE
    })?;

    if opts.test {
        print!("{}", uvm_assembler::listing(&assembly));
    }

    fs::write(output, &assembly.image).map_err(|e| {
        eprintln!("error: cannot write '{output}': {e}");
        EXIT_FAILURE
    })?;

    eprintln!(
        "assembled {} instructions ({} bytes) -> {output}",
        assembly.program.len(),
        assembly.image.len()
    );
    Ok(())
}

/// Run a binary image and write a CSV dump of the final state.
pub fn execute(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let [program, dump_path, range] = opts.positional[..] else {
        eprintln!("error: execute requires a program, a dump file, and a range");
        eprintln!("Usage: uvm execute <program.bin> <dump.csv> <START:END> [--memory-size N]");
        return Err(EXIT_FAILURE);
    };

    let (start, end) = parse_range(range).map_err(|e| {
        eprintln!("error: {e}");
        EXIT_FAILURE
    })?;

    let image = fs::read(program).map_err(|e| {
        eprintln!("error: cannot read '{program}': {e}");
        EXIT_FAILURE
    })?;

    let mut machine = Machine::with_memory_size(opts.memory_size.unwrap_or(DEFAULT_MEMORY_SIZE));
    let report = run(&image, &mut machine);
    print!("{}", report.trace);

    // The dump is written for halted runs too.
    fs::write(dump_path, dump_csv(&machine, start, end)).map_err(|e| {
        eprintln!("error: cannot write '{dump_path}': {e}");
        EXIT_FAILURE
    })?;
    eprintln!("memory dump written to {dump_path}");

    match report.outcome {
        Outcome::Completed => Ok(()),
        Outcome::Halted(e) => {
            eprintln!("runtime error: {e}");
            Err(EXIT_RUNTIME)
        }
    }
}

/// Disassemble a binary image to canonical source.
pub fn disassemble(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let [input] = opts.positional[..] else {
        eprintln!("error: disassemble requires an input file");
        eprintln!("Usage: uvm disassemble <program.bin>");
        return Err(EXIT_FAILURE);
    };

    let image = fs::read(input).map_err(|e| {
        eprintln!("error: cannot read '{input}': {e}");
        EXIT_FAILURE
    })?;

    let text = uvm_assembler::disassemble(&image).map_err(|e| {
        eprintln!("error: invalid binary: {e}");
        EXIT_FAILURE
    })?;
    print!("{text}");
    Ok(())
}

/// Assemble and run a source file in one step, printing the trace.
pub fn eval(args: &[String]) -> Result<(), i32> {
    let opts = parse_options(args)?;
    let [input] = opts.positional[..] else {
        eprintln!("error: eval requires an input file");
        eprintln!("Usage: uvm eval <input.asm> [--memory-size N]");
        return Err(EXIT_FAILURE);
    };

    let text = read_source(input)?;
    let session = assemble_and_run(&text, opts.memory_size.unwrap_or(DEFAULT_MEMORY_SIZE))
        .map_err(|e| {
            eprintln!("error: {e}");
            EXIT_FAILURE
        })?;

    print!("{}", session.report.trace);
    match session.report.outcome {
        Outcome::Completed => Ok(()),
        Outcome::Halted(e) => {
            eprintln!("runtime error: {e}");
            Err(EXIT_RUNTIME)
        }
    }
}

fn read_source(path: &str) -> Result<String, i32> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        EXIT_FAILURE
    })
}
