//! UVM CLI — assemble, execute, disassemble, and eval.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input/assembly/decode error
//! - 3: Run halted on a runtime error

use std::process;

use uvm_cli::commands;

fn main() {
    uvm_cli::init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(commands::EXIT_FAILURE);
    }

    let result = match args[1].as_str() {
        "assemble" => commands::assemble(&args[2..]),
        "execute" => commands::execute(&args[2..]),
        "disassemble" => commands::disassemble(&args[2..]),
        "eval" => commands::eval(&args[2..]),
        "--help" | "-h" | "help" => {
            print_usage();
            process::exit(0);
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            process::exit(commands::EXIT_FAILURE);
        }
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: uvm <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  assemble <input.asm> <output.bin> [-t|--test]      Assemble text to binary");
    eprintln!("  execute <program.bin> <dump.csv> <START:END>       Run a binary and dump memory");
    eprintln!("          [--memory-size N]");
    eprintln!("  disassemble <program.bin>                          Disassemble binary to text");
    eprintln!("  eval <input.asm> [--memory-size N]                 Assemble and run, print trace");
}
