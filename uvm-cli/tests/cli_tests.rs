//! Integration tests for the UVM CLI.
//!
//! These tests invoke the `uvm` binary as a subprocess and check
//! exit codes, stdout, stderr, and the files it writes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[allow(deprecated)]
fn uvm() -> Command {
    Command::cargo_bin("uvm").unwrap()
}

/// Helper: write `source`, assemble it, return the path to the binary.
fn assemble_to_temp(dir: &TempDir, source: &str) -> PathBuf {
    let input = dir.path().join("prog.asm");
    let output = dir.path().join("prog.bin");
    fs::write(&input, source).unwrap();
    uvm()
        .args(["assemble", input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .success();
    output
}

// ---- No-args / help ----

#[test]
fn no_args_prints_usage_and_exits_1() {
    uvm()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: uvm"));
}

#[test]
fn help_flag_exits_0() {
    uvm()
        .arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("Commands:"));
}

#[test]
fn unknown_command_exits_1() {
    uvm()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command"));
}

// ---- Assemble ----

#[test]
fn assemble_writes_image() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("test.asm");
    let output = dir.path().join("test.bin");
    fs::write(&input, "load_const 831\nread_value 97\nwrite_value 291\nsgn 158\n").unwrap();

    uvm()
        .args(["assemble", input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("assembled 4 instructions (12 bytes)"));

    assert_eq!(
        fs::read(&output).unwrap(),
        vec![0xFE, 0x33, 0x00, 0x1B, 0x06, 0x00, 0x37, 0x12, 0x00, 0xE4, 0x09, 0x00]
    );
}

#[test]
fn assemble_test_mode_prints_listing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("test.asm");
    let output = dir.path().join("test.bin");
    fs::write(&input, "load_const 831\n").unwrap();

    uvm()
        .args([
            "assemble",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--test",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[00] load_const   831"))
        .stdout(predicate::str::contains("0xFE 0x33 0x00"));
}

#[test]
fn assemble_error_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.asm");
    let output = dir.path().join("bad.bin");
    fs::write(&input, "load_const 1\nload_const 99999\n").unwrap();

    uvm()
        .args(["assemble", input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));

    assert!(!output.exists());
}

#[test]
fn assemble_missing_output_arg_exits_1() {
    uvm()
        .args(["assemble", "only-input.asm"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage: uvm assemble"));
}

#[test]
fn assemble_missing_file_exits_1() {
    uvm()
        .args(["assemble", "nonexistent.asm", "out.bin"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

// ---- Execute ----

#[test]
fn execute_writes_trace_and_dump() {
    let dir = TempDir::new().unwrap();
    let bin = assemble_to_temp(&dir, "load_const 5\nwrite_value 0\nload_const 9\n");
    let csv = dir.path().join("dump.csv");

    uvm()
        .args([
            "execute",
            bin.to_str().unwrap(),
            csv.to_str().unwrap(),
            "0:1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[000] load_const"))
        .stdout(predicate::str::contains("finished at ip=3"));

    assert_eq!(
        fs::read_to_string(&csv).unwrap(),
        "\
Type,Address/Index,Value
STACK,SIZE,1
STACK,stack[0],9
REGISTERS,IP,3
MEMORY,RANGE,0-1
MEMORY,0,5
MEMORY,1,0
"
    );
}

#[test]
fn execute_halted_run_still_dumps() {
    let dir = TempDir::new().unwrap();
    let bin = assemble_to_temp(&dir, "write_value 0\n");
    let csv = dir.path().join("dump.csv");

    uvm()
        .args([
            "execute",
            bin.to_str().unwrap(),
            csv.to_str().unwrap(),
            "0:0",
        ])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("[RUNTIME ERROR] stack underflow"))
        .stderr(predicate::str::contains("runtime error"));

    let dump = fs::read_to_string(&csv).unwrap();
    assert!(dump.contains("REGISTERS,IP,0\n"));
    assert!(dump.contains("MEMORY,0,0\n"));
}

#[test]
fn execute_malformed_range_exits_1() {
    let dir = TempDir::new().unwrap();
    let bin = assemble_to_temp(&dir, "load_const 1\n");
    let csv = dir.path().join("dump.csv");

    for range in ["10", "a:b", "5:2"] {
        uvm()
            .args(["execute", bin.to_str().unwrap(), csv.to_str().unwrap(), range])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("error:"));
    }
    assert!(!csv.exists());
}

#[test]
fn execute_with_small_memory() {
    let dir = TempDir::new().unwrap();
    let bin = assemble_to_temp(&dir, "read_value 100\n");
    let csv = dir.path().join("dump.csv");

    uvm()
        .args([
            "execute",
            bin.to_str().unwrap(),
            csv.to_str().unwrap(),
            "0:3",
            "--memory-size",
            "64",
        ])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("memory size 64"));
}

#[test]
fn execute_missing_program_exits_1() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("dump.csv");
    uvm()
        .args(["execute", "nonexistent.bin", csv.to_str().unwrap(), "0:1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read"));
}

// ---- Disassemble ----

#[test]
fn disassemble_roundtrip() {
    let dir = TempDir::new().unwrap();
    let bin = assemble_to_temp(&dir, "load_const 5 # five\n\nwrite_value 0\n");

    uvm()
        .args(["disassemble", bin.to_str().unwrap()])
        .assert()
        .success()
        .stdout("load_const 5\nwrite_value 0\n");
}

#[test]
fn disassemble_truncated_image_exits_1() {
    let dir = TempDir::new().unwrap();
    let bin = dir.path().join("short.bin");
    fs::write(&bin, [0xFEu8, 0x33]).unwrap();

    uvm()
        .args(["disassemble", bin.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid binary"));
}

// ---- Eval ----

#[test]
fn eval_prints_trace() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("prog.asm");
    fs::write(&input, "load_const 3\nwrite_value 7\nsgn 7\n").unwrap();

    uvm()
        .args(["eval", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[002] sgn"))
        .stdout(predicate::str::contains("final stack: [1]"));
}

#[test]
fn eval_assembly_error_exits_1() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("prog.asm");
    fs::write(&input, "jump 3\n").unwrap();

    uvm()
        .args(["eval", input.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown command 'jump'"));
}
