//! Spawns the binary and checks stdout and exit codes.

use std::process::Command;

use values::exit_codes;

#[test]
fn no_arguments_prints_values() {
    let output = Command::new(env!("CARGO_BIN_EXE_values"))
        .env_remove("RUST_LOG")
        .output()
        .expect("values");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "kotlin\n2\n2.3333333333333335\nfalse\ntrue\nfalse\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn repeated_runs_are_identical() {
    let first = Command::new(env!("CARGO_BIN_EXE_values"))
        .output()
        .expect("values");
    let second = Command::new(env!("CARGO_BIN_EXE_values"))
        .output()
        .expect("values");

    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.status.code(), second.status.code());
}

#[test]
fn listing_prints_annotated_source() {
    let output = Command::new(env!("CARGO_BIN_EXE_values"))
        .arg("--listing")
        .output()
        .expect("values --listing");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("    // Strings, which can be added together with `+`.\n"));
    assert!(stdout.contains("    println(\"kot\" + \"lin\")\n"));
    assert!(stdout.ends_with("    println(!true)\n}\n"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_values"))
        .env_remove("RUST_LOG")
        .arg("--verbose")
        .output()
        .expect("values --verbose");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "kotlin\n2\n2.3333333333333335\nfalse\ntrue\nfalse\n"
    );
    assert!(!output.stderr.is_empty());
}
