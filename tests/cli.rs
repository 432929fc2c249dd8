use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn lox(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lox")).args(["--log-level", "off"])
                                           .args(args)
                                           .output()
                                           .expect("failed to run lox")
}

fn lox_with_stdin(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_lox")).args(["--log-level", "off"])
                                                           .stdin(Stdio::piped())
                                                           .stdout(Stdio::piped())
                                                           .stderr(Stdio::piped())
                                                           .spawn()
                                                           .expect("failed to start lox");

    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_bytes())
         .expect("failed to write to lox");

    child.wait_with_output().expect("failed to wait for lox")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn successful_expression_prints_its_value() {
    let output = lox(&["(1 + 2) * 3"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "9\n");
}

#[test]
fn parse_error_exits_with_65() {
    let output = lox(&["(1 + 2"]);

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(stdout(&output), "");
}

#[test]
fn runtime_error_exits_with_70() {
    let output = lox(&["1 + \"b\""]);

    assert_eq!(output.status.code(), Some(70));
}

#[test]
fn file_mode_reads_the_script() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts/missing_paren.lox");
    assert_eq!(lox(&["--file", path]).status.code(), Some(65));

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/scripts/arithmetic.lox");
    assert!(lox(&["--file", path]).status.success());
}

#[test]
fn missing_file_fails() {
    let output = lox(&["--file", "no/such/script.lox"]);

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn print_ast_shows_the_tree_before_the_value() {
    let output = lox(&["--print-ast", "1 + 2 * 3"]);

    assert_eq!(stdout(&output), "(+ 1 (* 2 3))\n7\n");
}

#[test]
fn tokens_flag_dumps_the_stream() {
    let output = lox(&["--tokens", "12"]);

    assert_eq!(stdout(&output), "Number 12 12.0\nEof  null\n12\n");
}

#[test]
fn repl_skips_blank_lines_and_recovers_from_errors() {
    let output = lox_with_stdin("1\n\n1 +\n2\n");

    let values: Vec<_> = stdout(&output).split("> ")
                                        .map(str::trim)
                                        .filter(|s| !s.is_empty())
                                        .map(str::to_owned)
                                        .collect();

    assert_eq!(values, ["1", "2"]);
    assert!(output.status.success());
}

#[test]
fn repl_status_reflects_the_last_line() {
    assert_eq!(lox_with_stdin("1\n\"a\" - 1\n").status.code(), Some(70));
    assert_eq!(lox_with_stdin("1 +\n").status.code(), Some(65));
}
