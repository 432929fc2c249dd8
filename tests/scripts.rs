use std::fs;

use lox_expr::{error::Error, run};
use walkdir::WalkDir;

/// What a script declares about itself in its `// expect:` comment.
#[derive(Debug)]
enum Expectation {
    Value(String),
    ParseError,
    RuntimeError,
}

fn expectation(script: &str) -> Option<Expectation> {
    script.lines().find_map(|line| {
                      let line = line.trim();
                      if let Some(kind) = line.strip_prefix("// expect error:") {
                          return match kind.trim() {
                              "parse" => Some(Expectation::ParseError),
                              "runtime" => Some(Expectation::RuntimeError),
                              other => panic!("unknown error kind '{other}'"),
                          };
                      }
                      line.strip_prefix("// expect:")
                          .map(|value| Expectation::Value(value.trim().to_string()))
                  })
}

#[test]
fn scripts_produce_expected_results() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = expectation(&script).unwrap_or_else(|| {
                                                panic!("{path:?} has no '// expect:' line")
                                            });
        count += 1;

        match (expected, run(&script)) {
            (Expectation::Value(expected), Ok(value)) => {
                assert_eq!(value.to_string(), expected, "script {path:?}");
            },
            (Expectation::ParseError, Err(Error::Parse(_)))
            | (Expectation::RuntimeError, Err(Error::Runtime(_))) => {},
            (expected, actual) => {
                panic!("script {path:?}: expected {expected:?}, got {actual:?}")
            },
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
