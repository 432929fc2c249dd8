//! # lox-expr
//!
//! lox-expr scans, parses and evaluates expressions of the Lox language:
//! number, string, boolean and `nil` literals, the unary operators `-` and
//! `!`, arithmetic, comparison, equality, grouping and the comma operator.
//!
//! Source text flows through three stages:
//! [`tokenize`](interpreter::lexer::tokenize) produces tokens,
//! [`Parser`](interpreter::parser::core::Parser) builds an
//! [`Expr`](ast::Expr) tree and
//! [`Evaluator`](interpreter::evaluator::core::Evaluator) reduces it to a
//! [`Value`](interpreter::value::core::Value).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        evaluator::core::Evaluator, lexer::tokenize, parser::core::Parser, value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an expression as a
/// tree. The tree is built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the four expression node kinds.
/// - Keeps operator tokens on the nodes for error reporting.
/// - Prints trees in parenthesized prefix form for debugging.
pub mod ast;
/// Provides error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// or evaluating code. Every error carries a line number and renders as
/// `[line L] <context>: <message>`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Offers a pipeline-level error for callers that run every stage.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, evaluator, and values.
/// - Provides the entry point of each stage.
pub mod interpreter;

/// Parses `source` into an expression tree.
///
/// Lexical errors are logged and leave `Error` tokens in the stream, which
/// the parser then rejects.
///
/// # Errors
/// Returns an error if the tokens do not form a single expression.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source);
    Ok(Parser::new(&tokens)?.parse()?)
}

/// Runs the whole pipeline on `source` and returns the resulting value.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use lox_expr::{interpreter::value::core::Value, run};
///
/// assert_eq!(run("1 + 2 * 3").unwrap(), Value::Number(7.0));
/// assert_eq!(run("\"a\" + \"b\"").unwrap(), Value::from("ab"));
///
/// // Adding a number to a string is a runtime error.
/// assert!(run("1 + \"b\"").is_err());
/// ```
pub fn run(source: &str) -> Result<Value, Error> {
    let expr = parse(source)?;
    Ok(Evaluator::new().evaluate(&expr)?)
}
