/// The evaluator module walks expression trees and computes their values.
///
/// The evaluator matches on each node kind, applies operator semantics and
/// the runtime type rules, and produces a final value or a runtime error.
///
/// # Responsibilities
/// - Evaluates every expression node kind.
/// - Enforces operand types for arithmetic and ordering operators.
/// - Reports runtime errors with the offending operator and its line.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text in a single pass and produces a stream
/// of tokens: operators, delimiters, literals, identifiers and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with a line number.
/// - Attaches literal payloads to string and number tokens.
/// - Reports lexical errors without stopping the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an expression tree following a fixed precedence grammar.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes.
/// - Validates the grammar, reporting errors with location info.
/// - Offers a statement-boundary recovery hook.
pub mod parser;
/// The token module defines what the lexer hands to the parser.
///
/// A token pairs a category with its lexeme, its line and, for strings and
/// numbers, a literal payload.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its four variants.
/// - Implements truthiness and structural equality.
/// - Formats values for display.
pub mod value;
