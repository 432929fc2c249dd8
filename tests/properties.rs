use lox_expr::{
    interpreter::{
        evaluator::core::Evaluator,
        lexer::{Lexer, TokenKind},
        parser::core::Parser,
    },
    parse,
};
use proptest::prelude::*;

/// Generates well-formed expression source text.
fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0u32..1000).prop_map(|n| n.to_string()),
                           (0u32..100, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
                           "[a-z ]{0,8}".prop_map(|s| format!("\"{s}\"")),
                           Just("true".to_string()),
                           Just("false".to_string()),
                           Just("nil".to_string())];

    leaf.prop_recursive(6, 64, 2, |inner| {
            let operator = prop::sample::select(vec!["+", "-", "*", "/", "<", "<=", ">", ">=",
                                                     "==", "!=", ","]);
            prop_oneof![(inner.clone(), operator, inner.clone()).prop_map(|(l, op, r)| {
                                                                      format!("{l} {op} {r}")
                                                                  }),
                        inner.clone().prop_map(|e| format!("({e})")),
                        inner.clone().prop_map(|e| format!("-{e}")),
                        inner.prop_map(|e| format!("!{e}"))]
        })
}

proptest! {
    #[test]
    fn scanning_always_ends_with_a_single_eof(source in "[ -~\t\n]{0,64}") {
        let scanned = Lexer::new(&source).tokenize();

        prop_assert_eq!(scanned.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        prop_assert_eq!(scanned.tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
        prop_assert!(scanned.tokens.iter().all(|t| t.line >= 1));
        prop_assert_eq!(scanned.errors.len(),
                        scanned.tokens.iter().filter(|t| t.kind == TokenKind::Error).count());
    }

    #[test]
    fn generated_expressions_parse(source in expression()) {
        let tokens = Lexer::new(&source).tokenize().tokens;

        prop_assert!(Parser::new(&tokens).and_then(|mut parser| parser.parse()).is_ok(),
                     "{}", source);
    }

    #[test]
    fn evaluation_is_deterministic(source in expression()) {
        let expr = parse(&source).unwrap();
        let evaluator = Evaluator::new();

        let first = evaluator.evaluate(&expr).map(|v| v.to_string());
        let second = evaluator.evaluate(&expr).map(|v| v.to_string());

        prop_assert_eq!(first, second);
    }
}
