//! Property-based tests for the brain lexer.

use brain_ir::{StringInterner, TokenKind};
use brain_lexer::lex;
use proptest::prelude::*;

proptest! {
    #[test]
    fn non_negative_literals_lex_to_their_value(n in 0..=i32::MAX) {
        let tokens = lex(&n.to_string(), &StringInterner::new());
        prop_assert_eq!(tokens.kinds(), vec![TokenKind::Int(n), TokenKind::Eof]);
    }

    #[test]
    fn identifiers_round_trip_through_the_interner(ident in "[a-z_][a-z0-9_]{0,12}") {
        let keywords = [
            "new", "write", "read", "lambda", "if", "else", "while", "true", "false",
            "and", "or", "not", "return", "ret",
        ];
        prop_assume!(!keywords.contains(&ident.as_str()));

        let interner = StringInterner::new();
        let tokens = lex(&ident, &interner);
        let kind = tokens.get(0).map(|t| t.kind);
        prop_assert_eq!(kind, Some(TokenKind::Ident(interner.intern(&ident))));
    }
}
