//! Property tests for the lexer.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use msd_ir::{StringInterner, TokenKind};
use msd_lexer::lex;
use proptest::prelude::*;

proptest! {
    #[test]
    fn always_terminated_by_single_eof(source in "\\PC{0,64}") {
        let mut interner = StringInterner::new();
        let tokens = lex(&source, &mut interner);
        let kinds = tokens.kinds();
        prop_assert_eq!(kinds.last(), Some(&TokenKind::Eof));
        prop_assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Eof).count(), 1);
    }

    #[test]
    fn spans_are_ordered_and_in_bounds(source in "[ a-z_0-9()+*=\\-$]{0,64}") {
        let mut interner = StringInterner::new();
        let tokens = lex(&source, &mut interner);
        let mut last_end = 0;
        for token in &tokens {
            prop_assert!(token.span.start >= last_end);
            prop_assert!(token.span.end as usize <= source.len());
            last_end = token.span.end;
        }
    }

    #[test]
    fn every_i64_lexes_to_itself(n in any::<i64>()) {
        let mut interner = StringInterner::new();
        let tokens = lex(&n.to_string(), &mut interner);
        prop_assert_eq!(tokens.kinds(), vec![TokenKind::Int(n), TokenKind::Eof]);
    }
}
