use crate::prefix_tokenizer::{LexError, PrefixToken, PrefixTokenizer, TokenSource};
use proptest::prelude::*;

#[test]
fn empty_inputs() {
    for input in ["", "    ", "    \n   ", "    \n\t\n   "] {
        let mut lx = PrefixTokenizer::new(input.chars());
        assert_eq!(lx.next_token(), Ok(PrefixToken::EOF), "input: {:?}", input);
    }
}

#[test]
fn brackets() {
    let tests = vec![
        ("((", vec![PrefixToken::OParen, PrefixToken::OParen]),
        ("()", vec![PrefixToken::OParen, PrefixToken::CParen]),
        (")(", vec![PrefixToken::CParen, PrefixToken::OParen]),
        ("))", vec![PrefixToken::CParen, PrefixToken::CParen]),
    ];
    for (input, expected) in tests {
        let tokens: Vec<_> = PrefixTokenizer::new(input.chars())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(tokens, expected, "input: {:?}", input);
    }
}

#[test]
fn operators() {
    let tokens: Vec<_> = PrefixTokenizer::new("+ - * /".chars())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tokens, vec![
        PrefixToken::Plus, PrefixToken::Minus,
        PrefixToken::Times, PrefixToken::Divide,
    ]);
    assert!(tokens.iter().all(PrefixToken::is_operator));
}

#[test]
fn numbers_are_verbatim() {
    let tests = vec!["0", "007", "42", "18446744073709551616000"];
    for t in tests {
        let mut lx = PrefixTokenizer::new(t.chars());
        assert_eq!(lx.next_token(), Ok(PrefixToken::Number(t.to_string())));
        assert_eq!(lx.next_token(), Ok(PrefixToken::EOF));
    }
}

#[test]
fn signs_are_operators() {
    // no signed literals, '-' is always its own token
    let tokens: Vec<_> = PrefixTokenizer::new("-5".chars())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tokens, vec![PrefixToken::Minus, PrefixToken::Number(format!("5"))]);
}

#[test]
fn invalid_chars() {
    let tests = vec![("a", 'a', 0), ("( 1.5", '.', 3), ("(% 1 2)", '%', 1)];
    for (input, ch, offset) in tests {
        let result = PrefixTokenizer::new(input.chars()).collect::<Result<Vec<_>, _>>();
        assert_eq!(result, Err(LexError::InvalidChar { ch, offset }), "input: {:?}", input);
    }
}

proptest! {
    #[test]
    fn whitespace_yields_single_eof(input in "[ \t\n]*") {
        let mut lx = PrefixTokenizer::new(input.chars());
        prop_assert_eq!(lx.next_token(), Ok(PrefixToken::EOF));
        prop_assert_eq!(lx.next_token(), Ok(PrefixToken::EOF));
        prop_assert_eq!(PrefixTokenizer::new(input.chars()).count(), 0);
    }

    #[test]
    fn digit_runs_scan_to_one_number(digits in "[0-9]{1,30}", pad in "[ \t\n]{0,4}") {
        let input = format!("{}{}{}", pad, digits, pad);
        let tokens = PrefixTokenizer::new(input.chars()).collect::<Result<Vec<_>, _>>();
        prop_assert_eq!(tokens, Ok(vec![PrefixToken::Number(digits)]));
    }
}
