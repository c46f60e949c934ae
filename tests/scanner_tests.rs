// tests/scanner_tests.rs

use expresso::{Operand, OperatorKind, Scanner, Token, tokenize};
use pretty_assertions::assert_eq;

fn op(kind: OperatorKind) -> Token {
    Token::Operator(kind)
}

fn num(n: i64) -> Token {
    Token::Operand(Operand::number(n))
}

fn string(s: &str) -> Token {
    Token::Operand(Operand::string(s))
}

fn root(name: &str) -> Token {
    Token::Operand(Operand::object_root(name))
}

fn ident(name: &str) -> Token {
    Token::Operand(Operand::identifier(name))
}

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        (".", OperatorKind::Period),
        ("]", OperatorKind::RightBracket),
        ("(", OperatorKind::LeftParen),
        (")", OperatorKind::RightParen),
        ("+", OperatorKind::Add),
        ("-", OperatorKind::Subtract),
        ("*", OperatorKind::Multiply),
        ("/", OperatorKind::Divide),
        ("%", OperatorKind::Modulo),
        ("<", OperatorKind::Less),
        (">", OperatorKind::Greater),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokenize(input), vec![op(expected)], "Failed for input: {}", input);
    }
}

#[test]
fn test_left_bracket_inserts_period() {
    assert_eq!(
        tokenize("["),
        vec![op(OperatorKind::Period), op(OperatorKind::LeftBracket)]
    );
}

// ============================================================================
// Two Character Tokens
// ============================================================================

#[test]
fn test_two_char_tokens() {
    let test_cases = vec![
        ("==", OperatorKind::Equal),
        ("!=", OperatorKind::NotEqual),
        ("<=", OperatorKind::LessEqual),
        (">=", OperatorKind::GreaterEqual),
        ("**", OperatorKind::Exponent),
        ("&&", OperatorKind::And),
        ("||", OperatorKind::Or),
    ];

    for (input, expected) in test_cases {
        assert_eq!(tokenize(input), vec![op(expected)], "Failed for input: {}", input);
    }
}

#[test]
fn test_incomplete_two_char_tokens_are_unknown() {
    for input in ["=", "!", "&", "|"] {
        assert_eq!(
            tokenize(input),
            vec![op(OperatorKind::Unknown)],
            "Failed for input: {}",
            input
        );
    }
}

#[test]
fn test_two_char_tokens_require_adjacency() {
    assert_eq!(
        tokenize("= ="),
        vec![op(OperatorKind::Unknown), op(OperatorKind::Unknown)]
    );
    assert_eq!(
        tokenize("* *"),
        vec![op(OperatorKind::Multiply), op(OperatorKind::Multiply)]
    );
    assert_eq!(
        tokenize("< ="),
        vec![op(OperatorKind::Less), op(OperatorKind::Unknown)]
    );
}

#[test]
fn test_triple_equals() {
    assert_eq!(
        tokenize("==="),
        vec![op(OperatorKind::Equal), op(OperatorKind::Unknown)]
    );
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_string_literals() {
    assert_eq!(tokenize("'hello world'"), vec![string("hello world")]);
    assert_eq!(tokenize("\"it's\""), vec![string("it's")]);
    assert_eq!(tokenize("'say \"hi\"'"), vec![string("say \"hi\"")]);
}

#[test]
fn test_empty_string_literal() {
    assert_eq!(tokenize("''"), vec![string("")]);
    assert_eq!(tokenize("\"\" + 'a'"), vec![string(""), op(OperatorKind::Add), string("a")]);
}

#[test]
fn test_no_escape_sequences() {
    assert_eq!(tokenize(r"'a\nb'"), vec![string(r"a\nb")]);
}

#[test]
fn test_unterminated_string_takes_rest_of_input() {
    assert_eq!(tokenize("'abc"), vec![string("abc")]);
    assert_eq!(tokenize("\"abc'"), vec![string("abc'")]);
}

#[test]
fn test_numbers() {
    assert_eq!(tokenize("12345"), vec![num(12345)]);
    assert_eq!(tokenize("007"), vec![num(7)]);
    assert_eq!(tokenize("12abc"), vec![num(12), root("abc")]);
}

#[test]
fn test_number_out_of_range_is_unknown() {
    assert_eq!(
        tokenize("99999999999999999999 + 1"),
        vec![op(OperatorKind::Unknown), op(OperatorKind::Add), num(1)]
    );
}

#[test]
fn test_no_signed_or_decimal_numbers() {
    assert_eq!(tokenize("-5"), vec![op(OperatorKind::Subtract), num(5)]);
    assert_eq!(tokenize("1.5"), vec![num(1), op(OperatorKind::Period), num(5)]);
}

#[test]
fn test_keywords() {
    assert_eq!(
        tokenize("true false null undefined"),
        vec![
            Token::Operand(Operand::boolean(true)),
            Token::Operand(Operand::boolean(false)),
            Token::Operand(Operand::null()),
            Token::Operand(Operand::undefined()),
        ]
    );
}

#[test]
fn test_keyword_after_period() {
    assert_eq!(
        tokenize("a.null"),
        vec![root("a"), op(OperatorKind::Period), Token::Operand(Operand::null())]
    );
}

// ============================================================================
// Identifiers and Object Roots
// ============================================================================

#[test]
fn test_property_chain() {
    assert_eq!(
        tokenize("session.user.name"),
        vec![
            root("session"),
            op(OperatorKind::Period),
            ident("user"),
            op(OperatorKind::Period),
            ident("name"),
        ]
    );
}

#[test]
fn test_whitespace_around_period() {
    assert_eq!(
        tokenize("a . b"),
        vec![root("a"), op(OperatorKind::Period), ident("b")]
    );
}

#[test]
fn test_underscores_continue_words() {
    assert_eq!(
        tokenize("my_var.first_name"),
        vec![root("my_var"), op(OperatorKind::Period), ident("first_name")]
    );
}

#[test]
fn test_word_inside_brackets_is_object_root() {
    assert_eq!(
        tokenize("a[b]"),
        vec![
            root("a"),
            op(OperatorKind::Period),
            op(OperatorKind::LeftBracket),
            root("b"),
            op(OperatorKind::RightBracket),
        ]
    );
}

#[test]
fn test_indexed_chain() {
    assert_eq!(
        tokenize("foo.bar[1]"),
        vec![
            root("foo"),
            op(OperatorKind::Period),
            ident("bar"),
            op(OperatorKind::Period),
            op(OperatorKind::LeftBracket),
            num(1),
            op(OperatorKind::RightBracket),
        ]
    );
}

// ============================================================================
// Whitespace and Unknown Input
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    assert_eq!(tokenize(" \t\r\n5\n"), vec![num(5)]);
    assert_eq!(
        tokenize("5+    4"),
        vec![num(5), op(OperatorKind::Add), num(4)]
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(tokenize(""), Vec::<Token>::new());
    assert_eq!(tokenize("   \n"), Vec::<Token>::new());
}

#[test]
fn test_unknown_characters() {
    assert_eq!(tokenize("@"), vec![op(OperatorKind::Unknown)]);
    assert_eq!(tokenize("#1"), vec![op(OperatorKind::Unknown), num(1)]);
    assert_eq!(tokenize("é"), vec![op(OperatorKind::Unknown)]);
    assert_eq!(tokenize("_x"), vec![op(OperatorKind::Unknown), root("x")]);
}

#[test]
fn test_scanner_is_fused() {
    let mut scanner = Scanner::new("1");
    assert_eq!(scanner.next(), Some(num(1)));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.state().position, 1);
}

#[test]
fn test_scanner_is_lazy() {
    let mut scanner = Scanner::new("a + 'unterminated");
    assert_eq!(scanner.next(), Some(root("a")));
    assert_eq!(scanner.state().position, 1);
}

#[test]
fn test_token_classes() {
    let tokens = tokenize("a + 1");
    assert!(tokens[0].is_operand());
    assert!(tokens[1].is_operator());
    assert!(tokens[2].is_operand());
}
