use std::iter::FusedIterator;

use crate::ast::{Operand, OperandKind, OperatorKind, Token};

/// The class of the most recently emitted token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTag {
    Operand(OperandKind),
    Operator(OperatorKind),
}

impl From<&Token> for TokenTag {
    fn from(token: &Token) -> Self {
        match token {
            Token::Operand(operand) => TokenTag::Operand(operand.kind()),
            Token::Operator(kind) => TokenTag::Operator(*kind),
        }
    }
}

/// Scanner state between two tokens.
///
/// `pending_bracket` is set after the implicit `.` emitted for a `[`; the
/// next step then emits the `[` itself without consuming input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    pub position: usize,
    pub previous: Option<TokenTag>,
    pub pending_bracket: bool,
}

impl ScanState {
    fn emit(self, token: &Token, position: usize, pending_bracket: bool) -> Self {
        ScanState {
            position,
            previous: Some(TokenTag::from(token)),
            pending_bracket,
        }
    }

    fn follows_period(&self) -> bool {
        self.previous == Some(TokenTag::Operator(OperatorKind::Period))
    }
}

/// Scans the next token of `source` starting from `state`.
///
/// Returns the token together with the state to resume from, or `None` once
/// only whitespace remains.
pub fn scan_step(source: &[char], state: ScanState) -> Option<(Token, ScanState)> {
    if state.pending_bracket {
        let token = Token::Operator(OperatorKind::LeftBracket);
        let next = state.emit(&token, state.position, false);
        return Some((token, next));
    }

    let start = skip_whitespace(source, state.position);
    if start >= source.len() {
        return None;
    }

    let (token, width) = read_lexeme(source, start, state.follows_period());
    let end = start + width;

    if token == Token::Operator(OperatorKind::LeftBracket) {
        // `a[i]` is scanned as `a . [ i ]`
        let period = Token::Operator(OperatorKind::Period);
        let next = state.emit(&period, end, true);
        return Some((period, next));
    }

    let next = state.emit(&token, end, false);
    Some((token, next))
}

fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

fn skip_whitespace(source: &[char], mut position: usize) -> usize {
    while source.get(position).copied().is_some_and(is_whitespace) {
        position += 1;
    }
    position
}

fn operator(kind: OperatorKind, width: usize) -> (Token, usize) {
    (Token::Operator(kind), width)
}

/// Picks `matched` when the character after `at` is `expected`, otherwise
/// the one-character `otherwise`.
fn lookahead(
    source: &[char],
    at: usize,
    expected: char,
    matched: OperatorKind,
    otherwise: OperatorKind,
) -> (Token, usize) {
    if source.get(at + 1) == Some(&expected) {
        operator(matched, 2)
    } else {
        operator(otherwise, 1)
    }
}

fn read_lexeme(source: &[char], at: usize, follows_period: bool) -> (Token, usize) {
    use OperatorKind::*;

    match source[at] {
        '.' => operator(Period, 1),
        '[' => operator(LeftBracket, 1),
        ']' => operator(RightBracket, 1),
        '(' => operator(LeftParen, 1),
        ')' => operator(RightParen, 1),
        '+' => operator(Add, 1),
        '-' => operator(Subtract, 1),
        '/' => operator(Divide, 1),
        '%' => operator(Modulo, 1),
        '*' => lookahead(source, at, '*', Exponent, Multiply),
        '=' => lookahead(source, at, '=', Equal, Unknown),
        '!' => lookahead(source, at, '=', NotEqual, Unknown),
        '<' => lookahead(source, at, '=', LessEqual, Less),
        '>' => lookahead(source, at, '=', GreaterEqual, Greater),
        '&' => lookahead(source, at, '&', And, Unknown),
        '|' => lookahead(source, at, '|', Or, Unknown),
        quote @ ('"' | '\'') => read_string(source, at, quote),
        ch if ch.is_ascii_digit() => read_number(source, at),
        ch if ch.is_ascii_alphabetic() => read_word(source, at, follows_period),
        ch => {
            tracing::debug!(character = %ch, position = at, "unrecognized character");
            operator(Unknown, 1)
        }
    }
}

fn read_string(source: &[char], at: usize, quote: char) -> (Token, usize) {
    let body = at + 1;
    match source[body..].iter().position(|&c| c == quote) {
        Some(len) => {
            let text: String = source[body..body + len].iter().collect();
            (Token::Operand(Operand::string(text)), len + 2)
        }
        None => {
            tracing::debug!(position = at, "unterminated string literal");
            let text: String = source[body..].iter().collect();
            (Token::Operand(Operand::string(text)), source.len() - at)
        }
    }
}

fn read_number(source: &[char], at: usize) -> (Token, usize) {
    let len = source[at..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    let digits: String = source[at..at + len].iter().collect();

    match digits.parse::<i64>() {
        Ok(n) => (Token::Operand(Operand::number(n)), len),
        Err(err) => {
            tracing::debug!(%digits, %err, "integer literal out of range");
            operator(OperatorKind::Unknown, len)
        }
    }
}

fn read_word(source: &[char], at: usize, follows_period: bool) -> (Token, usize) {
    let len = 1 + source[at + 1..]
        .iter()
        .take_while(|c| c.is_ascii_alphabetic() || **c == '_')
        .count();
    let word: String = source[at..at + len].iter().collect();

    let operand = match word.as_str() {
        "true" => Operand::boolean(true),
        "false" => Operand::boolean(false),
        "null" => Operand::null(),
        "undefined" => Operand::undefined(),
        _ if follows_period => Operand::identifier(word),
        _ => Operand::object_root(word),
    };
    (Token::Operand(operand), len)
}

/// Lazy token stream over an expression.
///
/// A scanner is single-use: once exhausted it keeps returning `None`, and
/// scanning again requires a new instance.
///
/// # Examples
///
/// ```
/// use expresso::{Operand, OperatorKind, Scanner, Token};
///
/// let tokens: Vec<Token> = Scanner::new("a[1]").collect();
/// assert_eq!(tokens, vec![
///     Token::Operand(Operand::object_root("a")),
///     Token::Operator(OperatorKind::Period),
///     Token::Operator(OperatorKind::LeftBracket),
///     Token::Operand(Operand::number(1)),
///     Token::Operator(OperatorKind::RightBracket),
/// ]);
/// ```
pub struct Scanner {
    source: Vec<char>,
    state: ScanState,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (token, next) = scan_step(&self.source, self.state)?;
        self.state = next;
        tracing::trace!(%token, position = next.position, "scanned token");
        Some(token)
    }
}

impl FusedIterator for Scanner {}

/// Scans the whole expression into a token vector.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).collect()
}

#[test]
fn test_keywords() {
    let tokens = tokenize("true false null undefined");
    assert_eq!(tokens, vec![
        Token::Operand(Operand::boolean(true)),
        Token::Operand(Operand::boolean(false)),
        Token::Operand(Operand::null()),
        Token::Operand(Operand::undefined()),
    ]);
}

#[test]
fn test_state_tracks_previous_token() {
    let source: Vec<char> = "a.b".chars().collect();
    let (_, state) = scan_step(&source, ScanState::default()).unwrap();
    assert_eq!(state.position, 1);
    assert_eq!(state.previous, Some(TokenTag::Operand(OperandKind::ObjectRoot)));

    let (_, state) = scan_step(&source, state).unwrap();
    assert!(state.follows_period());

    let (token, state) = scan_step(&source, state).unwrap();
    assert_eq!(token, Token::Operand(Operand::identifier("b")));
    assert_eq!(scan_step(&source, state), None);
}

#[test]
fn test_bracket_emits_pending_state() {
    let source: Vec<char> = "[".chars().collect();
    let (period, state) = scan_step(&source, ScanState::default()).unwrap();
    assert_eq!(period, Token::Operator(OperatorKind::Period));
    assert!(state.pending_bracket);
    assert_eq!(state.position, 1);

    let (bracket, state) = scan_step(&source, state).unwrap();
    assert_eq!(bracket, Token::Operator(OperatorKind::LeftBracket));
    assert!(!state.pending_bracket);
    assert_eq!(scan_step(&source, state), None);
}
