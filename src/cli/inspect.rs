//! Show intermediate pipeline stages

use crate::{Token, to_postfix, tokenize};

/// One line per scanned token, in source order
pub fn render_tokens(expression: &str) -> Vec<String> {
    tokenize(expression).iter().map(describe).collect()
}

/// The postfix sequence on a single line, tokens separated by spaces
pub fn render_postfix(expression: &str) -> String {
    to_postfix(&tokenize(expression))
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe(token: &Token) -> String {
    match token {
        Token::Operand(operand) => format!("{:?}\t{}", operand.kind(), token),
        Token::Operator(kind) => format!("{:?}\t{}", kind, token),
    }
}
