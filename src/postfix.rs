use crate::ast::{OperatorKind, Token};

/// Reorders an infix token sequence into postfix (Reverse-Polish) order.
///
/// This is the shunting-yard algorithm over [`OperatorKind::precedence`].
/// `(` and `[` are scope markers: a closing `)` or `]` pops operators until
/// its opener and then drops both. A closer without an opener stops quietly
/// once the stack is empty, and openers that are never closed are flushed
/// into the output with everything else at the end.
///
/// The input is left untouched, so the result can be cached and evaluated
/// against any number of contexts.
///
/// # Examples
///
/// ```
/// use expresso::{to_postfix, tokenize};
///
/// let postfix = to_postfix(&tokenize("(8 + 2) * 6"));
/// let rendered: Vec<String> = postfix.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered.join(" "), "8 2 + 6 *");
/// ```
pub fn to_postfix(tokens: &[Token]) -> Vec<Token> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<OperatorKind> = Vec::new();

    for token in tokens {
        let kind = match token {
            Token::Operand(_) => {
                output.push(token.clone());
                continue;
            }
            Token::Operator(kind) => *kind,
        };

        match kind {
            OperatorKind::LeftParen | OperatorKind::LeftBracket => stack.push(kind),
            OperatorKind::RightParen => close_scope(&mut stack, &mut output, OperatorKind::LeftParen),
            OperatorKind::RightBracket => {
                close_scope(&mut stack, &mut output, OperatorKind::LeftBracket)
            }
            _ => {
                while let Some(&top) = stack.last() {
                    if top.is_scope_marker() || !yields_to(top, kind) {
                        break;
                    }
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push(kind);
            }
        }
    }

    while let Some(kind) = stack.pop() {
        output.push(Token::Operator(kind));
    }

    output
}

/// Whether the pending `top` operator must be emitted before `incoming`.
fn yields_to(top: OperatorKind, incoming: OperatorKind) -> bool {
    if incoming.is_right_associative() {
        top.precedence() > incoming.precedence()
    } else {
        top.precedence() >= incoming.precedence()
    }
}

fn close_scope(stack: &mut Vec<OperatorKind>, output: &mut Vec<Token>, opener: OperatorKind) {
    while let Some(kind) = stack.pop() {
        if kind == opener {
            return;
        }
        output.push(Token::Operator(kind));
    }
    tracing::debug!(%opener, "closing delimiter without matching opener");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operand;

    fn num(n: i64) -> Token {
        Token::Operand(Operand::number(n))
    }

    fn op(kind: OperatorKind) -> Token {
        Token::Operator(kind)
    }

    #[test]
    fn test_exponent_is_right_associative() {
        let tokens = vec![
            num(2),
            op(OperatorKind::Exponent),
            num(3),
            op(OperatorKind::Exponent),
            num(2),
        ];
        let expected = vec![
            num(2),
            num(3),
            num(2),
            op(OperatorKind::Exponent),
            op(OperatorKind::Exponent),
        ];
        assert_eq!(to_postfix(&tokens), expected);
    }

    #[test]
    fn test_unmatched_closer_is_dropped() {
        let tokens = vec![num(1), op(OperatorKind::Add), num(2), op(OperatorKind::RightParen)];
        let expected = vec![num(1), num(2), op(OperatorKind::Add)];
        assert_eq!(to_postfix(&tokens), expected);
    }
}
