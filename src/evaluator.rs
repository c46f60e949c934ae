use thiserror::Error;

use crate::{
    ast::{Operand, OperandKind, OperatorKind, Token},
    context::Context,
    value::Value,
};

/// Errors that can occur while evaluating a postfix sequence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// An operator was reached with fewer than two operands on the stack
    #[error("stack underflow: operator '{operator}' needs two operands, found {available}")]
    StackUnderflow {
        operator: OperatorKind,
        available: usize,
    },

    /// The pass ended with a stack depth other than one
    #[error("malformed expression: {remaining} operands left after evaluation, expected exactly one")]
    MalformedExpression { remaining: usize },

    /// Operator applied to operands of unsupported types
    #[error("type mismatch: cannot apply '{operator}' to {left} and {right}")]
    TypeMismatch {
        operator: OperatorKind,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in '{operator}'")]
    Overflow { operator: OperatorKind },

    #[error("negative exponent {0}")]
    NegativeExponent(i64),
}

/// Stack machine reducing a postfix token sequence to a single value.
///
/// An evaluator borrows its context and owns a fresh operand stack; running
/// it consumes the evaluator, so every evaluation starts from an empty stack.
pub struct Evaluator<'ctx> {
    context: &'ctx Context,
    stack: Vec<Operand>,
}

impl<'ctx> Evaluator<'ctx> {
    pub fn new(context: &'ctx Context) -> Self {
        Evaluator {
            context,
            stack: Vec::new(),
        }
    }

    /// Evaluates `tokens`, which must already be in postfix order.
    ///
    /// # Examples
    ///
    /// ```
    /// use expresso::{to_postfix, tokenize, Context, Evaluator, Value};
    ///
    /// let ctx = Context::new().with("price", Value::Integer(40));
    /// let postfix = to_postfix(&tokenize("price * 2 > 50"));
    ///
    /// let result = Evaluator::new(&ctx).run(&postfix).unwrap();
    /// assert_eq!(result, Value::Boolean(true));
    /// ```
    pub fn run(mut self, tokens: &[Token]) -> Result<Value, EvalError> {
        for token in tokens {
            match token {
                Token::Operand(operand) => self.stack.push(operand.clone()),
                Token::Operator(operator) => {
                    let result = self.apply_operator(*operator)?;
                    self.stack.push(result);
                }
            }
        }

        let remaining = self.stack.len();
        match self.stack.pop() {
            Some(result) if remaining == 1 => Ok(self.resolve(result).into_value()),
            _ => {
                tracing::debug!(remaining, "evaluation did not reduce to one operand");
                Err(EvalError::MalformedExpression { remaining })
            }
        }
    }

    fn apply_operator(&mut self, operator: OperatorKind) -> Result<Operand, EvalError> {
        let available = self.stack.len();
        let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
            tracing::debug!(%operator, available, "stack underflow");
            return Err(EvalError::StackUnderflow {
                operator,
                available,
            });
        };

        let left = self.resolve(left);
        let right = self.resolve(right);
        tracing::trace!(%operator, left = ?left.value(), right = ?right.value(), "applying operator");

        use OperatorKind::*;
        match operator {
            Period => Ok(Operand::resolved(apply_access(left.value(), right.value()))),
            Add | Subtract | Multiply | Divide | Exponent | Modulo => {
                let value = apply_arithmetic(operator, left.value(), right.value())?;
                Ok(Operand::new(left.kind(), value))
            }
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                let result = apply_comparison(operator, left.value(), right.value())?;
                Ok(Operand::boolean(result))
            }
            And => Ok(Operand::boolean(
                left.value().is_truthy() && right.value().is_truthy(),
            )),
            Or => Ok(Operand::boolean(
                left.value().is_truthy() || right.value().is_truthy(),
            )),
            // Unknown lexemes and delimiters left over from unbalanced grouping
            Unknown | LeftBracket | RightBracket | LeftParen | RightParen => {
                tracing::debug!(%operator, "operator evaluates to undefined");
                Ok(Operand::undefined())
            }
        }
    }

    /// Replaces a top-level name with its value from the context.
    fn resolve(&self, operand: Operand) -> Operand {
        if operand.kind() != OperandKind::ObjectRoot {
            return operand;
        }
        let value = operand
            .value()
            .as_str()
            .map_or(Value::Undefined, |name| self.context.resolve(name));
        Operand::resolved(value)
    }
}

/// Evaluates a postfix sequence against `context`.
pub fn evaluate_postfix(tokens: &[Token], context: &Context) -> Result<Value, EvalError> {
    Evaluator::new(context).run(tokens)
}

/// Property and index access. Anything that cannot be accessed yields
/// `Undefined` so access chains degrade instead of failing.
fn apply_access(object: &Value, key: &Value) -> Value {
    let found = match (object, key) {
        (Value::Object(map), Value::String(k)) => map.get(k),
        (Value::Object(map), Value::Integer(k)) => map.get(&k.to_string()),
        (Value::Array(arr), Value::Integer(n)) => usize::try_from(*n).ok().and_then(|i| arr.get(i)),
        (Value::Array(arr), Value::String(k)) => {
            k.parse::<usize>().ok().and_then(|i| arr.get(i))
        }
        (Value::String(s), Value::Integer(n)) => {
            return usize::try_from(*n)
                .ok()
                .and_then(|i| s.chars().nth(i))
                .map(|c| Value::String(c.to_string()))
                .unwrap_or(Value::Undefined);
        }
        _ => None,
    };
    found.cloned().unwrap_or(Value::Undefined)
}

fn apply_arithmetic(operator: OperatorKind, left: &Value, right: &Value) -> Result<Value, EvalError> {
    let (a, b) = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => (*a, *b),
        (Value::String(a), Value::String(b)) if operator == OperatorKind::Add => {
            return Ok(Value::String(format!("{}{}", a, b)));
        }
        (a, b) => {
            return Err(EvalError::TypeMismatch {
                operator,
                left: a.type_name(),
                right: b.type_name(),
            });
        }
    };

    let result = match operator {
        OperatorKind::Add => a.checked_add(b),
        OperatorKind::Subtract => a.checked_sub(b),
        OperatorKind::Multiply => a.checked_mul(b),
        OperatorKind::Divide | OperatorKind::Modulo if b == 0 => {
            return Err(EvalError::DivisionByZero);
        }
        OperatorKind::Divide => a.checked_div(b),
        OperatorKind::Modulo => a.checked_rem(b),
        OperatorKind::Exponent => {
            let exp = u32::try_from(b).map_err(|_| {
                if b < 0 {
                    EvalError::NegativeExponent(b)
                } else {
                    EvalError::Overflow { operator }
                }
            })?;
            a.checked_pow(exp)
        }
        _ => unreachable!("not an arithmetic operator: {}", operator),
    };

    result
        .map(Value::Integer)
        .ok_or(EvalError::Overflow { operator })
}

fn apply_comparison(operator: OperatorKind, left: &Value, right: &Value) -> Result<bool, EvalError> {
    let ordering = match (operator, left, right) {
        (OperatorKind::Equal, a, b) => return Ok(a == b),
        (OperatorKind::NotEqual, a, b) => return Ok(a != b),
        (_, Value::Integer(a), Value::Integer(b)) => a.cmp(b),
        (_, Value::String(a), Value::String(b)) => a.cmp(b),
        (_, a, b) => {
            return Err(EvalError::TypeMismatch {
                operator,
                left: a.type_name(),
                right: b.type_name(),
            });
        }
    };

    Ok(match operator {
        OperatorKind::Less => ordering.is_lt(),
        OperatorKind::LessEqual => ordering.is_le(),
        OperatorKind::Greater => ordering.is_gt(),
        OperatorKind::GreaterEqual => ordering.is_ge(),
        _ => unreachable!("not a comparison operator: {}", operator),
    })
}
