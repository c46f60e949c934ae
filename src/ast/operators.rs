use std::fmt;

/// Operator kinds carried by operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    // Structural
    /// Property access (`.`), also inserted implicitly before `[`
    Period,
    /// Index scope open (`[`)
    LeftBracket,
    /// Index scope close (`]`)
    RightBracket,
    /// Grouping open (`(`)
    LeftParen,
    /// Grouping close (`)`)
    RightParen,

    // Arithmetic
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Integer division (`/`)
    Divide,
    /// Exponentiation (`**`)
    Exponent,
    /// Remainder (`%`)
    Modulo,

    // Comparison
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,

    // Logical
    /// Logical AND (`&&`)
    And,
    /// Logical OR (`||`)
    Or,

    /// Unrecognized lexeme, carried forward instead of failing the scan
    Unknown,
}

impl OperatorKind {
    /// Binding strength used by the postfix converter. Higher binds tighter.
    ///
    /// Comparison, logical and unknown operators share the lowest level, so
    /// they come out in source order relative to each other.
    pub fn precedence(self) -> i8 {
        use OperatorKind::*;
        match self {
            Period => 4,
            Exponent => 3,
            Multiply | Divide | Modulo => 2,
            Add | Subtract => 1,
            _ => -1,
        }
    }

    pub fn is_right_associative(self) -> bool {
        self == OperatorKind::Exponent
    }

    /// `(` and `[` delimit a scope on the converter's operator stack.
    pub fn is_scope_marker(self) -> bool {
        matches!(self, OperatorKind::LeftParen | OperatorKind::LeftBracket)
    }

    pub fn symbol(self) -> &'static str {
        use OperatorKind::*;
        match self {
            Period => ".",
            LeftBracket => "[",
            RightBracket => "]",
            LeftParen => "(",
            RightParen => ")",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Exponent => "**",
            Modulo => "%",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            And => "&&",
            Or => "||",
            Unknown => "<unknown>",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
