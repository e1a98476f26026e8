use serde::{Deserialize, Serialize};

/// Precedence reported by nodes that are not operators.
///
/// One above the strongest operator, so a column or literal never needs
/// parentheses on precedence grounds.
pub const PRECEDENCE_LIMIT: u8 = 12;

/// EdgeQL operator tokens.
///
/// `Add` and `Sub` double as unary `+` and `-`; the arity is recorded by
/// the node holding the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `:=`
    Assign,
    Or,
    And,
    /// `not `
    Not,
    /// `exists `
    Exists,
    /// `not exists `
    NotExists,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `?=`
    CoalesceEq,
    /// `?!=`
    CoalesceNe,
    Gt,
    Ge,
    Lt,
    Le,
    Like,
    ILike,
    In,
    NotIn,
    Add,
    Sub,
    /// `++`
    Concat,
    Mul,
    Div,
    /// `//`
    FloorDiv,
    Mod,
    /// `??`
    Coalesce,
    /// `^`
    Pow,
}

impl Operator {
    /// Token text as it appears in the query.
    ///
    /// Keyword prefix operators carry their trailing space so a unary node
    /// renders as `token + operand`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Assign => ":=",
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Not => "not ",
            Operator::Exists => "exists ",
            Operator::NotExists => "not exists ",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::CoalesceEq => "?=",
            Operator::CoalesceNe => "?!=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Like => "like",
            Operator::ILike => "ilike",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Concat => "++",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::FloorDiv => "//",
            Operator::Mod => "%",
            Operator::Coalesce => "??",
            Operator::Pow => "^",
        }
    }

    /// Binding strength; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Assign => 0,
            Operator::Or => 1,
            Operator::And => 2,
            Operator::Not | Operator::Exists | Operator::NotExists => 3,
            Operator::Eq | Operator::Ne | Operator::CoalesceEq | Operator::CoalesceNe => 4,
            Operator::Gt | Operator::Ge | Operator::Lt | Operator::Le => 5,
            Operator::Like | Operator::ILike => 6,
            Operator::In | Operator::NotIn => 7,
            Operator::Add | Operator::Sub | Operator::Concat => 8,
            Operator::Mul | Operator::Div | Operator::FloorDiv | Operator::Mod => 9,
            Operator::Coalesce => 10,
            Operator::Pow => 11,
        }
    }

    /// Only exponentiation groups right to left.
    #[must_use]
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, Operator::Pow)
    }

    /// `a op (b op c)` equals `(a op b) op c`.
    #[must_use]
    pub const fn is_associative(self) -> bool {
        matches!(
            self,
            Operator::Add
                | Operator::Mul
                | Operator::And
                | Operator::Or
                | Operator::Concat
                | Operator::Coalesce
        )
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().trim_end())
    }
}

/// Sort direction for `order by` terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
