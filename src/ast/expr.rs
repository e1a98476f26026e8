use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::cmd::SubQuery;
use super::column::{Alias, Column, RawText};
use super::functions::FuncInvocation;
use super::operators::{Operator, SortOrder};
use super::shape::Shape;
use super::values::{TypedValue, Value};

/// A user-built expression tree.
///
/// Trees are assembled with the [`Operand`] methods and the `+ - * / % & | ! -`
/// operator overloads, then normalized into an [`Expression`](super::Expression)
/// by the statement builders.
#[derive(Debug, Clone)]
pub enum Expr {
    Column(Column),
    Alias(Alias),
    Literal(Value),
    Text(RawText),
    Unary {
        op: Operator,
        operand: Box<Expr>,
    },
    Binary {
        op: Operator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Func(FuncInvocation),
    Sorted {
        expr: Box<Expr>,
        order: SortOrder,
    },
    Shape(Shape),
    SubQuery(SubQuery),
}

impl Expr {
    pub fn unary(op: Operator, operand: impl Into<Expr>) -> Expr {
        Expr::Unary {
            op,
            operand: Box::new(operand.into()),
        }
    }

    pub fn binary(op: Operator, left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn literal(value: impl Into<Value>) -> Expr {
        Expr::Literal(value.into())
    }

    /// Verbatim query text. Never pass untrusted input.
    pub fn raw(text: impl Into<String>) -> Expr {
        Expr::Text(RawText::new(text))
    }

    /// `name := self`
    pub fn label(self, name: impl Into<String>) -> Expr {
        Expr::binary(Operator::Assign, Alias::new(name), self)
    }
}

impl Alias {
    /// `self := value`
    pub fn assign(self, value: impl Into<Expr>) -> Expr {
        Expr::binary(Operator::Assign, self, value)
    }
}

/// Fluent operator methods shared by everything usable as an operand.
pub trait Operand: Into<Expr> + Sized {
    /// Apply an arbitrary binary operator.
    fn op(self, op: Operator, rhs: impl Into<Expr>) -> Expr {
        Expr::binary(op, self, rhs)
    }

    fn eq(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Eq, rhs)
    }

    fn ne(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Ne, rhs)
    }

    fn gt(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Gt, rhs)
    }

    fn ge(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Ge, rhs)
    }

    fn lt(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Lt, rhs)
    }

    fn le(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Le, rhs)
    }

    /// `?=`, equality that treats two empty sets as equal.
    fn coalesce_eq(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::CoalesceEq, rhs)
    }

    /// `?!=`
    fn coalesce_ne(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::CoalesceNe, rhs)
    }

    fn and(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::And, rhs)
    }

    fn or(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Or, rhs)
    }

    fn like(self, pattern: impl Into<Expr>) -> Expr {
        self.op(Operator::Like, pattern)
    }

    fn ilike(self, pattern: impl Into<Expr>) -> Expr {
        self.op(Operator::ILike, pattern)
    }

    fn is_in(self, set: impl Into<Expr>) -> Expr {
        self.op(Operator::In, set)
    }

    fn not_in(self, set: impl Into<Expr>) -> Expr {
        self.op(Operator::NotIn, set)
    }

    /// `??`
    fn coalesce(self, fallback: impl Into<Expr>) -> Expr {
        self.op(Operator::Coalesce, fallback)
    }

    /// `++`
    fn concat(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Concat, rhs)
    }

    /// `//`
    fn floor_div(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::FloorDiv, rhs)
    }

    /// `^`
    fn pow(self, rhs: impl Into<Expr>) -> Expr {
        self.op(Operator::Pow, rhs)
    }

    /// Unary `+`
    fn pos(self) -> Expr {
        Expr::unary(Operator::Add, self)
    }

    fn exists(self) -> Expr {
        Expr::unary(Operator::Exists, self)
    }

    fn not_exists(self) -> Expr {
        Expr::unary(Operator::NotExists, self)
    }

    fn label(self, name: impl Into<String>) -> Expr {
        Expr::label(self.into(), name)
    }

    fn asc(self) -> Expr {
        Expr::Sorted {
            expr: Box::new(self.into()),
            order: SortOrder::Asc,
        }
    }

    fn desc(self) -> Expr {
        Expr::Sorted {
            expr: Box::new(self.into()),
            order: SortOrder::Desc,
        }
    }
}

macro_rules! impl_binary_ops {
    ($ty:ty: $($trait:ident::$method:ident => $op:expr),* $(,)?) => {
        $(
            impl<R: Into<Expr>> std::ops::$trait<R> for $ty {
                type Output = Expr;

                fn $method(self, rhs: R) -> Expr {
                    Expr::binary($op, self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_operand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Operand for $ty {}

            impl_binary_ops! { $ty:
                Add::add => Operator::Add,
                Sub::sub => Operator::Sub,
                Mul::mul => Operator::Mul,
                Div::div => Operator::Div,
                Rem::rem => Operator::Mod,
                BitAnd::bitand => Operator::And,
                BitOr::bitor => Operator::Or,
            }

            impl std::ops::Neg for $ty {
                type Output = Expr;

                fn neg(self) -> Expr {
                    Expr::unary(Operator::Sub, self)
                }
            }

            impl std::ops::Not for $ty {
                type Output = Expr;

                fn not(self) -> Expr {
                    Expr::unary(Operator::Not, self)
                }
            }
        )*
    };
}

impl_operand!(Expr, Column, Alias, FuncInvocation);

impl From<Column> for Expr {
    fn from(column: Column) -> Self {
        Expr::Column(column)
    }
}

impl From<Alias> for Expr {
    fn from(alias: Alias) -> Self {
        Expr::Alias(alias)
    }
}

impl From<RawText> for Expr {
    fn from(text: RawText) -> Self {
        Expr::Text(text)
    }
}

impl From<FuncInvocation> for Expr {
    fn from(invocation: FuncInvocation) -> Self {
        Expr::Func(invocation)
    }
}

impl From<Shape> for Expr {
    fn from(shape: Shape) -> Self {
        Expr::Shape(shape)
    }
}

impl From<SubQuery> for Expr {
    fn from(query: SubQuery) -> Self {
        Expr::SubQuery(query)
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Literal(value)
    }
}

macro_rules! impl_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Expr::Literal(value.into())
                }
            }
        )*
    };
}

impl_from_literal!(
    bool,
    &str,
    String,
    Vec<u8>,
    DateTime<FixedOffset>,
    DateTime<Utc>,
    NaiveDateTime,
    NaiveDate,
    NaiveTime,
    TimeDelta,
    Decimal,
    TypedValue,
    i64,
    f64,
    Uuid,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::values::int64;

    fn op_of(expr: &Expr) -> Option<Operator> {
        match expr {
            Expr::Unary { op, .. } | Expr::Binary { op, .. } => Some(*op),
            _ => None,
        }
    }

    #[test]
    fn test_operator_overloads() {
        let a = Column::new("a");
        assert_eq!(op_of(&(a.clone() + 1_i64)), Some(Operator::Add));
        assert_eq!(op_of(&(a.clone() % int64(2))), Some(Operator::Mod));
        assert_eq!(op_of(&(a.clone().gt(1_i64) & a.clone().lt(5_i64))), Some(Operator::And));
        assert_eq!(op_of(&!a.clone()), Some(Operator::Not));
        assert_eq!(op_of(&-a), Some(Operator::Sub));
    }

    #[test]
    fn test_label_builds_assignment() {
        let expr = Column::new("a").label("b");
        let Expr::Binary { op, left, right } = expr else {
            panic!("expected binary node");
        };
        assert_eq!(op, Operator::Assign);
        assert!(matches!(*left, Expr::Alias(ref alias) if alias.name == "b"));
        assert!(matches!(*right, Expr::Column(ref column) if column.name() == "a"));
    }

    #[test]
    fn test_sorted() {
        let expr = Column::new("a").desc();
        assert!(matches!(expr, Expr::Sorted { order: SortOrder::Desc, .. }));
    }
}
