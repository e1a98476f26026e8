use super::column::{Column, RawText};
use super::expr::Expr;
use super::expression::Expression;
use super::functions::FuncInvocation;

/// A nested sub-selection: `parent: { items } filter … order by … offset … limit …`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub parent: Column,
    pub items: Vec<ShapeItem>,
    pub filters: Vec<Expression>,
    pub order_by: Vec<Expression>,
    pub limit: Option<Pagination>,
    pub offset: Option<Pagination>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeItem {
    Column(Column),
    Shape(Shape),
}

impl From<Column> for ShapeItem {
    fn from(column: Column) -> Self {
        ShapeItem::Column(column)
    }
}

impl From<Shape> for ShapeItem {
    fn from(shape: Shape) -> Self {
        ShapeItem::Shape(shape)
    }
}

impl Shape {
    pub fn new(parent: Column) -> Self {
        Self {
            parent,
            items: Vec::new(),
            filters: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn column(mut self, item: impl Into<ShapeItem>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn filter(mut self, condition: impl Into<Expr>) -> Self {
        self.filters.push(Expression::new(condition));
        self
    }

    pub fn order_by(mut self, term: impl Into<Expr>) -> Self {
        self.order_by.push(Expression::new(term));
        self
    }

    pub fn limit(mut self, limit: impl Into<Pagination>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// `limit 1`, emitted verbatim.
    pub fn limit1(self) -> Self {
        self.limit(RawText::new("1"))
    }

    pub fn offset(mut self, offset: impl Into<Pagination>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}

/// Value of a `limit` or `offset` clause.
#[derive(Debug, Clone, PartialEq)]
pub enum Pagination {
    /// Bound as `<int64>$name`
    Int(i64),
    /// Emitted verbatim
    Text(RawText),
    /// Function call whose literal arguments are bound with the clause prefix
    Func(Expression),
}

impl From<i64> for Pagination {
    fn from(n: i64) -> Self {
        Pagination::Int(n)
    }
}

impl From<RawText> for Pagination {
    fn from(text: RawText) -> Self {
        Pagination::Text(text)
    }
}

impl From<FuncInvocation> for Pagination {
    fn from(invocation: FuncInvocation) -> Self {
        Pagination::Func(Expression::new(invocation))
    }
}
