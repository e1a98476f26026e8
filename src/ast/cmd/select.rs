use super::{Entity, SubQuery};
use crate::ast::column::RawText;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;
use crate::ast::shape::Pagination;

/// `with … select <target> { … } filter … order by … offset … limit …`
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    pub entity: Entity,
    /// Select from an embedded statement instead of the entity.
    pub select_from: Option<SubQuery>,
    pub columns: Vec<Expression>,
    pub with: Vec<Expression>,
    pub filters: Vec<Expression>,
    pub order_by: Vec<Expression>,
    pub limit: Option<Pagination>,
    pub offset: Option<Pagination>,
}

impl SelectQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            select_from: None,
            columns: Vec::new(),
            with: Vec::new(),
            filters: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    /// Add a shape element: a column, a nested shape or a labeled expression.
    pub fn column(mut self, column: impl Into<Expr>) -> Self {
        self.columns.push(Expression::new(column));
        self
    }

    pub fn select_from(mut self, query: impl Into<SubQuery>) -> Self {
        self.select_from = Some(query.into());
        self
    }

    /// Add a `with` binding, usually built with `label`.
    pub fn with(mut self, binding: impl Into<Expr>) -> Self {
        self.with.push(Expression::new(binding));
        self
    }

    /// Add a condition; conditions are joined with `and`.
    pub fn filter(mut self, condition: impl Into<Expr>) -> Self {
        self.filters.push(Expression::new(condition));
        self
    }

    /// Add an ordering term; terms are joined with `then`.
    pub fn order_by(mut self, term: impl Into<Expr>) -> Self {
        self.order_by.push(Expression::new(term));
        self
    }

    pub fn limit(mut self, limit: impl Into<Pagination>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn limit1(self) -> Self {
        self.limit(RawText::new("1"))
    }

    pub fn offset(mut self, offset: impl Into<Pagination>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}
