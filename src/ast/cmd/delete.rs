use super::Entity;
use crate::ast::column::RawText;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;
use crate::ast::shape::Pagination;

/// `with … delete <entity> filter … order by … offset … limit …`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteQuery {
    pub entity: Entity,
    pub with: Vec<Expression>,
    pub filters: Vec<Expression>,
    pub order_by: Vec<Expression>,
    pub limit: Option<Pagination>,
    pub offset: Option<Pagination>,
}

impl DeleteQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            with: Vec::new(),
            filters: Vec::new(),
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn with(mut self, binding: impl Into<Expr>) -> Self {
        self.with.push(Expression::new(binding));
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

    pub fn limit1(self) -> Self {
        self.limit(RawText::new("1"))
    }

    pub fn offset(mut self, offset: impl Into<Pagination>) -> Self {
        self.offset = Some(offset.into());
        self
    }
}
