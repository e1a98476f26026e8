use super::Entity;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;

/// `select count(<entity>)`, or `select count((select <entity> filter …))`.
#[derive(Debug, Clone, PartialEq)]
pub struct CountQuery {
    pub entity: Entity,
    pub filters: Vec<Expression>,
}

impl CountQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            filters: Vec::new(),
        }
    }

    pub fn filter(mut self, condition: impl Into<Expr>) -> Self {
        self.filters.push(Expression::new(condition));
        self
    }
}
