use super::Entity;
use crate::ast::column::Column;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;
use crate::ast::operators::Operator;

/// `with … update <entity> filter … set { field := value, … }`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateQuery {
    pub entity: Entity,
    pub with: Vec<Expression>,
    pub filters: Vec<Expression>,
    pub values: Vec<Expression>,
}

impl UpdateQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            with: Vec::new(),
            filters: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Set `field := value`. The value may reference current fields.
    pub fn value(mut self, field: impl Into<String>, value: impl Into<Expr>) -> Self {
        let assignment = Expr::binary(Operator::Assign, Column::new(field), value);
        self.values.push(Expression::new(assignment));
        self
    }

    pub fn with(mut self, binding: impl Into<Expr>) -> Self {
        self.with.push(Expression::new(binding));
        self
    }

    pub fn filter(mut self, condition: impl Into<Expr>) -> Self {
        self.filters.push(Expression::new(condition));
        self
    }
}
