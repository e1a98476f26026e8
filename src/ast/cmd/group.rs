use super::Entity;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;

/// `with … group <entity> { … } using name := expr, … by target, …`
#[derive(Debug, Clone, PartialEq)]
pub struct GroupQuery {
    pub entity: Entity,
    pub columns: Vec<Expression>,
    pub with: Vec<Expression>,
    pub using: Vec<Expression>,
    pub by: Vec<Expression>,
}

impl GroupQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            columns: Vec::new(),
            with: Vec::new(),
            using: Vec::new(),
            by: Vec::new(),
        }
    }

    pub fn column(mut self, column: impl Into<Expr>) -> Self {
        self.columns.push(Expression::new(column));
        self
    }

    pub fn with(mut self, binding: impl Into<Expr>) -> Self {
        self.with.push(Expression::new(binding));
        self
    }

    /// Add a grouping key binding, built with `label`.
    pub fn using(mut self, binding: impl Into<Expr>) -> Self {
        self.using.push(Expression::new(binding));
        self
    }

    /// Group by a column, or by the name of a labeled `using` binding.
    pub fn by(mut self, target: impl Into<Expr>) -> Self {
        self.by.push(Expression::new(target));
        self
    }
}
