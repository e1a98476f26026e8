use std::sync::Arc;

use super::{Entity, UpdateQuery};
use crate::ast::column::Column;
use crate::ast::expr::Expr;
use crate::ast::expression::Expression;
use crate::ast::operators::Operator;

/// `with … insert <entity> { field := value, … } unless conflict …`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertQuery {
    pub entity: Entity,
    pub with: Vec<Expression>,
    pub values: Vec<Expression>,
    pub unless_conflict: Option<UnlessConflict>,
}

impl InsertQuery {
    pub fn new(entity: Entity) -> Self {
        Self {
            entity,
            with: Vec::new(),
            values: Vec::new(),
            unless_conflict: None,
        }
    }

    /// Set `field := value`.
    pub fn value(mut self, field: impl Into<String>, value: impl Into<Expr>) -> Self {
        let assignment = Expr::binary(Operator::Assign, Column::new(field), value);
        self.values.push(Expression::new(assignment));
        self
    }

    pub fn with(mut self, binding: impl Into<Expr>) -> Self {
        self.with.push(Expression::new(binding));
        self
    }

    pub fn unless_conflict(mut self, conflict: UnlessConflict) -> Self {
        self.unless_conflict = Some(conflict);
        self
    }
}

/// Conflict handling for an insert.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnlessConflict {
    pub on: Option<ConflictTarget>,
    pub fallback: Option<ConflictFallback>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictTarget {
    /// `on .field`
    Column(Column),
    /// `on (.a, .b)`
    Tuple(Vec<Column>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConflictFallback {
    /// `else Entity`
    Entity(Entity),
    /// `else (update …)`
    Update(Arc<UpdateQuery>),
}

impl From<Entity> for ConflictFallback {
    fn from(entity: Entity) -> Self {
        ConflictFallback::Entity(entity)
    }
}

impl From<UpdateQuery> for ConflictFallback {
    fn from(query: UpdateQuery) -> Self {
        ConflictFallback::Update(Arc::new(query))
    }
}

impl UnlessConflict {
    /// Any constraint violation, no explicit target.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn on(column: Column) -> Self {
        Self {
            on: Some(ConflictTarget::Column(column)),
            fallback: None,
        }
    }

    /// An empty column list means no explicit target.
    pub fn on_tuple(columns: impl IntoIterator<Item = Column>) -> Self {
        let columns: Vec<Column> = columns.into_iter().collect();
        Self {
            on: (!columns.is_empty()).then_some(ConflictTarget::Tuple(columns)),
            fallback: None,
        }
    }

    pub fn or_else(mut self, fallback: impl Into<ConflictFallback>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }
}
