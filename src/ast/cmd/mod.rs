//! Statement builders.
//!
//! Every builder method consumes the statement and returns the updated one,
//! so partially built statements can be cloned and extended independently.

pub mod count;
pub mod delete;
pub mod group;
pub mod insert;
pub mod select;
pub mod update;

use std::sync::Arc;

pub use count::CountQuery;
pub use delete::DeleteQuery;
pub use group::GroupQuery;
pub use insert::{ConflictFallback, ConflictTarget, InsertQuery, UnlessConflict};
pub use select::SelectQuery;
pub use update::UpdateQuery;

use super::column::Column;

/// Schema qualifier used when none is configured.
pub const DEFAULT_SCHEMA: &str = "default";

/// Target object type of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entity {
    pub name: String,
    /// Emitted as `with module <name>` ahead of the statement.
    pub module: Option<String>,
    pub schema: String,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            module: None,
            schema: DEFAULT_SCHEMA.to_string(),
        }
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Field of this entity.
    pub fn col(&self, name: impl Into<String>) -> Column {
        Column::new(name)
    }

    pub fn select(&self) -> SelectQuery {
        SelectQuery::new(self.clone())
    }

    pub fn insert(&self) -> InsertQuery {
        InsertQuery::new(self.clone())
    }

    pub fn update(&self) -> UpdateQuery {
        UpdateQuery::new(self.clone())
    }

    pub fn delete(&self) -> DeleteQuery {
        DeleteQuery::new(self.clone())
    }

    pub fn group(&self) -> GroupQuery {
        GroupQuery::new(self.clone())
    }

    pub fn count(&self) -> CountQuery {
        CountQuery::new(self.clone())
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A statement embedded in a value position.
#[derive(Debug, Clone, PartialEq)]
pub enum SubQuery {
    Select(Arc<SelectQuery>),
    Insert(Arc<InsertQuery>),
    Update(Arc<UpdateQuery>),
}

impl SubQuery {
    pub fn kind(&self) -> &'static str {
        match self {
            SubQuery::Select(_) => "select",
            SubQuery::Insert(_) => "insert",
            SubQuery::Update(_) => "update",
        }
    }
}

macro_rules! impl_subquery {
    ($($query:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$query> for SubQuery {
                fn from(query: $query) -> Self {
                    SubQuery::$variant(Arc::new(query))
                }
            }

            impl From<$query> for super::expr::Expr {
                fn from(query: $query) -> Self {
                    super::expr::Expr::SubQuery(query.into())
                }
            }

            impl $query {
                /// `name := (<this statement>)`
                pub fn label(self, name: impl Into<String>) -> super::expr::Expr {
                    super::expr::Expr::from(self).label(name)
                }
            }
        )*
    };
}

impl_subquery!(
    SelectQuery => Select,
    InsertQuery => Insert,
    UpdateQuery => Update,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_defaults() {
        let entity = Entity::new("A");
        assert_eq!(entity.schema, DEFAULT_SCHEMA);
        assert!(entity.module.is_none());
        assert_eq!(entity.with_module("test").module.as_deref(), Some("test"));
    }

    #[test]
    fn test_subquery_kind() {
        let query: SubQuery = Entity::new("A").select().into();
        assert_eq!(query.kind(), "select");
    }
}
