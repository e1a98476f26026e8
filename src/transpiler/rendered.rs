use std::ops::{Add, AddAssign};

use indexmap::IndexMap;
use serde::Serialize;

use crate::ast::Value;

/// Query text plus the parameters it binds.
///
/// Fragments compose with `+`. Parameter names are unique per statement, so
/// concatenating two fragments that bind the same name is a bug in the caller
/// and panics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedQuery {
    pub query: String,
    pub params: IndexMap<String, Value>,
}

impl RenderedQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: IndexMap::new(),
        }
    }

    /// Identity element.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fragment binding a single parameter.
    pub fn with_param(query: impl Into<String>, name: impl Into<String>, value: Value) -> Self {
        let mut params = IndexMap::new();
        params.insert(name.into(), value);
        Self {
            query: query.into(),
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.params.is_empty()
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.query.insert_str(0, prefix);
        self
    }

    pub fn with_postfix(mut self, postfix: &str) -> Self {
        self.query.push_str(postfix);
        self
    }

    pub fn wrap(self, left: &str, right: &str) -> Self {
        self.with_prefix(left).with_postfix(right)
    }

    /// Concatenate fragments with `separator` between them.
    pub fn join(parts: impl IntoIterator<Item = RenderedQuery>, separator: &str) -> Self {
        let mut joined = RenderedQuery::empty();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                joined.query.push_str(separator);
            }
            joined += part;
        }
        joined
    }

    /// Parameters as a JSON object, in binding order.
    pub fn params_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.params)
    }
}

impl AddAssign for RenderedQuery {
    fn add_assign(&mut self, other: RenderedQuery) {
        self.query.push_str(&other.query);
        for (name, value) in other.params {
            if self.params.contains_key(&name) {
                panic!("parameter `{}` bound twice in one statement", name);
            }
            self.params.insert(name, value);
        }
    }
}

impl Add for RenderedQuery {
    type Output = RenderedQuery;

    fn add(mut self, other: RenderedQuery) -> RenderedQuery {
        self += other;
        self
    }
}

impl From<&str> for RenderedQuery {
    fn from(query: &str) -> Self {
        RenderedQuery::new(query)
    }
}

impl From<String> for RenderedQuery {
    fn from(query: String) -> Self {
        RenderedQuery::new(query)
    }
}

impl std::fmt::Display for RenderedQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)
    }
}
