use std::sync::Arc;

use super::shape::Shape;

/// A field reference. Nested fields keep a link to the owning column, so
/// `nested2.name` is the column `name` whose parent is `nested2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: String,
    parent: Option<Arc<Column>>,
}

impl Column {
    /// Column directly on the statement's target entity.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), parent: None }
    }

    /// Field of this column (`self.name`).
    pub fn attr(&self, name: impl Into<String>) -> Column {
        Column {
            name: name.into(),
            parent: Some(Arc::new(self.clone())),
        }
    }

    /// The last path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&Column> {
        self.parent.as_deref()
    }

    /// Path segments from the root column down to this one.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = vec![self.name.as_str()];
        let mut current = self.parent.as_deref();
        while let Some(column) = current {
            segments.push(column.name.as_str());
            current = column.parent.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Dotted path, e.g. `nested2.nested3.name`.
    pub fn path(&self) -> String {
        self.segments().join(".")
    }

    /// Start a nested sub-selection on this column.
    pub fn shape(&self) -> Shape {
        Shape::new(self.clone())
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.path())
    }
}

/// A name bound by `name := expr`, referenced later by that name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alias {
    pub name: String,
}

impl Alias {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Query text emitted verbatim, never parameterized.
///
/// The caller is responsible for keeping untrusted input out of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawText(pub String);

impl RawText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
