/// Clause a literal is bound in; decides the parameter name prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    Select,
    Filter,
    OrderBy,
    Limit,
    Offset,
    Insert,
    Update,
    Using,
    With,
}

impl Clause {
    pub fn prefix(self) -> &'static str {
        match self {
            Clause::Select => "select",
            Clause::Filter => "filter",
            Clause::OrderBy => "order_by",
            Clause::Limit => "limit",
            Clause::Offset => "offset",
            Clause::Insert => "insert",
            Clause::Update => "update",
            Clause::Using => "using",
            Clause::With => "with",
        }
    }

    /// Keyword as written in a query.
    pub fn keyword(self) -> &'static str {
        match self {
            Clause::OrderBy => "order by",
            other => other.prefix(),
        }
    }
}

/// Monotonic counter shared by every clause of one statement, sub-queries included.
///
/// Whatever is rendered first takes the lowest index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralIndex {
    next: usize,
}

impl LiteralIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(start: usize) -> Self {
        Self { next: start }
    }

    /// Index the next literal will take.
    pub fn peek(&self) -> usize {
        self.next
    }

    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }

    /// Reserve the next parameter name for a literal in `clause`.
    pub fn param_name(&mut self, clause: Clause) -> String {
        format!("{}_{}", clause.prefix(), self.next_index())
    }
}
