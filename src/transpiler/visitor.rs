//! Node renderers, one per clause.
//!
//! Every clause walks the same [`Node`] tree with the same dispatch. They
//! differ in which nodes they accept, how a column reference is written and
//! which prefix names their parameters.

use super::ToEdgeQL;
use super::dml::select::render_shape;
use super::index::{Clause, LiteralIndex};
use super::literal::render_literal;
use super::parens::{render_binary, render_unary};
use super::rendered::RenderedQuery;
use crate::ast::{Column, Function, Node, Operator};
use crate::error::{QbError, QbResult};

pub trait ClauseVisitor {
    fn clause(&self) -> Clause;

    fn accepts(&self, node: &Node) -> bool {
        !matches!(node, Node::Shape(_) | Node::Sorted { .. })
    }

    /// `prefix` is `.` for operands of a binary node and empty at the top
    /// of a value or on the left of `:=`.
    fn column(&self, column: &Column, prefix: &'static str) -> RenderedQuery {
        RenderedQuery::new(format!("{}{}", prefix, column.name()))
    }

    /// Column prefixes for the left and right operand of `op`.
    fn operand_prefixes(&self, op: Operator) -> (&'static str, &'static str) {
        let left = if op == Operator::Assign { "" } else { "." };
        (left, ".")
    }

    fn render(&self, node: &Node, index: &mut LiteralIndex, prefix: &'static str) -> QbResult<RenderedQuery> {
        if !self.accepts(node) {
            return Err(QbError::unsupported(node.describe(), self.clause().keyword()));
        }
        match node {
            Node::Column(column) => Ok(self.column(column, prefix)),
            Node::Alias(alias) => Ok(RenderedQuery::new(alias.name.as_str())),
            Node::Literal { value, .. } => Ok(render_literal(value, self.clause(), index)),
            Node::Text(text) => Ok(RenderedQuery::new(text.as_str())),
            Node::Unary { op, operand } => {
                let rendered = self.render(operand, index, prefix)?;
                Ok(render_unary(*op, rendered, operand))
            }
            Node::Binary { op, left, right } => {
                let (left_prefix, right_prefix) = self.operand_prefixes(*op);
                let left_rendered = self.render(left, index, left_prefix)?;
                let right_rendered = self.render(right, index, right_prefix)?;
                Ok(render_binary(*op, left_rendered, left, right_rendered, right))
            }
            Node::Func { function, args } => self.function(function, args, index, prefix),
            Node::Sorted { node, order } => {
                let rendered = self.render(node, index, prefix)?;
                Ok(rendered.with_postfix(&format!(" {}", order)))
            }
            Node::Shape(shape) => render_shape(shape, index),
            Node::SubQuery(query) => query.build_with(index),
        }
    }

    /// `name(arg, …)`; arguments keep the caller's column prefix.
    fn function(
        &self,
        function: &Function,
        args: &[Node],
        index: &mut LiteralIndex,
        prefix: &'static str,
    ) -> QbResult<RenderedQuery> {
        let mut rendered = Vec::with_capacity(args.len());
        for arg in args {
            rendered.push(self.render(arg, index, prefix)?);
        }
        Ok(RenderedQuery::join(rendered, ", ").wrap(&format!("{}(", function.qualified_name()), ")"))
    }
}

/// Shape elements of `select` and `group`.
pub struct SelectVisitor;

impl ClauseVisitor for SelectVisitor {
    fn clause(&self) -> Clause {
        Clause::Select
    }

    fn accepts(&self, node: &Node) -> bool {
        !matches!(node, Node::Sorted { .. })
    }
}

/// `with` and `using` bindings.
pub struct BindingVisitor(pub Clause);

impl ClauseVisitor for BindingVisitor {
    fn clause(&self) -> Clause {
        self.0
    }
}

/// `filter` conditions. Columns render as their full path.
pub struct ConditionVisitor;

impl ClauseVisitor for ConditionVisitor {
    fn clause(&self) -> Clause {
        Clause::Filter
    }

    fn column(&self, column: &Column, _prefix: &'static str) -> RenderedQuery {
        RenderedQuery::new(column.to_string())
    }
}

pub struct OrderByVisitor;

impl ClauseVisitor for OrderByVisitor {
    fn clause(&self) -> Clause {
        Clause::OrderBy
    }

    fn accepts(&self, node: &Node) -> bool {
        !matches!(node, Node::Shape(_))
    }

    fn column(&self, column: &Column, _prefix: &'static str) -> RenderedQuery {
        RenderedQuery::new(column.to_string())
    }
}

/// Arguments of a function used as `limit` or `offset`.
pub struct PaginationVisitor(pub Clause);

impl ClauseVisitor for PaginationVisitor {
    fn clause(&self) -> Clause {
        self.0
    }

    fn accepts(&self, node: &Node) -> bool {
        matches!(node, Node::Literal { .. } | Node::Text(_) | Node::Func { .. })
    }
}

/// `insert` values. Fields are written bare.
pub struct InsertVisitor;

impl ClauseVisitor for InsertVisitor {
    fn clause(&self) -> Clause {
        Clause::Insert
    }

    fn accepts(&self, node: &Node) -> bool {
        !matches!(node, Node::Unary { .. } | Node::Shape(_) | Node::Sorted { .. })
    }

    fn column(&self, column: &Column, _prefix: &'static str) -> RenderedQuery {
        RenderedQuery::new(column.name())
    }
}

/// `update … set` values.
pub struct UpdateVisitor;

impl ClauseVisitor for UpdateVisitor {
    fn clause(&self) -> Clause {
        Clause::Update
    }

    fn accepts(&self, node: &Node) -> bool {
        !matches!(node, Node::Unary { .. } | Node::Shape(_) | Node::Sorted { .. })
    }
}
