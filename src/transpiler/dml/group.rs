use super::select::render_columns;
use super::with::render_with;
use crate::ast::{GroupQuery, Node, Operator};
use crate::error::{QbError, QbResult};
use crate::transpiler::index::{Clause, LiteralIndex};
use crate::transpiler::rendered::RenderedQuery;
use crate::transpiler::visitor::{BindingVisitor, ClauseVisitor};

pub fn build_group(query: &GroupQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let with = render_with(&query.with, query.entity.module.as_deref(), index)?;
    let head = RenderedQuery::new(format!("group {}", query.entity.name)) + render_columns(&query.columns, index)?;

    let mut using = Vec::with_capacity(query.using.len());
    for binding in &query.using {
        using.push(BindingVisitor(Clause::Using).render(&binding.to_infix(), index, "")?);
    }
    let using = if using.is_empty() {
        RenderedQuery::empty()
    } else {
        RenderedQuery::join(using, ", ").with_prefix(" using ")
    };

    let mut by = Vec::with_capacity(query.by.len());
    for target in &query.by {
        by.push(render_group_target(&target.to_infix())?);
    }
    let by = if by.is_empty() {
        RenderedQuery::empty()
    } else {
        RenderedQuery::join(by, ", ").with_prefix(" by ")
    };

    Ok(with + head + using + by)
}

/// A path renders as `.path`; a binding, or a reference to one, by its name.
fn render_group_target(node: &Node) -> QbResult<RenderedQuery> {
    match node {
        Node::Column(column) => Ok(RenderedQuery::new(column.to_string())),
        Node::Alias(alias) => Ok(RenderedQuery::new(alias.name.as_str())),
        Node::Binary {
            op: Operator::Assign,
            left,
            ..
        } => match left.as_ref() {
            Node::Alias(alias) => Ok(RenderedQuery::new(alias.name.as_str())),
            other => Err(QbError::InvalidGroupBy(other.describe())),
        },
        other => Err(QbError::InvalidGroupBy(other.describe())),
    }
}
