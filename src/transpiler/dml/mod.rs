//! Statement renderers.

pub mod count;
pub mod delete;
pub mod group;
pub mod insert;
pub mod select;
pub mod unless_conflict;
pub mod update;
pub mod with;

use super::index::LiteralIndex;
use super::rendered::RenderedQuery;
use super::visitor::ClauseVisitor;
use crate::ast::Expression;
use crate::error::QbResult;

/// ` { field := value, … }` for insert and update.
fn render_values(
    visitor: &dyn ClauseVisitor,
    values: &[Expression],
    index: &mut LiteralIndex,
) -> QbResult<RenderedQuery> {
    let mut rendered = Vec::with_capacity(values.len());
    for value in values {
        rendered.push(visitor.render(&value.to_infix(), index, "")?);
    }
    Ok(RenderedQuery::join(rendered, ", ").wrap(" { ", " }"))
}
