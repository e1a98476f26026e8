use super::index::LiteralIndex;
use super::rendered::RenderedQuery;
use super::visitor::{ClauseVisitor, OrderByVisitor};
use crate::ast::Expression;
use crate::error::QbResult;

/// ` order by a asc then b …`, or nothing without terms.
pub fn render_order_by(terms: &[Expression], index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    if terms.is_empty() {
        return Ok(RenderedQuery::empty());
    }
    let mut rendered = Vec::with_capacity(terms.len());
    for term in terms {
        rendered.push(OrderByVisitor.render(&term.to_infix(), index, "")?);
    }
    Ok(RenderedQuery::join(rendered, " then ").with_prefix(" order by "))
}
