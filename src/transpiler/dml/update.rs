use super::render_values;
use super::with::render_with;
use crate::ast::UpdateQuery;
use crate::error::{QbError, QbResult};
use crate::transpiler::conditions::render_filters;
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::rendered::RenderedQuery;
use crate::transpiler::visitor::UpdateVisitor;

/// Filters come before `set`, so their literals take the lower indices.
pub fn build_update(query: &UpdateQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    if query.values.is_empty() {
        return Err(QbError::EmptyValues { statement: "update" });
    }
    let with = render_with(&query.with, query.entity.module.as_deref(), index)?;
    Ok(with
        + RenderedQuery::new(format!("update {}", query.entity.name))
        + render_filters(&query.filters, index)?
        + RenderedQuery::new(" set")
        + render_values(&UpdateVisitor, &query.values, index)?)
}
