use super::render_values;
use super::unless_conflict::render_unless_conflict;
use super::with::render_with;
use crate::ast::InsertQuery;
use crate::error::{QbError, QbResult};
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::rendered::RenderedQuery;
use crate::transpiler::visitor::InsertVisitor;

pub fn build_insert(query: &InsertQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    if query.values.is_empty() {
        return Err(QbError::EmptyValues { statement: "insert" });
    }
    let with = render_with(&query.with, query.entity.module.as_deref(), index)?;
    let values = render_values(&InsertVisitor, &query.values, index)?;
    let conflict = match &query.unless_conflict {
        Some(conflict) => render_unless_conflict(conflict, index)?,
        None => RenderedQuery::empty(),
    };
    Ok(with + RenderedQuery::new(format!("insert {}", query.entity.name)) + values + conflict)
}
