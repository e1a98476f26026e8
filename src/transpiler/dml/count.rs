use super::with::render_with;
use crate::ast::CountQuery;
use crate::error::QbResult;
use crate::transpiler::conditions::render_filters;
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::rendered::RenderedQuery;

pub fn build_count(query: &CountQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let with = render_with(&[], query.entity.module.as_deref(), index)?;
    let target = if query.filters.is_empty() {
        RenderedQuery::new(query.entity.name.as_str())
    } else {
        (RenderedQuery::new(format!("select {}", query.entity.name)) + render_filters(&query.filters, index)?)
            .wrap("(", ")")
    };
    Ok(with + target.wrap("select count(", ")"))
}
