use super::with::render_with;
use crate::ast::DeleteQuery;
use crate::error::QbResult;
use crate::transpiler::conditions::render_filters;
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::order_by::render_order_by;
use crate::transpiler::pagination::{render_limit, render_offset};
use crate::transpiler::rendered::RenderedQuery;

pub fn build_delete(query: &DeleteQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let with = render_with(&query.with, query.entity.module.as_deref(), index)?;
    Ok(with
        + RenderedQuery::new(format!("delete {}", query.entity.name))
        + render_filters(&query.filters, index)?
        + render_order_by(&query.order_by, index)?
        + render_offset(query.offset.as_ref(), index)?
        + render_limit(query.limit.as_ref(), index)?)
}
