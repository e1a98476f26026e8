//! `select` statements and nested shapes.

use super::with::render_with;
use crate::ast::{Expression, SelectQuery, Shape, ShapeItem};
use crate::error::QbResult;
use crate::transpiler::ToEdgeQL;
use crate::transpiler::conditions::render_filters;
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::order_by::render_order_by;
use crate::transpiler::pagination::{render_limit, render_offset};
use crate::transpiler::rendered::RenderedQuery;
use crate::transpiler::visitor::{ClauseVisitor, SelectVisitor};

pub fn build_select(query: &SelectQuery, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let with = render_with(&query.with, query.entity.module.as_deref(), index)?;
    let target = match &query.select_from {
        Some(from) => from.build_with(index)?.wrap("(", ")"),
        None => RenderedQuery::new(query.entity.name.as_str()),
    };
    Ok(with
        + target.with_prefix("select ")
        + render_columns(&query.columns, index)?
        + render_filters(&query.filters, index)?
        + render_order_by(&query.order_by, index)?
        + render_offset(query.offset.as_ref(), index)?
        + render_limit(query.limit.as_ref(), index)?)
}

/// ` { a, b := …, nested: { … } }`, or nothing without columns.
pub fn render_columns(columns: &[Expression], index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    if columns.is_empty() {
        return Ok(RenderedQuery::empty());
    }
    let mut rendered = Vec::with_capacity(columns.len());
    for column in columns {
        rendered.push(SelectVisitor.render(&column.to_infix(), index, "")?);
    }
    Ok(RenderedQuery::join(rendered, ", ").wrap(" { ", " }"))
}

/// `parent: { items } filter … order by … offset … limit …`
///
/// Items are rendered before the shape's own clauses.
pub fn render_shape(shape: &Shape, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let mut items = Vec::with_capacity(shape.items.len());
    for item in &shape.items {
        items.push(match item {
            ShapeItem::Column(column) => SelectVisitor.column(column, ""),
            ShapeItem::Shape(inner) => render_shape(inner, index)?,
        });
    }
    Ok(RenderedQuery::new(format!("{}: ", shape.parent.name()))
        + RenderedQuery::join(items, ", ").wrap("{ ", " }")
        + render_filters(&shape.filters, index)?
        + render_order_by(&shape.order_by, index)?
        + render_offset(shape.offset.as_ref(), index)?
        + render_limit(shape.limit.as_ref(), index)?)
}
