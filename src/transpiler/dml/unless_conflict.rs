use crate::ast::{Column, ConflictFallback, ConflictTarget, UnlessConflict};
use crate::error::QbResult;
use crate::transpiler::ToEdgeQL;
use crate::transpiler::index::LiteralIndex;
use crate::transpiler::rendered::RenderedQuery;

/// ` unless conflict[ on <target>][ else <fallback>]`
pub fn render_unless_conflict(conflict: &UnlessConflict, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    let mut rendered = RenderedQuery::new(" unless conflict");
    match &conflict.on {
        Some(ConflictTarget::Column(column)) => {
            rendered += RenderedQuery::new(format!(" on {}", column));
        }
        Some(ConflictTarget::Tuple(columns)) if !columns.is_empty() => {
            let columns: Vec<String> = columns.iter().map(Column::to_string).collect();
            rendered += RenderedQuery::new(format!(" on ({})", columns.join(", ")));
        }
        Some(ConflictTarget::Tuple(_)) | None => {}
    }
    match &conflict.fallback {
        Some(ConflictFallback::Entity(entity)) => {
            rendered += RenderedQuery::new(format!(" else {}", entity.name));
        }
        Some(ConflictFallback::Update(query)) => {
            rendered += query.build_with(index)?.wrap(" else (", ")");
        }
        None => {}
    }
    Ok(rendered)
}
