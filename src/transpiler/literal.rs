use super::index::{Clause, LiteralIndex};
use super::rendered::RenderedQuery;
use crate::ast::Value;

/// Bind `value` as the next parameter of `clause`: `<cast>$name`, or a bare
/// `$name` when the value carries no cast.
pub fn render_literal(value: &Value, clause: Clause, index: &mut LiteralIndex) -> RenderedQuery {
    let name = index.param_name(clause);
    let query = match value.cast_name() {
        Some(cast) => format!("<{}>${}", cast, name),
        None => format!("${}", name),
    };
    RenderedQuery::with_param(query, name, value.bound())
}
