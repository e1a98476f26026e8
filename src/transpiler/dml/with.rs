use crate::ast::Expression;
use crate::error::QbResult;
use crate::transpiler::index::{Clause, LiteralIndex};
use crate::transpiler::rendered::RenderedQuery;
use crate::transpiler::visitor::{BindingVisitor, ClauseVisitor};

/// `with module m, a := …, b := … ` ahead of a statement.
///
/// Renders nothing when there is neither a module nor a binding; otherwise
/// ends with a single space so the statement keyword can follow directly.
pub fn render_with(
    bindings: &[Expression],
    module: Option<&str>,
    index: &mut LiteralIndex,
) -> QbResult<RenderedQuery> {
    if bindings.is_empty() && module.is_none() {
        return Ok(RenderedQuery::empty());
    }
    let mut parts = Vec::with_capacity(bindings.len() + 1);
    if let Some(module) = module {
        parts.push(RenderedQuery::new(format!("module {}", module)));
    }
    for binding in bindings {
        parts.push(BindingVisitor(Clause::With).render(&binding.to_infix(), index, "")?);
    }
    Ok(RenderedQuery::join(parts, ", ").wrap("with ", " "))
}
