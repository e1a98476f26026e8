//! EdgeQL renderer.
//!
//! Turns statement builders into query text plus bound parameters. Every
//! literal becomes a parameter named after its clause and a counter shared by
//! the whole statement, embedded sub-queries included.

pub mod conditions;
pub mod dml;
pub mod index;
pub mod literal;
pub mod order_by;
pub mod pagination;
pub mod parens;
pub mod rendered;
pub mod visitor;

#[cfg(test)]
mod tests;

pub use index::{Clause, LiteralIndex};
pub use rendered::RenderedQuery;

use crate::ast::*;
use crate::error::QbResult;

/// Render a statement to EdgeQL.
pub trait ToEdgeQL {
    /// Render with a fresh counter starting at zero.
    fn build(&self) -> QbResult<RenderedQuery> {
        self.build_with(&mut LiteralIndex::new())
    }

    /// Render drawing parameter indices from `index`.
    fn build_with(&self, index: &mut LiteralIndex) -> QbResult<RenderedQuery>;
}

macro_rules! impl_to_edgeql {
    ($($query:ty => $build:path, $kind:literal);* $(;)?) => {
        $(
            impl ToEdgeQL for $query {
                fn build_with(&self, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
                    let rendered = $build(self, index)?;
                    tracing::debug!(
                        entity = %self.entity,
                        params = rendered.params.len(),
                        "rendered {} statement",
                        $kind
                    );
                    Ok(rendered)
                }
            }
        )*
    };
}

impl_to_edgeql! {
    SelectQuery => dml::select::build_select, "select";
    InsertQuery => dml::insert::build_insert, "insert";
    UpdateQuery => dml::update::build_update, "update";
    DeleteQuery => dml::delete::build_delete, "delete";
    GroupQuery => dml::group::build_group, "group";
    CountQuery => dml::count::build_count, "count";
}

impl ToEdgeQL for SubQuery {
    fn build_with(&self, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
        match self {
            SubQuery::Select(query) => query.build_with(index),
            SubQuery::Insert(query) => query.build_with(index),
            SubQuery::Update(query) => query.build_with(index),
        }
    }
}
