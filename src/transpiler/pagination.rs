use super::index::{Clause, LiteralIndex};
use super::literal::render_literal;
use super::rendered::RenderedQuery;
use super::visitor::{ClauseVisitor, PaginationVisitor};
use crate::ast::{Pagination, Value, int64};
use crate::error::QbResult;

pub fn render_limit(limit: Option<&Pagination>, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    render_pagination(limit, Clause::Limit, index)
}

pub fn render_offset(offset: Option<&Pagination>, index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    render_pagination(offset, Clause::Offset, index)
}

fn render_pagination(
    value: Option<&Pagination>,
    clause: Clause,
    index: &mut LiteralIndex,
) -> QbResult<RenderedQuery> {
    let Some(value) = value else {
        return Ok(RenderedQuery::empty());
    };
    let rendered = match value {
        Pagination::Int(n) => render_literal(&Value::from(int64(*n)), clause, index),
        Pagination::Text(text) => RenderedQuery::new(text.as_str()),
        Pagination::Func(expression) => PaginationVisitor(clause).render(&expression.to_infix(), index, "")?,
    };
    Ok(rendered.with_prefix(&format!(" {} ", clause.keyword())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{RawText, int16, math};

    #[test]
    fn test_int_limit() {
        let mut index = LiteralIndex::new();
        let rendered = render_limit(Some(&Pagination::Int(10)), &mut index).unwrap();
        assert_eq!(rendered.query, " limit <int64>$limit_0");
        assert_eq!(rendered.params["limit_0"], Value::Int(10));
    }

    #[test]
    fn test_text_offset() {
        let offset = Pagination::from(RawText::new("5"));
        let rendered = render_offset(Some(&offset), &mut LiteralIndex::new()).unwrap();
        assert_eq!(rendered.query, " offset 5");
        assert!(rendered.params.is_empty());
    }

    #[test]
    fn test_function_limit() {
        let limit = Pagination::from(math::ABS.call1(int16(-3)));
        let rendered = render_limit(Some(&limit), &mut LiteralIndex::new()).unwrap();
        assert_eq!(rendered.query, " limit math::abs(<int16>$limit_0)");
        assert_eq!(rendered.params["limit_0"], Value::Int(-3));
    }

    #[test]
    fn test_absent() {
        assert!(render_offset(None, &mut LiteralIndex::new()).unwrap().is_empty());
    }
}
