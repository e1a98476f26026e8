use super::index::LiteralIndex;
use super::parens::needs_right_parens;
use super::rendered::RenderedQuery;
use super::visitor::{ClauseVisitor, ConditionVisitor};
use crate::ast::{Expression, Operator};
use crate::error::QbResult;

/// ` filter a and b …`, or nothing without conditions.
///
/// With more than one condition, each is wrapped where `and` would otherwise
/// bind tighter than its own top operator.
pub fn render_filters(filters: &[Expression], index: &mut LiteralIndex) -> QbResult<RenderedQuery> {
    if filters.is_empty() {
        return Ok(RenderedQuery::empty());
    }
    let mut rendered = Vec::with_capacity(filters.len());
    for filter in filters {
        let node = filter.to_infix();
        let condition = ConditionVisitor.render(&node, index, "")?;
        if filters.len() > 1 && needs_right_parens(&node, Operator::And) {
            rendered.push(condition.wrap("(", ")"));
        } else {
            rendered.push(condition);
        }
    }
    Ok(RenderedQuery::join(rendered, " and ").with_prefix(" filter "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, Operand, int64};

    #[test]
    fn test_no_filters() {
        let rendered = render_filters(&[], &mut LiteralIndex::new()).unwrap();
        assert!(rendered.is_empty());
    }

    #[test]
    fn test_filters_joined_with_and() {
        let a = Column::new("a");
        let filters = vec![
            Expression::new(a.clone().gt(int64(1))),
            Expression::new(a.clone().lt(int64(2)).or(a.eq(int64(5)))),
        ];
        let rendered = render_filters(&filters, &mut LiteralIndex::new()).unwrap();
        assert_eq!(
            rendered.query,
            " filter .a > <int64>$filter_0 and (.a < <int64>$filter_1 or .a = <int64>$filter_2)"
        );
        assert_eq!(rendered.params.len(), 3);
    }

    #[test]
    fn test_single_disjunction_is_bare() {
        let a = Column::new("a");
        let filters = vec![Expression::new(a.clone().eq(int64(1)).or(a.exists()))];
        let rendered = render_filters(&filters, &mut LiteralIndex::new()).unwrap();
        assert_eq!(rendered.query, " filter .a = <int64>$filter_0 or exists .a");
    }
}
