//! Parenthesization of operator operands.
//!
//! Decisions are taken on the normalized child node and the parent operator
//! only. Non-operator nodes report [`PRECEDENCE_LIMIT`](crate::ast::operators::PRECEDENCE_LIMIT)
//! and so never lose to a parent on precedence alone.

use super::rendered::RenderedQuery;
use crate::ast::{Node, Operator};

pub fn needs_left_parens(child: &Node, parent: Operator) -> bool {
    let lower = child.operator().is_some() && child.precedence() < parent.precedence();
    let peer = child.precedence() == parent.precedence();
    let distinct_peer = peer && !parent.is_right_assoc() && !child.is_column() && child.operator() != Some(parent);
    let right_assoc_peer = peer && parent.is_right_assoc();
    lower || distinct_peer || right_assoc_peer || matches!(child, Node::SubQuery(_))
}

pub fn needs_right_parens(child: &Node, parent: Operator) -> bool {
    let lower = child.operator().is_some() && child.precedence() < parent.precedence();
    let peer = child.operator().is_some() && child.precedence() == parent.precedence();
    let right_assoc_peer = peer && parent.is_right_assoc();
    // `a - (b + c)` keeps its parens, `a + (b + c)` does not need them.
    let regrouped_peer = peer
        && matches!(child, Node::Binary { .. })
        && !parent.is_right_assoc()
        && !(child.operator() == Some(parent) && parent.is_associative());
    let negated_power = matches!(child, Node::Unary { op: Operator::Sub, .. }) && parent.is_right_assoc();
    lower || right_assoc_peer || regrouped_peer || negated_power || matches!(child, Node::SubQuery(_))
}

/// Operand of a prefix operator: `-(.a + .b)`, `not (.a or .b)`.
///
/// Unary `+`/`-` bind tighter than every binary operator except `^`.
pub fn needs_operand_parens(child: &Node, parent: Operator) -> bool {
    match (parent, child) {
        (Operator::Add | Operator::Sub, Node::Binary { op, .. }) => *op != Operator::Pow,
        _ => child.operator().is_some() && child.precedence() <= parent.precedence(),
    }
}

/// `left op right`, each side wrapped when required.
pub fn render_binary(
    op: Operator,
    left: RenderedQuery,
    left_node: &Node,
    right: RenderedQuery,
    right_node: &Node,
) -> RenderedQuery {
    let left = if needs_left_parens(left_node, op) {
        left.wrap("(", ")")
    } else {
        left
    };
    let right = if needs_right_parens(right_node, op) {
        right.wrap("(", ")")
    } else {
        right
    };
    left + RenderedQuery::new(format!(" {} ", op.as_str())) + right
}

/// `op operand`, wrapping the operand when required.
pub fn render_unary(op: Operator, operand: RenderedQuery, operand_node: &Node) -> RenderedQuery {
    let operand = if needs_operand_parens(operand_node, op) {
        operand.wrap("(", ")")
    } else {
        operand
    };
    operand.with_prefix(op.as_str())
}
