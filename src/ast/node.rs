use super::cmd::SubQuery;
use super::column::{Alias, Column, RawText};
use super::functions::Function;
use super::operators::{Operator, PRECEDENCE_LIMIT, SortOrder};
use super::shape::Shape;
use super::values::Value;

/// Canonical infix tree rebuilt from an [`Expression`](super::Expression).
///
/// This is what the renderer walks. Unlike [`Expr`](super::Expr) it has already
/// gone through label elision and sign folding.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Column(Column),
    Alias(Alias),
    /// `position` is the literal's index in the token sequence. It keeps two
    /// equal values at different places distinct when trees are compared;
    /// parameter names come from the render-time counter, not from it.
    Literal { value: Value, position: usize },
    Text(RawText),
    Unary {
        op: Operator,
        operand: Box<Node>,
    },
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
    Func {
        function: Function,
        args: Vec<Node>,
    },
    Sorted {
        node: Box<Node>,
        order: SortOrder,
    },
    Shape(Shape),
    SubQuery(SubQuery),
}

impl Node {
    /// Build a binary node, folding a signed right operand into the operator.
    ///
    /// `a - -b` becomes `a + b`; `a + -b` and `a - +b` become `a - b`.
    /// The fold is a single local step and does not look further down.
    pub fn binary(op: Operator, left: Node, right: Node) -> Node {
        let (op, right) = match (op, right) {
            (Operator::Sub, Node::Unary { op: Operator::Sub, operand }) => (Operator::Add, *operand),
            (Operator::Add, Node::Unary { op: Operator::Sub, operand })
            | (Operator::Sub, Node::Unary { op: Operator::Add, operand }) => (Operator::Sub, *operand),
            (op, right) => (op, right),
        };
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unary(op: Operator, operand: Node) -> Node {
        Node::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Operator of a unary or binary node.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Unary { op, .. } | Node::Binary { op, .. } => Some(*op),
            _ => None,
        }
    }

    pub fn precedence(&self) -> u8 {
        self.operator().map_or(PRECEDENCE_LIMIT, Operator::precedence)
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Node::Column(_))
    }

    /// Short human readable description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Node::Column(column) => format!("column `{}`", column),
            Node::Alias(alias) => format!("alias `{}`", alias),
            Node::Literal { value, .. } => format!("literal {}", value),
            Node::Text(text) => format!("text `{}`", text.as_str()),
            Node::Unary { op, .. } => format!("unary operator `{}`", op),
            Node::Binary { op, .. } => format!("binary operator `{}`", op),
            Node::Func { function, .. } => format!("function `{}`", function),
            Node::Sorted { order, .. } => format!("sorted expression ({})", order),
            Node::Shape(shape) => format!("shape `{}`", shape.parent.name()),
            Node::SubQuery(query) => format!("{} sub-query", query.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> Node {
        Node::Column(Column::new(name))
    }

    #[test]
    fn test_double_negation_folds() {
        let folded = Node::binary(Operator::Sub, col("a"), Node::unary(Operator::Sub, col("b")));
        assert_eq!(folded, Node::binary(Operator::Add, col("a"), col("b")));
    }

    #[test]
    fn test_mixed_signs_fold_to_sub() {
        let expected = Node::binary(Operator::Sub, col("a"), col("b"));
        assert_eq!(
            Node::binary(Operator::Add, col("a"), Node::unary(Operator::Sub, col("b"))),
            expected
        );
        assert_eq!(
            Node::binary(Operator::Sub, col("a"), Node::unary(Operator::Add, col("b"))),
            expected
        );
    }

    #[test]
    fn test_fold_is_single_pass() {
        let inner = Node::unary(Operator::Sub, Node::unary(Operator::Sub, col("b")));
        let folded = Node::binary(Operator::Sub, col("a"), inner);
        assert_eq!(
            folded,
            Node::binary(Operator::Add, col("a"), Node::unary(Operator::Sub, col("b")))
        );
    }

    #[test]
    fn test_fold_is_idempotent() {
        let once = Node::binary(Operator::Sub, col("a"), Node::unary(Operator::Sub, col("b")));
        let Node::Binary { op, left, right } = once.clone() else {
            panic!("expected binary node");
        };
        assert_eq!(Node::binary(op, *left, *right), once);
    }

    #[test]
    fn test_equal_literals_differ_by_position() {
        use crate::ast::{Expression, int64};

        let node = Expression::new(crate::ast::Expr::from(int64(1)) + int64(1)).to_infix();
        let Node::Binary { left, right, .. } = node else {
            panic!("expected binary node");
        };
        assert_ne!(left, right);
        assert!(matches!(*left, Node::Literal { position: 1, .. }));
        assert!(matches!(*right, Node::Literal { position: 2, .. }));
    }

    #[test]
    fn test_other_operators_untouched() {
        let node = Node::binary(Operator::Mul, col("a"), Node::unary(Operator::Sub, col("b")));
        assert_eq!(node.operator(), Some(Operator::Mul));
        assert_eq!(col("a").precedence(), PRECEDENCE_LIMIT);
    }
}
