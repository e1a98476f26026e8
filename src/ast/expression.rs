//! Normalized expressions.
//!
//! An [`Expr`] tree is flattened once into a depth-annotated prefix token
//! sequence. Assignments nested inside other expressions are replaced by
//! their bound name while flattening. The sequence is rebuilt into an infix
//! [`Node`] tree on demand, folding signs at every binary node on the way.

use super::cmd::SubQuery;
use super::column::{Alias, Column, RawText};
use super::expr::Expr;
use super::functions::Function;
use super::node::Node;
use super::operators::{Operator, SortOrder};
use super::shape::Shape;
use super::values::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Column(Column),
    Alias(Alias),
    Literal(Value),
    Text(RawText),
    Shape(Shape),
    SubQuery(SubQuery),
    Operator { op: Operator, arity: Arity },
    Func { function: Function, arity: usize },
    Sort(SortOrder),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub symbol: Symbol,
    pub depth: usize,
}

/// A user expression in normalized prefix form.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    pub fn new(expr: impl Into<Expr>) -> Self {
        let mut tokens = Vec::new();
        flatten(&expr.into(), 0, &mut tokens);
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Rebuild the infix tree.
    ///
    /// # Panics
    ///
    /// When the token sequence does not describe exactly one tree. Sequences
    /// built by [`Expression::new`] always do.
    pub fn to_infix(&self) -> Node {
        let mut stack = OperandStack::default();
        for (position, token) in self.tokens.iter().enumerate().rev() {
            let node = match &token.symbol {
                Symbol::Column(column) => Node::Column(column.clone()),
                Symbol::Alias(alias) => Node::Alias(alias.clone()),
                Symbol::Literal(value) => Node::Literal {
                    value: value.clone(),
                    position,
                },
                Symbol::Text(text) => Node::Text(text.clone()),
                Symbol::Shape(shape) => Node::Shape(shape.clone()),
                Symbol::SubQuery(query) => Node::SubQuery(query.clone()),
                Symbol::Operator { op, arity: Arity::Unary } => Node::unary(*op, stack.pop(token)),
                Symbol::Operator { op, arity: Arity::Binary } => {
                    let left = stack.pop(token);
                    let right = stack.pop(token);
                    Node::binary(*op, left, right)
                }
                Symbol::Func { function, arity } => Node::Func {
                    function: function.clone(),
                    args: stack.pop_n(*arity, token),
                },
                Symbol::Sort(order) => Node::Sorted {
                    node: Box::new(stack.pop(token)),
                    order: *order,
                },
            };
            stack.push(node);
        }
        stack.finish()
    }
}

fn flatten(expr: &Expr, depth: usize, tokens: &mut Vec<Token>) {
    let mut emit = |symbol| tokens.push(Token { symbol, depth });
    match expr {
        Expr::Column(column) => emit(Symbol::Column(column.clone())),
        Expr::Alias(alias) => emit(Symbol::Alias(alias.clone())),
        Expr::Literal(value) => emit(Symbol::Literal(value.clone())),
        Expr::Text(text) => emit(Symbol::Text(text.clone())),
        Expr::Shape(shape) => emit(Symbol::Shape(shape.clone())),
        Expr::SubQuery(query) => emit(Symbol::SubQuery(query.clone())),
        Expr::Unary { op, operand } => {
            emit(Symbol::Operator { op: *op, arity: Arity::Unary });
            flatten(elide_label(operand, depth), depth + 1, tokens);
        }
        Expr::Binary { op, left, right } => {
            emit(Symbol::Operator { op: *op, arity: Arity::Binary });
            let left = elide_label(left, depth + 1);
            let right = elide_label(right, depth + 1);
            flatten(left, depth + 1, tokens);
            flatten(right, depth + 1, tokens);
        }
        Expr::Func(invocation) => {
            emit(Symbol::Func {
                function: invocation.function.clone(),
                arity: invocation.arity(),
            });
            for arg in &invocation.args {
                flatten(elide_label(arg, depth), depth + 1, tokens);
            }
        }
        Expr::Sorted { expr, order } => {
            emit(Symbol::Sort(*order));
            flatten(expr, depth + 1, tokens);
        }
    }
}

/// Below the top level, `name := value` is referenced by `name` alone.
fn elide_label(expr: &Expr, depth: usize) -> &Expr {
    match expr {
        Expr::Binary {
            op: Operator::Assign,
            left,
            ..
        } if depth > 0 => left.as_ref(),
        _ => expr,
    }
}

#[derive(Default)]
struct OperandStack {
    nodes: Vec<Node>,
}

impl OperandStack {
    fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    fn pop(&mut self, token: &Token) -> Node {
        match self.nodes.pop() {
            Some(node) => node,
            None => panic!("malformed expression: missing operand for {:?}", token.symbol),
        }
    }

    /// Pop `count` operands, keeping their source order.
    fn pop_n(&mut self, count: usize, token: &Token) -> Vec<Node> {
        let Some(split) = self.nodes.len().checked_sub(count) else {
            panic!(
                "malformed expression: {:?} needs {} operands, {} available",
                token.symbol,
                count,
                self.nodes.len()
            );
        };
        let mut args = self.nodes.split_off(split);
        args.reverse();
        args
    }

    fn finish(mut self) -> Node {
        assert_eq!(
            self.nodes.len(),
            1,
            "malformed expression: expected a single root, got {:?}",
            self.nodes
        );
        self.nodes.remove(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::expr::Operand;
    use crate::ast::functions::math;
    use crate::ast::values::int64;

    #[test]
    fn test_flatten_prefix_order_and_depth() {
        let a = Column::new("a");
        let expression = Expression::new((a.clone() + int64(1)) * a);
        let depths: Vec<usize> = expression.tokens().iter().map(|t| t.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 2, 1]);
        assert!(matches!(
            expression.tokens()[0].symbol,
            Symbol::Operator { op: Operator::Mul, arity: Arity::Binary }
        ));
    }

    #[test]
    fn test_round_trip_keeps_operand_order() {
        let expr = Column::new("a") - Column::new("b");
        let node = Expression::new(expr).to_infix();
        assert_eq!(
            node,
            Node::binary(
                Operator::Sub,
                Node::Column(Column::new("a")),
                Node::Column(Column::new("b"))
            )
        );
    }

    #[test]
    fn test_function_arguments_keep_order() {
        let call = math::LOG.call2(Column::new("x"), Column::new("base"));
        let Node::Func { args, .. } = Expression::new(call).to_infix() else {
            panic!("expected function node");
        };
        assert_eq!(
            args,
            vec![Node::Column(Column::new("x")), Node::Column(Column::new("base"))]
        );
    }

    #[test]
    fn test_double_negation_normalizes_to_sum() {
        let a = Column::new("a");
        let folded = Expression::new(a.clone() - -a.clone()).to_infix();
        let plain = Expression::new(a.clone() + a).to_infix();
        assert_eq!(folded, plain);
    }

    #[test]
    fn test_signed_addition_normalizes_to_difference() {
        let (a, b) = (Column::new("a"), Column::new("b"));
        let expected = Expression::new(a.clone() - b.clone()).to_infix();
        assert_eq!(Expression::new(a.clone() + -b.clone()).to_infix(), expected);
        assert_eq!(Expression::new(a - b.pos()).to_infix(), expected);
    }

    #[test]
    fn test_nested_label_is_elided() {
        let inner = Column::new("a").label("inner");
        let outer = (inner + int64(1)).label("outer");
        let node = Expression::new(outer).to_infix();
        let Node::Binary { op: Operator::Assign, left, right } = node else {
            panic!("expected top-level assignment");
        };
        assert_eq!(*left, Node::Alias(Alias::new("outer")));
        let Node::Binary { left: sum_left, .. } = *right else {
            panic!("expected binary value");
        };
        assert_eq!(*sum_left, Node::Alias(Alias::new("inner")));
    }

    #[test]
    fn test_top_level_label_is_kept() {
        let node = Expression::new(Column::new("a").label("x")).to_infix();
        assert_eq!(node.operator(), Some(Operator::Assign));
    }

    #[test]
    fn test_literal_positions() {
        let expression = Expression::new(Column::new("a").eq(int64(1)));
        let Node::Binary { right, .. } = expression.to_infix() else {
            panic!("expected binary node");
        };
        assert!(matches!(*right, Node::Literal { position: 2, .. }));
    }

    #[test]
    #[should_panic(expected = "malformed expression")]
    fn test_malformed_sequence_panics() {
        let expression = Expression {
            tokens: vec![Token {
                symbol: Symbol::Operator { op: Operator::Add, arity: Arity::Binary },
                depth: 0,
            }],
        };
        expression.to_infix();
    }
}
