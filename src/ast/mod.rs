//! Query AST: expression nodes, their normalized form and statement builders.

pub mod cmd;
pub mod column;
pub mod expr;
pub mod expression;
pub mod functions;
pub mod node;
pub mod operators;
pub mod shape;
pub mod values;

pub use cmd::{
    ConflictFallback, ConflictTarget, CountQuery, DEFAULT_SCHEMA, DeleteQuery, Entity, GroupQuery, InsertQuery,
    SelectQuery, SubQuery, UnlessConflict, UpdateQuery,
};
pub use column::{Alias, Column, RawText};
pub use expr::{Expr, Operand};
pub use expression::Expression;
pub use functions::{FuncInvocation, Function, cal, math, stdlib, sys};
pub use node::Node;
pub use operators::{Operator, SortOrder};
pub use shape::{Pagination, Shape, ShapeItem};
pub use values::{Number, ScalarType, TypedValue, Value, bigint, float32, float64, int16, int32, int64};
