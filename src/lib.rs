//! EdgeQL query builder.
//!
//! Build expression trees from columns, literals and functions, attach them
//! to statements, and render the statement into query text plus a map of
//! bound parameters:
//!
//! ```
//! use edgeql_qb::prelude::*;
//!
//! let user = Entity::new("User");
//! let query = user
//!     .select()
//!     .column(user.col("name"))
//!     .filter(user.col("age").ge(int16(18)))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(query.query, "select User { name } filter .age >= <int16>$filter_0");
//! ```

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub use config::BuilderConfig;
pub use error::{QbError, QbResult};
pub use transpiler::{LiteralIndex, RenderedQuery, ToEdgeQL};

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::BuilderConfig;
    pub use crate::error::*;
    pub use crate::transpiler::{LiteralIndex, RenderedQuery, ToEdgeQL};
}
