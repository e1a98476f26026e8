//! Statement rendering tests.

mod group;
mod mutations;
