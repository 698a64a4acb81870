//! CLI command handlers.

mod compare;
mod get;
mod normalize;

pub use compare::run_compare;
pub use get::run_get;
pub use normalize::run_normalize;
