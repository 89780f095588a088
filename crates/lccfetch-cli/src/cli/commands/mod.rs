//! CLI command handlers.

mod fetch;
mod plan;

pub use fetch::run_fetch;
pub use plan::run_plan;
