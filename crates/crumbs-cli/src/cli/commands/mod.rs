//! CLI command handlers, one per file.

mod check_routes;
mod resolve;
mod show_config;

pub use check_routes::run_check_routes;
pub use resolve::{run_resolve, ResolveArgs};
pub use show_config::run_show_config;
