pub mod config;
pub mod logging;

pub mod breadcrumb;
pub mod path;
pub mod routing;
