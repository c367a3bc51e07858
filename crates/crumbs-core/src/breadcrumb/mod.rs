//! Breadcrumb trail resolution.
//!
//! [`BreadcrumbBuilder`] walks the request path from the most specific
//! prefix to the least, re-matches each prefix through the routing traits,
//! adds a home link and collapses adjacent repeats.

mod builder;
mod dedup;
mod entry;
mod label;
mod settings;

pub use builder::BreadcrumbBuilder;
pub use dedup::remove_repeated_segments;
pub use entry::{Breadcrumb, BreadcrumbEntry, RouteReference, CACHE_CONTEXT, FRONT_ROUTE};
pub use label::fallback_label;
pub use settings::{BreadcrumbSettings, ExcludeSet, USER_ROOT};
