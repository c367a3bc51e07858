//! Routing collaborator interface.
//!
//! The breadcrumb builder never matches routes itself. It depends only on the
//! traits here; hosts plug in their own router, and [`table::RouteTable`] is a
//! small static implementation used by the CLI and tests.

mod outcome;
pub mod table;

pub use outcome::{MatchFailure, MatchFailureKind, MatchOutcome, ResolvedRoute};

use std::sync::Arc;

/// Matches an internal path against the host's routes.
///
/// Implementations are shared read-only across concurrent requests.
pub trait RouteMatcher: Send + Sync {
    fn match_path(&self, path: &str) -> MatchOutcome;
}

/// Turns an inbound request path into the router's internal path
/// (alias lookup, language prefix stripping and the like).
///
/// An empty result means the path resolves to nothing usable.
pub trait PathProcessor: Send + Sync {
    fn process_inbound(&self, path: &str) -> String;
}

/// Processor that leaves every path unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProcessor;

impl PathProcessor for IdentityProcessor {
    fn process_inbound(&self, path: &str) -> String {
        path.to_string()
    }
}

impl<T: RouteMatcher + ?Sized> RouteMatcher for &T {
    fn match_path(&self, path: &str) -> MatchOutcome {
        (**self).match_path(path)
    }
}

impl<T: PathProcessor + ?Sized> PathProcessor for &T {
    fn process_inbound(&self, path: &str) -> String {
        (**self).process_inbound(path)
    }
}

impl<T: RouteMatcher + ?Sized> RouteMatcher for Arc<T> {
    fn match_path(&self, path: &str) -> MatchOutcome {
        (**self).match_path(path)
    }
}

impl<T: PathProcessor + ?Sized> PathProcessor for Arc<T> {
    fn process_inbound(&self, path: &str) -> String {
        (**self).process_inbound(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_processor_passes_through() {
        assert_eq!(IdentityProcessor.process_inbound("/blog/x"), "/blog/x");
        assert_eq!(IdentityProcessor.process_inbound(""), "");
    }
}
