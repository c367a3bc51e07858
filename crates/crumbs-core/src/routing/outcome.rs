//! Result of asking a [`RouteMatcher`](super::RouteMatcher) about one path.

use std::fmt;

/// A route the matcher found for a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    route_name: String,
    internal_path: String,
    title: Option<String>,
    access_allowed: bool,
}

impl ResolvedRoute {
    pub fn new(route_name: impl Into<String>, internal_path: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            internal_path: internal_path.into(),
            title: None,
            access_allowed: true,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_access(mut self, allowed: bool) -> Self {
        self.access_allowed = allowed;
        self
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// Router-internal path; two routes with the same internal path point at
    /// the same place.
    pub fn internal_path(&self) -> &str {
        &self.internal_path
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_access_allowed(&self) -> bool {
        self.access_allowed
    }
}

/// Why a path produced no route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchFailureKind {
    NotFound,
    /// A path parameter could not be converted or failed its requirement.
    ParamInvalid,
    MethodNotAllowed,
    AccessDenied,
}

impl fmt::Display for MatchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchFailureKind::NotFound => "not found",
            MatchFailureKind::ParamInvalid => "parameter not converted",
            MatchFailureKind::MethodNotAllowed => "method not allowed",
            MatchFailureKind::AccessDenied => "access denied",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
    pub kind: MatchFailureKind,
}

impl MatchFailure {
    pub fn new(kind: MatchFailureKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route match failed: {}", self.kind)
    }
}

impl std::error::Error for MatchFailure {}

impl From<MatchFailureKind> for MatchFailure {
    fn from(kind: MatchFailureKind) -> Self {
        Self::new(kind)
    }
}

/// Either a resolved route or the reason there is none.
pub type MatchOutcome = Result<ResolvedRoute, MatchFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_route_defaults() {
        let r = ResolvedRoute::new("blog.index", "/blog");
        assert_eq!(r.route_name(), "blog.index");
        assert_eq!(r.internal_path(), "/blog");
        assert_eq!(r.title(), None);
        assert!(r.is_access_allowed());
    }

    #[test]
    fn resolved_route_builders() {
        let r = ResolvedRoute::new("x", "/x")
            .with_title("X")
            .with_access(false);
        assert_eq!(r.title(), Some("X"));
        assert!(!r.is_access_allowed());
    }

    #[test]
    fn failure_display() {
        let f = MatchFailure::from(MatchFailureKind::MethodNotAllowed);
        assert_eq!(f.to_string(), "route match failed: method not allowed");
    }
}
