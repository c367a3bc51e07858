//! Breadcrumb entries and their targets.

use serde::Serialize;

use crate::routing::ResolvedRoute;

/// Route name used for the synthetic home entry.
pub const FRONT_ROUTE: &str = "<front>";

/// Cache context a host should vary a cached trail by.
pub const CACHE_CONTEXT: &str = "url.path";

/// Where a breadcrumb entry links to.
///
/// Two references point at the same place when their internal paths are equal,
/// whatever the route names say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteReference {
    route_name: String,
    internal_path: String,
}

impl RouteReference {
    pub fn new(route_name: impl Into<String>, internal_path: impl Into<String>) -> Self {
        Self {
            route_name: route_name.into(),
            internal_path: internal_path.into(),
        }
    }

    pub fn front(front_page: &str) -> Self {
        Self::new(FRONT_ROUTE, front_page)
    }

    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    pub fn internal_path(&self) -> &str {
        &self.internal_path
    }

    pub fn same_target(&self, other: &RouteReference) -> bool {
        self.internal_path == other.internal_path
    }
}

impl From<&ResolvedRoute> for RouteReference {
    fn from(route: &ResolvedRoute) -> Self {
        Self::new(route.route_name(), route.internal_path())
    }
}

/// One link of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    label: String,
    target: RouteReference,
}

impl BreadcrumbEntry {
    pub fn new(label: impl Into<String>, target: RouteReference) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn target(&self) -> &RouteReference {
        &self.target
    }

    /// Same label and same target; adjacent repeats get collapsed.
    pub fn is_repeat_of(&self, other: &BreadcrumbEntry) -> bool {
        self.label == other.label && self.target.same_target(&other.target)
    }
}

/// A finished trail, root-most entry first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    entries: Vec<BreadcrumbEntry>,
    cache_contexts: Vec<&'static str>,
}

impl Breadcrumb {
    pub(crate) fn new(entries: Vec<BreadcrumbEntry>) -> Self {
        Self {
            entries,
            cache_contexts: vec![CACHE_CONTEXT],
        }
    }

    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<BreadcrumbEntry> {
        self.entries
    }

    pub fn cache_contexts(&self) -> &[&'static str] {
        &self.cache_contexts
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in order, handy for display and assertions.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(BreadcrumbEntry::label).collect()
    }
}

impl IntoIterator for Breadcrumb {
    type Item = BreadcrumbEntry;
    type IntoIter = std::vec::IntoIter<BreadcrumbEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
