//! Builder settings: front page, exclusions and presentation toggles.

use std::collections::HashSet;

use crate::config::{normalize_site_path, CrumbsConfig};

/// Conventional user root; never gets a breadcrumb entry.
pub const USER_ROOT: &str = "/user";

/// Paths that never produce an entry. Always holds the front page and
/// [`USER_ROOT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludeSet {
    paths: HashSet<String>,
}

impl ExcludeSet {
    pub fn new(front_page: &str) -> Self {
        let mut paths = HashSet::new();
        paths.insert(front_page.to_string());
        paths.insert(USER_ROOT.to_string());
        Self { paths }
    }

    pub fn insert(&mut self, path: impl Into<String>) {
        self.paths.insert(path.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Excluded paths in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for ExcludeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}

#[derive(Debug, Clone)]
pub struct BreadcrumbSettings {
    pub front_page: String,
    pub exclude: ExcludeSet,
    pub home_label: String,
    /// Route path marker the builder is limited to; `None` applies everywhere.
    pub applies_to: Option<String>,
    pub remove_repeated_segments: bool,
}

impl BreadcrumbSettings {
    pub fn new(front_page: impl Into<String>) -> Self {
        let front_page = front_page.into();
        Self {
            exclude: ExcludeSet::new(&front_page),
            front_page,
            home_label: "Home".to_string(),
            applies_to: None,
            remove_repeated_segments: true,
        }
    }
}

impl From<&CrumbsConfig> for BreadcrumbSettings {
    fn from(cfg: &CrumbsConfig) -> Self {
        let mut settings = Self::new(normalize_site_path(&cfg.front_page));
        settings
            .exclude
            .extend(cfg.exclude_paths.iter().map(|p| normalize_site_path(p)));
        settings.home_label = cfg.home_label.clone();
        settings.applies_to = cfg.applies_to.clone();
        settings.remove_repeated_segments = cfg.remove_repeated_segments;
        settings
    }
}
