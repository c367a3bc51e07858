//! Path-based breadcrumb builder.

use crate::path::{PathError, PathPrefix, RequestPath};
use crate::routing::{IdentityProcessor, PathProcessor, RouteMatcher};

use super::dedup::remove_repeated_segments;
use super::entry::{Breadcrumb, BreadcrumbEntry, RouteReference};
use super::label::fallback_label;
use super::settings::{BreadcrumbSettings, ExcludeSet};

/// Builds a breadcrumb trail from the request path alone.
///
/// Every prefix of the path is re-matched against the router, so a trail can
/// be shaped simply by arranging a hierarchy of paths (or aliases). The
/// builder keeps no per-request state and can be shared across threads.
#[derive(Debug)]
pub struct BreadcrumbBuilder<M, P = IdentityProcessor> {
    matcher: M,
    processor: P,
    settings: BreadcrumbSettings,
}

impl<M: RouteMatcher> BreadcrumbBuilder<M> {
    pub fn new(matcher: M, settings: BreadcrumbSettings) -> Self {
        Self::with_processor(matcher, IdentityProcessor, settings)
    }
}

impl<M: RouteMatcher, P: PathProcessor> BreadcrumbBuilder<M, P> {
    pub fn with_processor(matcher: M, processor: P, settings: BreadcrumbSettings) -> Self {
        Self {
            matcher,
            processor,
            settings,
        }
    }

    pub fn settings(&self) -> &BreadcrumbSettings {
        &self.settings
    }

    /// Whether this builder handles the route at `route_path`.
    pub fn applies(&self, route_path: &str) -> bool {
        match &self.settings.applies_to {
            Some(marker) => route_path.contains(marker.as_str()),
            None => true,
        }
    }

    /// Resolves `path` using the configured front page and exclusions.
    pub fn resolve(&self, path: &str, language: &str) -> Result<Breadcrumb, PathError> {
        self.resolve_with(
            path,
            &self.settings.exclude,
            &self.settings.front_page,
            language,
        )
    }

    /// Resolves `path` against an explicit exclude set and front page.
    ///
    /// Fails only when `path` cannot be decoded. Prefixes that do not match,
    /// are excluded or are not accessible are left out of the trail.
    ///
    /// Empty interior segments (`/blog//x`) are walked like any other; if the
    /// router matches such a prefix without a title, its label is empty.
    pub fn resolve_with(
        &self,
        path: &str,
        exclude: &ExcludeSet,
        front_page: &str,
        language: &str,
    ) -> Result<Breadcrumb, PathError> {
        let request = RequestPath::parse(path)?;

        let mut entries: Vec<BreadcrumbEntry> = request
            .prefixes()
            .filter_map(|prefix| self.entry_for(&prefix, exclude))
            .collect();

        if wants_home_link(&request, front_page, language) {
            entries.push(BreadcrumbEntry::new(
                self.settings.home_label.as_str(),
                RouteReference::front(front_page),
            ));
        }

        entries.reverse();
        if self.settings.remove_repeated_segments {
            entries = remove_repeated_segments(entries);
        }

        tracing::debug!(
            "breadcrumb for {:?}: {} entries",
            request.as_str(),
            entries.len()
        );
        Ok(Breadcrumb::new(entries))
    }

    fn entry_for(&self, prefix: &PathPrefix<'_>, exclude: &ExcludeSet) -> Option<BreadcrumbEntry> {
        if exclude.contains(&prefix.path) {
            return None;
        }

        let internal = self.processor.process_inbound(&prefix.path);
        if internal.is_empty() || exclude.contains(&internal) {
            tracing::trace!("prefix {} resolves to excluded path {:?}", prefix.path, internal);
            return None;
        }

        let route = match self.matcher.match_path(&internal) {
            Ok(route) => route,
            Err(failure) => {
                tracing::debug!("prefix {} skipped: {}", prefix.path, failure.kind);
                return None;
            }
        };
        if !route.is_access_allowed() {
            tracing::debug!("prefix {} skipped: access not allowed", prefix.path);
            return None;
        }

        let label = match route.title() {
            Some(title) => title.to_string(),
            None => fallback_label(prefix.last_segment),
        };
        Some(BreadcrumbEntry::new(label, RouteReference::from(&route)))
    }
}

/// No home link on the front page itself, on the bare site root, or on a
/// bare language prefix like `/en`.
fn wants_home_link(request: &RequestPath, front_page: &str, language: &str) -> bool {
    !request.is_empty() && request.to_absolute() != front_page && request.as_str() != language
}
