//! Repeated-segment removal.

use super::entry::BreadcrumbEntry;

/// Drops every entry that repeats the one right before it.
///
/// Non-adjacent repeats are kept.
pub fn remove_repeated_segments(mut entries: Vec<BreadcrumbEntry>) -> Vec<BreadcrumbEntry> {
    entries.dedup_by(|current, previous| current.is_repeat_of(previous));
    entries
}
