//! Request path normalization and prefix walking.
//!
//! A raw request path (`/blog/2024/post-title/`, possibly percent-encoded) is
//! trimmed of surrounding slashes, decoded and split on `/`. The breadcrumb
//! builder then walks its prefixes from the most specific to the least.

mod error;

pub use error::PathError;

use percent_encoding::percent_decode_str;

/// A decoded request path split into segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPath {
    /// Decoded path without leading or trailing slashes (`blog/2024`).
    normalized: String,
    segments: Vec<String>,
}

impl RequestPath {
    /// Normalizes a raw request path.
    ///
    /// Query string and fragment are dropped, surrounding slashes trimmed,
    /// then the remainder is percent-decoded. `+` is kept literally since it
    /// carries no special meaning in a path.
    pub fn parse(raw: &str) -> Result<Self, PathError> {
        let path = raw.split(['?', '#']).next().unwrap_or(raw);
        let trimmed = path.trim_matches('/');
        let decoded = percent_decode_str(trimmed)
            .decode_utf8()
            .map_err(|_| PathError::Undecodable {
                raw: raw.to_string(),
            })?
            .into_owned();

        let segments = if decoded.is_empty() {
            Vec::new()
        } else {
            decoded.split('/').map(str::to_string).collect()
        };

        Ok(Self {
            normalized: decoded,
            segments,
        })
    }

    /// Decoded path without surrounding slashes; empty for the site root.
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The same path with a single leading slash (`/blog/2024`), or `/` for root.
    pub fn to_absolute(&self) -> String {
        format!("/{}", self.normalized)
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Prefixes from the full path down to the first segment.
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes {
            segments: &self.segments,
            len: self.segments.len(),
        }
    }
}

/// One step of the prefix walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrefix<'a> {
    /// Reassembled prefix with a leading slash.
    pub path: String,
    /// Last raw segment of this prefix, used for fallback labels.
    pub last_segment: &'a str,
}

/// Iterator over [`PathPrefix`] values, longest first.
#[derive(Debug, Clone)]
pub struct Prefixes<'a> {
    segments: &'a [String],
    len: usize,
}

impl<'a> Iterator for Prefixes<'a> {
    type Item = PathPrefix<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let current = &self.segments[..self.len];
        self.len -= 1;
        Some(PathPrefix {
            path: format!("/{}", current.join("/")),
            last_segment: current[current.len() - 1].as_str(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl ExactSizeIterator for Prefixes<'_> {}
