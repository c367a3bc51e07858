//! Route path patterns: literal segments and `{name}` placeholders.

use super::error::TableError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone)]
pub(crate) struct PathPattern {
    segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub(crate) fn parse(route: &str, raw: &str) -> Result<Self, TableError> {
        if !raw.starts_with('/') {
            return Err(TableError::InvalidPath {
                route: route.to_string(),
                path: raw.to_string(),
            });
        }

        let trimmed = raw.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self {
                segments: Vec::new(),
            });
        }

        let segments = trimmed
            .split('/')
            .map(|seg| parse_segment(route, seg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// Placeholder names in declaration order.
    pub(crate) fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            PatternSegment::Param(name) => Some(name.as_str()),
            PatternSegment::Literal(_) => None,
        })
    }

    /// Returns the placeholder captures if `path` (already split) fits.
    pub(crate) fn captures<'p>(&'p self, path: &[&'p str]) -> Option<Vec<(&'p str, &'p str)>> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut captures = Vec::new();
        for (pattern, actual) in self.segments.iter().zip(path) {
            match pattern {
                PatternSegment::Literal(lit) if lit == actual => {}
                PatternSegment::Literal(_) => return None,
                PatternSegment::Param(name) => captures.push((name.as_str(), *actual)),
            }
        }
        Some(captures)
    }
}

fn parse_segment(route: &str, seg: &str) -> Result<PatternSegment, TableError> {
    let malformed = || TableError::MalformedPlaceholder {
        route: route.to_string(),
        segment: seg.to_string(),
    };

    if let Some(inner) = seg.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        let valid = !inner.is_empty()
            && inner
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        return if valid {
            Ok(PatternSegment::Param(inner.to_string()))
        } else {
            Err(malformed())
        };
    }
    if seg.contains(['{', '}']) {
        return Err(malformed());
    }
    Ok(PatternSegment::Literal(seg.to_string()))
}
