//! Route table loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("read route table {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse route table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("route {route:?}: path {path:?} must start with '/'")]
    InvalidPath { route: String, path: String },

    #[error("route {route:?}: malformed placeholder segment {segment:?}")]
    MalformedPlaceholder { route: String, segment: String },

    #[error("duplicate route name {0:?}")]
    DuplicateRoute(String),

    #[error("alias {alias:?}: both alias and target must start with '/'")]
    InvalidAlias { alias: String },

    #[error("duplicate alias {0:?}")]
    DuplicateAlias(String),

    #[error("route {route:?}: requirement for {param:?} is not a valid regex")]
    InvalidRequirement {
        route: String,
        param: String,
        #[source]
        source: regex::Error,
    },

    #[error("route {route:?}: requirement names unknown parameter {param:?}")]
    UnknownRequirementParam { route: String, param: String },
}
