//! Static route table: a small reference router loaded from TOML.
//!
//! Routes are tried in declaration order and the first pattern that fits
//! decides the outcome. Aliases map public paths onto internal ones and are
//! applied by [`PathProcessor::process_inbound`].

mod error;
mod parse;
mod pattern;

pub use error::TableError;
pub use parse::RouteAccess;

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::{MatchFailureKind, MatchOutcome, PathProcessor, ResolvedRoute, RouteMatcher};
use parse::{RouteDef, TableFile};
use pattern::PathPattern;

#[derive(Debug)]
struct CompiledRoute {
    name: String,
    pattern: PathPattern,
    title: Option<String>,
    access: RouteAccess,
    methods: Option<Vec<String>>,
    requirements: Vec<(String, Regex)>,
}

impl CompiledRoute {
    fn compile(def: RouteDef) -> Result<Self, TableError> {
        let pattern = PathPattern::parse(&def.name, &def.path)?;
        let params: HashSet<&str> = pattern.params().collect();

        let mut requirements = Vec::with_capacity(def.requirements.len());
        for (param, expr) in def.requirements {
            if !params.contains(param.as_str()) {
                return Err(TableError::UnknownRequirementParam {
                    route: def.name.clone(),
                    param,
                });
            }
            let re = Regex::new(&expr).map_err(|source| TableError::InvalidRequirement {
                route: def.name.clone(),
                param: param.clone(),
                source,
            })?;
            requirements.push((param, re));
        }

        Ok(Self {
            name: def.name,
            pattern,
            title: def.title,
            access: def.access,
            methods: def.methods,
            requirements,
        })
    }

    fn accepts_get(&self) -> bool {
        self.methods
            .as_ref()
            .map_or(true, |m| m.iter().any(|x| x.eq_ignore_ascii_case("GET")))
    }
}

/// Route table implementing both [`RouteMatcher`] and [`PathProcessor`].
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<CompiledRoute>,
    aliases: HashMap<String, String>,
}

impl RouteTable {
    /// Reads and validates a route table file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let data = std::fs::read_to_string(path).map_err(|source| TableError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_toml_str(&data)?;
        tracing::debug!(
            "loaded route table {} ({} routes, {} aliases)",
            path.display(),
            table.route_count(),
            table.alias_count()
        );
        Ok(table)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, TableError> {
        let file: TableFile = toml::from_str(data)?;

        let mut names = HashSet::new();
        let mut routes = Vec::with_capacity(file.routes.len());
        for def in file.routes {
            if !names.insert(def.name.clone()) {
                return Err(TableError::DuplicateRoute(def.name));
            }
            routes.push(CompiledRoute::compile(def)?);
        }

        let mut aliases = HashMap::new();
        for def in file.aliases {
            if !def.alias.starts_with('/') || !def.path.starts_with('/') {
                return Err(TableError::InvalidAlias { alias: def.alias });
            }
            let key = normalize(&def.alias);
            if aliases.insert(key, normalize(&def.path)).is_some() {
                return Err(TableError::DuplicateAlias(def.alias));
            }
        }

        Ok(Self { routes, aliases })
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn alias_count(&self) -> usize {
        self.aliases.len()
    }
}

impl RouteMatcher for RouteTable {
    fn match_path(&self, path: &str) -> MatchOutcome {
        let internal = normalize(path);
        let trimmed = internal.trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        let (route, captures) = self
            .routes
            .iter()
            .find_map(|r| r.pattern.captures(&segments).map(|c| (r, c)))
            .ok_or(MatchFailureKind::NotFound)?;

        for (param, re) in &route.requirements {
            let value = captures
                .iter()
                .find(|(name, _)| *name == param.as_str())
                .map(|(_, v)| *v)
                .unwrap_or_default();
            if !re.is_match(value) {
                return Err(MatchFailureKind::ParamInvalid.into());
            }
        }
        if !route.accepts_get() {
            return Err(MatchFailureKind::MethodNotAllowed.into());
        }
        if route.access == RouteAccess::Denied {
            return Err(MatchFailureKind::AccessDenied.into());
        }

        let mut resolved = ResolvedRoute::new(route.name.as_str(), internal.as_str())
            .with_access(route.access == RouteAccess::Allowed);
        if let Some(title) = &route.title {
            resolved = resolved.with_title(fill_placeholders(title, &captures));
        }
        Ok(resolved)
    }
}

impl PathProcessor for RouteTable {
    fn process_inbound(&self, path: &str) -> String {
        let key = normalize(path);
        match self.aliases.get(&key) {
            Some(target) => target.clone(),
            None => key,
        }
    }
}

/// Leading slash, no trailing slash; the root stays `/`.
fn normalize(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

fn fill_placeholders(title: &str, captures: &[(&str, &str)]) -> String {
    captures
        .iter()
        .fold(title.to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

#[cfg(test)]
mod tests;
