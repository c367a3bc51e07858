//! Serde model of the route table TOML file.

use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TableFile {
    #[serde(default)]
    pub routes: Vec<RouteDef>,
    #[serde(default)]
    pub aliases: Vec<AliasDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RouteDef {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub access: RouteAccess,
    /// Allowed methods; `None` accepts any.
    #[serde(default)]
    pub methods: Option<Vec<String>>,
    /// Regex per placeholder name.
    #[serde(default)]
    pub requirements: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AliasDef {
    pub alias: String,
    pub path: String,
}

/// How the current visitor may reach a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccess {
    #[default]
    Allowed,
    /// Route matches but the access check says no.
    Forbidden,
    /// The router itself refuses the match.
    Denied,
}
