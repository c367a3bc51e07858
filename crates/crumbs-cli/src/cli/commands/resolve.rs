//! `crumbs resolve <path> --routes <file>` – print the breadcrumb trail.

use anyhow::{Context, Result};
use crumbs_core::breadcrumb::{Breadcrumb, BreadcrumbBuilder, BreadcrumbSettings};
use crumbs_core::config::CrumbsConfig;
use crumbs_core::routing::table::RouteTable;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ResolveArgs {
    pub path: String,
    pub routes: PathBuf,
    pub language: Option<String>,
    pub route_path: Option<String>,
    pub json: bool,
}

pub fn run_resolve(cfg: &CrumbsConfig, args: &ResolveArgs) -> Result<()> {
    let Some(trail) = resolve_trail(cfg, args)? else {
        println!(
            "No breadcrumb for route {}.",
            args.route_path.as_deref().unwrap_or("-")
        );
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trail)?);
    } else {
        print!("{}", format_trail(&trail));
    }
    Ok(())
}

/// Loads the route table and resolves the trail.
///
/// Returns `None` when `--route-path` names a route the builder does not apply to.
pub(crate) fn resolve_trail(
    cfg: &CrumbsConfig,
    args: &ResolveArgs,
) -> Result<Option<Breadcrumb>> {
    let table = Arc::new(
        RouteTable::load(&args.routes)
            .with_context(|| format!("load route table: {}", args.routes.display()))?,
    );
    let builder =
        BreadcrumbBuilder::with_processor(Arc::clone(&table), table, BreadcrumbSettings::from(cfg));

    if let Some(route_path) = &args.route_path {
        if !builder.applies(route_path) {
            tracing::info!("breadcrumb builder does not apply to route {}", route_path);
            return Ok(None);
        }
    }

    let language = args.language.as_deref().unwrap_or(&cfg.default_language);
    let trail = builder
        .resolve(&args.path, language)
        .with_context(|| format!("resolve path: {}", args.path))?;
    Ok(Some(trail))
}

/// One line per entry: position, label, route name and internal path.
pub(crate) fn format_trail(trail: &Breadcrumb) -> String {
    if trail.is_empty() {
        return "No breadcrumb entries.\n".to_string();
    }
    let mut out = format!("{:<4} {:<24} {:<20} {}\n", "#", "LABEL", "ROUTE", "PATH");
    for (i, entry) in trail.entries().iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<24} {:<20} {}\n",
            i + 1,
            entry.label(),
            entry.target().route_name(),
            entry.target().internal_path()
        ));
    }
    out
}
