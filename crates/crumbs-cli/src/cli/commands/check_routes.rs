//! `crumbs check-routes <path>` – validate a route table.

use anyhow::{Context, Result};
use crumbs_core::routing::table::RouteTable;
use std::path::Path;

pub fn run_check_routes(path: &Path) -> Result<()> {
    let table = RouteTable::load(path)
        .with_context(|| format!("invalid route table: {}", path.display()))?;
    println!(
        "{}: {} routes, {} aliases",
        path.display(),
        table.route_count(),
        table.alias_count()
    );
    Ok(())
}
