//! CLI for resolving breadcrumb trails.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use crumbs_core::config;
use std::path::PathBuf;

use commands::{run_check_routes, run_resolve, run_show_config, ResolveArgs};

/// Top-level CLI for crumbs.
#[derive(Debug, Parser)]
#[command(name = "crumbs")]
#[command(about = "crumbs: path-based breadcrumb resolution", long_about = None)]
pub struct Cli {
    /// Use this config file instead of the XDG default.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve the breadcrumb trail for a request path.
    Resolve {
        /// Request path, e.g. /blog/2024/post-title.
        path: String,

        /// Route table (TOML) to match prefixes against.
        #[arg(long, value_name = "FILE")]
        routes: PathBuf,

        /// Current language id; defaults to `default_language` from config.
        #[arg(long, value_name = "ID")]
        language: Option<String>,

        /// Path of the matched route; skips resolution when the builder does not apply to it.
        #[arg(long, value_name = "ROUTE_PATH")]
        route_path: Option<String>,

        /// Print the trail as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a route table file.
    CheckRoutes {
        /// Path to the route table.
        path: PathBuf,
    },

    /// Show the config file location and effective values.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve {
                path,
                routes,
                language,
                route_path,
                json,
            } => run_resolve(
                &cfg,
                &ResolveArgs {
                    path,
                    routes,
                    language,
                    route_path,
                    json,
                },
            )?,
            CliCommand::CheckRoutes { path } => run_check_routes(&path)?,
            CliCommand::Config => run_show_config(&cfg, cli.config.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
