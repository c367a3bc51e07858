//! `crumbs config` – show where config lives and what it resolves to.

use anyhow::Result;
use crumbs_core::config::{self, CrumbsConfig};
use std::path::Path;

pub fn run_show_config(cfg: &CrumbsConfig, explicit: Option<&Path>) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("config file:              {}", path.display());
    println!("front_page:               {}", cfg.front_page);
    println!("exclude_paths:            {:?}", cfg.exclude_paths);
    println!("default_language:         {}", cfg.default_language);
    println!("home_label:               {}", cfg.home_label);
    println!(
        "applies_to:               {}",
        cfg.applies_to.as_deref().unwrap_or("-")
    );
    println!("remove_repeated_segments: {}", cfg.remove_repeated_segments);
    Ok(())
}
