use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/crumbs/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrumbsConfig {
    /// Site front page path (e.g. "/node"). Never gets its own entry.
    pub front_page: String,
    /// Extra paths that never produce an entry; "/user" is always excluded.
    #[serde(default)]
    pub exclude_paths: Vec<String>,
    /// Language id used when the caller does not pass one.
    pub default_language: String,
    /// Label of the synthetic home entry.
    #[serde(default = "default_home_label")]
    pub home_label: String,
    /// Only build trails for routes whose path contains this marker.
    #[serde(default)]
    pub applies_to: Option<String>,
    /// Collapse adjacent entries with the same label and target.
    #[serde(default = "default_true")]
    pub remove_repeated_segments: bool,
}

fn default_home_label() -> String {
    "Home".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for CrumbsConfig {
    fn default() -> Self {
        Self {
            front_page: "/node".to_string(),
            exclude_paths: Vec::new(),
            default_language: "en".to_string(),
            home_label: default_home_label(),
            applies_to: None,
            remove_repeated_segments: true,
        }
    }
}

/// Brings a configured path to the form prefixes are compared in:
/// one leading slash, no trailing slash.
pub fn normalize_site_path(path: &str) -> String {
    format!("/{}", path.trim().trim_matches('/'))
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("crumbs")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CrumbsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CrumbsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<CrumbsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: CrumbsConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = CrumbsConfig::default();
        assert_eq!(cfg.front_page, "/node");
        assert!(cfg.exclude_paths.is_empty());
        assert_eq!(cfg.default_language, "en");
        assert_eq!(cfg.home_label, "Home");
        assert!(cfg.applies_to.is_none());
        assert!(cfg.remove_repeated_segments);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = CrumbsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: CrumbsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.front_page, cfg.front_page);
        assert_eq!(parsed.default_language, cfg.default_language);
        assert_eq!(parsed.home_label, cfg.home_label);
    }

    #[test]
    fn config_toml_minimal_uses_defaults() {
        let toml = r#"
            front_page = "/home"
            default_language = "de"
        "#;
        let cfg: CrumbsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.front_page, "/home");
        assert_eq!(cfg.default_language, "de");
        assert_eq!(cfg.home_label, "Home");
        assert!(cfg.exclude_paths.is_empty());
        assert!(cfg.remove_repeated_segments);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            front_page = "/node/1"
            exclude_paths = ["/search", "/admin"]
            default_language = "fr"
            home_label = "Accueil"
            applies_to = "newsletter"
            remove_repeated_segments = false
        "#;
        let cfg: CrumbsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.exclude_paths, vec!["/search", "/admin"]);
        assert_eq!(cfg.home_label, "Accueil");
        assert_eq!(cfg.applies_to.as_deref(), Some("newsletter"));
        assert!(!cfg.remove_repeated_segments);
    }

    #[test]
    fn normalize_site_path_forms() {
        assert_eq!(normalize_site_path("/node"), "/node");
        assert_eq!(normalize_site_path("node/"), "/node");
        assert_eq!(normalize_site_path(" /node/1/ "), "/node/1");
        assert_eq!(normalize_site_path("/"), "/");
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"front_page = \"/start\"\ndefault_language = \"en\"\n")
            .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.front_page, "/start");
    }

    #[test]
    fn load_from_bad_file_has_context() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"front_page = 3\n").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parse config file"));
    }
}
