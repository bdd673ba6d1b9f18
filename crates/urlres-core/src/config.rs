use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/urlres/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole HEAD request.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header; libcurl sends none when unset.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ResolverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ResolverConfig::default();
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
pub fn load_from(path: &Path) -> Result<ResolverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: ResolverConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = ResolverConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ResolverConfig {
            user_agent: Some("urlres/0.1".to_string()),
            ..ResolverConfig::default()
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ResolverConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_without_user_agent() {
        let toml = r#"
            connect_timeout_secs = 5
            timeout_secs = 10
        "#;
        let cfg: ResolverConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.timeout_secs, 10);
        assert!(cfg.user_agent.is_none());
    }

    #[test]
    fn load_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(
            f,
            "connect_timeout_secs = 2\ntimeout_secs = 4\nuser_agent = \"probe\""
        )
        .unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 2);
        assert_eq!(cfg.timeout_secs, 4);
        assert_eq!(cfg.user_agent.as_deref(), Some("probe"));
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "timeout_secs = \"soon\"").unwrap();
        f.flush().unwrap();
        let err = load_from(f.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
