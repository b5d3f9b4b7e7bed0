use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct FintrackConfig {
    pub ledger: LedgerSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LedgerSection {
    pub path: String,
}

impl FintrackConfig {
    pub fn new(ledger_path: PathBuf) -> Self {
        Self {
            ledger: LedgerSection {
                path: ledger_path.to_string_lossy().to_string(),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_ledger_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("finance_data.csv"))
}

pub fn read_config(path: &Path) -> anyhow::Result<FintrackConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &FintrackConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".config").join("fintrack"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("fintrack"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("fintrack"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [ledger]
            path = "/tmp/finance_data.csv"
        "#;
        let config: FintrackConfig = toml::from_str(toml).expect("parse config");
        assert_eq!(config.ledger.path, "/tmp/finance_data.csv");
    }

    #[test]
    fn test_config_round_trip() {
        let config = FintrackConfig::new(PathBuf::from("/tmp/finance_data.csv"));
        let contents = toml::to_string_pretty(&config).expect("serialize config");
        let back: FintrackConfig = toml::from_str(&contents).expect("parse config");
        assert_eq!(back.ledger.path, "/tmp/finance_data.csv");
    }

    #[test]
    fn test_xdg_paths_use_env() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("XDG_CONFIG_HOME", "/tmp/fintrack-config-test");
        std::env::set_var("XDG_DATA_HOME", "/tmp/fintrack-data-test");

        let config_dir = xdg_config_dir().expect("config dir");
        let data_dir = xdg_data_dir().expect("data dir");

        assert_eq!(
            config_dir,
            PathBuf::from("/tmp/fintrack-config-test").join("fintrack")
        );
        assert_eq!(
            data_dir,
            PathBuf::from("/tmp/fintrack-data-test").join("fintrack")
        );
    }
}
