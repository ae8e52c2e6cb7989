use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::store::Store;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log level used when `RUST_LOG` is unset, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      level: default_log_level(),
    }
  }
}

/// memkv configuration
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,

  /// Entries loaded into the store at startup
  #[serde(default)]
  pub data: BTreeMap<String, String>,
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path)
      .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;

    let config: Config = toml::from_str(&config_str)
      .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;

    Ok(config)
  }

  /// Load the seed entries into `store`
  pub fn seed(&self, store: &Store) {
    store.extend(self.data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_parse_config() {
    let config_str = r#"
[log]
level = "debug"

[data]
"/app/db/host" = "127.0.0.1"
"/app/db/port" = "5432"
"#;

    let config: Config = toml::from_str(config_str).unwrap();
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.data.len(), 2);
    assert_eq!(config.data["/app/db/host"], "127.0.0.1");
  }

  #[test]
  fn test_default_config() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.log.level, "info");
    assert!(config.data.is_empty());
  }

  #[test]
  fn test_seed_store() {
    let config: Config = toml::from_str(
      r#"
[data]
"/app/db/host" = "127.0.0.1"
"/app/cache/ttl" = "60"
"#,
    )
    .unwrap();

    let store = Store::new();
    config.seed(&store);
    assert_eq!(store.get_value("/app/db/host").unwrap(), "127.0.0.1");
    assert_eq!(store.list("/app"), vec!["cache", "db"]);
  }

  #[test]
  fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[log]\nlevel = \"warn\"").unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.log.level, "warn");
  }

  #[test]
  fn test_from_file_errors_name_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = Config::from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
    assert!(err.to_string().contains("missing.toml"));

    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[log\nlevel =").unwrap();
    let err = Config::from_file(&bad).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
  }
}
