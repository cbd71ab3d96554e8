//! Database configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DbError, DbResult};

/// Database configuration, loadable from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Directory holding the database file.
    pub path: PathBuf,

    /// Pool size. SQLite is single-writer; readers can parallelize.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

impl DatabaseConfig {
    /// Path to the conference database file.
    pub fn conference_db(&self) -> PathBuf {
        self.path.join("conference.db")
    }

    /// Load configuration from a TOML file.
    pub async fn load_from_file(path: &Path) -> DbResult<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DbError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| DbError::config(format!("invalid config {}: {e}", path.display())))
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            max_connections: default_max_connections(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("database.toml");
        tokio::fs::write(&path, "path = \"/var/lib/conference\"\n")
            .await
            .unwrap();

        let config = DatabaseConfig::load_from_file(&path).await.unwrap();
        assert_eq!(config.path, PathBuf::from("/var/lib/conference"));
        assert_eq!(config.max_connections, 5);
        assert!(config.conference_db().ends_with("conference.db"));
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let err = DatabaseConfig::load_from_file(Path::new("/no/such/file.toml"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Config { .. }));
    }
}
