//! App configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults suitable for a local single-store deployment.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use almacen_core::DEFAULT_LOW_STOCK_THRESHOLD;

/// App configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Directory report artifacts are written into (created on demand).
    pub reports_dir: PathBuf,

    /// Low-stock alert threshold.
    pub low_stock_threshold: i64,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable                      | Default          |
    /// |-------------------------------|------------------|
    /// | `ALMACEN_DATABASE_PATH`       | `inventario.db`  |
    /// | `ALMACEN_REPORTS_DIR`         | `reportes`       |
    /// | `ALMACEN_LOW_STOCK_THRESHOLD` | `5`              |
    pub fn load() -> Result<Self, ConfigError> {
        let config = AppConfig {
            database_path: env::var("ALMACEN_DATABASE_PATH")
                .unwrap_or_else(|_| "inventario.db".to_string())
                .into(),

            reports_dir: env::var("ALMACEN_REPORTS_DIR")
                .unwrap_or_else(|_| "reportes".to_string())
                .into(),

            low_stock_threshold: env::var("ALMACEN_LOW_STOCK_THRESHOLD")
                .unwrap_or_else(|_| DEFAULT_LOW_STOCK_THRESHOLD.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("ALMACEN_LOW_STOCK_THRESHOLD".to_string()))?,
        };

        if config.low_stock_threshold < 0 {
            return Err(ConfigError::InvalidValue(
                "ALMACEN_LOW_STOCK_THRESHOLD".to_string(),
            ));
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from("inventario.db"),
            reports_dir: PathBuf::from("reportes"),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.database_path, PathBuf::from("inventario.db"));
        assert_eq!(config.reports_dir, PathBuf::from("reportes"));
        assert_eq!(config.low_stock_threshold, 5);
    }
}
