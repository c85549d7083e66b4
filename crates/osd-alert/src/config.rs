use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AlertError, AlertResult};

/// Identity the alert facade stamps on this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Id of the node this process runs on.
    pub node_id: String,
    /// Id of the cluster the node belongs to.
    pub cluster_id: String,
    /// Software version.
    pub version: String,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            node_id: String::from("localhost"),
            cluster_id: String::from("default"),
            version: String::from(env!("CARGO_PKG_VERSION")),
            log_filter: String::from("info"),
        }
    }
}

impl AlertConfig {
    /// Loads a `.toml` or `.json` config file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match ext.to_lowercase().as_str() {
            "toml" => {
                let config: AlertConfig = toml::from_str(&contents)?;
                Ok(config)
            }
            "json" => {
                let config: AlertConfig = serde_json::from_str(&contents)?;
                Ok(config)
            }
            _ => anyhow::bail!("Unsupported config file extension: {}", ext),
        }
    }

    /// Rejects an empty node or cluster id.
    pub fn validate(&self) -> AlertResult<()> {
        if self.node_id.trim().is_empty() {
            return Err(AlertError::Config("node_id must not be empty".to_string()));
        }
        if self.cluster_id.trim().is_empty() {
            return Err(AlertError::Config(
                "cluster_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
