//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings supplied by the harness at construction time
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Board side length
    pub board_size: usize,
    /// Fixed search depth for the depth-bounded engine
    pub depth: u32,
    /// Per-turn time budget for the iterative engine, if any
    pub time_budget_ms: Option<u64>,
    /// Seed for baseline players and match fan-out
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 11,
            depth: 3,
            time_budget_ms: Some(1000),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Fail fast on settings no engine can run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.board_size == 0 {
            anyhow::bail!("board size must be at least 1");
        }
        if self.depth == 0 {
            anyhow::bail!("search depth must be at least 1");
        }
        Ok(())
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_settings() {
        let mut config = EngineConfig::default();
        config.board_size = 0;
        assert!(config.validate().is_err());

        let mut config = EngineConfig::default();
        config.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EngineConfig {
            board_size: 7,
            depth: 2,
            time_budget_ms: None,
            seed: Some(99),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board_size, 7);
        assert_eq!(back.depth, 2);
        assert_eq!(back.time_budget_ms, None);
        assert_eq!(back.seed, Some(99));
    }
}
