use crate::{
    domain::IdStrategy,
    error::{Result, TodoError},
};
use serde::{Deserialize, Serialize};

/// Store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Header shown while browsing all lists
    pub title: String,
    pub id_strategy: IdStrategy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            title: "Todo List".to_string(),
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl StoreConfig {
    /// Parses a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: StoreConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(TodoError::ConfigError("title cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StoreConfig::default();

        assert_eq!(config.title, "Todo List");
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = StoreConfig::from_json(r#"{"id_strategy": "random"}"#).unwrap();

        assert_eq!(config.title, "Todo List");
        assert_eq!(config.id_strategy, IdStrategy::Random);
    }

    #[test]
    fn test_from_json_rejects_blank_title() {
        let result = StoreConfig::from_json(r#"{"title": "  "}"#);
        assert!(matches!(result, Err(TodoError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let result = StoreConfig::from_json("{not json");
        assert!(matches!(result, Err(TodoError::SerializationError(_))));
    }
}
