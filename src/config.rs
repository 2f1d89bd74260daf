//! Widget Configuration
//!
//! Startup settings and demo seed items, embedded from `config/widget.json`.

use serde::{Deserialize, Serialize};

use crate::error::{TodoError, TodoResult};
use crate::models::{FilterMode, SeedItem};

const EMBEDDED_CONFIG: &str = include_str!("../config/widget.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// `KeyboardEvent.key` value that confirms the entry field
    pub accept_key: String,
    pub placeholder: String,
    /// Filter name; unknown names fall back to "all"
    pub initial_filter: String,
    pub seed: Vec<SeedItem>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            accept_key: "Enter".to_string(),
            placeholder: "What needs to be done?".to_string(),
            initial_filter: FilterMode::All.name().to_string(),
            seed: Vec::new(),
        }
    }
}

impl WidgetConfig {
    /// Parse the configuration compiled into the binary
    pub fn load() -> TodoResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(text: &str) -> TodoResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn initial_filter(&self) -> FilterMode {
        FilterMode::from_name(&self.initial_filter)
    }

    fn validate(&self) -> TodoResult<()> {
        if self.accept_key.is_empty() {
            return Err(TodoError::InvalidInput("accept_key is empty".to_string()));
        }
        if let Some(position) = self.seed.iter().position(|item| item.content.trim().is_empty()) {
            return Err(TodoError::InvalidInput(format!("seed item {} has blank content", position)));
        }
        Ok(())
    }
}
