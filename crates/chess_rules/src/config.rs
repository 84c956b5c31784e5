//! Rule configuration, loadable from TOML.
//!
//! ```toml
//! fifty_move_half_moves = 100
//! fifty_move_lockout = true
//! repetition_occurrences = 3
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Half-moves without capture or pawn move that trigger the fifty-move rule.
    pub fifty_move_half_moves: usize,
    /// Refuse every further move once the fifty-move rule holds. When
    /// false the rule is only reported through `is_draw`.
    pub fifty_move_lockout: bool,
    /// Occurrences of a layout, current one included, that make a
    /// threefold repetition.
    pub repetition_occurrences: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fifty_move_half_moves: 100,
            fifty_move_lockout: true,
            repetition_occurrences: 3,
        }
    }
}

impl RulesConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.fifty_move_half_moves == 0 {
            return Err(ConfigError::Invalid(
                "fifty_move_half_moves must be positive".to_string(),
            ));
        }
        if self.repetition_occurrences < 2 {
            return Err(ConfigError::Invalid(
                "repetition_occurrences must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
