//! Environment configuration.
//!
//! `EnvConfig` describes the deck partition, board geometry, queue size and
//! reward shaping. Every constructor that accepts a config validates it
//! eagerly, so a bad partition is reported before any card is generated.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Reward shaping table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Action index outside the deck.
    pub invalid_index: f32,
    /// Targeted card is not clickable.
    pub not_clickable: f32,
    /// Queue was already full before the select.
    pub queue_full: f32,
    /// Card inserted without completing a match.
    pub insert: f32,
    /// Card completed a three-of-a-kind.
    pub match_three: f32,
    /// Added when the last card is eliminated.
    pub win_bonus: f32,
    /// Subtracted when the queue fills up.
    pub lose_penalty: f32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            invalid_index: -1.0,
            not_clickable: -0.5,
            queue_full: -0.1,
            insert: 0.1,
            match_three: 1.0,
            win_bonus: 10.0,
            lose_penalty: 5.0,
        }
    }
}

/// Complete environment configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// Number of distinct card types (T).
    pub card_types: usize,

    /// Copies of each type in the deck.
    pub copies_per_type: usize,

    /// Cards in each of the two flat stacks.
    pub stack_size: usize,

    /// Cards in the layered board area.
    pub board_size: usize,

    /// Selection queue length that ends the game.
    pub queue_capacity: usize,

    /// Card edge length in pixels; also the overlap threshold.
    pub card_size: f32,

    pub container_width: f32,
    pub container_height: f32,

    /// Observation-only maxima for the undo/remove counters.
    pub max_undo: u32,
    pub max_remove: u32,

    /// Seed for the environment RNG.
    pub seed: u64,

    pub rewards: RewardTable,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            card_types: 18,
            copies_per_type: 15,
            stack_size: 15,
            board_size: 240,
            queue_capacity: 7,
            card_size: 40.0,
            container_width: 800.0,
            container_height: 600.0,
            max_undo: 1,
            max_remove: 2,
            seed: 42,
            rewards: RewardTable::default(),
        }
    }
}

impl EnvConfig {
    /// Create the classic 270-card configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the number of card types.
    #[must_use]
    pub fn with_card_types(mut self, card_types: usize) -> Self {
        self.card_types = card_types;
        self
    }

    /// Set the copies of each type.
    #[must_use]
    pub fn with_copies_per_type(mut self, copies: usize) -> Self {
        self.copies_per_type = copies;
        self
    }

    /// Set the per-stack size and board size together.
    #[must_use]
    pub fn with_layout(mut self, stack_size: usize, board_size: usize) -> Self {
        self.stack_size = stack_size;
        self.board_size = board_size;
        self
    }

    /// Set the queue capacity.
    #[must_use]
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Total cards in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.copies_per_type * self.card_types
    }

    /// Check that the configuration describes a consistent deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_types == 0 {
            return Err(ConfigError::NoCardTypes);
        }
        if self.card_types > u8::MAX as usize {
            return Err(ConfigError::TooManyTypes {
                card_types: self.card_types,
            });
        }
        if self.copies_per_type == 0 {
            return Err(ConfigError::NoCopies);
        }
        if self.queue_capacity < 3 {
            return Err(ConfigError::QueueTooSmall {
                capacity: self.queue_capacity,
            });
        }

        for (field, value) in [
            ("card_size", self.card_size),
            ("container_width", self.container_width),
            ("container_height", self.container_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        let deck = self.deck_size();
        let slots = 2 * self.stack_size + self.board_size;
        if deck != slots {
            return Err(ConfigError::DeckPartition {
                card_types: self.card_types,
                copies_per_type: self.copies_per_type,
                stack_size: self.stack_size,
                board_size: self.board_size,
                deck,
                slots,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EnvConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.deck_size(), 270);
        assert_eq!(config.card_types, 18);
    }

    #[test]
    fn test_partition_mismatch_rejected() {
        let config = EnvConfig::default().with_card_types(17);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DeckPartition {
                deck: 255,
                slots: 270,
                ..
            }
        ));
    }

    #[test]
    fn test_small_consistent_layout() {
        let config = EnvConfig::default()
            .with_card_types(2)
            .with_copies_per_type(3)
            .with_layout(3, 0);
        assert!(config.validate().is_ok());
        assert_eq!(config.deck_size(), 6);
    }

    #[test]
    fn test_zero_types_and_small_queue_rejected() {
        assert!(matches!(
            EnvConfig::default().with_card_types(0).validate(),
            Err(ConfigError::NoCardTypes)
        ));
        assert!(matches!(
            EnvConfig::default().with_queue_capacity(2).validate(),
            Err(ConfigError::QueueTooSmall { capacity: 2 })
        ));
    }

    #[test]
    fn test_non_positive_geometry_rejected() {
        let mut config = EnvConfig::default();
        config.card_size = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "card_size",
                ..
            })
        ));
    }

    #[test]
    fn test_builder_pattern() {
        let config = EnvConfig::new().with_seed(7).with_queue_capacity(9);
        assert_eq!(config.seed, 7);
        assert_eq!(config.queue_capacity, 9);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let json = r#"{"seed": 99, "rewards": {"win_bonus": 20.0}}"#;
        let config = EnvConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 99);
        assert_eq!(config.card_types, 18);
        assert_eq!(config.rewards.win_bonus, 20.0);
        assert_eq!(config.rewards.insert, 0.1);
    }

    #[test]
    fn test_from_json_validates() {
        let err = EnvConfig::from_json(r#"{"card_types": 10}"#).unwrap_err();
        assert!(matches!(err, ConfigError::DeckPartition { .. }));

        let err = EnvConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
