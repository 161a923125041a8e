//! Scoring configuration
//!
//! The alignment thresholds and the partial-class activation point are
//! tunable, with defaults matching the shipped assessment.

use serde::{Deserialize, Serialize};

use charforge_domain::QUESTIONS_PER_ATTRIBUTE;

/// Default net axis score needed to leave Neutral on either alignment axis.
pub const DEFAULT_AXIS_THRESHOLD: i32 = 3;

/// Default number of answered primary-attribute questions before a partial
/// result carries a class.
pub const DEFAULT_PARTIAL_CLASS_MIN_ANSWERS: u32 = 3;

const ENV_ORDER_THRESHOLD: &str = "CHARFORGE_ORDER_THRESHOLD";
const ENV_MORAL_THRESHOLD: &str = "CHARFORGE_MORAL_THRESHOLD";
const ENV_PARTIAL_CLASS_MIN_ANSWERS: &str = "CHARFORGE_PARTIAL_CLASS_MIN_ANSWERS";

/// Configuration error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field_name} must be positive, got {value}")]
    NonPositiveThreshold { field_name: &'static str, value: i32 },

    #[error("partial_class_min_answers must be between 1 and {max}, got {value}")]
    PartialMinOutOfRange { value: u32, max: u32 },
}

/// Tunable scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    /// `lawful - chaotic` at or beyond which the order axis leaves Neutral
    pub order_threshold: i32,
    /// `good - evil` at or beyond which the moral axis leaves Neutral
    pub moral_threshold: i32,
    /// Answered questions the primary attribute needs before a partial result resolves a class
    pub partial_class_min_answers: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            order_threshold: DEFAULT_AXIS_THRESHOLD,
            moral_threshold: DEFAULT_AXIS_THRESHOLD,
            partial_class_min_answers: DEFAULT_PARTIAL_CLASS_MIN_ANSWERS,
        }
    }
}

impl ScoringConfig {
    /// Read overrides from the environment, falling back to defaults.
    ///
    /// Unparseable values are logged and ignored. The result is not validated;
    /// call [`ScoringConfig::validate`] or build the engine with
    /// `CharacterEngine::try_new`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ScoringConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            order_threshold: parse_or(&lookup, ENV_ORDER_THRESHOLD, defaults.order_threshold),
            moral_threshold: parse_or(&lookup, ENV_MORAL_THRESHOLD, defaults.moral_threshold),
            partial_class_min_answers: parse_or(
                &lookup,
                ENV_PARTIAL_CLASS_MIN_ANSWERS,
                defaults.partial_class_min_answers,
            ),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.order_threshold <= 0 {
            return Err(ConfigError::NonPositiveThreshold {
                field_name: "order_threshold",
                value: self.order_threshold,
            });
        }
        if self.moral_threshold <= 0 {
            return Err(ConfigError::NonPositiveThreshold {
                field_name: "moral_threshold",
                value: self.moral_threshold,
            });
        }
        let max = QUESTIONS_PER_ATTRIBUTE as u32;
        if !(1..=max).contains(&self.partial_class_min_answers) {
            return Err(ConfigError::PartialMinOutOfRange {
                value: self.partial_class_min_answers,
                max,
            });
        }
        Ok(())
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    default = %default,
                    "Ignoring unparseable scoring override"
                );
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_match_shipped_assessment() {
        let config = ScoringConfig::default();
        assert_eq!(config.order_threshold, 3);
        assert_eq!(config.moral_threshold, 3);
        assert_eq!(config.partial_class_min_answers, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn lookup_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_ORDER_THRESHOLD, "4"),
            (ENV_MORAL_THRESHOLD, "lots"),
            (ENV_PARTIAL_CLASS_MIN_ANSWERS, " 5 "),
        ]);
        let config = ScoringConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.order_threshold, 4);
        assert_eq!(config.moral_threshold, 3);
        assert_eq!(config.partial_class_min_answers, 5);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = ScoringConfig {
            moral_threshold: 0,
            ..ScoringConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveThreshold {
                field_name: "moral_threshold",
                ..
            })
        ));

        let config = ScoringConfig {
            partial_class_min_answers: 6,
            ..ScoringConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PartialMinOutOfRange { value: 6, max: 5 })
        );
    }

    #[test]
    fn deserializes_with_missing_fields_defaulted() {
        let config: ScoringConfig = serde_json::from_str(r#"{"orderThreshold": 2}"#).unwrap();
        assert_eq!(config.order_threshold, 2);
        assert_eq!(config.moral_threshold, DEFAULT_AXIS_THRESHOLD);
    }
}
