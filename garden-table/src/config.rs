//! Sort configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What to do with rows that have no sort value for the requested column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingValuePolicy {
    /// Keep the row at its current index and sort the others around it.
    #[default]
    Pin,
    /// Move the row after every sorted row, keeping input order among them.
    Last,
    /// Fail the whole sort without reordering anything.
    Abort,
}

/// Configuration for table sorting and state classes.
///
/// # Example
///
/// ```
/// use garden_table::{MissingValuePolicy, SortConfig};
///
/// let config = SortConfig::from_json(r#"{ "missing": "last" }"#).unwrap();
/// assert_eq!(config.missing, MissingValuePolicy::Last);
/// assert_eq!(config.ascending_class, "sort-asc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Placement of rows without a sort value.
    pub missing: MissingValuePolicy,
    /// Class put on the header sorted ascending.
    pub ascending_class: String,
    /// Class put on the header sorted descending.
    pub descending_class: String,
    /// Class put on the selected tab or filter control, and on the visible tab pane.
    pub active_class: String,
    /// Extra class put on the visible tab pane.
    pub shown_class: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            missing: MissingValuePolicy::default(),
            ascending_class: "sort-asc".to_string(),
            descending_class: "sort-desc".to_string(),
            active_class: "active".to_string(),
            shown_class: "show".to_string(),
        }
    }
}

impl SortConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the missing value policy.
    pub fn missing(mut self, policy: MissingValuePolicy) -> Self {
        self.missing = policy;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("ascending_class", &self.ascending_class),
            ("descending_class", &self.descending_class),
            ("active_class", &self.active_class),
            ("shown_class", &self.shown_class),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config = SortConfig::from_json("{}").unwrap();
        assert_eq!(config, SortConfig::default());
    }

    #[test]
    fn test_policy_names() {
        let config = SortConfig::from_json(r#"{ "missing": "abort" }"#).unwrap();
        assert_eq!(config.missing, MissingValuePolicy::Abort);
    }

    #[test]
    fn test_custom_classes() {
        let config =
            SortConfig::from_json(r#"{ "ascending_class": "asc", "active_class": "is-on" }"#)
                .unwrap();
        assert_eq!(config.ascending_class, "asc");
        assert_eq!(config.descending_class, "sort-desc");
        assert_eq!(config.active_class, "is-on");
    }

    #[test]
    fn test_default_classes() {
        let config = SortConfig::default();
        assert_eq!(config.ascending_class, "sort-asc");
        assert_eq!(config.descending_class, "sort-desc");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.shown_class, "show");
    }

    #[test]
    fn test_blank_class_rejected() {
        let err = SortConfig::from_json(r#"{ "descending_class": " " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_json() {
        let err = SortConfig::from_json("{ missing").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_unknown_policy() {
        assert!(SortConfig::from_json(r#"{ "missing": "ignore" }"#).is_err());
    }
}
