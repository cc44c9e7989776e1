//! Sort state for a table header.

use crate::config::SortConfig;
use crate::sort::SortDirection;

/// Which column a table is sorted by, and in which direction.
///
/// Transitions are pure: [`activate`](SortState::activate) returns the next
/// state and leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    /// A state with no active column.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state sorted by `column` in `direction`.
    pub fn sorted(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active: Some((column.into(), direction)),
        }
    }

    /// The active column and direction.
    pub fn active(&self) -> Option<(&str, SortDirection)> {
        self.active.as_ref().map(|(c, d)| (c.as_str(), *d))
    }

    /// The direction `column` is sorted in, if it is the active column.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        match &self.active {
            Some((c, d)) if c == column => Some(*d),
            _ => None,
        }
    }

    /// The state after a header activation.
    ///
    /// Activating the active column flips its direction. Activating any
    /// other column sorts it ascending.
    pub fn activate(&self, column: &str) -> Self {
        Self::sorted(column, self.next_direction(column))
    }

    /// The direction an activation of `column` would sort in.
    pub fn next_direction(&self, column: &str) -> SortDirection {
        match self.direction_for(column) {
            Some(direction) => direction.flipped(),
            None => SortDirection::Ascending,
        }
    }

    /// The state class for a header, or `None` if it is not the active column.
    pub fn header_class<'a>(&self, column: &str, config: &'a SortConfig) -> Option<&'a str> {
        self.direction_for(column).map(|d| match d {
            SortDirection::Ascending => config.ascending_class.as_str(),
            SortDirection::Descending => config.descending_class.as_str(),
        })
    }

    /// Clear the active column.
    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_activation_is_ascending() {
        let state = SortState::new().activate("name");
        assert_eq!(state.active(), Some(("name", SortDirection::Ascending)));
    }

    #[test]
    fn test_same_column_toggles() {
        let state = SortState::new().activate("name").activate("name");
        assert_eq!(state.direction_for("name"), Some(SortDirection::Descending));
        let state = state.activate("name");
        assert_eq!(state.direction_for("name"), Some(SortDirection::Ascending));
    }

    #[test]
    fn test_other_column_resets_to_ascending() {
        let state = SortState::sorted("name", SortDirection::Descending).activate("family");
        assert_eq!(state.active(), Some(("family", SortDirection::Ascending)));
        assert_eq!(state.direction_for("name"), None);
    }

    #[test]
    fn test_activate_does_not_mutate() {
        let state = SortState::new();
        let _ = state.activate("name");
        assert_eq!(state.active(), None);
    }

    #[test]
    fn test_header_class() {
        let config = SortConfig::default();
        let state = SortState::sorted("name", SortDirection::Descending);
        assert_eq!(state.header_class("name", &config), Some("sort-desc"));
        assert_eq!(state.header_class("family", &config), None);
    }

    #[test]
    fn test_clear() {
        let mut state = SortState::sorted("name", SortDirection::Ascending);
        state.clear();
        assert_eq!(state, SortState::new());
    }
}
