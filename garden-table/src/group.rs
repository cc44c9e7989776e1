//! Active-control groups for tab bars and filter buttons.
//!
//! A group is an ordered set of control ids with at most one active. Like
//! [`SortState`](crate::state::SortState), transitions return the next
//! state instead of mutating in place.

use crate::config::SortConfig;

/// An ordered set of controls where at most one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveGroup {
    ids: Vec<String>,
    active: Option<String>,
}

impl ActiveGroup {
    /// Create a group with no active control.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Control ids in order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether `id` belongs to the group.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// The active control.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether `id` is the active control.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// The group with `id` active.
    ///
    /// Unknown ids leave the group as it is.
    pub fn select(&self, id: &str) -> Self {
        if !self.contains(id) {
            log::warn!("ignoring selection of unknown control '{id}'");
            return self.clone();
        }
        Self {
            ids: self.ids.clone(),
            active: Some(id.to_string()),
        }
    }

    /// The group with nothing active.
    pub fn cleared(&self) -> Self {
        Self {
            ids: self.ids.clone(),
            active: None,
        }
    }

    /// `active_class` for the active control, `None` for the rest.
    pub fn class_for<'a>(&self, id: &str, active_class: &'a str) -> Option<&'a str> {
        self.is_active(id).then_some(active_class)
    }
}

/// Tab bar state. The first tab starts selected.
///
/// Each tab shows the pane with the same id. Ids may be given as link
/// targets (`"#care"`); the leading `#` is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabState(ActiveGroup);

impl TabState {
    /// Create a tab bar from tab ids, selecting the first.
    pub fn new<I, S>(tab_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = tab_ids.into_iter().map(|id| {
            let id: String = id.into();
            pane_id(&id).to_string()
        });
        let group = ActiveGroup::new(ids);
        let group = match group.ids().first().cloned() {
            Some(first) => group.select(&first),
            None => group,
        };
        Self(group)
    }

    /// The state after clicking `tab_id`.
    pub fn select_tab(&self, tab_id: &str) -> Self {
        Self(self.0.select(pane_id(tab_id)))
    }

    /// The selected tab.
    pub fn selected(&self) -> Option<&str> {
        self.0.active()
    }

    /// Classes for `pane`: shown and active for the selected tab's pane,
    /// none for the rest.
    pub fn pane_classes<'a>(&self, pane: &str, config: &'a SortConfig) -> Vec<&'a str> {
        if self.0.is_active(pane_id(pane)) {
            vec![config.shown_class.as_str(), config.active_class.as_str()]
        } else {
            Vec::new()
        }
    }

    /// The underlying group.
    pub fn group(&self) -> &ActiveGroup {
        &self.0
    }
}

fn pane_id(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

/// Filter button state. No filter is active until one is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState(ActiveGroup);

impl FilterState {
    /// Create a filter row with nothing active.
    pub fn new<I, S>(filter_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ActiveGroup::new(filter_ids))
    }

    /// The state after clicking `filter_id`.
    pub fn select_filter(&self, filter_id: &str) -> Self {
        Self(self.0.select(filter_id))
    }

    /// The state with every filter off.
    pub fn clear(&self) -> Self {
        Self(self.0.cleared())
    }

    /// The active filter.
    pub fn selected(&self) -> Option<&str> {
        self.0.active()
    }

    /// The underlying group.
    pub fn group(&self) -> &ActiveGroup {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_marks_one_active() {
        let group = ActiveGroup::new(["all", "herbs", "vegetables"]).select("herbs");
        assert!(group.is_active("herbs"));
        assert!(!group.is_active("all"));
        let group = group.select("vegetables");
        assert_eq!(group.active(), Some("vegetables"));
        assert!(!group.is_active("herbs"));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let group = ActiveGroup::new(["a", "b"]).select("a");
        assert_eq!(group.select("z"), group);
    }

    #[test]
    fn test_class_for() {
        let group = ActiveGroup::new(["a", "b"]).select("b");
        assert_eq!(group.class_for("b", "active"), Some("active"));
        assert_eq!(group.class_for("a", "active"), None);
    }

    #[test]
    fn test_tabs_start_on_first() {
        let tabs = TabState::new(["overview", "care", "harvest"]);
        assert_eq!(tabs.selected(), Some("overview"));
        assert_eq!(tabs.select_tab("care").selected(), Some("care"));
    }

    #[test]
    fn test_link_targets_select_matching_pane() {
        let config = SortConfig::default();
        let tabs = TabState::new(["#overview", "#care"]).select_tab("#care");
        assert_eq!(tabs.selected(), Some("care"));
        assert_eq!(tabs.pane_classes("care", &config), vec!["show", "active"]);
        assert_eq!(tabs.pane_classes("#care", &config), vec!["show", "active"]);
        assert!(tabs.pane_classes("overview", &config).is_empty());
    }

    #[test]
    fn test_empty_tabs() {
        let tabs = TabState::new(Vec::<String>::new());
        assert_eq!(tabs.selected(), None);
    }

    #[test]
    fn test_filters_clear() {
        let filters = FilterState::new(["sun", "shade"]);
        assert_eq!(filters.selected(), None);
        let filters = filters.select_filter("shade");
        assert_eq!(filters.selected(), Some("shade"));
        assert_eq!(filters.clear().selected(), None);
    }
}
