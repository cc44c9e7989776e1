//! Table boundary: owns rows and headers and applies sort results to them.

use crate::config::SortConfig;
use crate::error::SortError;
use crate::row::Row;
use crate::sort::{SortDirection, SortOutcome, sort_rows};
use crate::state::SortState;

/// A sortable column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortHeader {
    /// Column key the header sorts by.
    pub key: String,
    /// Header text.
    pub label: String,
}

impl SortHeader {
    /// Create a new header.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A table of rows with sortable headers.
///
/// # Example
///
/// ```
/// use garden_table::{Cell, Row, SortHeader, Table};
///
/// let mut table = Table::new(vec![SortHeader::new("name", "Plant")]);
/// for name in ["Tomato", "Basil", "Carrot"] {
///     table.push_row(Row::new(name).cell(Cell::sortable("name", name)));
/// }
///
/// table.activate("name").unwrap();
/// assert_eq!(table.column_values("name"), vec![Some("Basil"), Some("Carrot"), Some("Tomato")]);
///
/// table.activate("name").unwrap();
/// assert_eq!(table.column_values("name"), vec![Some("Tomato"), Some("Carrot"), Some("Basil")]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<SortHeader>,
    rows: Vec<Row>,
    state: SortState,
    config: SortConfig,
}

impl Table {
    /// Create an empty table with the given headers.
    pub fn new(headers: Vec<SortHeader>) -> Self {
        Self {
            headers,
            ..Self::default()
        }
    }

    /// Create a table with headers and rows.
    pub fn with_rows(headers: Vec<SortHeader>, rows: Vec<Row>) -> Self {
        Self {
            headers,
            rows,
            ..Self::default()
        }
    }

    /// Set the config.
    pub fn config(mut self, config: SortConfig) -> Self {
        self.config = config;
        self
    }

    /// Append a row.
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column headers.
    pub fn headers(&self) -> &[SortHeader] {
        &self.headers
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.state
    }

    /// Sort values of `column` in display order.
    pub fn column_values(&self, column: &str) -> Vec<Option<&str>> {
        self.rows.iter().map(|r| r.sort_value(column)).collect()
    }

    /// Handle a header activation: toggle the sort state and reorder rows.
    ///
    /// On error neither the rows nor the sort state change.
    pub fn activate(&mut self, column: &str) -> Result<SortOutcome, SortError> {
        let direction = self.state.next_direction(column);
        self.sort(column, direction)
    }

    /// Sort by `column` in an explicit direction and record it as the state.
    pub fn sort(&mut self, column: &str, direction: SortDirection) -> Result<SortOutcome, SortError> {
        self.ensure_header(column)?;
        let outcome = sort_rows(&self.rows, column, direction, self.config.missing)?;

        let rows = std::mem::take(&mut self.rows);
        self.rows = outcome.apply(rows);
        self.state = SortState::sorted(column, direction);
        Ok(outcome)
    }

    /// The state class of every header, in header order.
    pub fn header_classes(&self) -> Vec<(&str, Option<&str>)> {
        self.headers
            .iter()
            .map(|h| (h.key.as_str(), self.state.header_class(&h.key, &self.config)))
            .collect()
    }

    fn ensure_header(&self, column: &str) -> Result<(), SortError> {
        if column.is_empty() {
            return Err(SortError::EmptyColumnKey);
        }
        if !self.headers.iter().any(|h| h.key == column) {
            return Err(SortError::unknown_column(column));
        }
        Ok(())
    }
}

/// Activate a header on a table that may not be present on the page.
///
/// A missing table is not an error: the call does nothing and returns `None`.
pub fn activate_on(table: Option<&mut Table>, column: &str) -> Option<Result<SortOutcome, SortError>> {
    match table {
        Some(table) => Some(table.activate(column)),
        None => {
            log::debug!("no table present, ignoring activation of '{column}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MissingValuePolicy;
    use crate::row::Cell;

    fn plants() -> Table {
        let rows = [("1", "Tomato", "Solanaceae"), ("2", "Basil", "Lamiaceae"), ("3", "Carrot", "Apiaceae")]
            .into_iter()
            .map(|(id, name, family)| {
                Row::new(id)
                    .cell(Cell::sortable("name", name))
                    .cell(Cell::sortable("family", family))
            })
            .collect();
        Table::with_rows(
            vec![SortHeader::new("name", "Name"), SortHeader::new("family", "Family")],
            rows,
        )
    }

    #[test]
    fn test_unknown_column() {
        let mut table = plants();
        let err = table.activate("height").unwrap_err();
        assert_eq!(err, SortError::unknown_column("height"));
        assert_eq!(table.sort_state(), &SortState::new());
    }

    #[test]
    fn test_switching_columns_resets_direction() {
        let mut table = plants();
        table.activate("name").unwrap();
        table.activate("name").unwrap();
        table.activate("family").unwrap();
        assert_eq!(
            table.sort_state().active(),
            Some(("family", SortDirection::Ascending))
        );
        assert_eq!(
            table.column_values("family"),
            vec![Some("Apiaceae"), Some("Lamiaceae"), Some("Solanaceae")]
        );
    }

    #[test]
    fn test_header_classes() {
        let mut table = plants();
        table.activate("name").unwrap();
        assert_eq!(
            table.header_classes(),
            vec![("name", Some("sort-asc")), ("family", None)]
        );
    }

    #[test]
    fn test_abort_leaves_table_untouched() {
        let mut table = plants().config(SortConfig::default().missing(MissingValuePolicy::Abort));
        table.push_row(Row::new("4").cell(Cell::new("?")));
        let before: Vec<String> = table.rows().iter().map(|r| r.id.clone()).collect();

        assert!(table.activate("name").is_err());

        let after: Vec<String> = table.rows().iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(table.sort_state().active(), None);
    }

    #[test]
    fn test_absent_table_is_noop() {
        assert!(activate_on(None, "name").is_none());
    }

    #[test]
    fn test_present_table() {
        let mut table = plants();
        let outcome = activate_on(Some(&mut table), "name").unwrap().unwrap();
        assert!(outcome.is_complete());
        assert_eq!(table.rows()[0].id, "2");
    }
}
