//! Row and Cell types for sortable tables.

use std::collections::HashMap;

/// A single table cell.
///
/// Cells carry display text and a set of attributes. A cell holds the sort
/// value for a column when it has an attribute named by that column key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Attributes keyed by column key.
    attributes: HashMap<String, String>,
}

impl Cell {
    /// Create a cell with display text and no attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attributes: HashMap::new(),
        }
    }

    /// Create a cell whose text doubles as its sort value for `column`.
    pub fn sortable(column: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone()).attr(column, text)
    }

    /// Set an attribute on the cell.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// One rendered table line.
///
/// # Example
///
/// ```
/// use garden_table::{Cell, Row};
///
/// let row = Row::new("plant-1")
///     .cell(Cell::sortable("name", "Tomato"))
///     .cell(Cell::new("Solanaceae"));
///
/// assert_eq!(row.sort_value("name"), Some("Tomato"));
/// assert_eq!(row.sort_value("family"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Stable identifier, used in reports.
    pub id: String,
    /// Cells in display order.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create an empty row.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: Vec::new(),
        }
    }

    /// Append a cell.
    pub fn cell(mut self, cell: Cell) -> Self {
        self.cells.push(cell);
        self
    }

    /// The sort value for `column`, taken from the first cell that carries it.
    pub fn sort_value(&self, column: &str) -> Option<&str> {
        self.cells.iter().find_map(|c| c.get_attr(column))
    }
}
