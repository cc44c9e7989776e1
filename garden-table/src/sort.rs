//! Row sorting by a column's sort value.

use std::cmp::Ordering;

use crate::collate::Collation;
use crate::config::MissingValuePolicy;
use crate::error::{MissingSortValue, SortError};
use crate::row::Row;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Ascending,
    /// Descending order (Z-A, 9-0).
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Apply the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The result of sorting a set of rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortOutcome {
    /// Input row indices in their new display order.
    pub order: Vec<usize>,
    /// Rows that had no sort value for the column.
    pub missing: Vec<MissingSortValue>,
}

impl SortOutcome {
    /// Whether every row had a sort value.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Reorder `rows` to match this outcome.
    ///
    /// `rows` must be the same sequence the outcome was computed from.
    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        let mut slots: Vec<Option<Row>> = rows.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&i| slots.get_mut(i).and_then(Option::take))
            .collect()
    }
}

/// Compute the display order of `rows` sorted by `column`.
///
/// Sort values are compared as strings with a root-locale [`Collation`]; no numeric
/// coercion happens. The sort is stable. Rows without a sort value are
/// reported in [`SortOutcome::missing`] and placed according to `policy`.
///
/// # Example
///
/// ```
/// use garden_table::{Cell, MissingValuePolicy, Row, SortDirection, sort_rows};
///
/// let rows: Vec<Row> = ["Tomato", "Basil", "Carrot"]
///     .iter()
///     .map(|name| Row::new(*name).cell(Cell::sortable("name", *name)))
///     .collect();
///
/// let outcome = sort_rows(&rows, "name", SortDirection::Ascending, MissingValuePolicy::Pin).unwrap();
/// assert_eq!(outcome.order, vec![1, 2, 0]);
/// ```
pub fn sort_rows(
    rows: &[Row],
    column: &str,
    direction: SortDirection,
    policy: MissingValuePolicy,
) -> Result<SortOutcome, SortError> {
    if column.is_empty() {
        return Err(SortError::EmptyColumnKey);
    }

    let mut keyed: Vec<(usize, &str)> = Vec::with_capacity(rows.len());
    let mut pinned = vec![false; rows.len()];
    let mut missing = Vec::new();

    for (i, row) in rows.iter().enumerate() {
        match row.sort_value(column) {
            Some(value) => keyed.push((i, value)),
            None => {
                let report = MissingSortValue::new(row.id.clone(), column);
                log::warn!("{report}");
                pinned[i] = true;
                missing.push(report);
            }
        }
    }

    if policy == MissingValuePolicy::Abort && !missing.is_empty() {
        return Err(missing.remove(0).into());
    }

    let collation = Collation::root();
    keyed.sort_by(|a, b| direction.apply(collation.compare(a.1, b.1)));
    let mut sorted = keyed.into_iter().map(|(i, _)| i);

    let order: Vec<usize> = match policy {
        MissingValuePolicy::Last => sorted
            .chain((0..rows.len()).filter(|&i| pinned[i]))
            .collect(),
        MissingValuePolicy::Pin | MissingValuePolicy::Abort => (0..rows.len())
            .filter_map(|i| if pinned[i] { Some(i) } else { sorted.next() })
            .collect(),
    };

    log::debug!(
        "sorted {} rows by '{}' {:?} ({} missing)",
        order.len(),
        column,
        direction,
        missing.len()
    );

    Ok(SortOutcome { order, missing })
}
