//! Table sorting and control state for Garden Database pages.
//!
//! Rows are sorted by per-column string sort values. Sorting, header toggling
//! and tab/filter selection are pure functions over plain data; the
//! [`Table`] type applies sort results back onto its own rows.

pub mod collate;
pub mod config;
pub mod error;
pub mod group;
pub mod row;
pub mod sort;
pub mod state;
pub mod table;

pub use config::{MissingValuePolicy, SortConfig};
pub use error::{ConfigError, MissingSortValue, SortError};
pub use group::{ActiveGroup, FilterState, TabState};
pub use row::{Cell, Row};
pub use sort::{SortDirection, SortOutcome, sort_rows};
pub use state::SortState;
pub use table::{SortHeader, Table, activate_on};
