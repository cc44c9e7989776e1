//! Locale-aware string comparison for sort values.
//!
//! Sort values are compared with a root-locale Unicode collator at default
//! strength: base letters first, then accents, then case (lowercase first).
//! Digits are compared as characters, never as numbers.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};

/// A root-locale collator.
///
/// Building one loads collation data, so create it once per sort rather
/// than per comparison.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    /// Create a root-locale collation.
    ///
    /// If the collator cannot be built, comparisons fall back to code point
    /// order.
    pub fn root() -> Self {
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                log::warn!("root collator unavailable, using code point order: {e}");
                Self { collator: None }
            }
        }
    }

    /// Compare two sort values.
    ///
    /// Values the collator considers equal are ordered by code point, so the
    /// result is a total order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b).then_with(|| a.cmp(b)),
            None => a.cmp(b),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::root()
    }
}

/// Compare two sort values with a fresh [`Collation`].
///
/// ```
/// use std::cmp::Ordering;
/// use garden_table::collate::compare;
///
/// assert_eq!(compare("basil", "Carrot"), Ordering::Less);
/// assert_eq!(compare("Échalote", "Fennel"), Ordering::Less);
/// assert_eq!(compare("10", "9"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    Collation::root().compare(a, b)
}
