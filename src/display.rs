//! Rendering helper shared by the record `Display` implementations.

use std::fmt;

/// Wraps an optional value so that `Display` prints the inner value when
/// present and the literal `null` when absent. Keeps the record formatters
/// free of per-field match blocks.
pub(crate) struct Nullable<'a, T>(pub(crate) &'a Option<T>);

impl<T: fmt::Display> fmt::Display for Nullable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}
