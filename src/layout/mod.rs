//! Column width computation and its per-canvas cache.
//!
//! [`solve`] holds the exact search that picks the widths; [`cache`] keeps
//! the last result keyed by canvas area so unchanged redraws are free.

mod cache;
mod solve;

pub use cache::{ContentLayout, Rect};
pub use solve::{column_widths, ColumnWidths};
