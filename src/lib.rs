//! # colcut - Optimal Table Column Widths for Terminals
//!
//! `colcut` answers one question: when a table is wider than the canvas it
//! must be drawn on, how wide should each column be so that as few cells as
//! possible get their content trimmed?
//!
//! The answer is exact, not heuristic. The crate runs a memoized search over
//! every way of partitioning the canvas width into positive column widths (a
//! rod-cutting variant that minimizes trimmed cells instead of maximizing
//! price) and caches the chosen widths per canvas area so redraws at an
//! unchanged size cost nothing.
//!
//! ## Core Concepts
//!
//! - [`Content`]: the table's cells; each knows its natural rendered width
//!   and whether it trims or wraps on overflow
//! - [`TableContent`]: the trait seam for callers with their own row storage
//! - [`column_widths`]: the solver; returns one width per column, summing
//!   exactly to the canvas width
//! - [`ContentLayout`]: caches the result for a canvas [`Rect`], recomputing
//!   only when the area changes
//!
//! ## Quick Start
//!
//! ```rust
//! use colcut::{Content, column_widths};
//!
//! let content = Content::builder(3)
//!     .row(["id", "description", "status"])
//!     .row(["1", "rework the frobnicator", "in progress"])
//!     .row(["2", "ship it", "done"])
//!     .build()
//!     .unwrap();
//!
//! // 24 cells of canvas for 3 columns of data.
//! let widths = column_widths(&content, 24).unwrap();
//! assert_eq!(widths.len(), 3);
//! assert_eq!(widths.total(), 24);
//! ```
//!
//! ## Wrapping Cells
//!
//! Cells set to [`Overflow::Wrap`] are never trimmed, so the solver ignores
//! them entirely; a hugely wide wrapping cell will not steal width from its
//! neighbors:
//!
//! ```rust
//! use colcut::{Cell, Content, column_widths};
//!
//! let content = Content::builder(2)
//!     .row([Cell::new("label"), Cell::new("a very long note that wraps").wrap()])
//!     .build()
//!     .unwrap();
//!
//! let widths = column_widths(&content, 10).unwrap();
//! assert_eq!(widths.total(), 10);
//! ```
//!
//! ## Caching Per Canvas Area
//!
//! A render loop should hold a [`ContentLayout`] and ask it for widths each
//! frame; the expensive search only reruns when the canvas area changes:
//!
//! ```rust
//! use colcut::{Content, ContentLayout, Rect};
//!
//! let content = Content::builder(2).row(["a", "b"]).build().unwrap();
//! let mut layout = ContentLayout::new();
//!
//! let widths = layout.widths_for(&content, Rect::new(0, 0, 8, 10)).unwrap();
//! assert_eq!(widths.iter().sum::<usize>(), 8);
//! ```
//!
//! Widths are the data portion only; if a frame collaborator draws borders
//! or padding, hand its cell overhead to
//! [`ContentLayout::with_overhead`] and it is subtracted from every canvas
//! width before cutting.

mod content;
mod error;
mod layout;

pub use content::{Cell, Content, ContentBuilder, Overflow, TableContent};
pub use error::{LayoutError, Result};
pub use layout::{column_widths, ColumnWidths, ContentLayout, Rect};
