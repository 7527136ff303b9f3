//! Caching of computed layouts per canvas area.
//!
//! The width search is the expensive path, so its result is kept alongside
//! the canvas area it was computed for and reused verbatim while the area is
//! unchanged. Any area change throws the previous result away entirely;
//! there is no partial or incremental state.

use serde::{Deserialize, Serialize};

use crate::content::TableContent;
use crate::error::Result;
use crate::layout::solve::{column_widths, ColumnWidths};

/// A rectangle of character cells on the terminal.
///
/// `x` and `y` locate the top-left corner; equality on the whole rectangle
/// (position and size) is what keys the layout cache, so a table that moves
/// without resizing still relayouts; its canvas is a different area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Column of the top-left corner.
    pub x: usize,
    /// Row of the top-left corner.
    pub y: usize,
    /// Width in cells.
    pub width: usize,
    /// Height in cells.
    pub height: usize,
}

impl Rect {
    /// The zero rectangle, used as the "never drawn" marker.
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Determines how table content gets placed onto a canvas.
///
/// Holds the column widths computed for the last canvas area. A request for
/// the same area returns the stored widths without touching the content; a
/// request for any other area recomputes from scratch and overwrites.
///
/// Not synchronized: the check-then-update sequence takes `&mut self`, so a
/// cache shared across threads must sit behind a `Mutex`.
///
/// # Example
///
/// ```rust
/// use colcut::{Content, ContentLayout, Rect};
///
/// let content = Content::builder(2)
///     .row(["name", "value"])
///     .build()
///     .unwrap();
///
/// let mut layout = ContentLayout::new();
/// let area = Rect::new(0, 0, 12, 4);
/// let widths = layout.widths_for(&content, area).unwrap().to_vec();
/// assert_eq!(widths.iter().sum::<usize>(), 12);
///
/// // Same area: served from the cache.
/// assert_eq!(layout.widths_for(&content, area).unwrap(), &widths[..]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentLayout {
    /// Area of the last canvas the content was laid out for.
    /// [`Rect::ZERO`] (with no widths) until the first computation.
    last_cvs_area: Rect,

    /// Decoration cells (border, padding, spacing) to subtract from the
    /// area's width before cutting. Reported by whoever draws the frame.
    overhead: usize,

    /// Widths of the individual columns in the table.
    widths: Option<ColumnWidths>,
}

impl ContentLayout {
    /// Creates an empty layout; the first [`widths_for`](Self::widths_for)
    /// call computes.
    pub fn new() -> Self {
        ContentLayout::default()
    }

    /// Sets the decoration overhead subtracted from every canvas width.
    pub fn with_overhead(mut self, overhead: usize) -> Self {
        self.overhead = overhead;
        self
    }

    /// Computes the layout for `content` drawn on a canvas with area
    /// `cvs_area`, immediately.
    pub fn for_area<C: TableContent>(content: &C, cvs_area: Rect) -> Result<Self> {
        let mut layout = ContentLayout::new();
        layout.widths_for(content, cvs_area)?;
        Ok(layout)
    }

    /// Returns the column widths for drawing `content` on `cvs_area`.
    ///
    /// Recomputes only when the area differs from the last request. On
    /// error, the previously cached area and widths are left untouched.
    pub fn widths_for<C: TableContent>(&mut self, content: &C, cvs_area: Rect) -> Result<&[usize]> {
        if self.widths.is_none() || self.last_cvs_area != cvs_area {
            let usable = cvs_area.width.saturating_sub(self.overhead);
            let widths = column_widths(content, usable)?;
            self.last_cvs_area = cvs_area;
            self.widths = Some(widths);
        }
        // Some: either just stored, or the cached hit.
        Ok(self.widths.as_ref().map(ColumnWidths::as_slice).unwrap_or(&[]))
    }

    /// The area the current widths were computed for, or [`Rect::ZERO`]
    /// before the first computation.
    pub fn area(&self) -> Rect {
        self.last_cvs_area
    }

    /// The cached widths, if any layout has been computed yet.
    pub fn widths(&self) -> Option<&ColumnWidths> {
        self.widths.as_ref()
    }
}
