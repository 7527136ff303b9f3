//! Table content model consumed by the width solver.
//!
//! The solver only ever reads three things about a table: its column count,
//! each cell's natural rendered width, and whether a cell is trim-eligible.
//! [`TableContent`] captures that seam as a trait so callers with their own
//! row storage can plug in directly; [`Content`] is the batteries-included
//! implementation built from strings.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{LayoutError, Result};

/// Read-only view of table content, as seen by the width solver.
///
/// Implementations must present a rectangular table: every row has exactly
/// `columns()` cells. [`Content`] enforces this at construction; custom
/// implementations are responsible for it themselves.
pub trait TableContent {
    /// Number of columns in the table. Must be ≥ 1.
    fn columns(&self) -> usize;

    /// Number of rows in the table.
    fn row_count(&self) -> usize;

    /// Natural rendered width of the cell at (`row`, `col`), in terminal
    /// cells (CJK characters count as 2).
    fn natural_width(&self, row: usize, col: usize) -> usize;

    /// Whether the cell at (`row`, `col`) is truncated when its column is
    /// narrower than its natural width. Cells that wrap instead are never
    /// trimmed and have no influence on the computed widths.
    fn trim_eligible(&self, row: usize, col: usize) -> bool;
}

/// What happens to a cell whose content is wider than its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Content is truncated to the column width. The default.
    #[default]
    Trim,

    /// Content wraps onto additional lines and is never truncated.
    Wrap,
}

/// Serialized form of [`Cell`]; the cached width is derived, not stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CellRaw {
    text: String,
    #[serde(default)]
    overflow: Overflow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<usize>,
}

/// One data cell: its text, its overflow behavior, and its natural width.
///
/// The natural width is computed once at construction with Unicode width
/// rules, so repeated reads during the solver's search are O(1).
///
/// # Example
///
/// ```rust
/// use colcut::{Cell, Overflow};
///
/// let cell = Cell::new("渋谷");
/// assert_eq!(cell.natural_width(), 4);
/// assert!(cell.trim_eligible());
///
/// let notes = Cell::new("a long description").wrap();
/// assert_eq!(notes.overflow(), Overflow::Wrap);
/// assert!(!notes.trim_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CellRaw", into = "CellRaw")]
pub struct Cell {
    text: String,
    overflow: Overflow,
    natural_width: usize,
}

impl Cell {
    /// Creates a trimming cell from text, measuring its display width.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let natural_width = text.width();
        Cell {
            text,
            overflow: Overflow::Trim,
            natural_width,
        }
    }

    /// Switches the cell to wrapping overflow.
    pub fn wrap(mut self) -> Self {
        self.overflow = Overflow::Wrap;
        self
    }

    /// Overrides the measured width.
    ///
    /// For callers that render cells through their own pipeline (styling
    /// markup, custom graphemes) and already know the final display width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.natural_width = width;
        self
    }

    /// The cell's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The cell's overflow behavior.
    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    /// Natural rendered width in terminal cells.
    pub fn natural_width(&self) -> usize {
        self.natural_width
    }

    /// Whether this cell counts toward the trimmed-cell cost.
    pub fn trim_eligible(&self) -> bool {
        self.overflow == Overflow::Trim
    }
}

impl From<CellRaw> for Cell {
    fn from(raw: CellRaw) -> Self {
        let mut cell = Cell::new(raw.text);
        if raw.overflow == Overflow::Wrap {
            cell = cell.wrap();
        }
        if let Some(width) = raw.width {
            cell = cell.with_width(width);
        }
        cell
    }
}

impl From<Cell> for CellRaw {
    fn from(cell: Cell) -> Self {
        let measured = cell.text.width();
        CellRaw {
            width: (cell.natural_width != measured).then_some(cell.natural_width),
            text: cell.text,
            overflow: cell.overflow,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::new(text)
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::new(text)
    }
}

/// Serialized form of [`Content`]; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContentRaw {
    columns: usize,
    rows: Vec<Vec<Cell>>,
}

/// Table content: a fixed column count and rectangular rows of cells.
///
/// Immutable once built; construction validates that the column count is at
/// least 1 and that every row has exactly one cell per column.
///
/// # Example
///
/// ```rust
/// use colcut::{Cell, Content, TableContent};
///
/// let content = Content::builder(3)
///     .row(["id", "name", "status"])
///     .row([Cell::new("1"), Cell::new("first item"), Cell::new("ok")])
///     .build()
///     .unwrap();
///
/// assert_eq!(content.row_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContentRaw", into = "ContentRaw")]
pub struct Content {
    columns: usize,
    rows: Vec<Vec<Cell>>,
}

impl Content {
    /// Starts building content with the given column count.
    pub fn builder(columns: usize) -> ContentBuilder {
        ContentBuilder {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates content from prebuilt rows, validating shape.
    pub fn new(columns: usize, rows: Vec<Vec<Cell>>) -> Result<Self> {
        if columns == 0 {
            return Err(LayoutError::NoColumns);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(LayoutError::RowMismatch {
                    row,
                    expected: columns,
                    got: cells.len(),
                });
            }
        }
        Ok(Content { columns, rows })
    }

    /// The cell at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.rows[row][col]
    }

    /// Iterates over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

impl TableContent for Content {
    fn columns(&self) -> usize {
        self.columns
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn natural_width(&self, row: usize, col: usize) -> usize {
        self.rows[row][col].natural_width
    }

    fn trim_eligible(&self, row: usize, col: usize) -> bool {
        self.rows[row][col].trim_eligible()
    }
}

impl TryFrom<ContentRaw> for Content {
    type Error = LayoutError;

    fn try_from(raw: ContentRaw) -> Result<Self> {
        Content::new(raw.columns, raw.rows)
    }
}

impl From<Content> for ContentRaw {
    fn from(content: Content) -> Self {
        ContentRaw {
            columns: content.columns,
            rows: content.rows,
        }
    }
}

/// Builder for [`Content`].
#[derive(Debug, Clone)]
pub struct ContentBuilder {
    columns: usize,
    rows: Vec<Vec<Cell>>,
}

impl ContentBuilder {
    /// Appends a row of cells. Anything convertible to [`Cell`] works,
    /// including plain strings.
    pub fn row<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Validates shape and produces the content.
    pub fn build(self) -> Result<Content> {
        Content::new(self.columns, self.rows)
    }
}
