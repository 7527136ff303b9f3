//! Width search for table columns.
//!
//! This is a rod-cutting variant: instead of maximizing a price we minimize
//! the number of cells whose content would be trimmed, where the "cuts" are
//! column boundaries and the total rod length is the canvas width. The search
//! is exact: it considers every way of splitting the canvas into positive
//! column widths, made tractable by memoizing on (column index, remaining
//! width).

use std::collections::HashMap;

use crate::content::TableContent;
use crate::error::{LayoutError, Result};

/// Resolved widths for all columns in a table.
///
/// Produced by [`column_widths`]; entries are in table column order, each is
/// at least 1, and they sum to the canvas width they were computed for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: Vec<usize>,
}

impl ColumnWidths {
    /// Get the width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width across all columns.
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// The widths as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.widths
    }

    /// Iterates over the widths in column order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.widths.iter().copied()
    }
}

/// Uniquely identifies a subproblem in the cutting search: assign widths to
/// columns `col_idx..` using exactly `rem_width` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct CutState {
    col_idx: usize,
    rem_width: usize,
}

/// The best result for a particular [`CutState`]: the minimal trimmed-cell
/// count and the absolute cut positions (offsets from the canvas's left
/// edge) that achieve it for columns `col_idx..`.
///
/// Caching the cut positions alongside the cost is sound because the offset
/// where a state's first column starts is `cvs_width - rem_width`, a
/// function of the state alone; the optimal suffix cuts are therefore
/// identical no matter which prefix reached the state.
#[derive(Clone, Debug)]
struct BestCuts {
    cost: usize,
    cuts: Vec<usize>,
}

/// Inputs shared by every frame of the cutting recursion. The memo is owned
/// here and scoped to one [`column_widths`] call; its keys carry no content
/// or canvas identity, so it must never be reused across calls.
struct CutInputs<'a, C: TableContent> {
    content: &'a C,
    cvs_width: usize,
    columns: usize,
    best: HashMap<CutState, BestCuts>,
}

/// Number of cells in column `col_idx` that would have their content trimmed
/// if the column is `col_width` cells wide.
///
/// Wrap cells are skipped entirely; they never influence the result.
fn trimmed_rows<C: TableContent>(content: &C, col_idx: usize, col_width: usize) -> usize {
    (0..content.row_count())
        .filter(|&row| {
            content.trim_eligible(row, col_idx) && content.natural_width(row, col_idx) > col_width
        })
        .count()
}

/// Finds the minimal-cost cuts for `state`.
///
/// Candidate widths are tried in ascending order and a strict `<` keeps the
/// first minimum found, so among tied optima the one giving the current
/// column the smallest width wins. Callers rely on this being deterministic;
/// do not reorder the loop.
fn cut_canvas<C: TableContent>(inputs: &mut CutInputs<'_, C>, state: CutState) -> BestCuts {
    if let Some(hit) = inputs.best.get(&state) {
        return hit.clone();
    }

    let next_col = state.col_idx + 1;
    let best = if next_col > inputs.columns - 1 {
        // Last column: it absorbs all remaining width, nothing left to cut.
        BestCuts {
            cost: trimmed_rows(inputs.content, state.col_idx, state.rem_width),
            cuts: Vec::new(),
        }
    } else {
        let mut min_cost = usize::MAX;
        let mut min_cuts = Vec::new();

        // Offset of this column's left edge from the canvas's left edge.
        let offset = inputs.cvs_width - state.rem_width;

        // Every column after this one still needs at least one cell, which
        // bounds the candidate range; the entry precondition guarantees the
        // range is non-empty for every reachable state.
        let columns_after = inputs.columns - next_col;
        debug_assert!(state.rem_width > columns_after);

        for col_width in 1..=(state.rem_width - columns_after) {
            let cost_this = trimmed_rows(inputs.content, state.col_idx, col_width);
            let next = cut_canvas(
                inputs,
                CutState {
                    col_idx: next_col,
                    rem_width: state.rem_width - col_width,
                },
            );

            if cost_this + next.cost < min_cost {
                min_cost = cost_this + next.cost;
                let mut cuts = Vec::with_capacity(next.cuts.len() + 1);
                cuts.push(offset + col_width);
                cuts.extend(next.cuts);
                min_cuts = cuts;
            }
        }

        BestCuts {
            cost: min_cost,
            cuts: min_cuts,
        }
    };

    inputs.best.insert(state, best.clone());
    best
}

/// Computes the column widths that minimize the number of trimmed cells when
/// the table is drawn on a canvas `cvs_width` cells wide.
///
/// `cvs_width` is the data portion only, excluding any border, padding or
/// spacing. Requires `cvs_width ≥ content.columns()` so every column can
/// receive at least one cell.
///
/// # Example
///
/// ```rust
/// use colcut::{Content, column_widths};
///
/// let content = Content::builder(2)
///     .row(["id", "a much longer description"])
///     .build()
///     .unwrap();
///
/// let widths = column_widths(&content, 20).unwrap();
/// assert_eq!(widths.len(), 2);
/// assert_eq!(widths.total(), 20);
/// ```
pub fn column_widths<C: TableContent>(content: &C, cvs_width: usize) -> Result<ColumnWidths> {
    let columns = content.columns();
    if columns == 0 {
        return Err(LayoutError::NoColumns);
    }
    if cvs_width < columns {
        return Err(LayoutError::InsufficientWidth {
            columns,
            available: cvs_width,
        });
    }

    let mut inputs = CutInputs {
        content,
        cvs_width,
        columns,
        best: HashMap::new(),
    };
    let best = cut_canvas(
        &mut inputs,
        CutState {
            col_idx: 0,
            rem_width: cvs_width,
        },
    );

    // Cut positions are absolute, so consecutive deltas are the widths; the
    // last column is never cut and absorbs the remainder.
    let mut widths = Vec::with_capacity(columns);
    let mut last = 0;
    for cut in &best.cuts {
        widths.push(cut - last);
        last = *cut;
    }
    widths.push(cvs_width - last);

    Ok(ColumnWidths { widths })
}

#[cfg(test)]
pub(crate) fn total_trimmed<C: TableContent>(content: &C, widths: &[usize]) -> usize {
    widths
        .iter()
        .enumerate()
        .map(|(col, &w)| trimmed_rows(content, col, w))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Cell, Content};

    /// Content where every cell trims, from a grid of natural widths.
    fn trimming_content(widths: &[Vec<usize>]) -> Content {
        let columns = widths[0].len();
        let rows = widths
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&w| Cell::new("x").with_width(w))
                    .collect::<Vec<_>>()
            })
            .collect();
        Content::new(columns, rows).unwrap()
    }

    /// Minimal trimmed-cell count over every composition of `cvs_width`
    /// into positive column widths. Independent of the solver.
    fn brute_force_min(content: &Content, cvs_width: usize) -> usize {
        fn go(content: &Content, col: usize, rem: usize, acc: usize, best: &mut usize) {
            let columns = crate::content::TableContent::columns(content);
            if col == columns - 1 {
                *best = (*best).min(acc + trimmed_rows(content, col, rem));
                return;
            }
            let after = columns - col - 1;
            for w in 1..=(rem - after) {
                go(
                    content,
                    col + 1,
                    rem - w,
                    acc + trimmed_rows(content, col, w),
                    best,
                );
            }
        }
        let mut best = usize::MAX;
        go(content, 0, cvs_width, 0, &mut best);
        best
    }

    #[test]
    fn single_column_absorbs_whole_canvas() {
        let content = trimming_content(&[vec![5]]);
        let widths = column_widths(&content, 7).unwrap();
        assert_eq!(widths.as_slice(), &[7]);
    }

    #[test]
    fn fits_without_trimming_when_possible() {
        // Natural widths [4, 4] fit in 10 cells with room to spare; any
        // result must trim nothing.
        let content = trimming_content(&[vec![4, 4], vec![3, 4]]);
        let widths = column_widths(&content, 10).unwrap();

        assert_eq!(widths.total(), 10);
        assert_eq!(total_trimmed(&content, widths.as_slice()), 0);
    }

    #[test]
    fn ties_resolve_to_smallest_leading_widths() {
        // Every split of 10 over two one-cell columns costs zero, so the
        // first candidate tried (width 1 for the leading column) wins.
        let content = trimming_content(&[vec![1, 1]]);
        let widths = column_widths(&content, 10).unwrap();
        assert_eq!(widths.as_slice(), &[1, 9]);
    }

    #[test]
    fn squeezed_three_columns_match_brute_force() {
        // One row of natural widths [3, 3, 3] on a 6-cell canvas: 9 cells
        // would be needed to avoid trimming, so some trimming is forced.
        // [3, 2, 1] trims two cells; no assignment does better.
        let content = trimming_content(&[vec![3, 3, 3]]);
        let widths = column_widths(&content, 6).unwrap();

        let expected = brute_force_min(&content, 6);
        assert_eq!(expected, 2);
        assert_eq!(total_trimmed(&content, widths.as_slice()), expected);
        assert_eq!(widths.total(), 6);
        assert!(widths.iter().all(|w| w >= 1));
    }

    #[test]
    fn uneven_rows_match_brute_force() {
        let content = trimming_content(&[vec![8, 2, 5], vec![1, 9, 4], vec![6, 6, 1], vec![2, 2, 12]]);
        for cvs_width in 3..=20 {
            let widths = column_widths(&content, cvs_width).unwrap();
            assert_eq!(
                total_trimmed(&content, widths.as_slice()),
                brute_force_min(&content, cvs_width),
                "width {cvs_width}"
            );
        }
    }

    #[test]
    fn wrap_cells_do_not_influence_widths() {
        let plain = Content::builder(2)
            .row([Cell::new("x").with_width(4), Cell::new("x").with_width(6)])
            .build()
            .unwrap();
        // Same table plus a wrap cell with an absurd natural width.
        let with_wrap = Content::builder(2)
            .row([Cell::new("x").with_width(4), Cell::new("x").with_width(6)])
            .row([
                Cell::new("x").with_width(500).wrap(),
                Cell::new("x").with_width(2),
            ])
            .build()
            .unwrap();

        assert_eq!(
            column_widths(&plain, 9).unwrap().as_slice(),
            // The extra row's second cell is narrower than the existing one,
            // so the optimum is unchanged.
            column_widths(&with_wrap, 9).unwrap().as_slice(),
        );
    }

    #[test]
    fn insufficient_width_is_reported() {
        let content = trimming_content(&[vec![1, 1, 1]]);
        let err = column_widths(&content, 2).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InsufficientWidth {
                columns: 3,
                available: 2,
            }
        );
    }

    #[test]
    fn exact_minimum_gives_every_column_one_cell() {
        let content = trimming_content(&[vec![5, 5, 5, 5]]);
        let widths = column_widths(&content, 4).unwrap();
        assert_eq!(widths.as_slice(), &[1, 1, 1, 1]);
    }

    #[test]
    fn column_widths_accessors() {
        let content = trimming_content(&[vec![2, 2, 2]]);
        let widths = column_widths(&content, 6).unwrap();

        assert_eq!(widths.len(), 3);
        assert!(!widths.is_empty());
        assert_eq!(widths.total(), 6);
        assert_eq!(widths.get(0), Some(2));
        assert_eq!(widths.get(3), None);
        assert_eq!(widths.iter().sum::<usize>(), 6);
    }
}
