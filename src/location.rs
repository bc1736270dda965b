//! Grid coordinate descriptors

/// A position or horizontal run of cells in a [`Grid`](crate::Grid).
///
/// A `Location` identifies either a single cell (`span == 1`) or a run of
/// `span` contiguous cells on one row, covering columns `[col, col + span)`.
/// It is a plain value: grid queries hand them out and accept them back, but
/// a grid never stores one.
///
/// The ordering is by `row`, then `col`, then `span`, all ascending, which is
/// exactly the order [`Grid::find_matches`](crate::Grid::find_matches)
/// produces results in.
///
/// # Example
///
/// ```
/// use aoc_grid::Location;
///
/// let a = Location::new(2, 5);
/// let b = Location::with_span(2, 5, 3);
/// assert!(a < b);
/// assert_eq!(b.span, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Row index
    pub row: usize,
    /// Start column of the covered span
    pub col: usize,
    /// Number of contiguous columns covered, always at least 1
    pub span: usize,
}

impl Location {
    /// Creates a single-cell location.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col, span: 1 }
    }

    /// Creates a location covering `span` contiguous columns starting at `col`.
    ///
    /// A location always covers at least its own cell, so a zero `span` is
    /// normalized to 1.
    pub fn with_span(row: usize, col: usize, span: usize) -> Self {
        Self {
            row,
            col,
            span: span.max(1),
        }
    }

    /// Last column covered by the span. A zero span counts as covering its
    /// own cell.
    pub(crate) fn end_col_inclusive(&self) -> usize {
        self.col + self.span.saturating_sub(1)
    }
}
