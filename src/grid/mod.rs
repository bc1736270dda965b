//! Row-major 2-D grid with region and neighborhood queries.
//!
//! [`Grid`] owns a flat backing store of `rows * cols` cells and addresses it
//! arithmetically (`index = row * cols + col`), which avoids per-row
//! allocation and matches how puzzle grids are scanned. All dimension and
//! index arithmetic is overflow-checked so addressing errors fail loudly
//! instead of wrapping.
//!
//! The spatial queries speak [`Location`]: [`Grid::find_matches`] produces
//! locations for matching cells or maximal horizontal runs of them,
//! [`Grid::adjacent`] enumerates the cells within a Chebyshev margin of a
//! location's footprint, and [`Grid::subset`] copies that footprint out as an
//! independent grid.
//!
//! # Example
//!
//! Scanning an engine schematic for part numbers next to a symbol:
//!
//! ```
//! use aoc_grid::Grid;
//!
//! let schematic = Grid::from_lines(["467..114..", "...*......"], |c| c).unwrap();
//!
//! let total: u32 = schematic
//!     .find_matches(true, |c| c.is_ascii_digit())
//!     .filter(|number| {
//!         schematic
//!             .adjacent(*number)
//!             .unwrap()
//!             .any(|(_, c)| *c != '.' && !c.is_ascii_digit())
//!     })
//!     .map(|number| {
//!         schematic.get_span(number).unwrap().iter().collect::<String>()
//!             .parse::<u32>().unwrap()
//!     })
//!     .sum();
//!
//! assert_eq!(total, 467);
//! ```

#[cfg(test)]
mod tests;

use std::cmp::min;

use itertools::Itertools;

use crate::error::GridError;
use crate::location::Location;

/// Line separator used by [`Grid::render`].
#[cfg(windows)]
const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
const LINE_SEPARATOR: &str = "\n";

/// A fixed-size rectangular array of cells of a single element type.
///
/// Cells are stored row-major in one contiguous allocation whose length
/// always equals `rows * cols`; a mismatched backing store is rejected at
/// construction. Individual cells are mutable in place, but the grid is
/// never resized.
///
/// `Clone` produces a deep copy with an independent backing store, so
/// mutating the original never changes the copy and vice versa.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

/// Overflow-checked `rows * cols`, rejecting empty grids.
fn checked_area(rows: usize, cols: usize) -> Result<usize, GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::ZeroDimension { rows, cols });
    }
    rows.checked_mul(cols)
        .ok_or(GridError::IndexOverflow { row: rows, col: cols })
}

impl<T: Clone> Grid<T> {
    /// Creates a `rows x cols` grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self, GridError> {
        let len = checked_area(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; len],
        })
    }
}

impl<T> Grid<T> {
    /// Creates a grid from an existing row-major backing store.
    ///
    /// Fails with [`GridError::DimensionMismatch`] if `cells.len()` is not
    /// exactly `rows * cols`; the store is never truncated or padded.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        let len = checked_area(rows, cols)?;
        if cells.len() != len {
            return Err(GridError::DimensionMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Creates a grid from one string per row, mapping each character to a
    /// cell value.
    ///
    /// The grid does no parsing of its own beyond walking the characters;
    /// `map_char` decides what a cell is, typically producing a closed enum
    /// of tile variants. Rows of unequal length and empty input are
    /// construction errors.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_grid::Grid;
    ///
    /// #[derive(Clone, PartialEq)]
    /// enum Tile {
    ///     Ground,
    ///     Pipe(char),
    /// }
    ///
    /// let maze = Grid::from_lines(
    ///     [".F7.", ".||.", ".LJ."],
    ///     |c| if c == '.' { Tile::Ground } else { Tile::Pipe(c) },
    /// )
    /// .unwrap();
    /// assert_eq!(maze.rows(), 3);
    /// assert_eq!(maze.cols(), 4);
    /// ```
    pub fn from_lines<'a, I, F>(lines: I, mut map_char: F) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(char) -> T,
    {
        let mut rows = 0;
        let mut cols = 0;
        let mut cells = Vec::new();
        for line in lines {
            let before = cells.len();
            cells.extend(line.chars().map(&mut map_char));
            let width = cells.len() - before;
            if rows == 0 {
                cols = width;
            } else if width != cols {
                return Err(GridError::DimensionMismatch {
                    rows: rows + 1,
                    cols,
                    len: cells.len(),
                });
            }
            rows += 1;
        }
        if rows == 0 || cols == 0 {
            return Err(GridError::ZeroDimension { rows, cols });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index of `(row, col)`, bounds- and overflow-checked.
    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        row.checked_mul(self.cols)
            .and_then(|base| base.checked_add(col))
            .ok_or(GridError::IndexOverflow { row, col })
    }

    /// Unchecked cell access for internal scans.
    ///
    /// Callers guarantee `row < rows` and `col < cols`; `rows * cols` was
    /// overflow-checked at construction, so the index cannot wrap.
    fn cell(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.cols + col]
    }

    /// Returns the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    /// Returns a mutable reference to the cell at `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, GridError> {
        let idx = self.index(row, col)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrites the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Returns the `location.span` consecutive cells starting at
    /// `(location.row, location.col)`.
    ///
    /// A span is contiguous in the backing store, so the result is a slice.
    /// Fails with [`GridError::SpanOverflow`] if the span would cross the
    /// grid's right edge.
    pub fn get_span(&self, location: Location) -> Result<&[T], GridError> {
        let start = self.index(location.row, location.col)?;
        let end_col = location
            .col
            .checked_add(location.span)
            .ok_or(GridError::IndexOverflow {
                row: location.row,
                col: location.col,
            })?;
        if end_col > self.cols {
            return Err(GridError::SpanOverflow {
                col: location.col,
                span: location.span,
                cols: self.cols,
            });
        }
        Ok(&self.cells[start..start + location.span])
    }

    /// Returns one full row as a slice, in column order.
    pub fn row(&self, row: usize) -> Result<&[T], GridError> {
        let start = self.index(row, 0)?;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Scans the grid row-major for cells satisfying `predicate`.
    ///
    /// The returned iterator is lazy and finite, and yields locations ordered
    /// by increasing row then increasing column. Calling `find_matches`
    /// again produces a fresh scan.
    ///
    /// With `merge_contiguous` set, each maximal run of horizontally adjacent
    /// matching cells within one row becomes a single [`Location`] whose
    /// `span` is the run length; a run touching the row's right edge is
    /// flushed at end of row. Runs never continue across a row boundary.
    /// Without it, every matching cell is its own span-1 location.
    ///
    /// # Example
    ///
    /// ```
    /// use aoc_grid::{Grid, Location};
    ///
    /// let grid = Grid::from_lines([".##.##."], |c| c).unwrap();
    /// let runs: Vec<_> = grid.find_matches(true, |c| *c == '#').collect();
    /// assert_eq!(
    ///     runs,
    ///     vec![Location::with_span(0, 1, 2), Location::with_span(0, 4, 2)]
    /// );
    /// ```
    pub fn find_matches<P>(&self, merge_contiguous: bool, predicate: P) -> Matches<'_, T, P>
    where
        P: FnMut(&T) -> bool,
    {
        Matches {
            grid: self,
            predicate,
            merge_contiguous,
            row: 0,
            col: 0,
            run_start: None,
        }
    }

    /// Enumerates the cells within Chebyshev distance 1 of `location`.
    ///
    /// Shorthand for [`adjacent_with_margin`](Self::adjacent_with_margin)
    /// with a margin of 1; a span-1 location at an interior cell yields its
    /// 8 surrounding neighbors.
    pub fn adjacent<'a>(
        &'a self,
        location: Location,
    ) -> Result<impl Iterator<Item = (Location, &'a T)> + 'a, GridError> {
        self.adjacent_with_margin(location, 1)
    }

    /// Enumerates every cell within Chebyshev distance `margin` of the
    /// rectangular footprint covered by `location`, clipped to the grid.
    ///
    /// Each neighbor is yielded as a span-1 [`Location`] paired with its
    /// cell value. Cells inside the location's own occupied span are never
    /// yielded, but same-row cells outside the span are. Enumeration order:
    /// rows above the location (row-major), same-row cells left of the span,
    /// same-row cells right of the span, rows below (row-major).
    ///
    /// The location itself must lie within the grid.
    pub fn adjacent_with_margin<'a>(
        &'a self,
        location: Location,
        margin: usize,
    ) -> Result<impl Iterator<Item = (Location, &'a T)> + 'a, GridError> {
        self.get_span(location)?;
        let Location { row, col, .. } = location;
        let end_incl = location.end_col_inclusive();
        let min_row = row.saturating_sub(margin);
        let max_row = min(self.rows - 1, row.saturating_add(margin));
        let min_col = col.saturating_sub(margin);
        let max_col = min(self.cols - 1, end_incl.saturating_add(margin));

        let pair = move |r: usize, c: usize| (Location::new(r, c), self.cell(r, c));

        let above = (min_row..row).flat_map(move |r| (min_col..=max_col).map(move |c| pair(r, c)));
        let before = (min_col..col).map(move |c| pair(row, c));
        let after = (end_incl + 1..=max_col).map(move |c| pair(row, c));
        let below =
            (row + 1..=max_row).flat_map(move |r| (min_col..=max_col).map(move |c| pair(r, c)));

        Ok(above.chain(before).chain(after).chain(below))
    }

    /// The up-to-4 orthogonal neighbors of the location's anchor cell, in
    /// north, east, south, west order, each included only if in bounds.
    pub fn cross(&self, location: Location) -> Result<impl Iterator<Item = Location>, GridError> {
        self.index(location.row, location.col)?;
        let Location { row, col, .. } = location;
        let north = (row > 0).then(|| Location::new(row - 1, col));
        let east = (col + 1 < self.cols).then(|| Location::new(row, col + 1));
        let south = (row + 1 < self.rows).then(|| Location::new(row + 1, col));
        let west = (col > 0).then(|| Location::new(row, col - 1));
        Ok([north, east, south, west].into_iter().flatten())
    }

    /// Copies the rectangular region within `margin` of `location` into a
    /// new, independent grid.
    ///
    /// The footprint is the same one [`adjacent_with_margin`](Self::adjacent_with_margin)
    /// walks, clipped to the grid's bounds, except that the row range is
    /// symmetric around `location.row`: the location's own row (span cells
    /// included) is part of the extracted region. Mutating the returned grid
    /// never affects the source.
    pub fn subset(&self, location: Location, margin: usize) -> Result<Grid<T>, GridError>
    where
        T: Clone,
    {
        self.get_span(location)?;
        let Location { row, col, span } = location;
        let min_row = row.saturating_sub(margin);
        let max_row = min(self.rows, row.saturating_add(margin).saturating_add(1));
        let min_col = col.saturating_sub(margin);
        let max_col = min(
            self.cols,
            col.saturating_add(span).saturating_add(margin),
        );

        let sub_rows = max_row - min_row;
        let sub_cols = max_col - min_col;
        let mut cells = Vec::with_capacity(sub_rows * sub_cols);
        for r in min_row..max_row {
            let start = r * self.cols + min_col;
            cells.extend_from_slice(&self.cells[start..start + sub_cols]);
        }
        Grid::from_vec(sub_rows, sub_cols, cells)
    }
}

impl<T> Grid<T> {
    /// Renders the grid as text, one line per row, cells concatenated with
    /// no separator, rows joined by the platform line separator.
    ///
    /// A formatting helper for eyeballing intermediate state; never used for
    /// computation.
    pub fn render<F>(&self, mut cell_to_text: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        (0..self.rows)
            .map(|r| {
                let start = r * self.cols;
                self.cells[start..start + self.cols]
                    .iter()
                    .map(&mut cell_to_text)
                    .collect::<String>()
            })
            .join(LINE_SEPARATOR)
    }
}

/// Lazy row-major scan over matching cells or runs, created by
/// [`Grid::find_matches`].
///
/// Nothing past the last yielded location has been inspected; dropping the
/// iterator early stops the scan.
pub struct Matches<'a, T, P> {
    grid: &'a Grid<T>,
    predicate: P,
    merge_contiguous: bool,
    row: usize,
    col: usize,
    run_start: Option<usize>,
}

impl<'a, T, P> Iterator for Matches<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        while self.row < self.grid.rows {
            while self.col < self.grid.cols {
                let col = self.col;
                self.col += 1;
                let matched = (self.predicate)(self.grid.cell(self.row, col));
                if self.merge_contiguous {
                    match (matched, self.run_start) {
                        (true, None) => self.run_start = Some(col),
                        (false, Some(start)) => {
                            self.run_start = None;
                            return Some(Location::with_span(self.row, start, col - start));
                        }
                        _ => {}
                    }
                } else if matched {
                    return Some(Location::new(self.row, col));
                }
            }
            // end of row: flush a run touching the right edge
            let row = self.row;
            self.row += 1;
            self.col = 0;
            if let Some(start) = self.run_start.take() {
                return Some(Location::with_span(row, start, self.grid.cols - start));
            }
        }
        None
    }
}
