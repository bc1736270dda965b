//! Error types for grid construction and access

use thiserror::Error;

/// Error type for grid operations.
///
/// Every variant is a contract violation surfaced at the call site: the grid
/// never clamps a coordinate, pads a backing store, or returns a sentinel
/// value. Callers propagate these with `?` or treat them as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid was constructed with a zero row or column count
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    ZeroDimension {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
    },
    /// The backing store length disagrees with `rows * cols`
    #[error("backing store of {len} cells does not match a {rows}x{cols} grid")]
    DimensionMismatch {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Actual number of cells supplied
        len: usize,
    },
    /// A cell coordinate lies outside the grid extent
    #[error("cell ({row}, {col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Grid row count
        rows: usize,
        /// Grid column count
        cols: usize,
    },
    /// A span would cross the grid's right edge
    #[error("span of {span} starting at column {col} crosses the edge of a {cols}-column grid")]
    SpanOverflow {
        /// Start column of the span
        col: usize,
        /// Span length
        span: usize,
        /// Grid column count
        cols: usize,
    },
    /// Index or dimension arithmetic exceeded the representable range
    #[error("index arithmetic overflowed at ({row}, {col})")]
    IndexOverflow {
        /// Row operand of the failed computation
        row: usize,
        /// Column operand of the failed computation
        col: usize,
    },
}
