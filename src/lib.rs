//! Grid primitives for Advent of Code style puzzle solvers
//!
//! Puzzle inputs are usually small rectangular character fields that get
//! scanned for patterns, walked cell by cell, or carved into regions. This
//! crate provides the two reusable pieces those solvers keep needing:
//!
//! - [`Grid`]: a fixed-size row-major 2-D array with indexed access,
//!   contiguous-run detection ([`Grid::find_matches`]), neighborhood
//!   enumeration with a configurable margin ([`Grid::adjacent`]), bounded
//!   sub-grid extraction ([`Grid::subset`]), and orthogonal stepping
//!   ([`Grid::cross`]). Positions and horizontal runs are described by
//!   [`Location`] values.
//! - [`expand`]: a lazy depth-first unrolling of a start value through a
//!   successor function, for following mapping chains and recursive scoring
//!   cascades without materializing the whole closure up front.
//!
//! # Quick Example
//!
//! ```
//! use aoc_grid::{Grid, Location};
//!
//! let grid = Grid::from_lines(["..#", ".#.", "#.."], |c| c).unwrap();
//!
//! let marks: Vec<Location> = grid.find_matches(false, |c| *c == '#').collect();
//! assert_eq!(
//!     marks,
//!     vec![Location::new(0, 2), Location::new(1, 1), Location::new(2, 0)]
//! );
//!
//! // every mark sits diagonally next to the one before it
//! let touching = grid
//!     .adjacent(marks[1])
//!     .unwrap()
//!     .filter(|(_, c)| **c == '#')
//!     .count();
//! assert_eq!(touching, 2);
//! ```
//!
//! # Key Concepts
//!
//! ## Locations and spans
//!
//! A [`Location`] names a row, a start column, and a span of contiguous
//! columns (1 for a single cell). Grid queries produce and consume them;
//! they are plain ordered values with no tie to a particular grid.
//!
//! ## Lazy queries
//!
//! Every sequence-producing operation is a pull-based iterator: nothing past
//! the last consumed element has been computed, so stopping a scan after the
//! first hit costs nothing extra, and [`expand`] can walk chains with no
//! predetermined end.
//!
//! ## Failing loudly
//!
//! Out-of-bounds access, mismatched backing stores, spans crossing a row
//! edge, and overflowing index arithmetic are all surfaced as [`GridError`]
//! at the call site. The grid never clamps, pads, or silently wraps.

mod error;
mod expand;
mod grid;
mod location;

pub use error::GridError;
pub use expand::{Expand, expand};
pub use grid::{Grid, Matches};
pub use location::Location;
