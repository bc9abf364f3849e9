//! Site percolation on an `n`x`n` grid, backed by weighted union-find.
//!
//! ```
//! use percolation::PercolationGrid;
//!
//! let mut grid = PercolationGrid::new(3)?;
//! for row in 0..3 {
//!     grid.open(row, 1)?;
//! }
//! assert!(grid.percolates());
//! assert!(grid.is_connected_to_top(2, 1)?);
//! # Ok::<(), percolation::Error>(())
//! ```

pub mod disjoint_set;
pub mod error;
pub mod grid;

pub use disjoint_set::DisjointSet;
pub use error::{Error, Result};
pub use grid::{Dir, PercolationGrid, Site};
