//! Panel addressing for multi-panel figures
//!
//! A figure owns a fixed `rows x cols` grid of panels, stored row-major. How a
//! `(row, col)` pair maps onto that storage depends on the grid's shape:
//!
//! | shape          | index used      |
//! |----------------|-----------------|
//! | 1x1            | none, always the sole panel |
//! | 1xN            | `col` only      |
//! | Nx1            | `row` only      |
//! | NxM            | `(row, col)`    |
//!
//! The ignored coordinate in the single-row and single-column cases may hold any value.
use crate::error::{Error, Result};

/// Shape of a panel grid, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridShape {
    /// A single panel
    Single,

    /// One row of `n > 1` panels
    Row(usize),

    /// One column of `n > 1` panels
    Column(usize),

    /// A general `rows x cols` grid, both greater than one
    Full {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },
}
impl GridShape {
    /// Classifies a `rows x cols` grid.
    ///
    /// # Errors
    /// Returns [`Error::EmptyGrid`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        match (rows, cols) {
            (0, _) | (_, 0) => Err(Error::EmptyGrid { rows, cols }),
            (1, 1) => Ok(Self::Single),
            (1, n) => Ok(Self::Row(n)),
            (n, 1) => Ok(Self::Column(n)),
            (rows, cols) => Ok(Self::Full { rows, cols }),
        }
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        match self {
            Self::Single | Self::Row(_) => 1,
            Self::Column(n) => *n,
            Self::Full { rows, .. } => *rows,
        }
    }

    /// Number of columns
    #[must_use]
    pub fn cols(&self) -> usize {
        match self {
            Self::Single | Self::Column(_) => 1,
            Self::Row(n) => *n,
            Self::Full { cols, .. } => *cols,
        }
    }

    /// Total number of panels
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows() * self.cols()
    }

    /// A grid is never empty; present for symmetry with [`GridShape::len`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Resolves `(row, col)` to a row-major storage index.
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] if the coordinate used by this shape is out of range.
    pub fn resolve(&self, row: usize, col: usize) -> Result<usize> {
        let index = match *self {
            Self::Single => Some(0),
            Self::Row(n) => (col < n).then_some(col),
            Self::Column(n) => (row < n).then_some(row),
            Self::Full { rows, cols } => (row < rows && col < cols).then_some(row * cols + col),
        };

        index.ok_or(Error::PanelOutOfBounds {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        })
    }

    /// Returns the `(row, col)` position of a storage index
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols(), index % self.cols())
    }
}
