//! Error types for figure construction, fitting and rendering
//!
//! Cosmetic failures (a bad axis range, a missing CSV column, a failed save) are
//! never errors; they are reported as [`crate::diagnostic::Diagnostic`]s. The
//! variants here are contract violations that make the requested operation
//! meaningless.

use plotters::drawing::DrawingAreaErrorKind;

use crate::diagnostic::Diagnostic;

/// Errors that can occur while building, fitting or rendering a figure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A figure needs at least one row and one column.
    #[error("Figure grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid {
        /// Requested number of rows
        rows: usize,
        /// Requested number of columns
        cols: usize,
    },

    /// Figure dimensions must be finite and positive.
    #[error("Invalid figure size {width}x{height} inches")]
    InvalidFigureSize {
        /// Requested width in inches
        width: f64,
        /// Requested height in inches
        height: f64,
    },

    /// The requested panel does not exist in this grid.
    #[error("Panel ({row}, {col}) is outside the {rows}x{cols} grid")]
    PanelOutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Rows in the grid
        rows: usize,
        /// Columns in the grid
        cols: usize,
    },

    /// Two sequences that must pair up element-wise have different lengths.
    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Which sequence was wrong
        what: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Cannot perform curve fitting because there is no data.
    #[error("No data available for fitting")]
    NoData,

    /// The requested polynomial degree is too high for the dataset.
    ///
    /// The degree must be less than the number of data points.
    #[error("Polynomial degree `{degree}` is too high for {points} data points")]
    DegreeTooHigh {
        /// Requested degree
        degree: usize,
        /// Number of points available
        points: usize,
    },

    /// A fitted curve needs at least two evaluation points.
    #[error("Fit density must be at least 2 (got {0})")]
    InvalidDensity(usize),

    /// The input contains NaN or infinite values.
    #[error("Data contains non-finite values")]
    NonFiniteData,

    /// Min-max normalization of a series whose values are all equal.
    #[error("Cannot normalize a constant series (every value is {0})")]
    ConstantSeries(f64),

    /// Failed to solve the algebraic system during fitting.
    #[error("Failed to solve: {0}")]
    Algebra(&'static str),

    /// Error drawing the figure
    #[error("Error drawing figure: {0}")]
    Draw(#[from] DrawingAreaErrorKind<std::io::Error>),

    /// Error parsing the rendered SVG for rasterization
    #[cfg(feature = "png")]
    #[error("Rendering error: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    /// Error encoding or writing the PNG
    #[error("PNG encoding error: {0}")]
    PngEncode(String),

    /// Raster resolution must be finite and positive.
    #[error("Invalid resolution {0} dpi")]
    InvalidResolution(f64),

    /// The raster image would have a zero or unrepresentable dimension.
    #[error("Cannot create a {width}x{height} pixel image")]
    InvalidImageSize {
        /// Requested width in pixels
        width: f64,
        /// Requested height in pixels
        height: f64,
    },

    /// The requested output format was compiled out.
    #[error("{0} export requires the `{1}` feature")]
    FormatDisabled(&'static str, &'static str),

    /// Error writing the output file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more diagnostics were escalated with [`crate::Outcome::into_result`].
    #[error("{} diagnostic(s) raised; first: {}", .0.len(), .0.first().map(ToString::to_string).unwrap_or_default())]
    Diagnostics(Vec<Diagnostic>),
}

/// Result type for figure operations
pub type Result<T> = std::result::Result<T, Error>;
