//! Plotted data series
use std::ops::Range;

use crate::{
    error::{Error, Result},
    style::Style,
    value::{union, Bounds},
};

/// Per-point error offsets
///
/// Bars extend from `value - lower[i]` to `value + upper[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorBounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}
impl ErrorBounds {
    /// The same offset below and above each point
    #[must_use]
    pub fn symmetric(error: Vec<f64>) -> Self {
        Self {
            lower: error.clone(),
            upper: error,
        }
    }

    /// Separate offsets below and above each point
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the two vectors differ in length.
    pub fn asymmetric(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(Error::LengthMismatch {
                what: "upper error bounds",
                expected: lower.len(),
                actual: upper.len(),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Number of points covered
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// True if there are no bounds
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Offsets below each point
    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    /// Offsets above each point
    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    /// Absolute `(min, max)` of each bar around `values`
    pub fn spans<'a>(&'a self, values: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
        values
            .iter()
            .zip(self.lower.iter().zip(&self.upper))
            .map(|(v, (lo, hi))| (v - lo, v + hi))
    }
}

/// One sequence of `(x, y)` points drawn on a panel
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    label: Option<String>,
    x_errors: Option<ErrorBounds>,
    y_errors: Option<ErrorBounds>,
    style: Style,
}
impl Series {
    /// Creates a series from paired coordinates
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if `x` and `y` differ in length.
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self> {
        let (x, y) = (x.into(), y.into());
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                what: "y values",
                expected: x.len(),
                actual: y.len(),
            });
        }

        Ok(Self {
            x,
            y,
            label: None,
            x_errors: None,
            y_errors: None,
            style: Style::default(),
        })
    }

    /// Sets the legend label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the rendering style
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Attaches horizontal error bars
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the bounds do not cover every point.
    pub fn with_x_errors(mut self, errors: ErrorBounds) -> Result<Self> {
        self.check_bounds("x error bounds", &errors)?;
        self.x_errors = Some(errors);
        Ok(self)
    }

    /// Attaches vertical error bars
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] if the bounds do not cover every point.
    pub fn with_y_errors(mut self, errors: ErrorBounds) -> Result<Self> {
        self.check_bounds("y error bounds", &errors)?;
        self.y_errors = Some(errors);
        Ok(self)
    }

    fn check_bounds(&self, what: &'static str, errors: &ErrorBounds) -> Result<()> {
        if errors.len() == self.len() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                what,
                expected: self.len(),
                actual: errors.len(),
            })
        }
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// X coordinates
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y coordinates
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Iterates `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Legend label, if any
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Rendering style
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Horizontal error bounds
    #[must_use]
    pub fn x_errors(&self) -> Option<&ErrorBounds> {
        self.x_errors.as_ref()
    }

    /// Vertical error bounds
    #[must_use]
    pub fn y_errors(&self) -> Option<&ErrorBounds> {
        self.y_errors.as_ref()
    }

    /// X extent, including error bars
    #[must_use]
    pub fn x_bounds(&self) -> Option<Range<f64>> {
        extent(&self.x, self.x_errors.as_ref())
    }

    /// Y extent, including error bars
    #[must_use]
    pub fn y_bounds(&self) -> Option<Range<f64>> {
        extent(&self.y, self.y_errors.as_ref())
    }
}

fn extent(values: &[f64], errors: Option<&ErrorBounds>) -> Option<Range<f64>> {
    let bars = errors.and_then(|e| {
        let ends: Vec<f64> = e.spans(values).flat_map(|(lo, hi)| [lo, hi]).collect();
        ends.bounds()
    });
    union(values.bounds(), bars)
}
