//! A single addressable plotting region
use std::ops::Range;

use crate::{
    diagnostic::{Diagnostic, DiagnosticKind, Outcome},
    series::Series,
    style::LegendLocation,
    value::{is_valid_range, union},
};

/// Panel axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

/// Legend configuration for a panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Legend {
    /// Placement within the panel
    pub location: LegendLocation,
    /// Font size in points
    pub font_size: f64,
}

/// Text drawn at a data coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Text to draw
    pub text: String,
    /// Position in data coordinates
    pub position: (f64, f64),
}

/// One plotting region of a figure
///
/// Series are append-only; they are drawn in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    x_label: String,
    y_label: String,
    x_limit: Option<Range<f64>>,
    y_limit: Option<Range<f64>>,
    tick_font_size: f64,
    legend: Option<Legend>,
    annotations: Vec<Annotation>,
    series: Vec<Series>,
}
impl Panel {
    pub(crate) fn new(x_label: &str, y_label: &str, tick_font_size: f64) -> Self {
        Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_limit: None,
            y_limit: None,
            tick_font_size,
            legend: None,
            annotations: Vec::new(),
            series: Vec::new(),
        }
    }

    /// Axis label
    #[must_use]
    pub fn label(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x_label,
            Axis::Y => &self.y_label,
        }
    }

    /// Sets an axis label
    pub fn set_label(&mut self, axis: Axis, text: impl Into<String>) {
        match axis {
            Axis::X => self.x_label = text.into(),
            Axis::Y => self.y_label = text.into(),
        }
    }

    /// Explicit axis limit, if one was set
    #[must_use]
    pub fn limit(&self, axis: Axis) -> Option<&Range<f64>> {
        match axis {
            Axis::X => self.x_limit.as_ref(),
            Axis::Y => self.y_limit.as_ref(),
        }
    }

    /// Sets an explicit axis limit.
    ///
    /// Non-finite or non-increasing ranges are rejected with an
    /// [`DiagnosticKind::InvalidAxisRange`] diagnostic; the previous limit is kept.
    pub fn set_limit(&mut self, axis: Axis, range: Range<f64>) -> Outcome<()> {
        if !is_valid_range(&range) {
            let name = match axis {
                Axis::X => "x",
                Axis::Y => "y",
            };
            return Outcome::with_diagnostics(
                (),
                vec![Diagnostic::raise(
                    DiagnosticKind::InvalidAxisRange,
                    format!(
                        "Unable to set {name} limits to {}..{}; keeping previous range",
                        range.start, range.end
                    ),
                )],
            );
        }

        match axis {
            Axis::X => self.x_limit = Some(range),
            Axis::Y => self.y_limit = Some(range),
        }
        Outcome::clean(())
    }

    /// Tick label font size in points
    #[must_use]
    pub fn tick_font_size(&self) -> f64 {
        self.tick_font_size
    }

    /// Legend configuration, if the legend is shown
    #[must_use]
    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    /// Shows the legend with the given configuration
    pub fn show_legend(&mut self, legend: Legend) {
        self.legend = Some(legend);
    }

    /// Text annotations, in insertion order
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Adds a text annotation
    pub fn annotate(&mut self, text: impl Into<String>, position: (f64, f64)) {
        self.annotations.push(Annotation {
            text: text.into(),
            position,
        });
    }

    /// Series in drawing order
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Appends a series
    pub fn push_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Extent of all data along an axis, including error bars
    #[must_use]
    pub fn data_bounds(&self, axis: Axis) -> Option<Range<f64>> {
        self.series.iter().fold(None, |acc, s| {
            let bounds = match axis {
                Axis::X => s.x_bounds(),
                Axis::Y => s.y_bounds(),
            };
            union(acc, bounds)
        })
    }
}
