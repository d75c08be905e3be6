//! The figure: a fixed grid of panels with a title, fonts and a save tag
use std::{
    ops::Range,
    path::{Path, PathBuf},
};

use crate::{
    data,
    diagnostic::{Diagnostic, DiagnosticKind, Outcome},
    error::{Error, Result},
    export::{self, SaveOptions},
    fit::{FitOptions, FitResult},
    grid::GridShape,
    panel::{Axis, Legend, Panel},
    render,
    series::{ErrorBounds, Series},
    style::{LegendLocation, Style},
};

/// Options for creating a [`Figure`]
#[derive(Debug, Clone, PartialEq)]
pub struct FigureOptions {
    /// Number of panel rows
    pub rows: usize,

    /// Number of panel columns
    pub cols: usize,

    /// Figure size in inches, `(width, height)`
    pub size: (f64, f64),

    /// Title drawn above the grid; empty for none
    pub title: String,

    /// Tick label font size in points, shared by every panel
    pub axis_font_size: f64,

    /// Title font size in points
    pub title_font_size: f64,

    /// Default output filename stem
    pub tag: String,

    /// Initial x axis label of every panel
    pub x_label: String,

    /// Initial y axis label of every panel
    pub y_label: String,

    /// Initial x axis limit of every panel
    pub x_limit: Option<Range<f64>>,

    /// Initial y axis limit of every panel
    pub y_limit: Option<Range<f64>>,
}
impl Default for FigureOptions {
    fn default() -> Self {
        Self {
            rows: 1,
            cols: 1,
            size: (10.0, 6.0),
            title: String::new(),
            axis_font_size: 10.0,
            title_font_size: 12.0,
            tag: export::FALLBACK_NAME.to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            x_limit: None,
            y_limit: None,
        }
    }
}
impl FigureOptions {
    /// A `rows x cols` grid with every other option at its default
    #[must_use]
    pub fn grid(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Sets the title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the save tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Sets the size in inches
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = (width, height);
        self
    }

    /// Sets the initial axis labels
    #[must_use]
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }
}

/// A grid of panels rendered and saved as one image
///
/// Panels are addressed by `(row, col)`; see [`crate::grid`] for how indices
/// resolve in single-row and single-column grids.
///
/// ```rust
/// # use quickfig::{Figure, FigureOptions, FitOptions};
/// let mut figure = Figure::new(FigureOptions::grid(1, 2).with_title("Calibration"))
///     .unwrap()
///     .into_value();
///
/// let x = [0.0, 1.0, 2.0, 3.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
/// figure.add_series(0, 0, &x, &y, Some("raw"), None).unwrap();
///
/// let fit = figure
///     .fit_linear(0, 1, &x, &y, &FitOptions::linear().annotate_at(0.5, 8.0).returning())
///     .unwrap()
///     .into_value()
///     .unwrap();
/// assert_eq!(fit.equation, "2.0x + 3.0");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    shape: GridShape,
    panels: Vec<Panel>,
    title: String,
    size: (f64, f64),
    pixels: (u32, u32),
    axis_font_size: f64,
    title_font_size: f64,
    tag: String,
}

/// Canvas size of [`FigureOptions::default`]
const DEFAULT_PIXELS: (u32, u32) = (1000, 600);

/// Whole canvas pixels for a length in inches, if representable and non-zero
fn to_pixels(inches: f64) -> Option<u32> {
    num_traits::cast::<f64, u32>((inches * render::PIXELS_PER_INCH).round()).filter(|px| *px > 0)
}
impl Default for Figure {
    fn default() -> Self {
        Self::assemble(GridShape::Single, DEFAULT_PIXELS, FigureOptions::default()).into_value()
    }
}
impl Figure {
    /// Creates a figure.
    ///
    /// Invalid initial axis limits are reported as diagnostics and leave the
    /// panels on automatic ranges.
    ///
    /// # Errors
    /// - [`Error::EmptyGrid`]: zero rows or columns.
    /// - [`Error::InvalidFigureSize`]: a size that is not finite and positive,
    ///   or whose canvas would not fit in `u32` pixels.
    pub fn new(options: FigureOptions) -> Result<Outcome<Self>> {
        let shape = GridShape::new(options.rows, options.cols)?;

        let (width, height) = options.size;
        let pixels = match (to_pixels(width), to_pixels(height)) {
            (Some(w), Some(h)) if width.is_finite() && height.is_finite() => (w, h),
            _ => return Err(Error::InvalidFigureSize { width, height }),
        };

        tracing::debug!(rows = options.rows, cols = options.cols, tag = %options.tag, "created figure");
        Ok(Self::assemble(shape, pixels, options))
    }

    /// Builds the panels from validated options, applying initial limits leniently
    fn assemble(shape: GridShape, pixels: (u32, u32), options: FigureOptions) -> Outcome<Self> {
        let mut outcome = Outcome::clean(());
        let mut panels = Vec::with_capacity(shape.len());
        for _ in 0..shape.len() {
            let mut panel = Panel::new(&options.x_label, &options.y_label, options.axis_font_size);
            for (axis, limit) in [(Axis::X, &options.x_limit), (Axis::Y, &options.y_limit)] {
                if let Some(limit) = limit {
                    for diagnostic in panel.set_limit(axis, limit.clone()).into_parts().1 {
                        outcome.push(diagnostic);
                    }
                }
            }
            panels.push(panel);
        }

        outcome.map(|()| Self {
            shape,
            panels,
            title: options.title,
            size: options.size,
            pixels,
            axis_font_size: options.axis_font_size,
            title_font_size: options.title_font_size,
            tag: options.tag,
        })
    }

    /// Creates a single-panel figure holding one series.
    ///
    /// With `legend`, the panel shows a legend at [`LegendLocation::Best`].
    ///
    /// # Errors
    /// Any error from [`Figure::new`], or [`Error::LengthMismatch`] if `x` and `y` differ in length.
    pub fn standalone(x: &[f64], y: &[f64], options: FigureOptions, legend: bool) -> Result<Outcome<Self>> {
        let options = FigureOptions {
            rows: 1,
            cols: 1,
            ..options
        };
        let (mut figure, diagnostics) = Self::new(options)?.into_parts();
        figure.add_series(0, 0, x, y, None, None)?;
        if legend {
            figure.show_legend(0, 0, LegendLocation::Best, None)?;
        }
        Ok(Outcome::with_diagnostics(figure, diagnostics))
    }

    /// Releases the figure
    pub fn close(self) {
        tracing::debug!(tag = %self.tag, "closed figure");
    }

    /// Shape of the panel grid
    #[must_use]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of panel rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of panel columns
    #[must_use]
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Figure title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the figure title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Title font size in points
    #[must_use]
    pub fn title_font_size(&self) -> f64 {
        self.title_font_size
    }

    /// Tick label font size in points
    #[must_use]
    pub fn axis_font_size(&self) -> f64 {
        self.axis_font_size
    }

    /// Size in inches
    #[must_use]
    pub fn size(&self) -> (f64, f64) {
        self.size
    }

    /// Canvas size in pixels at [`crate::PIXELS_PER_INCH`]
    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixels
    }

    /// Default output filename stem
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Every panel, row-major
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Resolves `(row, col)` to a panel
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] if the indices used by this grid shape are out of range.
    pub fn panel(&self, row: usize, col: usize) -> Result<&Panel> {
        let index = self.shape.resolve(row, col)?;
        Ok(&self.panels[index])
    }

    /// Resolves `(row, col)` to a mutable panel
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] if the indices used by this grid shape are out of range.
    pub fn panel_mut(&mut self, row: usize, col: usize) -> Result<&mut Panel> {
        let index = self.shape.resolve(row, col)?;
        Ok(&mut self.panels[index])
    }

    /// Sets an axis label
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] for an invalid panel.
    pub fn set_axis_label(&mut self, row: usize, col: usize, axis: Axis, text: impl Into<String>) -> Result<()> {
        self.panel_mut(row, col)?.set_label(axis, text);
        Ok(())
    }

    /// Sets an axis limit.
    ///
    /// An invalid range is reported as a diagnostic and the previous range is kept.
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] for an invalid panel.
    pub fn set_axis_limit(&mut self, row: usize, col: usize, axis: Axis, range: Range<f64>) -> Result<Outcome<()>> {
        Ok(self.panel_mut(row, col)?.set_limit(axis, range))
    }

    /// Appends a data series to a panel
    ///
    /// # Errors
    /// - [`Error::PanelOutOfBounds`] for an invalid panel.
    /// - [`Error::LengthMismatch`] if `x` and `y` differ in length.
    pub fn add_series(
        &mut self,
        row: usize,
        col: usize,
        x: &[f64],
        y: &[f64],
        label: Option<&str>,
        style: Option<Style>,
    ) -> Result<()> {
        let mut series = Series::new(x, y)?.with_style(style.unwrap_or_default());
        if let Some(label) = label {
            series = series.with_label(label);
        }
        self.push_series(row, col, series)
    }

    /// Appends a prepared series to a panel
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] for an invalid panel.
    pub fn push_series(&mut self, row: usize, col: usize, series: Series) -> Result<()> {
        self.panel_mut(row, col)?.push_series(series);
        Ok(())
    }

    /// Appends a series with error bars to a panel
    ///
    /// The style defaults to [`Style::error_bars`].
    ///
    /// # Errors
    /// - [`Error::PanelOutOfBounds`] for an invalid panel.
    /// - [`Error::LengthMismatch`] if the data or any bounds differ in length.
    #[allow(clippy::too_many_arguments)]
    pub fn add_error_series(
        &mut self,
        row: usize,
        col: usize,
        x: &[f64],
        y: &[f64],
        y_errors: Option<ErrorBounds>,
        x_errors: Option<ErrorBounds>,
        label: Option<&str>,
        style: Option<Style>,
    ) -> Result<()> {
        let mut series = Series::new(x, y)?.with_style(style.unwrap_or_else(Style::error_bars));
        if let Some(errors) = y_errors {
            series = series.with_y_errors(errors)?;
        }
        if let Some(errors) = x_errors {
            series = series.with_x_errors(errors)?;
        }
        if let Some(label) = label {
            series = series.with_label(label);
        }
        self.push_series(row, col, series)
    }

    /// Fits a straight line; shorthand for [`Figure::fit_polynomial`] with order 1
    ///
    /// # Errors
    /// See [`Figure::fit_polynomial`].
    pub fn fit_linear(
        &mut self,
        row: usize,
        col: usize,
        x: &[f64],
        y: &[f64],
        options: &FitOptions,
    ) -> Result<Outcome<Option<FitResult>>> {
        let options = FitOptions {
            order: 1,
            ..options.clone()
        };
        self.fit_polynomial(row, col, x, y, &options)
    }

    /// Fits a polynomial of `options.order` and draws the curve on a panel.
    ///
    /// When annotating, the equation is drawn at `options.annotate_position` and
    /// becomes the curve's legend label. Annotating without a position draws the
    /// curve only and reports [`DiagnosticKind::AnnotationSkipped`].
    ///
    /// The [`FitResult`] is returned only if `options.return_result` is set.
    ///
    /// # Errors
    /// - [`Error::PanelOutOfBounds`] for an invalid panel.
    /// - Any error from [`FitResult::compute`]; nothing is drawn in that case.
    pub fn fit_polynomial(
        &mut self,
        row: usize,
        col: usize,
        x: &[f64],
        y: &[f64],
        options: &FitOptions,
    ) -> Result<Outcome<Option<FitResult>>> {
        let index = self.shape.resolve(row, col)?;
        let mut result = FitResult::compute(x, y, options)?;
        let mut outcome = Outcome::clean(());

        let mut label = options.label.clone();
        if options.annotate {
            match options.annotate_position {
                Some(position) => {
                    result.annotation = Some(position);
                    label = Some(result.equation.clone());
                }
                None => outcome.push(Diagnostic::raise(
                    DiagnosticKind::AnnotationSkipped,
                    "Equation annotation requested without a position; drawing the curve only",
                )),
            }
        }

        let mut series = Series::new(result.curve_x.clone(), result.curve_y.clone())?.with_style(options.style);
        if let Some(label) = label {
            series = series.with_label(label);
        }

        let panel = &mut self.panels[index];
        panel.push_series(series);
        if let Some(position) = result.annotation {
            panel.annotate(result.equation.clone(), position);
        }

        Ok(outcome.map(|()| options.return_result.then_some(result)))
    }

    /// Shows a panel's legend
    ///
    /// The font size defaults to the figure's axis font size.
    ///
    /// # Errors
    /// Returns [`Error::PanelOutOfBounds`] for an invalid panel.
    pub fn show_legend(&mut self, row: usize, col: usize, location: LegendLocation, font_size: Option<f64>) -> Result<()> {
        let font_size = font_size.unwrap_or(self.axis_font_size);
        self.panel_mut(row, col)?.show_legend(Legend { location, font_size });
        Ok(())
    }

    /// Renders the figure as an SVG document
    ///
    /// # Errors
    /// Returns [`Error::Draw`] if drawing fails.
    pub fn render_svg(&self) -> Result<String> {
        render::render_svg(self)
    }

    /// Saves the figure.
    ///
    /// Never fails: problems are reported as diagnostics and the value is the
    /// written path, or `None` if nothing was written.
    pub fn save(&self, options: &SaveOptions) -> Outcome<Option<PathBuf>> {
        let (path, mut diagnostics) = export::plan_path(&self.tag, options).into_parts();

        match export::write(self, &path, options) {
            Ok(()) => {
                tracing::info!(path = %path.display(), format = ?options.format, "saved figure");
                Outcome::with_diagnostics(Some(path), diagnostics)
            }
            Err(e) => {
                diagnostics.push(Diagnostic::raise(
                    DiagnosticKind::SaveFailed,
                    format!("Could not save {}: {e}", path.display()),
                ));
                Outcome::with_diagnostics(None, diagnostics)
            }
        }
    }

    /// Reads named columns from a CSV file; see [`data::load_columns`]
    pub fn load_columns(path: impl AsRef<Path>, names: &[&str]) -> Outcome<Vec<Vec<f64>>> {
        data::load_columns(path, names)
    }

    /// Reads an `(x, y)` column pair from a CSV file; see [`data::load_xy`]
    pub fn load_xy(path: impl AsRef<Path>, x_name: &str, y_name: &str) -> Outcome<(Vec<f64>, Vec<f64>)> {
        data::load_xy(path, x_name, y_name)
    }
}
