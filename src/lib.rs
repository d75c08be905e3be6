//! # quickfig
//! ## Consistent figures without the boilerplate
//!
//! Every analysis script ends up with the same twenty lines of plot setup: a grid of
//! panels, axis labels, a font size, a straight line through the data, an equation
//! in the corner, and a file written somewhere sensible. This crate is those twenty
//! lines, done once.
//!
//! I provide a set of tools designed to help you:
//! - Build a grid of panels with uniform fonts, labels and limits
//! - Load named columns from a CSV file
//! - Fit a least-squares polynomial and draw it with its equation
//! - Normalize, translate or crop a series before plotting it
//! - Save the result as SVG or PNG, named after the figure
//!
//! ```rust,no_run
//! use quickfig::{Figure, FigureOptions, FitOptions, LegendLocation, SaveOptions};
//!
//! let (x, y) = Figure::load_xy("measurements.csv", "time", "voltage").into_value();
//!
//! let mut figure = Figure::new(FigureOptions::default().with_title("Discharge").with_tag("discharge"))
//!     .unwrap()
//!     .into_value();
//! figure.add_series(0, 0, &x, &y, Some("measured"), None).unwrap();
//! let _ = figure.fit_linear(0, 0, &x, &y, &FitOptions::linear().with_label("fit")).unwrap();
//! figure.show_legend(0, 0, LegendLocation::Best, None).unwrap();
//!
//! if let Some(path) = figure.save(&SaveOptions::default()).into_value() {
//!     println!("wrote {}", path.display());
//! }
//! ```
//!
//! # Core Concepts
//! - A [`Figure`] owns a fixed `rows x cols` grid of [`panel::Panel`]s.
//!     - Panels are addressed by `(row, col)`. In a single row or column the other index is ignored.
//!     - See [`grid`] for the exact rules.
//! - A [`series::Series`] is a labelled, styled sequence of `(x, y)` points, optionally with error bars.
//!     - Series are only ever appended; they are drawn in the order they were added.
//! - Fitting goes through [`fit::Polynomial`], solved with an SVD (`nalgebra`).
//!
//! # Errors and diagnostics
//! Two channels, on purpose:
//! - [`Error`] is returned when the request makes no sense: a panel outside the grid,
//!   `x` and `y` of different lengths, a fit of higher order than there are points.
//! - [`Diagnostic`]s report cosmetic problems the figure survives: a missing CSV column,
//!   an inverted axis range, a failed save. They are returned inside an [`Outcome`] and
//!   logged through `tracing`.
//!
//! # Features
//! - `png` *(default)*: PNG export, rasterizing the SVG output with `resvg`.
//!
//! # Testing utilities
//! [`assert_close!`] and [`assert_all_close!`] compare floats with a tolerance. See [`test`].
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // Point counts never get near 2^52
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


pub mod data;
pub mod diagnostic;
pub mod display;
pub mod error;
pub mod export;
pub mod fit;
pub mod grid;
pub mod panel;
pub mod series;
pub mod style;
pub mod transforms;
pub mod value;

mod figure;
mod render;

pub use diagnostic::{Diagnostic, DiagnosticKind, Outcome};
pub use error::{Error, Result};
pub use export::{ImageFormat, SaveOptions};
pub use figure::{Figure, FigureOptions};
pub use fit::{FitOptions, FitResult};
pub use render::PIXELS_PER_INCH;
pub use style::{Color, LegendLocation, LineStyle, Marker, Style};

pub use nalgebra;
