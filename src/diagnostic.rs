//! Non-fatal diagnostics
//!
//! Plotting is an interactive aid: a cosmetic failure should never abort the
//! analysis around it. Operations that can partially fail return an [`Outcome`],
//! which carries the value that was produced together with every [`Diagnostic`]
//! raised along the way.
//!
//! Each diagnostic is also emitted as a `tracing` warning when it is raised, so
//! callers that ignore the returned list still see it in their logs.
//!
//! ```rust
//! # use quickfig::{Figure, panel::Axis};
//! let mut figure = Figure::default();
//! let outcome = figure.set_axis_limit(0, 0, Axis::X, 5.0..1.0).unwrap();
//! assert!(!outcome.is_clean());
//!
//! // Escalate if a warning should be fatal for this caller
//! assert!(outcome.into_result().is_err());
//! ```
use std::fmt;

use crate::error::{Error, Result};

/// Category of a [`Diagnostic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A data file does not exist or is not a regular file.
    InvalidPath,

    /// A data file could not be read or parsed as CSV.
    UnreadableFile,

    /// A requested column is not present in the file header.
    MissingColumn,

    /// A column contains a cell that is not a number.
    InvalidValue,

    /// An axis range was rejected; the previous range is kept.
    InvalidAxisRange,

    /// An annotation was requested without a position.
    AnnotationSkipped,

    /// The save directory is an existing file and was ignored.
    DirectoryIsFile,

    /// Rendering or writing the output image failed.
    SaveFailed,
}
impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidPath => "invalid path",
            Self::UnreadableFile => "unreadable file",
            Self::MissingColumn => "missing column",
            Self::InvalidValue => "invalid value",
            Self::InvalidAxisRange => "invalid axis range",
            Self::AnnotationSkipped => "annotation skipped",
            Self::DirectoryIsFile => "directory is a file",
            Self::SaveFailed => "save failed",
        };
        f.write_str(name)
    }
}

/// A non-fatal problem reported by a lenient operation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
}
impl Diagnostic {
    /// Creates a diagnostic and logs it as a warning.
    pub fn raise(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%kind, "{message}");
        Self { kind, message }
    }

    /// The category of this diagnostic
    #[must_use]
    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    /// Human-readable description
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A value paired with the diagnostics raised while producing it
#[must_use = "an Outcome may carry diagnostics that should be inspected"]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    value: T,
    diagnostics: Vec<Diagnostic>,
}
impl<T> Outcome<T> {
    /// An outcome with no diagnostics
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    /// An outcome carrying the given diagnostics
    pub fn with_diagnostics(value: T, diagnostics: Vec<Diagnostic>) -> Self {
        Self { value, diagnostics }
    }

    /// Records another diagnostic against this outcome.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// True if nothing went wrong
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics raised, in the order they occurred
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True if any diagnostic of the given kind was raised
    pub fn has(&self, kind: DiagnosticKind) -> bool {
        self.diagnostics.iter().any(|d| d.kind == kind)
    }

    /// The produced value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Discards the diagnostics and returns the value
    pub fn into_value(self) -> T {
        self.value
    }

    /// Splits into value and diagnostics
    pub fn into_parts(self) -> (T, Vec<Diagnostic>) {
        (self.value, self.diagnostics)
    }

    /// Maps the value, keeping the diagnostics
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Treats any diagnostic as fatal.
    ///
    /// # Errors
    /// Returns [`Error::Diagnostics`] if at least one diagnostic was raised.
    pub fn into_result(self) -> Result<T> {
        if self.diagnostics.is_empty() {
            Ok(self.value)
        } else {
            Err(Error::Diagnostics(self.diagnostics))
        }
    }
}
