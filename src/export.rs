//! Saving figures to image files
//!
//! The output path is planned from the figure's tag and the [`SaveOptions`]:
//! - The filename defaults to the tag (`"figure"` if the tag is empty).
//! - The format's extension is appended unless the name already ends with it,
//!   compared case-insensitively. `run.v2` therefore becomes `run.v2.svg`.
//! - A directory that is itself an existing file is ignored with a
//!   [`DiagnosticKind::DirectoryIsFile`] diagnostic. Directories are not created.
//!
//! ```rust
//! # use quickfig::export::{plan_path, ImageFormat, SaveOptions};
//! let options = SaveOptions::default().with_format(ImageFormat::Png);
//! let path = plan_path("results", &options).into_value();
//! assert_eq!(path.to_str(), Some("results.png"));
//! ```
use std::path::{Path, PathBuf};

use crate::{
    diagnostic::{Diagnostic, DiagnosticKind, Outcome},
    error::Result,
    figure::Figure,
    render,
};

/// Resolution used for raster output when none is given
pub const DEFAULT_DPI: f64 = 300.0;

/// Filename stem used when a figure has an empty tag
pub const FALLBACK_NAME: &str = "figure";

/// Output image format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// Scalable vector graphics
    #[default]
    Svg,

    /// Raster PNG; needs the `png` feature
    Png,
}
impl ImageFormat {
    /// File extension, without the dot
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

/// Options for [`Figure::save`]
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOptions {
    /// Output filename; the figure's tag if unset
    pub filename: Option<String>,

    /// Directory to save into; the working directory if unset
    pub directory: Option<PathBuf>,

    /// Image format
    pub format: ImageFormat,

    /// Resolution of raster output, in dots per inch
    pub dpi: f64,
}
impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            filename: None,
            directory: None,
            format: ImageFormat::default(),
            dpi: DEFAULT_DPI,
        }
    }
}
impl SaveOptions {
    /// Sets the output filename
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the output directory
    #[must_use]
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Sets the image format
    #[must_use]
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the raster resolution
    #[must_use]
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }
}

/// Appends `.{ext}` to `name` unless it already ends with it
#[must_use]
pub fn with_extension(name: &str, format: ImageFormat) -> String {
    let suffix = format!(".{}", format.extension());
    let has_suffix = name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|end| end.eq_ignore_ascii_case(&suffix));

    if has_suffix {
        name.to_string()
    } else {
        format!("{name}{suffix}")
    }
}

/// Works out where a figure tagged `tag` is written
pub fn plan_path(tag: &str, options: &SaveOptions) -> Outcome<PathBuf> {
    let name = match options.filename.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ if !tag.is_empty() => tag,
        _ => FALLBACK_NAME,
    };
    let file = with_extension(name, options.format);

    match &options.directory {
        Some(directory) if directory.is_file() => Outcome::with_diagnostics(
            PathBuf::from(file),
            vec![Diagnostic::raise(
                DiagnosticKind::DirectoryIsFile,
                format!(
                    "{} is a file, not a directory; saving to the working directory",
                    directory.display()
                ),
            )],
        ),
        Some(directory) => Outcome::clean(directory.join(file)),
        None => Outcome::clean(PathBuf::from(file)),
    }
}

/// Renders `figure` and writes it to `path`
///
/// # Errors
/// Any rendering error, [`crate::Error::Io`] if the SVG cannot be written, or a raster error
/// from PNG export.
pub(crate) fn write(figure: &Figure, path: &Path, options: &SaveOptions) -> Result<()> {
    let svg = render::render_svg(figure)?;

    match options.format {
        ImageFormat::Svg => Ok(std::fs::write(path, svg)?),

        #[cfg(feature = "png")]
        ImageFormat::Png => render::raster::write_png(&svg, options.dpi, path),

        #[cfg(not(feature = "png"))]
        ImageFormat::Png => Err(crate::Error::FormatDisabled("PNG", "png")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_appended_once() {
        assert_eq!(with_extension("plot", ImageFormat::Svg), "plot.svg");
        assert_eq!(with_extension("plot.svg", ImageFormat::Svg), "plot.svg");
        assert_eq!(with_extension("plot.SVG", ImageFormat::Svg), "plot.SVG");
        assert_eq!(with_extension("run.v2", ImageFormat::Svg), "run.v2.svg");
        assert_eq!(with_extension("plot.svg", ImageFormat::Png), "plot.svg.png");
        assert_eq!(with_extension("ü", ImageFormat::Png), "ü.png");
    }

    #[test]
    fn test_default_name_is_tag() {
        let path = plan_path("calibration", &SaveOptions::default()).into_value();
        assert_eq!(path, PathBuf::from("calibration.svg"));

        let path = plan_path("", &SaveOptions::default()).into_value();
        assert_eq!(path, PathBuf::from("figure.svg"));

        let options = SaveOptions::default().with_filename("other.png").with_format(ImageFormat::Png);
        assert_eq!(plan_path("calibration", &options).into_value(), PathBuf::from("other.png"));
    }

    #[test]
    fn test_directory_joined() {
        let dir = tempfile::tempdir().unwrap();
        let options = SaveOptions::default().with_directory(dir.path());
        let outcome = plan_path("tag", &options);
        assert!(outcome.is_clean());
        assert_eq!(outcome.into_value(), dir.path().join("tag.svg"));
    }

    #[test]
    fn test_directory_that_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let options = SaveOptions::default().with_directory(file.path());
        let outcome = plan_path("tag", &options);
        assert!(outcome.has(DiagnosticKind::DirectoryIsFile));
        assert_eq!(outcome.into_value(), PathBuf::from("tag.svg"));
    }
}
