//! PNG export by rasterizing the SVG rendering with `resvg`
use std::path::Path;

use resvg::{tiny_skia, usvg};

use super::PIXELS_PER_INCH;
use crate::error::{Error, Result};

/// Rasterizes `svg` at `dpi` and writes it to `path` as PNG.
///
/// The SVG canvas is laid out at [`PIXELS_PER_INCH`], so it is scaled by
/// `dpi / PIXELS_PER_INCH`.
///
/// # Errors
/// - [`Error::InvalidResolution`]: `dpi` is not finite and positive.
/// - [`Error::SvgParse`]: the SVG could not be parsed.
/// - [`Error::InvalidImageSize`]: the scaled image is empty or too large.
/// - [`Error::PngEncode`]: encoding or writing the PNG failed.
pub fn write_png(svg: &str, dpi: f64, path: &Path) -> Result<()> {
    if !dpi.is_finite() || dpi <= 0.0 {
        return Err(Error::InvalidResolution(dpi));
    }

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let scale = dpi / PIXELS_PER_INCH;
    let size = tree.size();
    let (width, height) = scaled(size.width(), size.height(), scale)?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(Error::InvalidImageSize {
        width: f64::from(width),
        height: f64::from(height),
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    #[allow(clippy::cast_possible_truncation)]
    let transform = usvg::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    tracing::debug!(width, height, dpi, "rasterized figure");
    pixmap
        .save_png(path)
        .map_err(|e| Error::PngEncode(e.to_string()))
}

/// Pixel dimensions of a `width x height` canvas scaled by `scale`
fn scaled(width: f32, height: f32, scale: f64) -> Result<(u32, u32)> {
    let width = (f64::from(width) * scale).ceil();
    let height = (f64::from(height) * scale).ceil();
    let cast = |v: f64| num_traits::cast::<f64, u32>(v).filter(|v| *v > 0);

    match (cast(width), cast(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(Error::InvalidImageSize { width, height }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_dpi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        assert!(matches!(write_png("<svg/>", 0.0, &path), Err(Error::InvalidResolution(_))));
        assert!(matches!(write_png("<svg/>", f64::NAN, &path), Err(Error::InvalidResolution(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_bad_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        assert!(matches!(write_png("not an svg", 100.0, &path), Err(Error::SvgParse(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_scaled_dimensions() {
        assert_eq!(scaled(1000.0, 600.0, 3.0).unwrap(), (3000, 1800));
        assert!(matches!(scaled(0.0, 600.0, 3.0), Err(Error::InvalidImageSize { .. })));
        assert!(matches!(scaled(1e30, 600.0, 3.0), Err(Error::InvalidImageSize { .. })));
    }

    #[test]
    fn test_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("square.png");
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="10"><rect width="20" height="10" fill="red"/></svg>"#;

        write_png(svg, 50.0, &path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
