//! Utilities for transforming series data before plotting
//!
//! Data can be transformed by anything implementing the [`Transform`] trait, which
//! applies the transformation over a set of values in place.
//!
//! The [`Transformable`] trait is a convenient wrapper that allows you to apply
//! transformations to a `Vec<f64>` or slice directly.
//!
//! Predefined transformations:
//! - Min-max normalization: [`SeriesTransform::Normalize`] / [`normalize`]
//!   - Maps the data onto `[0, 1]`.
//! - Translation: [`SeriesTransform::Translate`] / [`translate`]
//!   - Adds a constant to every value.
//!
//! [`restrict_domain`] is not a per-value transform: it drops the points of an
//! `(x, y)` pair that fall outside an open interval of x.
use crate::{
    error::{Error, Result},
    value::Bounds,
};

/// Trait for applying transformations to data.
pub trait Transform {
    /// Applies the transformation to the given data.
    ///
    /// # Errors
    /// Returns an error if the data cannot be transformed; the data is left unchanged.
    fn apply<'a>(&self, data: impl Iterator<Item = &'a mut f64>) -> Result<()>;
}

/// Trait for transforming data.
pub trait Transformable {
    /// Transforms the data in place.
    ///
    /// # Errors
    /// Returns an error if the transform rejects the data.
    fn transform<R: Transform>(&mut self, transform: &R) -> Result<()>;
}
impl Transformable for [f64] {
    fn transform<R: Transform>(&mut self, transform: &R) -> Result<()> {
        transform.apply(self.iter_mut())
    }
}
impl Transformable for Vec<f64> {
    fn transform<R: Transform>(&mut self, transform: &R) -> Result<()> {
        transform.apply(self.iter_mut())
    }
}

/// Element-wise series transforms
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesTransform {
    /// Min-max normalization onto `[0, 1]`.
    ///
    /// > # Technical Details
    /// >
    /// > ```math
    /// > y = (x - x_min) / (x_max - x_min)
    /// > ```
    ///
    /// NaN values are ignored when finding the extent and stay NaN.
    /// A constant series has no extent to normalize by and is rejected
    /// with [`Error::ConstantSeries`].
    Normalize,

    /// Adds `offset` to every element.
    Translate(f64),
}
impl Transform for SeriesTransform {
    fn apply<'a>(&self, data: impl Iterator<Item = &'a mut f64>) -> Result<()> {
        let data: Vec<_> = data.collect();
        match self {
            Self::Normalize => {
                let values: Vec<f64> = data.iter().map(|d| **d).collect();
                let Some(extent) = values.bounds() else {
                    return Ok(());
                };

                let span = extent.end - extent.start;
                if span == 0.0 {
                    return Err(Error::ConstantSeries(extent.start));
                }

                for value in data {
                    *value = (*value - extent.start) / span;
                }
            }

            Self::Translate(offset) => {
                for value in data {
                    *value += offset;
                }
            }
        }
        Ok(())
    }
}

/// Min-max normalizes `y` onto `[0, 1]`.
///
/// An empty series normalizes to an empty series.
///
/// # Errors
/// Returns [`Error::ConstantSeries`] if every value is equal.
pub fn normalize(y: &[f64]) -> Result<Vec<f64>> {
    let mut y = y.to_vec();
    y.transform(&SeriesTransform::Normalize)?;
    Ok(y)
}

/// Adds `offset` to every element of `y`
#[must_use]
pub fn translate(y: &[f64], offset: f64) -> Vec<f64> {
    y.iter().map(|v| v + offset).collect()
}

/// Keeps the points with `x_min < x < x_max`, preserving order.
///
/// Both bounds are exclusive.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `x` and `y` differ in length.
pub fn restrict_domain(
    x: &[f64],
    y: &[f64],
    x_min: f64,
    x_max: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            what: "y values",
            expected: x.len(),
            actual: y.len(),
        });
    }

    Ok(x.iter()
        .zip(y)
        .filter(|(x, _)| x_min < **x && **x < x_max)
        .map(|(x, y)| (*x, *y))
        .unzip())
}
