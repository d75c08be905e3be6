//! Numeric helpers shared by fitting, transforms and rendering.
//!
//! # Iterators
//!
//! - [`Linspace`]: `n` evenly spaced values over a closed interval, the way fitted
//!   curves are sampled.
//!
//! # Traits
//!
//! - [`Bounds`]: min/max of a numeric sequence, ignoring NaN.
//!
//! # Example
//!
//! ```rust
//! use quickfig::value::{Bounds, Linspace};
//!
//! let xs: Vec<f64> = Linspace::new(0.0..=1.0, 5).collect();
//! assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(xs.bounds(), Some(0.0..1.0));
//! ```
use std::ops::{Range, RangeInclusive};

/// Iterator over `count` evenly spaced values spanning a closed interval.
///
/// The first value is exactly `range.start()` and the last exactly `range.end()`.
/// A count of one yields only the start.
#[derive(Debug, Clone)]
pub struct Linspace {
    start: f64,
    step: f64,
    end: f64,
    count: usize,
    index: usize,
}
impl Linspace {
    /// Creates a new iterator over `count` values in `range`
    #[must_use]
    pub fn new(range: RangeInclusive<f64>, count: usize) -> Self {
        let (start, end) = range.into_inner();
        let step = if count > 1 {
            (end - start) / (count - 1) as f64
        } else {
            0.0
        };

        Self {
            start,
            step,
            end,
            count,
            index: 0,
        }
    }
}
impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let value = if self.index + 1 == self.count && self.count > 1 {
            self.end
        } else {
            self.start + self.index as f64 * self.step
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}
impl ExactSizeIterator for Linspace {}

/// Extension trait for the numeric extent of a sequence
pub trait Bounds {
    /// Iterates the values considered for the extent
    fn values(&self) -> impl Iterator<Item = f64>;

    /// Returns `min..max` over the non-NaN values, or `None` if there are none.
    fn bounds(&self) -> Option<Range<f64>> {
        let extent = self
            .values()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<(f64, f64)>, v| {
                Some(match acc {
                    Some((min, max)) => (min.min(v), max.max(v)),
                    None => (v, v),
                })
            });
        extent.map(|(start, end)| start..end)
    }
}
impl Bounds for [f64] {
    fn values(&self) -> impl Iterator<Item = f64> {
        self.iter().copied()
    }
}
impl Bounds for Vec<f64> {
    fn values(&self) -> impl Iterator<Item = f64> {
        self.iter().copied()
    }
}

/// Returns true if `range` can be used as an axis range: finite and strictly increasing.
#[must_use]
pub fn is_valid_range(range: &Range<f64>) -> bool {
    range.start.is_finite() && range.end.is_finite() && range.start < range.end
}

/// Merges two optional ranges into their union.
#[must_use]
pub fn union(a: Option<Range<f64>>, b: Option<Range<f64>>) -> Option<Range<f64>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.start.min(b.start)..a.end.max(b.end)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Pads a data extent for display.
///
/// Adds `fraction` of the span on each side. A degenerate extent (a single value)
/// is widened by half a unit each side so it still has a visible span.
#[must_use]
pub fn pad_range(range: &Range<f64>, fraction: f64) -> Range<f64> {
    let span = range.end - range.start;
    if span <= 0.0 || !span.is_finite() {
        return (range.start - 0.5)..(range.end + 0.5);
    }

    let pad = span * fraction;
    (range.start - pad)..(range.end + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_all_close;

    #[test]
    fn test_linspace() {
        let values: Vec<_> = Linspace::new(0.0..=1.0, 11).collect();
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[10], 1.0);
        assert_all_close!(values[..3], [0.0, 0.1, 0.2]);
    }

    #[test]
    fn test_linspace_edge_counts() {
        assert_eq!(Linspace::new(2.0..=5.0, 0).count(), 0);
        assert_eq!(Linspace::new(2.0..=5.0, 1).collect::<Vec<_>>(), vec![2.0]);
        assert_eq!(Linspace::new(2.0..=5.0, 2).collect::<Vec<_>>(), vec![2.0, 5.0]);
        assert_eq!(Linspace::new(2.0..=5.0, 7).len(), 7);
    }

    #[test]
    fn test_bounds_ignores_nan() {
        let values = vec![3.0, f64::NAN, -1.0, 8.5];
        assert_eq!(values.bounds(), Some(-1.0..8.5));

        let empty: Vec<f64> = vec![];
        assert_eq!(empty.bounds(), None);
        assert_eq!(vec![f64::NAN].bounds(), None);
    }

    #[test]
    fn test_range_helpers() {
        assert!(is_valid_range(&(0.0..1.0)));
        assert!(!is_valid_range(&(1.0..1.0)));
        assert!(!is_valid_range(&(2.0..1.0)));
        assert!(!is_valid_range(&(0.0..f64::INFINITY)));

        assert_eq!(union(Some(0.0..1.0), Some(-2.0..0.5)), Some(-2.0..1.0));
        assert_eq!(union(None, Some(1.0..2.0)), Some(1.0..2.0));
        assert_eq!(union(None, None), None);

        assert_eq!(pad_range(&(0.0..10.0), 0.1), -1.0..11.0);
        assert_eq!(pad_range(&(3.0..3.0), 0.1), 2.5..3.5);
    }
}
