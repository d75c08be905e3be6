//! Least-squares polynomial fitting
//!
//! [`Polynomial::fit`] finds the coefficients minimizing the squared error of a
//! polynomial of a given order over `(x, y)` data. [`FitResult::compute`] adds
//! what a figure needs on top: the curve sampled at evenly spaced points and the
//! rounded equation string.
//!
//! # How it works
//! - Builds a Vandermonde matrix with shape `[n, order + 1]`, columns ordered
//!   from the highest power down.
//! - Reduces `A * c = y` to the `k x k` normal system `AᵀA * c = Aᵀy`.
//! - Solves it with an SVD, treating singular values below
//!   `machine_epsilon * k * sigma_max` as zero.
//!
//! ```rust
//! # use quickfig::fit::Polynomial;
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [3.0, 5.0, 7.0, 9.0];
//! let line = Polynomial::fit(&x, &y, 1).unwrap();
//! assert_eq!(line.equation(), "2.0x + 3.0");
//! ```
use nalgebra::{DMatrix, DVector, SVD};

use crate::{
    display::format_equation,
    error::{Error, Result},
    style::Style,
    value::{Bounds, Linspace},
};

/// A polynomial with coefficients ordered highest degree first
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}
impl Polynomial {
    /// Wraps coefficients ordered highest degree first.
    ///
    /// An empty vector is the zero polynomial.
    #[must_use]
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }

    /// Fits a polynomial of the given order to the data.
    ///
    /// # Errors
    /// - [`Error::LengthMismatch`]: `x` and `y` differ in length.
    /// - [`Error::NoData`]: the data is empty.
    /// - [`Error::NonFiniteData`]: the data contains NaN or infinity.
    /// - [`Error::DegreeTooHigh`]: `order >= x.len()`.
    /// - [`Error::Algebra`]: the linear system could not be solved.
    pub fn fit(x: &[f64], y: &[f64], order: usize) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::LengthMismatch {
                what: "y values",
                expected: x.len(),
                actual: y.len(),
            });
        } else if x.is_empty() {
            return Err(Error::NoData);
        } else if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteData);
        } else if order >= x.len() {
            return Err(Error::DegreeTooHigh {
                degree: order,
                points: x.len(),
            });
        }

        let (m, b) = create_matrix(x, y, order + 1);
        let (xtx, xtb) = invert_matrix(&m, &b);
        let coefficients = solve_matrix(xtx, &xtb)?;

        tracing::debug!(order, points = x.len(), ?coefficients, "fitted polynomial");
        Ok(Self { coefficients })
    }

    /// Coefficients, highest degree first
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree of the polynomial
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at `x`
    #[must_use]
    pub fn y(&self, x: f64) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc * x + c)
    }

    /// Evaluates the polynomial at each `x`
    pub fn solve(&self, x: impl IntoIterator<Item = f64>) -> Vec<(f64, f64)> {
        x.into_iter().map(|x| (x, self.y(x))).collect()
    }

    /// Human-readable equation, coefficients rounded to one decimal
    #[must_use]
    pub fn equation(&self) -> String {
        format_equation(&self.coefficients)
    }
}
impl std::fmt::Display for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.equation())
    }
}

/// Builds the Vandermonde matrix (highest power first) and the y column.
fn create_matrix(x: &[f64], y: &[f64], k: usize) -> (DMatrix<f64>, DVector<f64>) {
    let mut bigx = DMatrix::zeros(x.len(), k);
    let b = DVector::from_column_slice(y);

    for (mut row, &x) in bigx.row_iter_mut().zip(x) {
        let mut power = 1.0;
        for j in (0..k).rev() {
            row[j] = power;
            power *= x;
        }
    }

    (bigx, b)
}

/// Reduce the n by k / 1 by n into a k by k and k by 1 system.
fn invert_matrix(matrix: &DMatrix<f64>, b: &DVector<f64>) -> (DMatrix<f64>, DVector<f64>) {
    let xtx = matrix.transpose() * matrix;
    let xtb = matrix.transpose() * b;
    (xtx, xtb)
}

/// Solves the linear system using SVD.
fn solve_matrix(xtx: DMatrix<f64>, xtb: &DVector<f64>) -> Result<Vec<f64>> {
    let size = xtx.shape();

    let decomp = SVD::new_unordered(xtx, true, true);

    // ~= machine_epsilon * max(size) * max_singular
    let max_size = size.0.max(size.1) as f64;
    let sigma_max = decomp.singular_values.max();
    let epsilon = f64::EPSILON * max_size * sigma_max;

    let big_x = decomp.solve(xtb, epsilon).map_err(Error::Algebra)?;
    let coefficients: Vec<f64> = big_x.iter().copied().collect();

    if coefficients.iter().any(|c| c.is_nan()) {
        return Err(Error::Algebra("NaN in coefficients"));
    }

    Ok(coefficients)
}

/// Options for fitting a curve onto a panel
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    /// Polynomial order; 1 is a straight line
    pub order: usize,

    /// Number of evenly spaced points the fitted curve is sampled at
    pub density: usize,

    /// Draw the equation onto the panel (requires `annotate_position`)
    pub annotate: bool,

    /// Data coordinates of the equation text
    pub annotate_position: Option<(f64, f64)>,

    /// Return the [`FitResult`] to the caller
    pub return_result: bool,

    /// Legend label for the fitted curve when it is not annotated
    pub label: Option<String>,

    /// Style of the fitted curve
    pub style: Style,
}
impl Default for FitOptions {
    fn default() -> Self {
        Self {
            order: 1,
            density: 100,
            annotate: false,
            annotate_position: None,
            return_result: false,
            label: None,
            style: Style::default(),
        }
    }
}
impl FitOptions {
    /// A straight line fit
    #[must_use]
    pub fn linear() -> Self {
        Self::default()
    }

    /// A polynomial fit of the given order
    #[must_use]
    pub fn polynomial(order: usize) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Draws the equation at the given data coordinates
    #[must_use]
    pub fn annotate_at(mut self, x: f64, y: f64) -> Self {
        self.annotate = true;
        self.annotate_position = Some((x, y));
        self
    }

    /// Requests the [`FitResult`] back from the figure
    #[must_use]
    pub fn returning(mut self) -> Self {
        self.return_result = true;
        self
    }

    /// Sets the sampling density of the fitted curve
    #[must_use]
    pub fn with_density(mut self, density: usize) -> Self {
        self.density = density;
        self
    }

    /// Sets the curve's legend label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the curve style
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Outcome of a least-squares fit
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// The fitted polynomial
    pub polynomial: Polynomial,

    /// X coordinates of the sampled curve, spanning `[min(x), max(x)]`
    pub curve_x: Vec<f64>,

    /// Y coordinates of the sampled curve
    pub curve_y: Vec<f64>,

    /// Rounded equation string
    pub equation: String,

    /// Where the equation was drawn, if it was
    pub annotation: Option<(f64, f64)>,
}
impl FitResult {
    /// Fits the data and samples the curve.
    ///
    /// `annotation` is left unset; the figure fills it in when the equation is drawn.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDensity`] if fewer than two sample points are requested,
    /// or any error from [`Polynomial::fit`].
    pub fn compute(x: &[f64], y: &[f64], options: &FitOptions) -> Result<Self> {
        if options.density < 2 {
            return Err(Error::InvalidDensity(options.density));
        }

        let polynomial = Polynomial::fit(x, y, options.order)?;
        let domain = x.bounds().ok_or(Error::NoData)?;

        let (curve_x, curve_y) = polynomial
            .solve(Linspace::new(domain.start..=domain.end, options.density))
            .into_iter()
            .unzip();
        let equation = polynomial.equation();

        Ok(Self {
            polynomial,
            curve_x,
            curve_y,
            equation,
            annotation: None,
        })
    }

    /// Coefficients, highest degree first
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        self.polynomial.coefficients()
    }
}
