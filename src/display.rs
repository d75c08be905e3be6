//! Utilities for displaying fitted polynomials
//!
//! Fitted equations are written for a human glancing at a figure, not for
//! round-tripping: every coefficient is rounded to [`EQUATION_PRECISION`]
//! decimals and terms are listed from the highest degree down.
//!
//! | degree | term          |
//! |--------|---------------|
//! | `>= 2` | `{c}x^{i} + ` |
//! | `1`    | `{c}x + `     |
//! | `0`    | `{c}`         |
//!
//! Signs are not folded into the separator, so a negative coefficient reads
//! `2.0x + -3.0`.

/// Number of decimals kept for each coefficient
pub const EQUATION_PRECISION: usize = 1;

/// Formats a single term of degree `degree`, including its trailing separator.
#[must_use]
pub fn format_term(degree: usize, coef: f64) -> String {
    let coef = format_coefficient(coef);
    match degree {
        0 => coef,
        1 => format!("{coef}x + "),
        _ => format!("{coef}x^{degree} + "),
    }
}

/// Formats a coefficient rounded to [`EQUATION_PRECISION`] decimals
#[must_use]
pub fn format_coefficient(coef: f64) -> String {
    format!("{coef:.prec$}", prec = EQUATION_PRECISION)
}

/// Builds the equation string for coefficients ordered highest degree first.
///
/// ```rust
/// # use quickfig::display::format_equation;
/// assert_eq!(format_equation(&[2.0, 3.0]), "2.0x + 3.0");
/// assert_eq!(format_equation(&[1.0, -2.04, 0.46]), "1.0x^2 + -2.0x + 0.5");
/// ```
#[must_use]
pub fn format_equation(coefficients: &[f64]) -> String {
    let Some(degree) = coefficients.len().checked_sub(1) else {
        return String::new();
    };

    coefficients
        .iter()
        .enumerate()
        .map(|(i, &coef)| format_term(degree - i, coef))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms() {
        assert_eq!(format_term(0, 3.0), "3.0");
        assert_eq!(format_term(1, 2.0), "2.0x + ");
        assert_eq!(format_term(3, -0.26), "-0.3x^3 + ");
        assert_eq!(format_term(2, 10.0), "10.0x^2 + ");
    }

    #[test]
    fn test_equation() {
        assert_eq!(format_equation(&[2.0, 3.0]), "2.0x + 3.0");
        assert_eq!(format_equation(&[2.0, -3.0]), "2.0x + -3.0");
        assert_eq!(format_equation(&[0.5, 0.0, 1.0, 7.0]), "0.5x^3 + 0.0x^2 + 1.0x + 7.0");
        assert_eq!(format_equation(&[4.2]), "4.2");
        assert_eq!(format_equation(&[]), "");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_coefficient(1.96), "2.0");
        assert_eq!(format_coefficient(-0.04), "-0.0");
        assert_eq!(format_coefficient(123.456), "123.5");
    }
}
