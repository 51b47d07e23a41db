use super::approx_eq;

/// Number of real roots of `a x² + b x + c = 0`, from the sign of the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootCount {
    /// Negative discriminant (or NaN coefficients).
    Zero,
    /// Zero discriminant: one double root.
    One,
    /// Positive discriminant.
    Two,
}

/// Classifies the discriminant `b² - 4ac` by its exact sign.
///
/// A NaN discriminant counts as [`RootCount::Zero`]. No tolerance is applied,
/// so a double root whose discriminant rounds slightly negative is reported
/// as having no roots.
#[must_use]
pub fn discriminant_sign(a: f64, b: f64, c: f64) -> RootCount {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant > 0.0 {
        RootCount::Two
    } else if discriminant < 0.0 || discriminant.is_nan() {
        RootCount::Zero
    } else {
        RootCount::One
    }
}

/// Solves `a x² + b x + c = 0` with the standard formula.
///
/// Returns `(root1, root2)` with `root1` taking the negative square root.
/// Returns `None` when `2a` is within tolerance of zero; the linear case is
/// not solved. Roots may be NaN if the discriminant is negative.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let denom = 2.0 * a;
    if approx_eq(denom, 0.0) {
        return None;
    }
    let sqrt_disc = (b * b - 4.0 * a * c).sqrt();
    Some(((-b - sqrt_disc) / denom, (-b + sqrt_disc) / denom))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sign_classification() {
        // x² - 1
        assert_eq!(discriminant_sign(1.0, 0.0, -1.0), RootCount::Two);
        // x² - 2x + 1
        assert_eq!(discriminant_sign(1.0, -2.0, 1.0), RootCount::One);
        // x² + 1
        assert_eq!(discriminant_sign(1.0, 0.0, 1.0), RootCount::Zero);
    }

    #[test]
    fn sign_is_exact_not_tolerant() {
        // Discriminant of 4e-9 is still two roots.
        assert_eq!(discriminant_sign(1.0, 0.0, -1e-9), RootCount::Two);
        assert_eq!(discriminant_sign(1.0, 0.0, 1e-9), RootCount::Zero);
    }

    #[test]
    fn nan_discriminant_has_no_roots() {
        assert_eq!(discriminant_sign(f64::NAN, 1.0, 1.0), RootCount::Zero);
    }

    #[test]
    fn roots_of_difference_of_squares() {
        let (r1, r2) = quadratic_roots(1.0, 0.0, -25.0).unwrap();
        assert_abs_diff_eq!(r1, -5.0);
        assert_abs_diff_eq!(r2, 5.0);
    }

    #[test]
    fn double_root() {
        let (r1, r2) = quadratic_roots(1.0, -4.0, 4.0).unwrap();
        assert_abs_diff_eq!(r1, 2.0);
        assert_abs_diff_eq!(r2, 2.0);
    }

    #[test]
    fn degenerate_leading_coefficient() {
        assert!(quadratic_roots(0.0, 2.0, 1.0).is_none());
        assert!(quadratic_roots(1e-9, 2.0, 1.0).is_none());
    }

    #[test]
    fn negative_discriminant_gives_nan() {
        let (r1, r2) = quadratic_roots(1.0, 0.0, 1.0).unwrap();
        assert!(r1.is_nan() && r2.is_nan());
    }
}
