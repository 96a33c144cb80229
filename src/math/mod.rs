//! Singularity-function primitives for Macaulay's method

use crate::error::{BeamError, BeamResult};

/// Evaluate the Macaulay bracket `<x - a>^n`.
///
/// # Arguments
/// * `a` - Position of the discontinuity along the beam
/// * `n` - Bracket exponent (must be >= -1)
/// * `x` - Station being evaluated
///
/// Exponents -1 and 0 are both treated as a unit step that switches on at
/// `x >= a`. Positive exponents vanish for `x <= a` and are `(x - a)^n`
/// beyond it.
pub fn singularity(a: f64, n: i32, x: f64) -> BeamResult<f64> {
    match n {
        -1 | 0 => Ok(if x < a { 0.0 } else { 1.0 }),
        n if n < -1 => Err(BeamError::invalid_argument(format!(
            "negative exponent not supported: <x - {a}>^{n}"
        ))),
        n => Ok(if x <= a { 0.0 } else { (x - a).powi(n) }),
    }
}

/// Factorial scaling applied after integrating a bracket term `n` times.
///
/// Defined for exponents -2..=5, which covers every integration level the
/// engine requests (shear down to deflection for ramped distributed loads).
pub fn factorial_denominator(exponent: i32) -> BeamResult<f64> {
    let denom = match exponent {
        -2 | -1 | 0 | 1 => 1.0,
        2 => 2.0,
        3 => 6.0,
        4 => 24.0,
        5 => 120.0,
        other => {
            return Err(BeamError::invalid_argument(format!(
                "no factorial denominator for exponent {other}"
            )))
        }
    };
    Ok(denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_step_exponents_switch_on_at_position() {
        for n in [-1, 0] {
            assert_eq!(singularity(2.0, n, 1.999).unwrap(), 0.0);
            assert_eq!(singularity(2.0, n, 2.0).unwrap(), 1.0);
            assert_eq!(singularity(2.0, n, 7.5).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_power_exponents_vanish_at_position() {
        for n in 1..=5 {
            assert_eq!(singularity(3.0, n, 3.0).unwrap(), 0.0);
            assert_eq!(singularity(3.0, n, 1.0).unwrap(), 0.0);
        }
        assert_relative_eq!(singularity(3.0, 1, 5.0).unwrap(), 2.0);
        assert_relative_eq!(singularity(3.0, 3, 5.0).unwrap(), 8.0);
        assert_relative_eq!(singularity(1.5, 4, 4.0).unwrap(), 39.0625);
    }

    #[test]
    fn test_exponent_below_minus_one_rejected() {
        let err = singularity(0.0, -2, 1.0).unwrap_err();
        assert!(matches!(err, BeamError::InvalidArgument(_)));
        assert!(singularity(0.0, -7, 1.0).is_err());
    }

    #[test]
    fn test_positions_outside_span_extrapolate() {
        // Nothing clamps x to the beam; the bracket rules apply as-is.
        assert_relative_eq!(singularity(-1.0, 2, 1.0).unwrap(), 4.0);
        assert_eq!(singularity(12.0, 2, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_factorial_denominators() {
        let expected = [
            (-2, 1.0),
            (-1, 1.0),
            (0, 1.0),
            (1, 1.0),
            (2, 2.0),
            (3, 6.0),
            (4, 24.0),
            (5, 120.0),
        ];
        for (exponent, denom) in expected {
            assert_eq!(factorial_denominator(exponent).unwrap(), denom);
        }
    }

    #[test]
    fn test_factorial_denominator_out_of_table() {
        assert!(matches!(
            factorial_denominator(6),
            Err(BeamError::InvalidArgument(_))
        ));
        assert!(factorial_denominator(-3).is_err());
    }
}
