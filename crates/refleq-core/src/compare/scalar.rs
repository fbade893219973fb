//! Scalar and date equality.

use chrono::{DateTime, Utc};

use crate::reflect::Shape;

/// Value equality for two scalar shapes of compatible kinds.
///
/// Numeric values compare irrespective of their original width or of
/// int/float representation: `3u8`, `3i64` and `3.0` are all equal.
pub(crate) fn scalars_equal(expected: &Shape<'_>, actual: &Shape<'_>) -> bool {
    match (expected, actual) {
        (Shape::Bool(e), Shape::Bool(a)) => e == a,
        (Shape::Char(e), Shape::Char(a)) => e == a,
        (Shape::Text(e), Shape::Text(a)) => e == a,
        (Shape::Int(e), Shape::Int(a)) => e == a,
        (Shape::Float(e), Shape::Float(a)) => e == a,
        (Shape::Int(i), Shape::Float(f)) | (Shape::Float(f), Shape::Int(i)) => {
            int_float_equal(*i, *f)
        }
        _ => false,
    }
}

/// Exact cross-kind numeric equality. Every integral `f64` in range fits an
/// `i128`, so the comparison round-trips through `i128` rather than casting
/// the integer to `f64`, which silently rounds above 2^53.
fn int_float_equal(int: i128, float: f64) -> bool {
    // nearest f64 to i128::MAX; fract() is NaN for infinities, so they and
    // NaN fail the integrality check
    const LIMIT: f64 = 1.7014118346046923e38;
    if float.fract() != 0.0 || float < -LIMIT || float >= LIMIT {
        return false;
    }
    float as i128 == int
}

/// Date equality.
///
/// With lenient dates, two non-nil instants are always equal regardless of
/// value; the mode exists to tolerate inherently non-deterministic
/// timestamps. Nil handling happens before dispatch, so nil vs non-nil is
/// still reported.
pub(crate) fn temporals_equal(
    expected: &DateTime<Utc>,
    actual: &DateTime<Utc>,
    lenient_dates: bool,
) -> bool {
    lenient_dates || expected == actual
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::Reflect;
    use chrono::TimeZone;

    #[test]
    fn test_numeric_width_irrelevant() {
        assert!(scalars_equal(&3i8.shape(), &3u64.shape()));
        assert!(scalars_equal(&3i32.shape(), &3.0f64.shape()));
        assert!(!scalars_equal(&3i32.shape(), &3.5f64.shape()));
    }

    #[test]
    fn test_large_int_float_pairs_compare_exactly() {
        // adjacent to 2^53, where f64 can no longer represent every integer
        assert!(!scalars_equal(
            &9007199254740993i64.shape(),
            &9007199254740992.0f64.shape()
        ));
        assert!(scalars_equal(
            &9007199254740992i64.shape(),
            &9007199254740992.0f64.shape()
        ));
        assert!(!scalars_equal(&1i64.shape(), &f64::INFINITY.shape()));
        assert!(!scalars_equal(&0i64.shape(), &f64::NAN.shape()));
        assert!(scalars_equal(&(-4i64).shape(), &(-4.0f64).shape()));
    }

    #[test]
    fn test_string_content_equality() {
        assert!(scalars_equal(&"abc".shape(), &String::from("abc").shape()));
        assert!(!scalars_equal(&"abc".shape(), &"abd".shape()));
    }

    #[test]
    fn test_lenient_dates_ignores_value() {
        let a = Utc.with_ymd_and_hms(2006, 1, 1, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2026, 6, 2, 12, 30, 0).unwrap();
        assert!(!temporals_equal(&a, &b, false));
        assert!(temporals_equal(&a, &b, true));
        assert!(temporals_equal(&a, &a, false));
    }
}
