//! Refleq Assert - Reflection-style equality assertions
//!
//! Thin assertion layer over [`refleq_core`]: compares two values
//! structurally and panics with a rendered difference report when they
//! diverge, so test failures show exactly which fields differ instead of a
//! wall of `Debug` output.

use refleq_core::{compare, render_report, Mode, Reflect};

/// Asserts structural equality under the default strict semantics.
///
/// # Panics
///
/// Panics with a difference report when the values are not equal.
#[track_caller]
pub fn assert_reflect_eq<E, A>(expected: &E, actual: &A)
where
    E: Reflect + ?Sized,
    A: Reflect + ?Sized,
{
    assert_reflect_eq_with(expected, actual, &[]);
}

/// Asserts structural equality under an explicit mode list.
///
/// # Panics
///
/// Panics with a difference report when the values are not equal, and on a
/// conflicting mode list.
#[track_caller]
pub fn assert_reflect_eq_with<E, A>(expected: &E, actual: &A, modes: &[Mode])
where
    E: Reflect + ?Sized,
    A: Reflect + ?Sized,
{
    match compare(expected, actual, modes) {
        Ok(None) => {}
        Ok(Some(diff)) => panic!(
            "assertion failed: values are not reflectively equal\n{}",
            render_report(&diff)
        ),
        Err(err) => panic!("invalid comparison configuration: {err}"),
    }
}

/// Asserts equality with lenient ordering and ignored expected-side
/// defaults, the forgiving variant for fixture-heavy tests.
///
/// # Panics
///
/// Panics with a difference report when the values are not leniently equal.
#[track_caller]
pub fn assert_lenient_eq<E, A>(expected: &E, actual: &A)
where
    E: Reflect + ?Sized,
    A: Reflect + ?Sized,
{
    assert_reflect_eq_with(expected, actual, &[Mode::LenientOrder, Mode::IgnoreDefaults]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_values_pass() {
        assert_reflect_eq(&42i32, &42i64);
        assert_reflect_eq(&vec![1, 2], &vec![1, 2]);
    }

    #[test]
    fn test_lenient_ignores_order() {
        assert_lenient_eq(&vec![3, 1, 2], &vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "not reflectively equal")]
    fn test_unequal_values_panic() {
        assert_reflect_eq(&1i32, &2i32);
    }

    #[test]
    #[should_panic(expected = "invalid comparison configuration")]
    fn test_conflicting_modes_panic() {
        assert_reflect_eq_with(&1i32, &1i32, &[Mode::StrictOrder, Mode::LenientOrder]);
    }
}
