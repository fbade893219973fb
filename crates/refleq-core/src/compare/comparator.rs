//! Comparison orchestrator.
//!
//! [`ReflectionComparator`] walks two value graphs in lockstep and produces a
//! [`Difference`] tree when they disagree. The walk dispatches on the
//! [`Category`] of each shape pair, guards against reference cycles with a
//! visited-pair set, and caps recursion depth so pathological inputs cannot
//! blow the stack.

use std::collections::HashSet;
use std::rc::Rc;

use tracing::{debug, trace};

use crate::compare::classifier::{classify, Category};
use crate::compare::model::{Difference, DifferenceKind, FieldPath};
use crate::compare::modes::{Mode, ModeSet};
use crate::compare::scalar::{scalars_equal, temporals_equal};
use crate::errors::Result;
use crate::reflect::{render_value, Reflect, Shape};

/// Hard cap on nesting depth. Deeper structure is reported as a single
/// [`DifferenceKind::Truncated`] leaf rather than walked further.
pub(crate) const MAX_DEPTH: usize = 128;

/// Configured comparator. Cheap to construct and stateless across calls;
/// every [`compare`](ReflectionComparator::compare) starts a fresh walk.
#[derive(Debug, Clone, Copy)]
pub struct ReflectionComparator {
    modes: ModeSet,
}

impl ReflectionComparator {
    /// Comparator with the default strict-order semantics.
    pub fn new() -> Self {
        Self {
            modes: ModeSet::default(),
        }
    }

    /// Comparator configured from an explicit mode list.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::ConflictingModes`](crate::errors::CompareError)
    /// when the list requests both strict and lenient ordering.
    pub fn with_modes(modes: &[Mode]) -> Result<Self> {
        Ok(Self {
            modes: ModeSet::from_modes(modes)?,
        })
    }

    /// The resolved mode set this comparator runs with.
    pub fn modes(&self) -> ModeSet {
        self.modes
    }

    /// Compares two values. `None` means equal under the configured modes;
    /// `Some` carries the root of the difference tree.
    pub fn compare(&self, expected: &dyn Reflect, actual: &dyn Reflect) -> Option<Difference> {
        debug!(modes = ?self.modes, "starting comparison");
        let mut walker = Walker::new(self.modes);
        let outcome = walker.diff(expected, actual, 0);
        debug!(equal = outcome.is_none(), "comparison finished");
        outcome
    }

    /// Convenience wrapper for callers that only need the verdict.
    pub fn is_equal(&self, expected: &dyn Reflect, actual: &dyn Reflect) -> bool {
        self.compare(expected, actual).is_none()
    }
}

impl Default for ReflectionComparator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot comparison entry point.
///
/// # Errors
///
/// Fails only on a conflicting mode list; the comparison itself is total.
pub fn compare<E, A>(expected: &E, actual: &A, modes: &[Mode]) -> Result<Option<Difference>>
where
    E: Reflect + ?Sized,
    A: Reflect + ?Sized,
{
    // `&E` is Sized and implements `Reflect` by delegation, so it coerces
    // to the trait object even when `E` itself is unsized.
    Ok(ReflectionComparator::with_modes(modes)?.compare(&expected, &actual))
}

/// A value with any snapshot indirection peeled off.
///
/// Snapshots own their payload, so the resolved value is either the borrow we
/// started from or an `Rc` kept alive for the duration of the visit.
pub(super) enum Node<'a> {
    Plain(&'a dyn Reflect),
    Snap(Rc<dyn Reflect>),
}

impl Node<'_> {
    pub(super) fn value(&self) -> &dyn Reflect {
        match self {
            Node::Plain(v) => *v,
            Node::Snap(rc) => rc.as_ref(),
        }
    }
}

/// Follows snapshot indirections until a concrete shape is reached.
pub(super) fn resolve(value: &dyn Reflect) -> Node<'_> {
    let mut current = Node::Plain(value);
    while let Some(inner) = next_snapshot(current.value()) {
        current = Node::Snap(inner);
    }
    current
}

fn next_snapshot(value: &dyn Reflect) -> Option<Rc<dyn Reflect>> {
    match value.shape() {
        Shape::Snapshot(rc) => Some(rc),
        _ => None,
    }
}

fn ptr_key(value: &dyn Reflect) -> usize {
    (value as *const dyn Reflect).cast::<()>() as usize
}

/// Cycle-guard key: a declared identity (shared-pointer allocation) when the
/// value has one, its address otherwise. Computed on the value as handed in,
/// before snapshot resolution, so a snapshot of a cell keeps the identity of
/// the wrapper that produced it.
fn visit_key(value: &dyn Reflect) -> usize {
    value.identity().unwrap_or_else(|| ptr_key(value))
}

/// Mutable walk state for one comparison call.
pub(super) struct Walker {
    pub(super) modes: ModeSet,
    pub(super) path: FieldPath,
    pub(super) visited: HashSet<(usize, usize)>,
}

impl Walker {
    pub(super) fn new(modes: ModeSet) -> Self {
        Self {
            modes,
            path: FieldPath::root(),
            visited: HashSet::new(),
        }
    }

    /// A sub-walker for speculative candidate comparisons. The path is kept
    /// so rendered paths inside candidate diffs stay absolute; the visited
    /// set is fresh so speculation never poisons the main walk.
    pub(super) fn fork(&self) -> Self {
        Self {
            modes: self.modes,
            path: self.path.clone(),
            visited: HashSet::new(),
        }
    }

    pub(super) fn leaf(
        &self,
        kind: DifferenceKind,
        expected: &dyn Reflect,
        actual: &dyn Reflect,
    ) -> Difference {
        Difference::leaf(
            kind,
            &self.path,
            render_value(expected),
            render_value(actual),
        )
    }

    pub(super) fn diff(
        &mut self,
        expected: &dyn Reflect,
        actual: &dyn Reflect,
        depth: usize,
    ) -> Option<Difference> {
        if depth > MAX_DEPTH {
            trace!(path = %self.path, "depth cap reached");
            return Some(self.leaf(DifferenceKind::Truncated, expected, actual));
        }

        // The same object is always equal to itself, whether by reference or
        // by declared shared identity. The fat-pointer comparison includes
        // the vtable, so a value sharing an address with its own first field
        // does not short-circuit.
        if std::ptr::eq(expected, actual) {
            return None;
        }
        if let (Some(e), Some(a)) = (expected.identity(), actual.identity()) {
            if e == a {
                return None;
            }
        }

        let expected_key = visit_key(expected);
        let actual_key = visit_key(actual);

        let expected = resolve(expected);
        let actual = resolve(actual);
        let expected = expected.value();
        let actual = actual.value();
        let expected_shape = expected.shape();
        let actual_shape = actual.shape();

        match classify(&expected_shape, &actual_shape) {
            Category::BothNil => None,
            Category::NullMismatch => {
                Some(self.leaf(DifferenceKind::NullMismatch, expected, actual))
            }
            Category::TypeMismatch => {
                Some(self.leaf(DifferenceKind::TypeMismatch, expected, actual))
            }
            Category::Scalar => {
                if scalars_equal(&expected_shape, &actual_shape) {
                    None
                } else {
                    Some(self.leaf(DifferenceKind::ValueMismatch, expected, actual))
                }
            }
            Category::Temporal => {
                let (Shape::Temporal(e), Shape::Temporal(a)) = (&expected_shape, &actual_shape)
                else {
                    return None;
                };
                if temporals_equal(e, a, self.modes.lenient_dates()) {
                    None
                } else {
                    Some(self.leaf(DifferenceKind::ValueMismatch, expected, actual))
                }
            }
            Category::Sequence => {
                if !self.visited.insert((expected_key, actual_key)) {
                    trace!(path = %self.path, "cycle detected, treating pair as equal");
                    return None;
                }
                let (Shape::Sequence(e), Shape::Sequence(a)) = (&expected_shape, &actual_shape)
                else {
                    return None;
                };
                if self.modes.lenient_order() {
                    self.diff_lenient(e, a, depth)
                } else {
                    self.diff_sequence_strict(e, a, depth)
                }
            }
            Category::Set => {
                if !self.visited.insert((expected_key, actual_key)) {
                    trace!(path = %self.path, "cycle detected, treating pair as equal");
                    return None;
                }
                let (Shape::Set(e), Shape::Set(a)) = (&expected_shape, &actual_shape) else {
                    return None;
                };
                // Sets have no meaningful order, so they always match
                // leniently regardless of the configured modes.
                self.diff_lenient(e, a, depth)
            }
            Category::Map => {
                if !self.visited.insert((expected_key, actual_key)) {
                    trace!(path = %self.path, "cycle detected, treating pair as equal");
                    return None;
                }
                let (Shape::Map(e), Shape::Map(a)) = (&expected_shape, &actual_shape) else {
                    return None;
                };
                self.diff_map(e, a, depth)
            }
            Category::Composite => {
                if !self.visited.insert((expected_key, actual_key)) {
                    trace!(path = %self.path, "cycle detected, treating pair as equal");
                    return None;
                }
                let (Shape::Composite(e), Shape::Composite(a)) =
                    (&expected_shape, &actual_shape)
                else {
                    return None;
                };
                self.diff_composite(expected, actual, e, a, depth)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_scalars_yield_none() {
        let comparator = ReflectionComparator::new();
        assert!(comparator.compare(&5i32, &5i64).is_none());
        assert!(comparator.compare(&"hi", &String::from("hi")).is_none());
    }

    #[test]
    fn test_value_mismatch_is_a_leaf() {
        let comparator = ReflectionComparator::new();
        let diff = comparator.compare(&1i32, &2i32).unwrap();
        assert_eq!(diff.kind(), DifferenceKind::ValueMismatch);
        assert!(diff.children().is_empty());
        assert_eq!(diff.expected_value(), "1");
        assert_eq!(diff.actual_value(), "2");
    }

    #[test]
    fn test_same_reference_is_equal() {
        let value = vec![1, 2, 3];
        let comparator = ReflectionComparator::new();
        assert!(comparator.is_equal(&value, &value));
    }

    #[test]
    fn test_compare_accepts_unsized_values() {
        assert!(compare("abc", "abc", &[]).unwrap().is_none());
        let expected: &[i32] = &[1, 2];
        assert!(compare(expected, &vec![1, 2], &[]).unwrap().is_none());
    }

    #[test]
    fn test_value_overlapping_its_first_field_is_not_equal() {
        struct Holder {
            head: i64,
        }
        crate::reflect_composite!(Holder { head });

        let holder = Holder { head: 9 };
        let diff = ReflectionComparator::new()
            .compare(&holder, &holder.head)
            .unwrap();
        assert_eq!(diff.kind(), DifferenceKind::TypeMismatch);
    }

    #[test]
    fn test_compare_rejects_conflicting_modes() {
        let err = compare(&1, &1, &[Mode::StrictOrder, Mode::LenientOrder]).unwrap_err();
        assert_eq!(err.code(), "ERR_CONFLICTING_MODES");
    }

    #[test]
    fn test_nil_mismatch() {
        let comparator = ReflectionComparator::new();
        let diff = comparator.compare(&None::<i32>, &Some(3)).unwrap();
        assert_eq!(diff.kind(), DifferenceKind::NullMismatch);
        assert_eq!(diff.expected_value(), "null");
    }
}
