//! Value pair classification.
//!
//! The classifier decides *what kind of comparison* applies to a pair; it
//! never decides equality itself. Identity and snapshot resolution happen in
//! the orchestrator before classification, so `Shape::Snapshot` never
//! reaches this point.

use crate::reflect::Shape;

/// Dispatch category for a pair of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Both sides are nil; terminates with no difference.
    BothNil,
    /// Exactly one side is nil.
    NullMismatch,
    /// Both sides are compatible scalars (numeric kinds form one family).
    Scalar,
    /// Both sides are dates.
    Temporal,
    /// Both sides are ordered sequences.
    Sequence,
    /// Both sides are unordered collections.
    Set,
    /// Both sides are key-value maps.
    Map,
    /// Both sides are composites.
    Composite,
    /// The shapes cannot be compared meaningfully; reported as a leaf.
    TypeMismatch,
}

/// Classify a pair of shapes, applying the priority rules in order:
/// nil checks first, then containers, dates, scalars, composites.
pub fn classify(expected: &Shape<'_>, actual: &Shape<'_>) -> Category {
    match (expected, actual) {
        (Shape::Unit, Shape::Unit) => Category::BothNil,
        (Shape::Unit, _) | (_, Shape::Unit) => Category::NullMismatch,
        (Shape::Sequence(_), Shape::Sequence(_)) => Category::Sequence,
        (Shape::Set(_), Shape::Set(_)) => Category::Set,
        (Shape::Map(_), Shape::Map(_)) => Category::Map,
        (Shape::Sequence(_) | Shape::Set(_) | Shape::Map(_), _)
        | (_, Shape::Sequence(_) | Shape::Set(_) | Shape::Map(_)) => Category::TypeMismatch,
        (Shape::Temporal(_), Shape::Temporal(_)) => Category::Temporal,
        (Shape::Temporal(_), _) | (_, Shape::Temporal(_)) => Category::TypeMismatch,
        (e, a) if is_scalar(e) && is_scalar(a) => {
            if scalar_kinds_compatible(e, a) {
                Category::Scalar
            } else {
                Category::TypeMismatch
            }
        }
        (e, a) if is_scalar(e) || is_scalar(a) => Category::TypeMismatch,
        (Shape::Composite(_), Shape::Composite(_)) => Category::Composite,
        // Snapshot pairs are resolved before classification; anything left
        // over cannot be compared.
        _ => Category::TypeMismatch,
    }
}

fn is_scalar(shape: &Shape<'_>) -> bool {
    matches!(
        shape,
        Shape::Bool(_) | Shape::Int(_) | Shape::Float(_) | Shape::Char(_) | Shape::Text(_)
    )
}

fn scalar_kinds_compatible(expected: &Shape<'_>, actual: &Shape<'_>) -> bool {
    matches!(
        (expected, actual),
        (Shape::Bool(_), Shape::Bool(_))
            | (Shape::Char(_), Shape::Char(_))
            | (Shape::Text(_), Shape::Text(_))
            | (Shape::Int(_) | Shape::Float(_), Shape::Int(_) | Shape::Float(_))
    )
}
