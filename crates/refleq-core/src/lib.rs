//! Refleq Core - Structural equality and difference engine
//!
//! This crate compares two value graphs structurally and reports where they
//! diverge, including:
//! - A [`Reflect`] introspection trait with impls for std and chrono types
//! - A [`reflect_composite!`] macro for struct-like types
//! - Strict and lenient comparison modes (ordering, defaults, dates)
//! - An owned, serializable [`Difference`] tree with precise field paths
//! - Cycle-safe traversal of shared and self-referential structures
//! - Plain-text report rendering for assertion output

pub mod compare;
pub mod errors;
pub mod logging;
pub mod reflect;

// Re-export commonly used types
pub use compare::{
    compare, render_report, Difference, DifferenceKind, FieldPath, Mode, ModeSet, PathSegment,
    ReflectionComparator,
};
pub use errors::{CompareError, CompareErrorKind, Result};
pub use reflect::{render_value, CompositeShape, FieldSlot, Reflect, Shape};
