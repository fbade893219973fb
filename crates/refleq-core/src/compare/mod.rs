//! Structural comparison engine.

pub mod classifier;
pub mod comparator;
pub mod model;
pub mod modes;
pub mod report;

mod composite;
mod container;
mod scalar;

pub use comparator::{compare, ReflectionComparator};
pub use model::{Difference, DifferenceKind, FieldPath, PathSegment};
pub use modes::{Mode, ModeSet};
pub use report::render_report;
