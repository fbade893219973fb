//! Value introspection surface.
//!
//! Rust has no runtime reflection, so the engine works against the
//! [`Reflect`] trait: every comparable value knows how to describe itself as
//! a [`Shape`], be that a scalar, a date, a container, or a composite with
//! named fields. Composite descriptors are generated at compile time by the
//! [`reflect_composite!`](crate::reflect_composite) macro; implementations
//! for the std/chrono types live in [`impls`].
//!
//! Shared and interior-mutable nodes (`Rc`, `Weak`, `RefCell`) surface
//! through [`Shape::Snapshot`] together with [`Reflect::identity`], which is
//! what makes cyclic graphs observable and safely traversable.

use std::rc::Rc;

use chrono::{DateTime, Utc};

mod impls;
mod macros;
pub(crate) mod render;

pub use render::render_value;

/// A value that can be structurally compared.
///
/// Implementations must be cheap to call repeatedly: `shape` is invoked once
/// or twice per node per comparison and must not mutate the value.
pub trait Reflect {
    /// Describe this value for one level of traversal.
    fn shape(&self) -> Shape<'_>;

    /// A stable per-allocation identity, if this value is a shared handle.
    ///
    /// `Rc`/`Arc`/`Weak` return their allocation address so that the engine
    /// can recognise the same node reached twice (sharing) and reference
    /// pairs already being compared (cycles). Plain values return `None` and
    /// fall back to their borrow address, which is stable for the duration
    /// of one comparison call.
    fn identity(&self) -> Option<usize> {
        None
    }
}

/// One level of a reflected value.
///
/// Borrows from the reflected value; child handles are plain `&dyn Reflect`
/// references into the original structure, except for [`Shape::Snapshot`],
/// which owns its target.
pub enum Shape<'a> {
    /// The nil value (`Option::None`, `()`, a dangling `Weak`).
    Unit,
    Bool(bool),
    /// Any integer, widened to `i128` so widths compare by value.
    Int(i128),
    Float(f64),
    Char(char),
    Text(&'a str),
    /// A date/time instant, normalised to UTC.
    Temporal(DateTime<Utc>),
    /// An ordered sequence (vectors, slices, arrays).
    Sequence(Vec<&'a dyn Reflect>),
    /// An unordered collection (sets). Element order carries no meaning.
    Set(Vec<&'a dyn Reflect>),
    /// Key-value entries; keys are rendered strings, sorted for determinism.
    Map(Vec<(String, &'a dyn Reflect)>),
    /// A struct-like value with named fields.
    Composite(CompositeShape<'a>),
    /// An owned handle to a node that cannot be borrowed through directly
    /// (`RefCell` contents, upgraded `Weak` targets). The engine resolves
    /// these before classification while keeping the original wrapper's
    /// identity for cycle detection.
    Snapshot(Rc<dyn Reflect>),
}

impl Shape<'_> {
    /// Short label for the shape kind, used in reports and mismatch text.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Shape::Unit => "null",
            Shape::Bool(_) => "boolean",
            Shape::Int(_) => "integer",
            Shape::Float(_) => "float",
            Shape::Char(_) => "character",
            Shape::Text(_) => "string",
            Shape::Temporal(_) => "date",
            Shape::Sequence(_) => "sequence",
            Shape::Set(_) => "set",
            Shape::Map(_) => "map",
            Shape::Composite(_) => "composite",
            Shape::Snapshot(_) => "snapshot",
        }
    }
}

/// Compile-time member-descriptor table for a composite value.
pub struct CompositeShape<'a> {
    /// The declared type name, compared before any field comparison.
    pub type_name: &'static str,
    /// Names of the identifying subset used by lenient container matching
    /// (empty when the type declares no key).
    pub key_fields: &'static [&'static str],
    /// The named data fields, in declaration order.
    pub fields: Vec<FieldSlot<'a>>,
}

impl<'a> CompositeShape<'a> {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'a dyn Reflect> {
        self.fields
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.value)
    }
}

/// A single named field of a composite value.
pub struct FieldSlot<'a> {
    pub name: &'static str,
    pub value: &'a dyn Reflect,
}
