//! Difference model.
//!
//! A [`Difference`] is only ever constructed for a genuinely unequal pair;
//! "no difference" is the absence of a node (`None`), never an empty node.
//! The tree is owned and serializable so downstream report code can hold it
//! after the compared values are gone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker rendered in place of a value that has no counterpart.
pub(crate) const ABSENT: &str = "<absent>";

/// Classification of one point of divergence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifferenceKind {
    /// Exactly one side is nil.
    NullMismatch,
    /// The two sides have incompatible shapes or composite types.
    TypeMismatch,
    /// Scalar or date values differ.
    ValueMismatch,
    /// Container lengths differ (children localize the per-element detail).
    SizeMismatch,
    /// An expected element has no counterpart in the actual container.
    MissingElement,
    /// An actual element has no counterpart among the expected elements;
    /// when a best partial match exists its diff is attached as a child.
    ExtraElement,
    /// A map key present only on the expected side.
    MissingEntry,
    /// A map key present only on the actual side.
    ExtraEntry,
    /// A composite field absent on the actual side.
    MissingField,
    /// Aggregate node whose children localize the divergence.
    Nested,
    /// The depth cap was reached before the graphs were fully compared.
    Truncated,
}

impl DifferenceKind {
    /// Human-readable label used by report rendering.
    pub fn label(&self) -> &'static str {
        match self {
            DifferenceKind::NullMismatch => "null mismatch",
            DifferenceKind::TypeMismatch => "type mismatch",
            DifferenceKind::ValueMismatch => "value mismatch",
            DifferenceKind::SizeMismatch => "size mismatch",
            DifferenceKind::MissingElement => "missing element",
            DifferenceKind::ExtraElement => "unexpected element",
            DifferenceKind::MissingEntry => "missing map entry",
            DifferenceKind::ExtraEntry => "unexpected map entry",
            DifferenceKind::MissingField => "missing field",
            DifferenceKind::Nested => "nested differences",
            DifferenceKind::Truncated => "comparison truncated",
        }
    }
}

/// One step on the path from the comparison root to a difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathSegment {
    /// A named composite field.
    Field(String),
    /// A sequence/set element position.
    Index(usize),
    /// A map key.
    Key(String),
}

/// The ordered list of field/index names from the root to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path, rendered as `<root>`.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub(crate) fn push_field(&mut self, name: &str) {
        self.segments.push(PathSegment::Field(name.to_string()));
    }

    pub(crate) fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    pub(crate) fn push_key(&mut self, key: &str) {
        self.segments.push(PathSegment::Key(key.to_string()));
    }

    pub(crate) fn pop(&mut self) {
        self.segments.pop();
    }
}

impl fmt::Display for FieldPath {
    /// Renders e.g. `address.city`, `rows[2].label`, `env["HOME"]`;
    /// the empty path renders `<root>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        let mut first = true;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => {
                    if !first {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Key(k) => write!(f, "[{k:?}]")?,
            }
            first = false;
        }
        Ok(())
    }
}

/// A node identifying one divergence between the compared graphs.
///
/// Composite and container differences own child differences; a leaf owns
/// none. `expected`/`actual` are display snapshots captured when the node
/// was built, so the tree outlives the compared values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Difference {
    kind: DifferenceKind,
    path: FieldPath,
    expected: String,
    actual: String,
    children: Vec<Difference>,
}

impl Difference {
    pub(crate) fn leaf(
        kind: DifferenceKind,
        path: &FieldPath,
        expected: String,
        actual: String,
    ) -> Self {
        Self {
            kind,
            path: path.clone(),
            expected,
            actual,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_children(
        kind: DifferenceKind,
        path: &FieldPath,
        expected: String,
        actual: String,
        children: Vec<Difference>,
    ) -> Self {
        Self {
            kind,
            path: path.clone(),
            expected,
            actual,
            children,
        }
    }

    pub fn kind(&self) -> DifferenceKind {
        self.kind
    }

    /// The location of this divergence relative to the comparison root.
    pub fn field_path(&self) -> &FieldPath {
        &self.path
    }

    /// The rendered path, e.g. `address.city` or `<root>`.
    pub fn path_string(&self) -> String {
        self.path.to_string()
    }

    /// Display snapshot of the expected-side value at this node.
    pub fn expected_value(&self) -> &str {
        &self.expected
    }

    /// Display snapshot of the actual-side value at this node.
    pub fn actual_value(&self) -> &str {
        &self.actual
    }

    pub fn children(&self) -> &[Difference] {
        &self.children
    }

    /// All leaf differences of this tree, in traversal order.
    pub fn leaves(&self) -> Vec<&Difference> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Difference>) {
        if self.children.is_empty() {
            out.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(out);
        }
    }

    /// Total node count, used to rank candidate matches: the smaller the
    /// weight, the closer the match.
    pub(crate) fn weight(&self) -> usize {
        1 + self.children.iter().map(Difference::weight).sum::<usize>()
    }
}
