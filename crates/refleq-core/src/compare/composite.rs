//! Composite (struct-like) comparison.

use crate::compare::comparator::{resolve, Walker};
use crate::compare::model::{Difference, DifferenceKind, ABSENT};
use crate::reflect::{render_value, CompositeShape, Reflect, Shape};

impl Walker {
    pub(super) fn diff_composite(
        &mut self,
        expected_value: &dyn Reflect,
        actual_value: &dyn Reflect,
        expected: &CompositeShape<'_>,
        actual: &CompositeShape<'_>,
        depth: usize,
    ) -> Option<Difference> {
        if expected.type_name != actual.type_name {
            return Some(self.leaf(DifferenceKind::TypeMismatch, expected_value, actual_value));
        }

        let mut children = Vec::new();
        for slot in &expected.fields {
            if self.modes.ignore_defaults() && is_default(slot.value) {
                continue;
            }
            match actual.field(slot.name) {
                Some(actual_field) => {
                    self.path.push_field(slot.name);
                    if let Some(diff) = self.diff(slot.value, actual_field, depth + 1) {
                        children.push(diff);
                    }
                    self.path.pop();
                }
                None => {
                    self.path.push_field(slot.name);
                    children.push(Difference::leaf(
                        DifferenceKind::MissingField,
                        &self.path,
                        render_value(slot.value),
                        ABSENT.to_string(),
                    ));
                    self.path.pop();
                }
            }
        }

        if children.is_empty() {
            None
        } else {
            Some(Difference::with_children(
                DifferenceKind::Nested,
                &self.path,
                render_value(expected_value),
                render_value(actual_value),
                children,
            ))
        }
    }
}

/// Whether an expected-side field holds the default value for its type.
/// Only these fields are skipped under the ignore-defaults mode; the check
/// never applies to the actual side.
fn is_default(value: &dyn Reflect) -> bool {
    let node = resolve(value);
    match node.value().shape() {
        Shape::Unit | Shape::Bool(false) | Shape::Int(0) | Shape::Char('\0') => true,
        Shape::Float(f) => f == 0.0,
        _ => false,
    }
}
