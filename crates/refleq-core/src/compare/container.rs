//! Sequence, set and map comparison.
//!
//! Strict sequences compare positionally. Lenient matching (lenient-order
//! sequences and all sets) runs in two phases: exact matches consume their
//! expected element first, then every leftover actual element claims the
//! closest remaining expected element so the report can show the smallest
//! difference instead of an unrelated pairing.

use std::collections::BTreeMap;

use crate::compare::comparator::{resolve, Walker};
use crate::compare::model::{Difference, DifferenceKind, ABSENT};
use crate::reflect::{render_value, Reflect, Shape};

impl Walker {
    pub(super) fn diff_sequence_strict(
        &mut self,
        expected: &[&dyn Reflect],
        actual: &[&dyn Reflect],
        depth: usize,
    ) -> Option<Difference> {
        let mut children = Vec::new();
        let common = expected.len().min(actual.len());

        for index in 0..common {
            self.path.push_index(index);
            if let Some(diff) = self.diff(expected[index], actual[index], depth + 1) {
                children.push(diff);
            }
            self.path.pop();
        }
        for (index, missing) in expected.iter().enumerate().skip(common) {
            self.path.push_index(index);
            children.push(Difference::leaf(
                DifferenceKind::MissingElement,
                &self.path,
                render_value(*missing),
                ABSENT.to_string(),
            ));
            self.path.pop();
        }
        for (index, extra) in actual.iter().enumerate().skip(common) {
            self.path.push_index(index);
            children.push(Difference::leaf(
                DifferenceKind::ExtraElement,
                &self.path,
                ABSENT.to_string(),
                render_value(*extra),
            ));
            self.path.pop();
        }

        self.container_parent(expected.len(), actual.len(), children)
    }

    /// Order-insensitive matching used for lenient-order sequences and for
    /// sets. Expected elements consumed by an exact match are out of the
    /// game; elements merely claimed as a best candidate still explain an
    /// extra actual element but no longer count as missing.
    pub(super) fn diff_lenient(
        &mut self,
        expected: &[&dyn Reflect],
        actual: &[&dyn Reflect],
        depth: usize,
    ) -> Option<Difference> {
        let mut consumed = vec![false; expected.len()];
        let mut claimed = vec![false; expected.len()];
        let mut children = Vec::new();

        for (actual_index, actual_element) in actual.iter().enumerate() {
            let exact = expected.iter().enumerate().find(|(expected_index, candidate)| {
                !consumed[*expected_index]
                    && self.probe(**candidate, *actual_element, depth + 1).is_none()
            });
            if let Some((expected_index, _)) = exact {
                consumed[expected_index] = true;
                continue;
            }

            self.path.push_index(actual_index);
            let mut best: Option<(usize, Difference)> = None;
            for expected_index in self.candidate_indices(expected, *actual_element, &consumed, depth)
            {
                if let Some(diff) =
                    self.probe(expected[expected_index], *actual_element, depth + 1)
                {
                    let closer = match &best {
                        None => true,
                        Some((_, current)) => diff.weight() < current.weight(),
                    };
                    if closer {
                        best = Some((expected_index, diff));
                    }
                }
            }
            match best {
                Some((expected_index, diff)) => {
                    claimed[expected_index] = true;
                    children.push(Difference::with_children(
                        DifferenceKind::ExtraElement,
                        &self.path,
                        ABSENT.to_string(),
                        render_value(*actual_element),
                        vec![diff],
                    ));
                }
                None => {
                    children.push(Difference::leaf(
                        DifferenceKind::ExtraElement,
                        &self.path,
                        ABSENT.to_string(),
                        render_value(*actual_element),
                    ));
                }
            }
            self.path.pop();
        }

        for (expected_index, expected_element) in expected.iter().enumerate() {
            if consumed[expected_index] || claimed[expected_index] {
                continue;
            }
            self.path.push_index(expected_index);
            children.push(Difference::leaf(
                DifferenceKind::MissingElement,
                &self.path,
                render_value(*expected_element),
                ABSENT.to_string(),
            ));
            self.path.pop();
        }

        self.container_parent(expected.len(), actual.len(), children)
    }

    pub(super) fn diff_map(
        &mut self,
        expected: &[(String, &dyn Reflect)],
        actual: &[(String, &dyn Reflect)],
        depth: usize,
    ) -> Option<Difference> {
        let actual_by_key: BTreeMap<&str, &dyn Reflect> = actual
            .iter()
            .map(|(key, value)| (key.as_str(), *value))
            .collect();
        let mut children = Vec::new();

        for (key, expected_value) in expected {
            self.path.push_key(key);
            match actual_by_key.get(key.as_str()) {
                Some(actual_value) => {
                    if let Some(diff) = self.diff(*expected_value, *actual_value, depth + 1) {
                        children.push(diff);
                    }
                }
                None => {
                    children.push(Difference::leaf(
                        DifferenceKind::MissingEntry,
                        &self.path,
                        render_value(*expected_value),
                        ABSENT.to_string(),
                    ));
                }
            }
            self.path.pop();
        }

        for (key, actual_value) in actual {
            if expected.iter().any(|(expected_key, _)| expected_key == key) {
                continue;
            }
            self.path.push_key(key);
            children.push(Difference::leaf(
                DifferenceKind::ExtraEntry,
                &self.path,
                ABSENT.to_string(),
                render_value(*actual_value),
            ));
            self.path.pop();
        }

        self.container_parent(expected.len(), actual.len(), children)
    }

    fn container_parent(
        &self,
        expected_len: usize,
        actual_len: usize,
        children: Vec<Difference>,
    ) -> Option<Difference> {
        if children.is_empty() {
            return None;
        }
        let kind = if expected_len == actual_len {
            DifferenceKind::Nested
        } else {
            DifferenceKind::SizeMismatch
        };
        Some(Difference::with_children(
            kind,
            &self.path,
            expected_len.to_string(),
            actual_len.to_string(),
            children,
        ))
    }

    /// Candidate expected elements for a best-match search: elements whose
    /// identifying fields agree with the actual element, or every remaining
    /// element when no identifying fields narrow the search down.
    fn candidate_indices(
        &self,
        expected: &[&dyn Reflect],
        actual: &dyn Reflect,
        consumed: &[bool],
        depth: usize,
    ) -> Vec<usize> {
        let keyed: Vec<usize> = expected
            .iter()
            .enumerate()
            .filter(|(index, candidate)| {
                !consumed[*index] && self.keys_agree(**candidate, actual, depth)
            })
            .map(|(index, _)| index)
            .collect();
        if keyed.is_empty() {
            (0..expected.len())
                .filter(|index| !consumed[*index])
                .collect()
        } else {
            keyed
        }
    }

    fn keys_agree(&self, expected: &dyn Reflect, actual: &dyn Reflect, depth: usize) -> bool {
        let expected = resolve(expected);
        let actual = resolve(actual);
        let (Shape::Composite(expected), Shape::Composite(actual)) =
            (expected.value().shape(), actual.value().shape())
        else {
            return false;
        };
        if expected.key_fields.is_empty() || expected.type_name != actual.type_name {
            return false;
        }
        expected.key_fields.iter().all(|name| {
            match (expected.field(name), actual.field(name)) {
                (Some(lhs), Some(rhs)) => self.probe(lhs, rhs, depth + 1).is_none(),
                _ => false,
            }
        })
    }

    /// Speculative comparison on a detached walker; the result never feeds
    /// back into this walker's visited set.
    pub(super) fn probe(
        &self,
        expected: &dyn Reflect,
        actual: &dyn Reflect,
        depth: usize,
    ) -> Option<Difference> {
        self.fork().diff(expected, actual, depth)
    }
}
