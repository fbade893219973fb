//! Human-readable report renderer for difference trees.

use crate::compare::model::{Difference, DifferenceKind};

/// Render a plain-text report of a [`Difference`] tree.
///
/// The report is intended for assertion failure output and review displays.
/// It lists every leaf difference with its path and display values; the
/// structured tree stays the source of truth.
pub fn render_report(diff: &Difference) -> String {
    let leaves = diff.leaves();
    let mut out = String::new();

    out.push_str(&format!(
        "Found {} difference{}:\n",
        leaves.len(),
        if leaves.len() == 1 { "" } else { "s" }
    ));

    for leaf in leaves {
        out.push('\n');
        if leaf.kind() != DifferenceKind::ValueMismatch {
            out.push_str(&format!("Reason:   {}\n", leaf.kind().label()));
        }
        out.push_str(&format!("Expected: {}\n", leaf.expected_value()));
        out.push_str(&format!("Actual:   {}\n", leaf.actual_value()));
        out.push_str(&format!("Field:    {}\n", leaf.path_string()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::comparator::ReflectionComparator;
    use crate::compare::model::FieldPath;

    #[test]
    fn test_single_value_mismatch() {
        let diff = ReflectionComparator::new().compare(&1i32, &2i32).unwrap();
        let report = render_report(&diff);
        assert!(report.starts_with("Found 1 difference:\n"));
        assert!(report.contains("Expected: 1\n"));
        assert!(report.contains("Actual:   2\n"));
        assert!(report.contains("Field:    <root>\n"));
        assert!(!report.contains("Reason:"));
    }

    #[test]
    fn test_nested_report_lists_each_leaf() {
        let expected = vec![1, 2, 3];
        let actual = vec![1, 9, 3, 4];
        let diff = ReflectionComparator::new()
            .compare(&expected, &actual)
            .unwrap();
        let report = render_report(&diff);
        assert!(report.starts_with("Found 2 differences:\n"));
        assert!(report.contains("Field:    [1]\n"));
        assert!(report.contains("Field:    [3]\n"));
        assert!(report.contains("Reason:   unexpected element\n"));
    }

    #[test]
    fn test_non_value_kinds_carry_a_reason_line() {
        let leaf = Difference::leaf(
            DifferenceKind::NullMismatch,
            &FieldPath::root(),
            "null".to_string(),
            "3".to_string(),
        );
        let report = render_report(&leaf);
        assert!(report.contains("Reason:   null mismatch\n"));
    }
}
