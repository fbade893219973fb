//! Display snapshots of reflected values for difference reports.

use super::{Reflect, Shape};

/// Depth at which nested structure is elided from rendered values.
const RENDER_DEPTH: usize = 2;

/// Elements shown before a sequence/set render is abbreviated.
const RENDER_WIDTH: usize = 8;

/// Render a value for inclusion in a [`Difference`](crate::Difference).
///
/// The output is a compact, bounded-depth description: scalars verbatim,
/// dates as RFC 3339, one level of container/composite content, deeper
/// structure elided. It is for humans reading failure reports, not a
/// serialization format.
pub fn render_value(value: &dyn Reflect) -> String {
    render_at(value, 0)
}

fn render_at(value: &dyn Reflect, depth: usize) -> String {
    match value.shape() {
        Shape::Unit => "null".to_string(),
        Shape::Bool(b) => b.to_string(),
        Shape::Int(i) => i.to_string(),
        Shape::Float(f) => f.to_string(),
        Shape::Char(c) => format!("'{c}'"),
        Shape::Text(s) => format!("{s:?}"),
        Shape::Temporal(t) => t.to_rfc3339(),
        Shape::Sequence(elements) => render_elements("[", "]", &elements, depth),
        Shape::Set(elements) => render_elements("{", "}", &elements, depth),
        Shape::Map(entries) => {
            if depth >= RENDER_DEPTH {
                return format!("<map of {}>", entries.len());
            }
            let body: Vec<String> = entries
                .iter()
                .take(RENDER_WIDTH)
                .map(|(k, v)| format!("{k:?}: {}", render_at(*v, depth + 1)))
                .collect();
            wrap_body("{", "}", body, entries.len())
        }
        Shape::Composite(composite) => {
            if depth >= RENDER_DEPTH {
                return format!("<{}>", composite.type_name);
            }
            let body: Vec<String> = composite
                .fields
                .iter()
                .map(|slot| format!("{}: {}", slot.name, render_at(slot.value, depth + 1)))
                .collect();
            format!("{} {{ {} }}", composite.type_name, body.join(", "))
        }
        Shape::Snapshot(target) => render_at(target.as_ref(), depth),
    }
}

fn render_elements(open: &str, close: &str, elements: &[&dyn Reflect], depth: usize) -> String {
    if depth >= RENDER_DEPTH {
        return format!("<{} of {}>", if open == "[" { "sequence" } else { "set" }, elements.len());
    }
    let body: Vec<String> = elements
        .iter()
        .take(RENDER_WIDTH)
        .map(|e| render_at(*e, depth + 1))
        .collect();
    wrap_body(open, close, body, elements.len())
}

fn wrap_body(open: &str, close: &str, mut body: Vec<String>, total: usize) -> String {
    if total > RENDER_WIDTH {
        body.push(format!("... {} more", total - RENDER_WIDTH));
    }
    format!("{open}{}{close}", body.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_render_verbatim() {
        assert_eq!(render_value(&42i32), "42");
        assert_eq!(render_value(&true), "true");
        assert_eq!(render_value(&"hi"), "\"hi\"");
        assert_eq!(render_value(&'x'), "'x'");
    }

    #[test]
    fn test_none_renders_null() {
        let none: Option<i32> = None;
        assert_eq!(render_value(&none), "null");
    }

    #[test]
    fn test_sequence_renders_elements() {
        assert_eq!(render_value(&vec![1i32, 2, 3]), "[1, 2, 3]");
    }

    #[test]
    fn test_long_sequence_abbreviated() {
        let long: Vec<i32> = (0..12).collect();
        let rendered = render_value(&long);
        assert!(rendered.contains("... 4 more"), "got: {rendered}");
    }

    #[test]
    fn test_deep_structure_elided() {
        let nested = vec![vec![vec![1i32]]];
        assert_eq!(render_value(&nested), "[[<sequence of 1>]]");
    }
}
