//! `Reflect` implementations for std and chrono types.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Display;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{Reflect, Shape};

macro_rules! reflect_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Reflect for $t {
                fn shape(&self) -> Shape<'_> {
                    Shape::Int(*self as i128)
                }
            }
        )+
    };
}

reflect_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, usize, isize);

impl Reflect for f32 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    fn shape(&self) -> Shape<'_> {
        Shape::Float(*self)
    }
}

impl Reflect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }
}

impl Reflect for char {
    fn shape(&self) -> Shape<'_> {
        Shape::Char(*self)
    }
}

impl Reflect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }
}

impl Reflect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self.as_str())
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Unit
    }
}

// ---------------------------------------------------------------------------
// Delegating wrappers
// ---------------------------------------------------------------------------

impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn identity(&self) -> Option<usize> {
        (**self).identity()
    }
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn identity(&self) -> Option<usize> {
        (**self).identity()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => value.shape(),
            None => Shape::Unit,
        }
    }

    fn identity(&self) -> Option<usize> {
        self.as_ref().and_then(Reflect::identity)
    }
}

impl<T: Reflect> Reflect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn identity(&self) -> Option<usize> {
        Some(Rc::as_ptr(self) as usize)
    }
}

impl<T: Reflect> Reflect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }

    fn identity(&self) -> Option<usize> {
        Some(Arc::as_ptr(self) as usize)
    }
}

/// A weak edge reflects as its upgraded target; a dangling weak is nil.
impl<T: Reflect + 'static> Reflect for Weak<T> {
    fn shape(&self) -> Shape<'_> {
        match self.upgrade() {
            Some(target) => Shape::Snapshot(target),
            None => Shape::Unit,
        }
    }

    fn identity(&self) -> Option<usize> {
        Some(self.as_ptr() as usize)
    }
}

/// Reflects a read-only snapshot of the current contents.
///
/// Panics if the cell is mutably borrowed while a comparison is running;
/// the engine itself never mutates compared values.
impl<T: Reflect + Clone + 'static> Reflect for RefCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Snapshot(Rc::new(self.borrow().clone()))
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

impl<T: Reflect> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<T: Reflect> Reflect for HashSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Set(self.iter().map(|v| v as &dyn Reflect).collect())
    }
}

impl<K: Display, V: Reflect> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(
            self.iter()
                .map(|(k, v)| (k.to_string(), v as &dyn Reflect))
                .collect(),
        )
    }
}

impl<K: Display, V: Reflect> Reflect for HashMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        let mut entries: Vec<(String, &dyn Reflect)> = self
            .iter()
            .map(|(k, v)| (k.to_string(), v as &dyn Reflect))
            .collect();
        // hash order is arbitrary; sort by rendered key for stable reports
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Shape::Map(entries)
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

impl Reflect for DateTime<Utc> {
    fn shape(&self) -> Shape<'_> {
        Shape::Temporal(*self)
    }
}

impl Reflect for DateTime<FixedOffset> {
    fn shape(&self) -> Shape<'_> {
        Shape::Temporal(self.with_timezone(&Utc))
    }
}

impl Reflect for NaiveDateTime {
    fn shape(&self) -> Shape<'_> {
        Shape::Temporal(self.and_utc())
    }
}

impl Reflect for NaiveDate {
    fn shape(&self) -> Shape<'_> {
        Shape::Temporal(self.and_time(NaiveTime::MIN).and_utc())
    }
}

// ---------------------------------------------------------------------------
// Dynamic JSON values
// ---------------------------------------------------------------------------

/// JSON values compare structurally: objects as maps, arrays as sequences.
impl Reflect for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        match self {
            serde_json::Value::Null => Shape::Unit,
            serde_json::Value::Bool(b) => Shape::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Shape::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Shape::Int(i128::from(u))
                } else {
                    Shape::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Shape::Text(s.as_str()),
            serde_json::Value::Array(items) => {
                Shape::Sequence(items.iter().map(|v| v as &dyn Reflect).collect())
            }
            serde_json::Value::Object(entries) => Shape::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v as &dyn Reflect))
                    .collect(),
            ),
        }
    }
}
