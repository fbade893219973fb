//! Comparison modes.
//!
//! A [`ModeSet`] is built once per comparator and never mutated afterwards;
//! it is `Copy` and freely shared across concurrent comparisons.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CompareError;

/// A named toggle altering comparison semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Sequences compare positionally (the default).
    StrictOrder,
    /// Sequences compare by content; element positions carry no meaning.
    LenientOrder,
    /// Expected-side fields holding the default value for their type
    /// (`false`, `0`, `0.0`, `'\0'`, nil) are not compared at all.
    IgnoreDefaults,
    /// Two non-nil dates always compare equal; nil vs non-nil is still a
    /// reported difference.
    LenientDates,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Mode::StrictOrder => "STRICT_ORDER",
            Mode::LenientOrder => "LENIENT_ORDER",
            Mode::IgnoreDefaults => "IGNORE_DEFAULTS",
            Mode::LenientDates => "LENIENT_DATES",
        };
        f.write_str(label)
    }
}

/// An immutable set of comparison modes.
///
/// The empty set means a fully strict comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSet {
    strict_order: bool,
    lenient_order: bool,
    ignore_defaults: bool,
    lenient_dates: bool,
}

impl ModeSet {
    /// Build a mode set from a list of modes.
    ///
    /// # Errors
    ///
    /// `ConflictingModes` when `StrictOrder` and `LenientOrder` are both
    /// requested. This is a programmer error, not a data difference.
    pub fn from_modes(modes: &[Mode]) -> Result<Self, CompareError> {
        let mut set = Self::default();
        for mode in modes {
            match mode {
                Mode::StrictOrder => set.strict_order = true,
                Mode::LenientOrder => set.lenient_order = true,
                Mode::IgnoreDefaults => set.ignore_defaults = true,
                Mode::LenientDates => set.lenient_dates = true,
            }
        }
        if set.strict_order && set.lenient_order {
            return Err(CompareError::ConflictingModes {
                first: Mode::StrictOrder,
                second: Mode::LenientOrder,
            });
        }
        Ok(set)
    }

    /// True if sequence element positions are not significant.
    pub fn lenient_order(&self) -> bool {
        self.lenient_order
    }

    /// True if expected-side default values suppress field comparison.
    pub fn ignore_defaults(&self) -> bool {
        self.ignore_defaults
    }

    /// True if non-nil dates always compare equal.
    pub fn lenient_dates(&self) -> bool {
        self.lenient_dates
    }
}
