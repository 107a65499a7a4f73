//! Conversion classification.
//!
//! Operator resolution consumes conversions through the [`ConversionClassifier`]
//! trait: `classify` says which conversion exists between two types, and the
//! provided methods derive the betterness order from it.
//!
//! ## Betterness
//!
//! Given an operand of type `S` and two candidate parameter types `T1` and `T2`,
//! the conversion to `T1` is better when:
//! 1. `S` is exactly `T1` (and not `T2`), or
//! 2. `T1` is a better conversion target: `T1` converts implicitly to `T2`
//!    but not the other way round, or
//! 3. `T1` is a signed integral type and `T2` an unsigned one (nullable
//!    wrappers looked through).
//!
//! [`StandardConversions`] is the classifier for the built-in type system plus
//! user-declared types from an [`OperatorLookup`](opsel_registry::OperatorLookup).

mod numeric;
mod standard;

pub use numeric::{find_numeric_conversion, is_implicit_numeric};
pub use standard::StandardConversions;

use opsel_core::{BetterResult, ConversionKind, DataType};

/// Classifies conversions between types.
pub trait ConversionClassifier {
    /// The conversion from `from` to `to`.
    fn classify(&self, from: &DataType, to: &DataType) -> ConversionKind;

    /// Whether an implicit conversion from `from` to `to` exists.
    fn is_implicit(&self, from: &DataType, to: &DataType) -> bool {
        self.classify(from, to).is_implicit()
    }

    /// Compare two conversion targets independently of the source.
    fn better_conversion_target(&self, t1: &DataType, t2: &DataType) -> BetterResult {
        if t1 == t2 {
            return BetterResult::Neither;
        }

        let t1_to_t2 = self.is_implicit(t1, t2);
        let t2_to_t1 = self.is_implicit(t2, t1);
        if t1_to_t2 && !t2_to_t1 {
            return BetterResult::Left;
        }
        if t2_to_t1 && !t1_to_t2 {
            return BetterResult::Right;
        }

        match (t1.underlying_builtin(), t2.underlying_builtin()) {
            (Some(a), Some(b)) if a.is_signed_integral() && b.is_unsigned_integral() => {
                BetterResult::Left
            }
            (Some(a), Some(b)) if a.is_unsigned_integral() && b.is_signed_integral() => {
                BetterResult::Right
            }
            _ => BetterResult::Neither,
        }
    }

    /// Compare the conversions from `source` to `t1` and to `t2`.
    fn better_conversion(&self, source: &DataType, t1: &DataType, t2: &DataType) -> BetterResult {
        if t1 == t2 {
            BetterResult::Neither
        } else if source == t1 {
            BetterResult::Left
        } else if source == t2 {
            BetterResult::Right
        } else {
            self.better_conversion_target(t1, t2)
        }
    }
}

impl<C: ConversionClassifier + ?Sized> ConversionClassifier for &C {
    fn classify(&self, from: &DataType, to: &DataType) -> ConversionKind {
        (**self).classify(from, to)
    }
}
