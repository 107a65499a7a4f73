//! Conversion classification results.
//!
//! The resolver never decides convertibility itself. It asks a conversion
//! classifier for a [`ConversionKind`] and relies on two facts about it:
//! whether the kind is implicit, and which of two conversions is better.

use crate::TypeHash;

/// The kind of conversion between two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// No conversion needed (exact match).
    Identity,
    /// Widening numeric conversion (`int` -> `long`, `char` -> `int`, ...).
    ImplicitNumeric,
    /// `S` -> `T?` or `S?` -> `T?` built on an identity or implicit numeric conversion.
    ImplicitNullable,
    /// Value type to `object`.
    Boxing,
    /// Reference type to `object` or to a base class.
    ImplicitReference,
    /// Implicit conversion through a user-declared method.
    ImplicitUserDefined {
        /// The conversion method hash.
        method: TypeHash,
    },
    /// Narrowing numeric conversion.
    ExplicitNumeric,
    /// `S?` -> `T` or `S?` -> `T?` built on an explicit numeric conversion.
    ExplicitNullable,
    /// `object` to a value type.
    Unboxing,
    /// Base class (or `object`) to a derived reference type.
    ExplicitReference,
    /// Explicit conversion through a user-declared method.
    ExplicitUserDefined {
        /// The conversion method hash.
        method: TypeHash,
    },
    /// No conversion exists.
    NoConversion,
}

impl ConversionKind {
    /// Whether this conversion can be applied without a cast.
    pub const fn is_implicit(self) -> bool {
        matches!(
            self,
            ConversionKind::Identity
                | ConversionKind::ImplicitNumeric
                | ConversionKind::ImplicitNullable
                | ConversionKind::Boxing
                | ConversionKind::ImplicitReference
                | ConversionKind::ImplicitUserDefined { .. }
        )
    }

    pub const fn is_identity(self) -> bool {
        matches!(self, ConversionKind::Identity)
    }

    /// Whether any conversion, implicit or explicit, exists.
    pub const fn exists(self) -> bool {
        !matches!(self, ConversionKind::NoConversion)
    }

    pub const fn is_user_defined(self) -> bool {
        matches!(
            self,
            ConversionKind::ImplicitUserDefined { .. } | ConversionKind::ExplicitUserDefined { .. }
        )
    }
}

/// Outcome of comparing two alternatives for betterness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BetterResult {
    Left,
    Right,
    Neither,
}

impl BetterResult {
    /// Swap `Left` and `Right`.
    pub const fn flip(self) -> Self {
        match self {
            BetterResult::Left => BetterResult::Right,
            BetterResult::Right => BetterResult::Left,
            BetterResult::Neither => BetterResult::Neither,
        }
    }
}
