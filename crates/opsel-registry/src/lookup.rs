//! Read-only view of user declarations consumed by operator resolution.

use opsel_core::TypeHash;

use crate::{BinaryOperatorMethod, ConversionMethod, TypeEntry, UnaryOperatorMethod};

/// Lookup of user-declared types and the operator and conversion methods
/// declared directly on them.
///
/// Implementors must be cheap to query repeatedly; the resolver caches the
/// derived candidate sets per type but still walks base chains on every call.
pub trait OperatorLookup {
    /// Get the entry for a user type.
    fn type_entry(&self, ty: TypeHash) -> Option<&TypeEntry>;

    /// Unary operators declared on `ty` (not on its bases).
    fn unary_operators(&self, ty: TypeHash) -> &[UnaryOperatorMethod];

    /// Binary operators declared on `ty` (not on its bases).
    fn binary_operators(&self, ty: TypeHash) -> &[BinaryOperatorMethod];

    /// Conversion methods declared on `ty` (not on its bases).
    fn conversions(&self, ty: TypeHash) -> &[ConversionMethod];

    /// Direct base class of `ty`.
    fn base_type(&self, ty: TypeHash) -> Option<TypeHash> {
        self.type_entry(ty).and_then(|entry| entry.base)
    }

    /// `ty` followed by each of its base classes, nearest first.
    fn base_chain(&self, ty: TypeHash) -> BaseChain<'_, Self> {
        BaseChain {
            lookup: self,
            next: self.type_entry(ty).map(|entry| entry.hash),
        }
    }

    /// Whether `base` is `ty` or one of its base classes.
    fn derives_from(&self, ty: TypeHash, base: TypeHash) -> bool {
        self.base_chain(ty).any(|hash| hash == base)
    }
}

/// Iterator over a type and its base classes.
pub struct BaseChain<'a, L: ?Sized> {
    lookup: &'a L,
    next: Option<TypeHash>,
}

impl<L: OperatorLookup + ?Sized> Iterator for BaseChain<'_, L> {
    type Item = TypeHash;

    fn next(&mut self) -> Option<TypeHash> {
        let current = self.next?;
        self.next = self.lookup.base_type(current);
        Some(current)
    }
}
