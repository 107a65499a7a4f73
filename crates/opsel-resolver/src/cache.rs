//! Per-type cache of user-defined operator candidates.
//!
//! Candidate signatures for the operators a type declares are derived once
//! and shared through an `Arc`. Population is compute-if-absent: the set is
//! built outside the lock and the first writer wins, so concurrent first
//! accesses for the same type all observe one value.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::trace;

use opsel_core::{
    BinaryOperatorKind, BinaryOperatorSignature, TypeHash, UnaryOperatorKind,
    UnaryOperatorSignature,
};
use opsel_registry::OperatorLookup;

/// The operator candidates declared directly on one type.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserDefinedOperators {
    pub unary: Vec<UnaryOperatorSignature>,
    pub binary: Vec<BinaryOperatorSignature>,
}

impl UserDefinedOperators {
    /// Derive the candidates of `ty` from its declared operator methods.
    pub fn from_lookup<L: OperatorLookup + ?Sized>(ty: TypeHash, lookup: &L) -> Self {
        let unary = lookup
            .unary_operators(ty)
            .iter()
            .map(|method| {
                UnaryOperatorSignature::user_defined(
                    UnaryOperatorKind::user_defined(method.operator),
                    method.operand.clone(),
                    method.return_type.clone(),
                    method.hash,
                )
            })
            .collect();

        let binary = lookup
            .binary_operators(ty)
            .iter()
            .map(|method| {
                BinaryOperatorSignature::user_defined(
                    BinaryOperatorKind::user_defined(method.operator),
                    method.left.clone(),
                    method.right.clone(),
                    method.return_type.clone(),
                    method.hash,
                )
            })
            .collect();

        Self { unary, binary }
    }

    pub fn is_empty(&self) -> bool {
        self.unary.is_empty() && self.binary.is_empty()
    }
}

/// Shared cache of [`UserDefinedOperators`] keyed by declaring type.
///
/// # Thread Safety
/// Reads take a shared lock. A miss computes the candidate set without
/// holding any lock and then inserts it unless another thread got there
/// first, in which case the existing set is returned.
#[derive(Debug, Default)]
pub struct OperatorCache {
    entries: RwLock<FxHashMap<TypeHash, Arc<UserDefinedOperators>>>,
}

impl OperatorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the candidates declared on `ty`, deriving them on first use.
    pub fn get_or_compute<L: OperatorLookup + ?Sized>(
        &self,
        ty: TypeHash,
        lookup: &L,
    ) -> Arc<UserDefinedOperators> {
        if let Some(cached) = self.entries.read().get(&ty) {
            return Arc::clone(cached);
        }

        let computed = Arc::new(UserDefinedOperators::from_lookup(ty, lookup));
        let mut entries = self.entries.write();
        let entry = entries.entry(ty).or_insert_with(|| {
            trace!(
                ty = %ty,
                unary = computed.unary.len(),
                binary = computed.binary.len(),
                "cached user-defined operators"
            );
            Arc::clone(&computed)
        });
        Arc::clone(entry)
    }

    /// Drop the cached set for `ty`.
    pub fn invalidate(&self, ty: TypeHash) -> bool {
        self.entries.write().remove(&ty).is_some()
    }

    /// Drop every cached set.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
