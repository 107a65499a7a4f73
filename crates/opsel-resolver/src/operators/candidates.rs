//! Candidate gathering for the slow path.
//!
//! The candidate set is every non-lifted built-in signature of the operator,
//! plus the user-declared operators found on the operand types and their base
//! classes, plus lifted twins when an actual operand is nullable.

use opsel_core::{
    BinaryOperator, BinaryOperatorSignature, DataType, OperatorSignature, TypeHash, UnaryOperator,
    UnaryOperatorSignature,
};
use opsel_registry::OperatorLookup;

use crate::builtin::builtin_operators;
use crate::cache::OperatorCache;

/// Gather the candidates for a unary operator.
///
/// `++` and `--` share a method between their prefix and postfix forms; the
/// user-declared candidate is reported with the requested operator.
pub fn gather_unary<L: OperatorLookup + ?Sized>(
    op: UnaryOperator,
    operand: &DataType,
    lookup: &L,
    cache: &OperatorCache,
) -> Vec<UnaryOperatorSignature> {
    let mut candidates = builtin_operators().unary_candidates(op).to_vec();

    for owner in declaring_types(operand, lookup) {
        let declared = cache.get_or_compute(owner, lookup);
        for signature in &declared.unary {
            if signature.kind.operator().method_name() != op.method_name() {
                continue;
            }
            push_unique(
                &mut candidates,
                UnaryOperatorSignature {
                    kind: signature.kind.with_operator(op),
                    ..signature.clone()
                },
            );
        }
    }

    if operand.is_nullable() {
        add_lifted(&mut candidates);
    }
    candidates
}

/// Gather the candidates for a binary operator.
///
/// User-declared operators of both operand types are united; an operator
/// reachable from both sides appears once.
pub fn gather_binary<L: OperatorLookup + ?Sized>(
    op: BinaryOperator,
    left: &DataType,
    right: &DataType,
    lookup: &L,
    cache: &OperatorCache,
) -> Vec<BinaryOperatorSignature> {
    let mut candidates = builtin_operators().binary_candidates(op).to_vec();

    if op.method_name().is_some() {
        let mut owners: Vec<TypeHash> = declaring_types(left, lookup).collect();
        for owner in declaring_types(right, lookup) {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }

        for owner in owners {
            let declared = cache.get_or_compute(owner, lookup);
            for signature in declared.binary.iter().filter(|s| s.kind.operator() == op) {
                push_unique(&mut candidates, signature.clone());
            }
        }
    }

    if left.is_nullable() || right.is_nullable() {
        add_lifted(&mut candidates);
    }
    candidates
}

/// The user type underlying `ty` followed by its base classes.
fn declaring_types<L: OperatorLookup + ?Sized>(
    ty: &DataType,
    lookup: &L,
) -> impl Iterator<Item = TypeHash> {
    let hash = ty.as_named().map(|named| named.hash);
    hash.into_iter().flat_map(move |hash| lookup.base_chain(hash))
}

/// Append the lifted twin of every liftable candidate.
fn add_lifted<S: OperatorSignature>(candidates: &mut Vec<S>) {
    let lifted: Vec<S> = candidates.iter().filter_map(S::lifted).collect();
    for signature in lifted {
        push_unique(candidates, signature);
    }
}

fn push_unique<S: PartialEq>(candidates: &mut Vec<S>, signature: S) {
    if !candidates.contains(&signature) {
        candidates.push(signature);
    }
}
