//! The fast path must never change a result.
//!
//! With no user declarations in scope, every operator applied to every
//! table category resolves identically with and without the fast-path
//! tables.

use opsel::{
    BinaryOperator, Compilation, OperatorCache, OperatorResolver, ResolverOptions, SymbolRegistry,
    UnaryOperator, binary_easy_out, unary_easy_out,
};
use pretty_assertions::assert_eq;

use crate::common::{all_categories, init_tracing};

fn slow() -> ResolverOptions {
    ResolverOptions {
        use_fast_path: false,
    }
}

#[test]
fn unary_fast_path_matches_full_resolution() {
    init_tracing();
    let fast = Compilation::new();
    let slow = Compilation::with_options(slow());

    for op in UnaryOperator::ALL {
        for operand in all_categories() {
            assert_eq!(
                fast.resolve_unary(op, &operand),
                slow.resolve_unary(op, &operand),
                "{op} {operand}"
            );
        }
    }
}

#[test]
fn binary_fast_path_matches_full_resolution() {
    init_tracing();
    let fast = Compilation::new();
    let slow = Compilation::with_options(slow());
    let categories = all_categories();

    for op in BinaryOperator::ALL {
        for left in &categories {
            for right in &categories {
                assert_eq!(
                    fast.resolve_binary(op, left, right),
                    slow.resolve_binary(op, left, right),
                    "{left} {op} {right}"
                );
            }
        }
    }
}

#[test]
fn every_table_hit_is_chosen_by_full_resolution() {
    let registry = SymbolRegistry::new();
    let cache = OperatorCache::new();
    let resolver = OperatorResolver::standard(&registry, &cache);
    let categories = all_categories();

    for op in UnaryOperator::ALL {
        for operand in &categories {
            let Some(kind) = unary_easy_out(op, operand) else {
                continue;
            };
            let analysis = resolver.analyze_unary(op, operand);
            let chosen = analysis.chosen().map(|c| c.signature.kind);
            assert_eq!(chosen, Some(kind), "{op} {operand}");
        }
    }

    for op in BinaryOperator::ALL {
        for left in &categories {
            for right in &categories {
                let Some(kind) = binary_easy_out(op, left, right) else {
                    continue;
                };
                let analysis = resolver.analyze_binary(op, left, right);
                let chosen = analysis.chosen().map(|c| c.signature.kind);
                assert_eq!(chosen, Some(kind), "{left} {op} {right}");
            }
        }
    }
}

#[test]
fn table_misses_never_resolve() {
    let fast = Compilation::new();
    let categories = all_categories();

    for op in BinaryOperator::ALL {
        for left in &categories {
            for right in &categories {
                if binary_easy_out(op, left, right).is_none() {
                    assert!(
                        fast.resolve_binary(op, left, right).is_err(),
                        "{left} {op} {right}"
                    );
                }
            }
        }
    }
}
