//! Shared resolution state under concurrent use.

use std::sync::Arc;
use std::thread;

use opsel::{BinaryOperator, BuiltinType, Compilation, DataType, UnaryOperator};
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, nullable, ty};

const THREADS: usize = 8;

fn money_compilation() -> (Compilation, DataType) {
    let mut compilation = Compilation::new();
    let money = compilation.register_struct("Money").unwrap();
    compilation
        .declare_unary_operator(&money, UnaryOperator::UnaryMinus, money.clone(), money.clone())
        .unwrap();
    compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::Addition,
            money.clone(),
            money.clone(),
            money.clone(),
        )
        .unwrap();
    (compilation, money)
}

#[test]
fn concurrent_misses_share_one_cached_set() {
    init_tracing();
    let (compilation, money) = money_compilation();
    let hash = money.type_hash();

    let sets: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| compilation.cache().get_or_compute(hash, compilation.registry())))
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(compilation.cache().len(), 1);
    let first = &sets[0];
    assert_eq!(first.unary.len(), 1);
    assert_eq!(first.binary.len(), 1);
    assert!(sets.iter().all(|set| Arc::ptr_eq(set, first)));
}

#[test]
fn concurrent_resolutions_agree() {
    init_tracing();
    let (compilation, money) = money_compilation();
    let nullable_money = money.to_nullable().unwrap();
    let expected = (
        compilation.resolve_unary(UnaryOperator::UnaryMinus, &nullable_money),
        compilation.resolve_binary(BinaryOperator::Addition, &money, &money),
        compilation.resolve_binary(
            BinaryOperator::Addition,
            &nullable(BuiltinType::Int),
            &ty(BuiltinType::Double),
        ),
    );
    compilation.cache().clear();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..64 {
                    let actual = (
                        compilation.resolve_unary(UnaryOperator::UnaryMinus, &nullable_money),
                        compilation.resolve_binary(BinaryOperator::Addition, &money, &money),
                        compilation.resolve_binary(
                            BinaryOperator::Addition,
                            &nullable(BuiltinType::Int),
                            &ty(BuiltinType::Double),
                        ),
                    );
                    assert_eq!(actual, expected);
                }
            });
        }
    });
}
