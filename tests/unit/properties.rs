//! Property-based tests for operator resolution.
//!
//! Operand types are drawn from every table category plus a small set of
//! user types with declared operators and conversions. The properties:
//! 1. Idempotence: resolving twice gives equal results
//! 2. Fast-path transparency: disabling the tables never changes a result
//! 3. Applicability: every chosen conversion is implicit
//! 4. Lifting: a lifted result returns `bool` for comparisons and a
//!    nullable type otherwise

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use opsel::{
    BinaryOperator, BuiltinType, Compilation, DataType, OperatorSignature, ResolverOptions,
    UnaryOperator,
};
use proptest::prelude::*;

use crate::common::{all_categories, ty};

// -- Fixtures --

/// Declarations shared by every case.
fn declare(compilation: &mut Compilation) -> Vec<DataType> {
    let money = compilation.register_struct("Money").unwrap();
    let shape = compilation.register_class("Shape", None).unwrap();
    let circle = compilation.register_class("Circle", Some(&shape)).unwrap();

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
    compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::LessThan,
            money.clone(),
            money.clone(),
            ty(BuiltinType::Bool),
        )
        .unwrap();
    compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::Multiplication,
            money.clone(),
            ty(BuiltinType::Decimal),
            money.clone(),
        )
        .unwrap();
    compilation
        .declare_conversion(&money, money.clone(), ty(BuiltinType::Decimal), true)
        .unwrap();
    compilation
        .declare_binary_operator(
            &shape,
            BinaryOperator::Or,
            shape.clone(),
            shape.clone(),
            shape.clone(),
        )
        .unwrap();

    let nullable_money = money.to_nullable().unwrap();
    vec![money, nullable_money, shape, circle]
}

fn compilation(options: ResolverOptions) -> Compilation {
    let mut compilation = Compilation::with_options(options);
    declare(&mut compilation);
    compilation
}

fn slow() -> ResolverOptions {
    ResolverOptions {
        use_fast_path: false,
    }
}

// -- Strategies --

fn operand_strategy() -> impl Strategy<Value = DataType> {
    let mut types = all_categories();
    types.extend(declare(&mut Compilation::new()));
    prop::sample::select(types)
}

fn unary_operator_strategy() -> impl Strategy<Value = UnaryOperator> {
    prop::sample::select(UnaryOperator::ALL.to_vec())
}

fn binary_operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop::sample::select(BinaryOperator::ALL.to_vec())
}

// -- Properties --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Resolving the same unary expression twice gives the same answer.
    #[test]
    fn prop_unary_idempotence(op in unary_operator_strategy(), operand in operand_strategy()) {
        let compilation = compilation(ResolverOptions::default());
        let first = compilation.resolve_unary(op, &operand);
        let second = compilation.resolve_unary(op, &operand);
        prop_assert_eq!(first, second);
    }

    /// Resolving the same binary expression twice gives the same answer.
    #[test]
    fn prop_binary_idempotence(
        op in binary_operator_strategy(),
        left in operand_strategy(),
        right in operand_strategy(),
    ) {
        let compilation = compilation(ResolverOptions::default());
        let first = compilation.resolve_binary(op, &left, &right);
        let second = compilation.resolve_binary(op, &left, &right);
        prop_assert_eq!(first, second);
    }

    /// The fast path is transparent with user declarations in scope.
    #[test]
    fn prop_fast_path_transparent(
        op in binary_operator_strategy(),
        left in operand_strategy(),
        right in operand_strategy(),
    ) {
        let fast = compilation(ResolverOptions::default());
        let slow = compilation(slow());
        prop_assert_eq!(
            fast.resolve_binary(op, &left, &right),
            slow.resolve_binary(op, &left, &right)
        );
    }

    /// The unary fast path is transparent with user declarations in scope.
    #[test]
    fn prop_unary_fast_path_transparent(op in unary_operator_strategy(), operand in operand_strategy()) {
        let fast = compilation(ResolverOptions::default());
        let slow = compilation(slow());
        prop_assert_eq!(fast.resolve_unary(op, &operand), slow.resolve_unary(op, &operand));
    }

    /// A resolved operator only ever needs implicit conversions.
    #[test]
    fn prop_chosen_conversions_are_implicit(
        op in binary_operator_strategy(),
        left in operand_strategy(),
        right in operand_strategy(),
    ) {
        let compilation = compilation(ResolverOptions::default());
        if let Ok(resolution) = compilation.resolve_binary(op, &left, &right) {
            prop_assert!(resolution.left_conversion.is_implicit());
            prop_assert!(resolution.right_conversion.is_implicit());
        }
    }

    /// Lifted results keep comparisons `bool` and make everything else nullable.
    #[test]
    fn prop_lifted_return_types(
        op in binary_operator_strategy(),
        left in operand_strategy(),
        right in operand_strategy(),
    ) {
        let compilation = compilation(ResolverOptions::default());
        if let Ok(resolution) = compilation.resolve_binary(op, &left, &right) {
            if resolution.signature.is_lifted() {
                prop_assert!(left.is_nullable() || right.is_nullable());
                if op.is_comparison() {
                    prop_assert_eq!(resolution.return_type(), &ty(BuiltinType::Bool));
                } else {
                    prop_assert!(resolution.return_type().is_nullable());
                }
            }
        }
    }
}
