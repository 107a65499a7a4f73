//! Lifted operators over nullable operands.

use opsel::{BinaryOperator, BuiltinType, Compilation, ConversionKind, UnaryOperator};
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, nullable, ty};

#[test]
fn arithmetic_on_nullable_returns_nullable() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_binary(
            BinaryOperator::Multiplication,
            &nullable(BuiltinType::Int),
            &ty(BuiltinType::Long),
        )
        .unwrap();

    assert!(resolution.signature.kind.is_lifted());
    assert_eq!(resolution.signature.left, nullable(BuiltinType::Long));
    assert_eq!(resolution.signature.right, nullable(BuiltinType::Long));
    assert_eq!(resolution.return_type(), &nullable(BuiltinType::Long));
    assert_eq!(resolution.left_conversion, ConversionKind::ImplicitNullable);
    assert_eq!(resolution.right_conversion, ConversionKind::ImplicitNullable);
}

#[test]
fn comparison_on_nullable_returns_bool() {
    init_tracing();
    let compilation = Compilation::new();

    for op in BinaryOperator::ALL.into_iter().filter(|op| op.is_comparison()) {
        let resolution = compilation
            .resolve_binary(op, &nullable(BuiltinType::Double), &ty(BuiltinType::Float))
            .unwrap();

        assert!(resolution.signature.kind.is_lifted(), "{op}");
        assert_eq!(resolution.signature.left, nullable(BuiltinType::Double));
        assert_eq!(resolution.return_type(), &ty(BuiltinType::Bool), "{op}");
    }
}

#[test]
fn unary_minus_on_nullable_short_lifts_int() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_unary(UnaryOperator::UnaryMinus, &nullable(BuiltinType::Short))
        .unwrap();

    assert!(resolution.signature.kind.is_lifted());
    assert_eq!(resolution.signature.operand, nullable(BuiltinType::Int));
    assert_eq!(resolution.return_type(), &nullable(BuiltinType::Int));
    assert_eq!(resolution.conversion, ConversionKind::ImplicitNullable);
}

#[test]
fn non_nullable_operands_never_pick_lifted() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_binary(BinaryOperator::Addition, &ty(BuiltinType::Int), &ty(BuiltinType::Int))
        .unwrap();
    assert!(!resolution.signature.kind.is_lifted());

    let analysis = compilation.resolver().analyze_binary(
        BinaryOperator::Addition,
        &ty(BuiltinType::Int),
        &ty(BuiltinType::Int),
    );
    assert!(
        analysis
            .candidates()
            .iter()
            .all(|candidate| !candidate.signature.kind.is_lifted())
    );
}

#[test]
fn string_concatenation_is_never_lifted() {
    init_tracing();
    let compilation = Compilation::new();

    let analysis = compilation.resolver().analyze_binary(
        BinaryOperator::Addition,
        &ty(BuiltinType::String),
        &nullable(BuiltinType::Int),
    );
    let chosen = analysis.chosen().unwrap();
    assert!(!chosen.signature.kind.is_lifted());
    assert_eq!(chosen.signature.return_type, ty(BuiltinType::String));
    assert_eq!(chosen.conversions[1], ConversionKind::Boxing);
}

#[test]
fn user_binary_operator_lifts_for_nullable_struct() {
    init_tracing();
    let mut compilation = Compilation::new();
    let money = compilation.register_struct("Money").unwrap();
    let method = compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::Equal,
            money.clone(),
            money.clone(),
            ty(BuiltinType::Bool),
        )
        .unwrap();
    let nullable_money = money.to_nullable().unwrap();

    let resolution = compilation
        .resolve_binary(BinaryOperator::Equal, &nullable_money, &money)
        .unwrap();

    assert!(resolution.signature.kind.is_lifted());
    assert_eq!(resolution.signature.method, Some(method));
    assert_eq!(resolution.signature.left, nullable_money);
    assert_eq!(resolution.signature.right, nullable_money);
    assert_eq!(resolution.return_type(), &ty(BuiltinType::Bool));
    assert_eq!(resolution.left_conversion, ConversionKind::Identity);
    assert_eq!(resolution.right_conversion, ConversionKind::ImplicitNullable);
}
