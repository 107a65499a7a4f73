//! End-to-end resolution of the reference scenarios.

use opsel::{
    BinaryOperator, BinaryOperatorKind, BuiltinType, Compilation, ConversionKind, OperandTypes,
    ResolutionFailure, UnaryOperator, UnaryOperatorKind,
};
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, nullable, ty};

#[test]
fn unary_minus_on_uint_widens_to_long() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_unary(UnaryOperator::UnaryMinus, &ty(BuiltinType::UInt))
        .unwrap();

    assert_eq!(
        resolution.signature.kind,
        UnaryOperatorKind::builtin(UnaryOperator::UnaryMinus, BuiltinType::Long)
    );
    assert_eq!(resolution.signature.operand, ty(BuiltinType::Long));
    assert_eq!(resolution.return_type(), &ty(BuiltinType::Long));
    assert_eq!(resolution.conversion, ConversionKind::ImplicitNumeric);
}

#[test]
fn unary_minus_on_ulong_has_no_applicable_operator() {
    init_tracing();
    let compilation = Compilation::new();

    let error = compilation
        .resolve_unary(UnaryOperator::UnaryMinus, &ty(BuiltinType::ULong))
        .unwrap_err();

    assert_eq!(error.failure(), ResolutionFailure::NoApplicableOperator);
    let operands: Vec<String> = error
        .candidates()
        .iter()
        .map(|signature| signature.operand.to_string())
        .collect();
    assert_eq!(operands, ["int", "long", "float", "double", "decimal"]);
    assert_eq!(
        error.to_string(),
        "operator '-' cannot be applied to operand of type 'ulong'"
    );
}

#[test]
fn logical_negation_on_nullable_bool_is_lifted() {
    init_tracing();
    let compilation = Compilation::new();
    let operand = nullable(BuiltinType::Bool);

    let resolution = compilation
        .resolve_unary(UnaryOperator::LogicalNegation, &operand)
        .unwrap();

    assert!(resolution.signature.kind.is_lifted());
    assert_eq!(
        resolution.signature.kind,
        UnaryOperatorKind::builtin(UnaryOperator::LogicalNegation, BuiltinType::Bool).to_lifted()
    );
    assert_eq!(resolution.signature.operand, operand);
    assert_eq!(resolution.return_type(), &operand);
    assert_eq!(resolution.conversion, ConversionKind::Identity);
}

#[test]
fn unary_plus_on_byte_widens_to_int() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_unary(UnaryOperator::UnaryPlus, &ty(BuiltinType::Byte))
        .unwrap();

    assert_eq!(
        resolution.signature.kind,
        UnaryOperatorKind::builtin(UnaryOperator::UnaryPlus, BuiltinType::Int)
    );
    assert_eq!(resolution.return_type(), &ty(BuiltinType::Int));
    assert_eq!(resolution.conversion, ConversionKind::ImplicitNumeric);
}

#[test]
fn int_plus_double_converts_only_the_left_operand() {
    init_tracing();
    let compilation = Compilation::new();

    let resolution = compilation
        .resolve_binary(
            BinaryOperator::Addition,
            &ty(BuiltinType::Int),
            &ty(BuiltinType::Double),
        )
        .unwrap();

    assert_eq!(
        resolution.signature.kind,
        BinaryOperatorKind::builtin(BinaryOperator::Addition, BuiltinType::Double)
    );
    assert_eq!(resolution.signature.left, ty(BuiltinType::Double));
    assert_eq!(resolution.signature.right, ty(BuiltinType::Double));
    assert_eq!(resolution.left_conversion, ConversionKind::ImplicitNumeric);
    assert_eq!(resolution.right_conversion, ConversionKind::Identity);
}

#[test]
fn single_user_minus_resolves_by_identity() {
    init_tracing();
    let mut compilation = Compilation::new();
    let money = compilation.register_struct("Money").unwrap();
    let method = compilation
        .declare_unary_operator(&money, UnaryOperator::UnaryMinus, money.clone(), money.clone())
        .unwrap();

    let resolution = compilation
        .resolve_unary(UnaryOperator::UnaryMinus, &money)
        .unwrap();

    assert_eq!(
        resolution.signature.kind,
        UnaryOperatorKind::user_defined(UnaryOperator::UnaryMinus)
    );
    assert_eq!(resolution.signature.kind.operands(), OperandTypes::UserDefined);
    assert_eq!(resolution.signature.method, Some(method));
    assert_eq!(resolution.conversion, ConversionKind::Identity);
    assert_eq!(resolution.return_type(), &money);
}
