//! User-declared operators against built-in candidates.

use opsel::{
    BinaryOperator, BuiltinType, Compilation, ConversionKind, OperandTypes, RegistrationError,
    UnaryOperator,
};
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, ty};

#[test]
fn identity_operator_beats_builtin_through_user_conversion() {
    init_tracing();
    let mut compilation = Compilation::new();
    let celsius = compilation.register_struct("Celsius").unwrap();
    let add = compilation
        .declare_binary_operator(
            &celsius,
            BinaryOperator::Addition,
            celsius.clone(),
            celsius.clone(),
            celsius.clone(),
        )
        .unwrap();
    let to_double = compilation
        .declare_conversion(&celsius, celsius.clone(), ty(BuiltinType::Double), true)
        .unwrap();

    let resolution = compilation
        .resolve_binary(BinaryOperator::Addition, &celsius, &celsius)
        .unwrap();
    assert_eq!(resolution.signature.method, Some(add));
    assert_eq!(resolution.left_conversion, ConversionKind::Identity);
    assert_eq!(resolution.right_conversion, ConversionKind::Identity);

    // No int -> Celsius conversion, so only built-in double addition applies
    let resolution = compilation
        .resolve_binary(BinaryOperator::Addition, &celsius, &ty(BuiltinType::Int))
        .unwrap();
    assert!(resolution.signature.is_builtin());
    assert_eq!(resolution.return_type(), &ty(BuiltinType::Double));
    assert_eq!(
        resolution.left_conversion,
        ConversionKind::ImplicitUserDefined { method: to_double }
    );
    assert_eq!(resolution.right_conversion, ConversionKind::ImplicitNumeric);
}

#[test]
fn explicit_conversion_does_not_make_builtin_applicable() {
    init_tracing();
    let mut compilation = Compilation::new();
    let meters = compilation.register_struct("Meters").unwrap();
    compilation
        .declare_conversion(&meters, meters.clone(), ty(BuiltinType::Double), false)
        .unwrap();

    let error = compilation
        .resolve_binary(BinaryOperator::Addition, &meters, &ty(BuiltinType::Double))
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "operator '+' cannot be applied to operands of type 'Meters' and 'double'"
    );
}

#[test]
fn base_class_operators_are_found() {
    init_tracing();
    let mut compilation = Compilation::new();
    let shape = compilation.register_class("Shape", None).unwrap();
    let circle = compilation.register_class("Circle", Some(&shape)).unwrap();
    let union = compilation
        .declare_binary_operator(
            &shape,
            BinaryOperator::Or,
            shape.clone(),
            shape.clone(),
            shape.clone(),
        )
        .unwrap();
    let negate = compilation
        .declare_unary_operator(&shape, UnaryOperator::UnaryMinus, shape.clone(), shape.clone())
        .unwrap();

    let resolution = compilation
        .resolve_binary(BinaryOperator::Or, &circle, &circle)
        .unwrap();
    assert_eq!(resolution.signature.method, Some(union));
    assert_eq!(resolution.left_conversion, ConversionKind::ImplicitReference);
    assert_eq!(resolution.right_conversion, ConversionKind::ImplicitReference);

    let resolution = compilation
        .resolve_unary(UnaryOperator::UnaryMinus, &circle)
        .unwrap();
    assert_eq!(resolution.signature.method, Some(negate));
    assert_eq!(resolution.return_type(), &shape);
}

#[test]
fn derived_operator_beats_base_operator() {
    init_tracing();
    let mut compilation = Compilation::new();
    let shape = compilation.register_class("Shape", None).unwrap();
    let circle = compilation.register_class("Circle", Some(&shape)).unwrap();
    compilation
        .declare_unary_operator(&shape, UnaryOperator::BitwiseComplement, shape.clone(), shape.clone())
        .unwrap();
    let derived = compilation
        .declare_unary_operator(
            &circle,
            UnaryOperator::BitwiseComplement,
            circle.clone(),
            circle.clone(),
        )
        .unwrap();

    let resolution = compilation
        .resolve_unary(UnaryOperator::BitwiseComplement, &circle)
        .unwrap();
    assert_eq!(resolution.signature.method, Some(derived));
    assert_eq!(resolution.conversion, ConversionKind::Identity);

    let analysis = compilation
        .resolver()
        .analyze_unary(UnaryOperator::BitwiseComplement, &circle);
    let user_candidates = analysis
        .signatures()
        .filter(|signature| !signature.is_builtin())
        .count();
    assert_eq!(user_candidates, 2);
}

#[test]
fn increment_method_serves_prefix_and_postfix() {
    init_tracing();
    let mut compilation = Compilation::new();
    let counter = compilation.register_struct("Counter").unwrap();
    let method = compilation
        .declare_unary_operator(
            &counter,
            UnaryOperator::PrefixIncrement,
            counter.clone(),
            counter.clone(),
        )
        .unwrap();

    for op in [UnaryOperator::PrefixIncrement, UnaryOperator::PostfixIncrement] {
        let resolution = compilation.resolve_unary(op, &counter).unwrap();
        assert_eq!(resolution.signature.kind.operator(), op);
        assert_eq!(resolution.signature.kind.operands(), OperandTypes::UserDefined);
        assert_eq!(resolution.signature.method, Some(method));
    }
    assert!(
        compilation
            .resolve_unary(UnaryOperator::PrefixDecrement, &counter)
            .is_err()
    );
}

#[test]
fn operator_from_either_operand_is_found_once() {
    init_tracing();
    let mut compilation = Compilation::new();
    let money = compilation.register_struct("Money").unwrap();
    compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::Subtraction,
            money.clone(),
            money.clone(),
            money.clone(),
        )
        .unwrap();

    let analysis = compilation
        .resolver()
        .analyze_binary(BinaryOperator::Subtraction, &money, &money);
    let user_candidates = analysis
        .signatures()
        .filter(|signature| !signature.is_builtin())
        .count();
    assert_eq!(user_candidates, 1);
    assert!(analysis.chosen().is_some());
}

#[test]
fn invalid_declarations_are_rejected() {
    let mut compilation = Compilation::new();
    let money = compilation.register_struct("Money").unwrap();
    let int = ty(BuiltinType::Int);

    let error = compilation
        .declare_binary_operator(
            &money,
            BinaryOperator::LogicalAnd,
            money.clone(),
            money.clone(),
            ty(BuiltinType::Bool),
        )
        .unwrap_err();
    assert!(matches!(error, RegistrationError::NotOverloadable { .. }));

    let error = compilation
        .declare_binary_operator(&money, BinaryOperator::Addition, int.clone(), int.clone(), int)
        .unwrap_err();
    assert!(matches!(error, RegistrationError::OperatorNotOnDeclaringType { .. }));

    let error = compilation.register_struct("int").unwrap_err();
    assert!(matches!(error, RegistrationError::DuplicateType { .. }));
}
