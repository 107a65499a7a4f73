//! Incomparable candidates are reported, never picked arbitrarily.

use opsel::{
    BinaryOperator, BuiltinType, CandidateState, Compilation, ConversionKind, DataType,
    ResolutionFailure,
};
use pretty_assertions::assert_eq;

use crate::common::{init_tracing, ty};

/// `Vec2` with `*(Vec2, float)` and `*(Vec2, decimal)`.
fn scaled_vector() -> (Compilation, DataType) {
    let mut compilation = Compilation::new();
    let vec2 = compilation.register_struct("Vec2").unwrap();
    for scalar in [BuiltinType::Float, BuiltinType::Decimal] {
        compilation
            .declare_binary_operator(
                &vec2,
                BinaryOperator::Multiplication,
                vec2.clone(),
                ty(scalar),
                vec2.clone(),
            )
            .unwrap();
    }
    (compilation, vec2)
}

#[test]
fn incomparable_scalar_conversions_are_ambiguous() {
    init_tracing();
    let (compilation, vec2) = scaled_vector();

    let error = compilation
        .resolve_binary(BinaryOperator::Multiplication, &vec2, &ty(BuiltinType::ULong))
        .unwrap_err();

    assert_eq!(error.failure(), ResolutionFailure::AmbiguousOperator);
    let scalars: Vec<String> = error
        .candidates()
        .iter()
        .map(|signature| signature.right.to_string())
        .collect();
    assert_eq!(scalars, ["float", "decimal"]);
}

#[test]
fn ambiguous_analysis_chooses_nothing() {
    init_tracing();
    let (compilation, vec2) = scaled_vector();

    let analysis = compilation.resolver().analyze_binary(
        BinaryOperator::Multiplication,
        &vec2,
        &ty(BuiltinType::ULong),
    );

    assert!(analysis.chosen().is_none());
    assert!(analysis.has_applicable());
    assert!(
        analysis
            .candidates()
            .iter()
            .all(|candidate| candidate.state != CandidateState::Chosen)
    );
    assert_eq!(analysis.tied().count(), 2);
}

#[test]
fn exact_scalar_is_not_ambiguous() {
    init_tracing();
    let (compilation, vec2) = scaled_vector();

    // int reaches both float and decimal, which are incomparable
    let error = compilation
        .resolve_binary(BinaryOperator::Multiplication, &vec2, &ty(BuiltinType::Int))
        .unwrap_err();
    assert_eq!(error.failure(), ResolutionFailure::AmbiguousOperator);

    let resolution = compilation
        .resolve_binary(BinaryOperator::Multiplication, &vec2, &ty(BuiltinType::Float))
        .unwrap();
    assert_eq!(resolution.signature.right, ty(BuiltinType::Float));
    assert_eq!(resolution.right_conversion, ConversionKind::Identity);
}

#[test]
fn mirrored_operators_through_a_conversion_are_ambiguous() {
    init_tracing();
    let mut compilation = Compilation::new();
    let pair = compilation.register_struct("Pair").unwrap();
    let long = ty(BuiltinType::Long);
    let pair_long = compilation
        .declare_binary_operator(
            &pair,
            BinaryOperator::Addition,
            pair.clone(),
            long.clone(),
            pair.clone(),
        )
        .unwrap();
    let long_pair = compilation
        .declare_binary_operator(
            &pair,
            BinaryOperator::Addition,
            long.clone(),
            pair.clone(),
            pair.clone(),
        )
        .unwrap();
    compilation
        .declare_conversion(&pair, pair.clone(), long.clone(), true)
        .unwrap();

    let error = compilation
        .resolve_binary(BinaryOperator::Addition, &pair, &pair)
        .unwrap_err();

    assert_eq!(error.failure(), ResolutionFailure::AmbiguousOperator);
    let methods: Vec<_> = error
        .candidates()
        .iter()
        .map(|signature| signature.method)
        .collect();
    assert_eq!(methods, [Some(pair_long), Some(long_pair)]);
}
