//! Process-wide registry of built-in operator signatures.
//!
//! Built once on first use and never mutated afterwards, so concurrent
//! resolutions read it without locking. Every signature has a lifted twin in
//! the kind index whenever the operator and operand types permit lifting.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use opsel_core::{
    BinaryOperator, BinaryOperatorKind, BinaryOperatorSignature, BuiltinType, DataType,
    OperandTypes, OperatorSignature, UnaryOperator, UnaryOperatorKind, UnaryOperatorSignature,
};

use BuiltinType::*;

/// Integral and floating point operands of arithmetic and relational operators.
const NUMERIC: [BuiltinType; 7] = [Int, UInt, Long, ULong, Float, Double, Decimal];

/// Left operands of the shift operators. The right operand is always `int`.
const SHIFTABLE: [BuiltinType; 4] = [Int, UInt, Long, ULong];

const INCREMENTABLE: [BuiltinType; 12] = [
    SByte, Byte, Short, UShort, Int, UInt, Long, ULong, Char, Float, Double, Decimal,
];

lazy_static! {
    static ref BUILTIN_OPERATORS: BuiltinOperators = BuiltinOperators::build();
}

/// Get the built-in operator registry.
pub fn builtin_operators() -> &'static BuiltinOperators {
    &BUILTIN_OPERATORS
}

/// Immutable tables of built-in operator signatures.
pub struct BuiltinOperators {
    /// Non-lifted unary candidates per operator.
    unary: FxHashMap<UnaryOperator, Vec<UnaryOperatorSignature>>,

    /// Every unary signature, lifted ones included, by kind.
    unary_by_kind: FxHashMap<UnaryOperatorKind, UnaryOperatorSignature>,

    /// Non-lifted binary candidates per operator.
    binary: FxHashMap<BinaryOperator, Vec<BinaryOperatorSignature>>,

    /// Every binary signature, lifted ones included, by kind.
    binary_by_kind: FxHashMap<BinaryOperatorKind, BinaryOperatorSignature>,
}

impl BuiltinOperators {
    fn build() -> Self {
        let mut operators = Self {
            unary: FxHashMap::default(),
            unary_by_kind: FxHashMap::default(),
            binary: FxHashMap::default(),
            binary_by_kind: FxHashMap::default(),
        };

        for op in UnaryOperator::ALL {
            let operand_types: &[BuiltinType] = match op {
                UnaryOperator::PostfixIncrement
                | UnaryOperator::PostfixDecrement
                | UnaryOperator::PrefixIncrement
                | UnaryOperator::PrefixDecrement => &INCREMENTABLE,
                UnaryOperator::UnaryPlus => &NUMERIC,
                UnaryOperator::UnaryMinus => &[Int, Long, Float, Double, Decimal],
                UnaryOperator::LogicalNegation => &[Bool],
                UnaryOperator::BitwiseComplement => &SHIFTABLE,
            };
            let signatures = operand_types
                .iter()
                .map(|&ty| {
                    UnaryOperatorSignature::builtin(
                        UnaryOperatorKind::builtin(op, ty),
                        DataType::builtin(ty),
                        DataType::builtin(ty),
                    )
                })
                .collect();
            operators.add_unary(op, signatures);
        }

        for op in BinaryOperator::ALL {
            let signatures = binary_signatures(op);
            operators.add_binary(op, signatures);
        }

        operators
    }

    fn add_unary(&mut self, op: UnaryOperator, signatures: Vec<UnaryOperatorSignature>) {
        for signature in &signatures {
            if let Some(lifted) = signature.lifted() {
                self.unary_by_kind.insert(lifted.kind, lifted);
            }
            self.unary_by_kind.insert(signature.kind, signature.clone());
        }
        self.unary.insert(op, signatures);
    }

    fn add_binary(&mut self, op: BinaryOperator, signatures: Vec<BinaryOperatorSignature>) {
        for signature in &signatures {
            if let Some(lifted) = signature.lifted() {
                self.binary_by_kind.insert(lifted.kind, lifted);
            }
            self.binary_by_kind.insert(signature.kind, signature.clone());
        }
        self.binary.insert(op, signatures);
    }

    /// The non-lifted built-in candidates for `op`.
    pub fn unary_candidates(&self, op: UnaryOperator) -> &[UnaryOperatorSignature] {
        self.unary.get(&op).map_or(&[], Vec::as_slice)
    }

    /// The non-lifted built-in candidates for `op`.
    pub fn binary_candidates(&self, op: BinaryOperator) -> &[BinaryOperatorSignature] {
        self.binary.get(&op).map_or(&[], Vec::as_slice)
    }

    /// The built-in signature of a fully qualified kind.
    pub fn unary_signature(&self, kind: UnaryOperatorKind) -> Option<&UnaryOperatorSignature> {
        self.unary_by_kind.get(&kind)
    }

    /// The built-in signature of a fully qualified kind.
    pub fn binary_signature(&self, kind: BinaryOperatorKind) -> Option<&BinaryOperatorSignature> {
        self.binary_by_kind.get(&kind)
    }
}

fn binary_signatures(op: BinaryOperator) -> Vec<BinaryOperatorSignature> {
    let bool_type = DataType::builtin(Bool);
    let same = |ty: BuiltinType, returns: DataType| {
        BinaryOperatorSignature::builtin(
            BinaryOperatorKind::builtin(op, ty),
            DataType::builtin(ty),
            DataType::builtin(ty),
            returns,
        )
    };

    match op {
        BinaryOperator::Multiplication
        | BinaryOperator::Subtraction
        | BinaryOperator::Division
        | BinaryOperator::Remainder => NUMERIC
            .iter()
            .map(|&ty| same(ty, DataType::builtin(ty)))
            .collect(),
        BinaryOperator::Addition => {
            let string = DataType::builtin(String);
            let object = DataType::builtin(Object);
            let mut signatures: Vec<_> = NUMERIC
                .iter()
                .map(|&ty| same(ty, DataType::builtin(ty)))
                .collect();
            signatures.push(same(String, string.clone()));
            signatures.push(BinaryOperatorSignature::builtin(
                BinaryOperatorKind::new(op, OperandTypes::StringAndObject, false),
                string.clone(),
                object.clone(),
                string.clone(),
            ));
            signatures.push(BinaryOperatorSignature::builtin(
                BinaryOperatorKind::new(op, OperandTypes::ObjectAndString, false),
                object,
                string.clone(),
                string,
            ));
            signatures
        }
        BinaryOperator::LeftShift | BinaryOperator::RightShift => SHIFTABLE
            .iter()
            .map(|&ty| {
                BinaryOperatorSignature::builtin(
                    BinaryOperatorKind::builtin(op, ty),
                    DataType::builtin(ty),
                    DataType::builtin(Int),
                    DataType::builtin(ty),
                )
            })
            .collect(),
        BinaryOperator::Equal | BinaryOperator::NotEqual => NUMERIC
            .iter()
            .chain(&[Bool, Object, String])
            .map(|&ty| same(ty, bool_type.clone()))
            .collect(),
        BinaryOperator::GreaterThan
        | BinaryOperator::LessThan
        | BinaryOperator::GreaterThanOrEqual
        | BinaryOperator::LessThanOrEqual => NUMERIC
            .iter()
            .map(|&ty| same(ty, bool_type.clone()))
            .collect(),
        BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor => SHIFTABLE
            .iter()
            .chain(&[Bool])
            .map(|&ty| same(ty, DataType::builtin(ty)))
            .collect(),
        BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => vec![same(Bool, bool_type)],
    }
}
