//! Candidate operator signatures.
//!
//! A signature is an immutable value describing one candidate: its kind,
//! operand types, return type and, for user-declared operators, the backing
//! method. Equality and hashing cover every field so candidate collections
//! never hold the same logical entry twice.

use std::fmt;

use crate::{BinaryOperatorKind, DataType, OperandTypes, TypeHash, UnaryOperatorKind};

/// Positional access to a candidate's operand types.
///
/// Overload selection is written once against this trait and shared by unary
/// and binary resolution.
pub trait OperatorSignature: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Number of operands.
    const ARITY: usize;

    /// The declared type of the operand at `position`.
    fn operand(&self, position: usize) -> &DataType;

    fn return_type(&self) -> &DataType;

    fn is_lifted(&self) -> bool;

    /// The lifted twin, or `None` when this signature cannot be lifted.
    fn lifted(&self) -> Option<Self>;

    /// `true` when both signatures declare the same operand types.
    fn same_operands(&self, other: &Self) -> bool {
        (0..Self::ARITY).all(|i| self.operand(i) == other.operand(i))
    }
}

/// Signature of a unary operator candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnaryOperatorSignature {
    pub kind: UnaryOperatorKind,
    pub operand: DataType,
    pub return_type: DataType,
    /// Backing method of a user-declared operator.
    pub method: Option<TypeHash>,
}

impl UnaryOperatorSignature {
    pub fn builtin(kind: UnaryOperatorKind, operand: DataType, return_type: DataType) -> Self {
        Self {
            kind,
            operand,
            return_type,
            method: None,
        }
    }

    pub fn user_defined(
        kind: UnaryOperatorKind,
        operand: DataType,
        return_type: DataType,
        method: TypeHash,
    ) -> Self {
        debug_assert_eq!(kind.operands(), OperandTypes::UserDefined);
        Self {
            kind,
            operand,
            return_type,
            method: Some(method),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.method.is_none()
    }
}

impl OperatorSignature for UnaryOperatorSignature {
    const ARITY: usize = 1;

    fn operand(&self, position: usize) -> &DataType {
        debug_assert_eq!(position, 0);
        &self.operand
    }

    fn return_type(&self) -> &DataType {
        &self.return_type
    }

    fn is_lifted(&self) -> bool {
        self.kind.is_lifted()
    }

    fn lifted(&self) -> Option<Self> {
        if self.kind.is_lifted() || !self.kind.operands().can_lift() {
            return None;
        }
        Some(Self {
            kind: self.kind.to_lifted(),
            operand: self.operand.to_nullable()?,
            return_type: self.return_type.to_nullable()?,
            method: self.method,
        })
    }
}

impl fmt::Display for UnaryOperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operator {}({})",
            self.return_type,
            self.kind.operator(),
            self.operand
        )
    }
}

/// Signature of a binary operator candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryOperatorSignature {
    pub kind: BinaryOperatorKind,
    pub left: DataType,
    pub right: DataType,
    pub return_type: DataType,
    /// Backing method of a user-declared operator.
    pub method: Option<TypeHash>,
}

impl BinaryOperatorSignature {
    pub fn builtin(
        kind: BinaryOperatorKind,
        left: DataType,
        right: DataType,
        return_type: DataType,
    ) -> Self {
        Self {
            kind,
            left,
            right,
            return_type,
            method: None,
        }
    }

    pub fn user_defined(
        kind: BinaryOperatorKind,
        left: DataType,
        right: DataType,
        return_type: DataType,
        method: TypeHash,
    ) -> Self {
        debug_assert_eq!(kind.operands(), OperandTypes::UserDefined);
        Self {
            kind,
            left,
            right,
            return_type,
            method: Some(method),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.method.is_none()
    }
}

impl OperatorSignature for BinaryOperatorSignature {
    const ARITY: usize = 2;

    fn operand(&self, position: usize) -> &DataType {
        match position {
            0 => &self.left,
            _ => &self.right,
        }
    }

    fn return_type(&self) -> &DataType {
        &self.return_type
    }

    fn is_lifted(&self) -> bool {
        self.kind.is_lifted()
    }

    /// Comparison operators lift only when they return `bool`, and the lifted
    /// form still returns `bool`. Every other operator lifts its return type.
    fn lifted(&self) -> Option<Self> {
        let operator = self.kind.operator();
        if self.kind.is_lifted() || operator.is_conditional() || !self.kind.operands().can_lift() {
            return None;
        }
        let return_type = if operator.is_comparison() {
            if !self.return_type.is_builtin(crate::BuiltinType::Bool) {
                return None;
            }
            self.return_type.clone()
        } else {
            self.return_type.to_nullable()?
        };
        Some(Self {
            kind: self.kind.to_lifted(),
            left: self.left.to_nullable()?,
            right: self.right.to_nullable()?,
            return_type,
            method: self.method,
        })
    }
}

impl fmt::Display for BinaryOperatorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} operator {}({}, {})",
            self.return_type,
            self.kind.operator(),
            self.left,
            self.right
        )
    }
}
