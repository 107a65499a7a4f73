//! Error types for operator resolution and symbol registration.
//!
//! ## Error Hierarchy
//!
//! ```text
//! UnaryOperatorError / BinaryOperatorError
//! ├── NoApplicableOperator - no candidate accepts the operand types
//! └── AmbiguousOperator    - several candidates, none better than the rest
//!
//! RegistrationError        - invalid type, operator or conversion declaration
//! ```
//!
//! Resolution failures are ordinary outcomes of binding user code and carry
//! the candidate set for the caller's diagnostic. An internal inconsistency
//! (a defective fast-path table, an error-typed operand) is not represented
//! here: it aborts.

use thiserror::Error;

use crate::{BinaryOperator, BinaryOperatorSignature, DataType, UnaryOperator, UnaryOperatorSignature};

/// Which of the two expected failures occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionFailure {
    NoApplicableOperator,
    AmbiguousOperator,
}

// ============================================================================
// Resolution Errors
// ============================================================================

/// Failure to resolve a unary operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnaryOperatorError {
    /// No candidate accepts the operand. `candidates` lists everything analysed.
    #[error("operator '{operator}' cannot be applied to operand of type '{operand}'")]
    NoApplicableOperator {
        operator: UnaryOperator,
        operand: DataType,
        candidates: Vec<UnaryOperatorSignature>,
    },

    /// Several candidates apply and none is better than all others.
    /// `candidates` lists the tied set.
    #[error("operator '{operator}' is ambiguous on an operand of type '{operand}' ({} candidates)", .candidates.len())]
    AmbiguousOperator {
        operator: UnaryOperator,
        operand: DataType,
        candidates: Vec<UnaryOperatorSignature>,
    },
}

impl UnaryOperatorError {
    pub fn failure(&self) -> ResolutionFailure {
        match self {
            UnaryOperatorError::NoApplicableOperator { .. } => ResolutionFailure::NoApplicableOperator,
            UnaryOperatorError::AmbiguousOperator { .. } => ResolutionFailure::AmbiguousOperator,
        }
    }

    pub fn candidates(&self) -> &[UnaryOperatorSignature] {
        match self {
            UnaryOperatorError::NoApplicableOperator { candidates, .. }
            | UnaryOperatorError::AmbiguousOperator { candidates, .. } => candidates,
        }
    }
}

/// Failure to resolve a binary operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BinaryOperatorError {
    /// No candidate accepts the operands. `candidates` lists everything analysed.
    #[error("operator '{operator}' cannot be applied to operands of type '{left}' and '{right}'")]
    NoApplicableOperator {
        operator: BinaryOperator,
        left: DataType,
        right: DataType,
        candidates: Vec<BinaryOperatorSignature>,
    },

    /// Several candidates apply and none is better than all others.
    /// `candidates` lists the tied set.
    #[error("operator '{operator}' is ambiguous on operands of type '{left}' and '{right}' ({} candidates)", .candidates.len())]
    AmbiguousOperator {
        operator: BinaryOperator,
        left: DataType,
        right: DataType,
        candidates: Vec<BinaryOperatorSignature>,
    },
}

impl BinaryOperatorError {
    pub fn failure(&self) -> ResolutionFailure {
        match self {
            BinaryOperatorError::NoApplicableOperator { .. } => ResolutionFailure::NoApplicableOperator,
            BinaryOperatorError::AmbiguousOperator { .. } => ResolutionFailure::AmbiguousOperator,
        }
    }

    pub fn candidates(&self) -> &[BinaryOperatorSignature] {
        match self {
            BinaryOperatorError::NoApplicableOperator { candidates, .. }
            | BinaryOperatorError::AmbiguousOperator { candidates, .. } => candidates,
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

/// Errors raised while declaring types, operators and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// A type with this name is already registered.
    #[error("duplicate type '{name}'")]
    DuplicateType { name: String },

    /// A declaration refers to a type that is not registered.
    #[error("unknown type '{name}'")]
    UnknownType { name: String },

    /// Only classes may derive, and only from classes.
    #[error("'{name}' cannot derive from '{base}'")]
    InvalidBaseType { name: String, base: String },

    /// The error type appeared in a declaration.
    #[error("declaration on '{declaring}' uses the error type")]
    ErrorTypeInSignature { declaring: String },

    /// A user operator must take its declaring type (or its nullable form).
    #[error("operator '{operator}' declared on '{declaring}' must take '{declaring}' as an operand")]
    OperatorNotOnDeclaringType { operator: String, declaring: String },

    /// `++` and `--` must return the declaring type.
    #[error("operator '{operator}' declared on '{declaring}' must return '{declaring}'")]
    InvalidIncrementReturn { operator: String, declaring: String },

    /// The operator cannot be declared by user types.
    #[error("operator '{operator}' cannot be overloaded")]
    NotOverloadable { operator: String },

    /// An identical operator is already declared on this type.
    #[error("duplicate operator '{signature}' on '{declaring}'")]
    DuplicateOperator { signature: String, declaring: String },

    /// A conversion must convert from or to its declaring type, between different types.
    #[error("invalid conversion from '{from}' to '{to}' declared on '{declaring}'")]
    InvalidConversion {
        from: String,
        to: String,
        declaring: String,
    },

    /// A conversion between these types is already declared on this type.
    #[error("duplicate conversion from '{from}' to '{to}' on '{declaring}'")]
    DuplicateConversion {
        from: String,
        to: String,
        declaring: String,
    },
}
