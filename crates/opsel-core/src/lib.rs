//! Core types for operator overload resolution.
//!
//! This crate holds the data model shared by the registry and the resolver:
//!
//! - [`BuiltinType`] and [`DataType`]: operand and signature types
//! - [`UnaryOperator`], [`BinaryOperator`] and their composite kinds
//! - [`UnaryOperatorSignature`] and [`BinaryOperatorSignature`]: candidates
//! - [`ConversionKind`]: the conversion classifier's verdict
//! - [`TypeHash`]: deterministic identity for user types and methods
//! - Error types for resolution failures and registration

mod builtin_type;
mod conversion;
mod data_type;
mod error;
mod operator;
mod signature;
mod type_hash;

pub use builtin_type::BuiltinType;
pub use conversion::{BetterResult, ConversionKind};
pub use data_type::{DataType, NamedType, TypeFlavor, TypeKind};
pub use error::{BinaryOperatorError, RegistrationError, ResolutionFailure, UnaryOperatorError};
pub use operator::{
    BinaryOperator, BinaryOperatorKind, OperandTypes, UnaryOperator, UnaryOperatorKind,
};
pub use signature::{BinaryOperatorSignature, OperatorSignature, UnaryOperatorSignature};
pub use type_hash::{TypeHash, hash_constants};
