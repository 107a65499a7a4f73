//! Registry entries for user-declared types, operators and conversions.

use std::sync::Arc;

use opsel_core::{BinaryOperator, DataType, NamedType, TypeFlavor, TypeHash, UnaryOperator};

/// A user-declared struct or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub hash: TypeHash,
    pub name: Arc<str>,
    pub flavor: TypeFlavor,
    /// Base class. Always `None` for structs.
    pub base: Option<TypeHash>,
}

impl TypeEntry {
    /// The non-nullable `DataType` naming this entry.
    pub fn data_type(&self) -> DataType {
        DataType::named(NamedType {
            hash: self.hash,
            name: Arc::clone(&self.name),
            flavor: self.flavor,
        })
    }

    pub fn is_class(&self) -> bool {
        self.flavor == TypeFlavor::Reference
    }
}

/// A user-declared unary operator method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOperatorMethod {
    pub hash: TypeHash,
    pub declaring_type: TypeHash,
    pub operator: UnaryOperator,
    pub operand: DataType,
    pub return_type: DataType,
}

/// A user-declared binary operator method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperatorMethod {
    pub hash: TypeHash,
    pub declaring_type: TypeHash,
    pub operator: BinaryOperator,
    pub left: DataType,
    pub right: DataType,
    pub return_type: DataType,
}

/// A user-declared conversion method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionMethod {
    pub hash: TypeHash,
    pub declaring_type: TypeHash,
    pub from: DataType,
    pub to: DataType,
    pub is_implicit: bool,
}
