//! DataType - the operand and signature type descriptor.
//!
//! A `DataType` is either one of the fifteen built-in types, a user-declared
//! named type, or the error type produced by upstream binding failures. Any
//! value type may be wrapped once in a nullable wrapper (`int?`, `Money?`).
//!
//! # Example
//!
//! ```
//! use opsel_core::{BuiltinType, DataType};
//!
//! let int = DataType::builtin(BuiltinType::Int);
//! let nullable = int.to_nullable().unwrap();
//! assert_eq!(nullable.to_string(), "int?");
//! assert_eq!(nullable.underlying(), int);
//!
//! // Reference types cannot be wrapped.
//! assert!(DataType::builtin(BuiltinType::String).to_nullable().is_none());
//! ```

use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

use crate::{BuiltinType, TypeHash};

/// Whether a named type has value or reference semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFlavor {
    /// A struct. Can be wrapped in a nullable and boxes to `object`.
    Value,
    /// A class. Converts to `object` and to its base classes by reference.
    Reference,
}

/// A user-declared type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedType {
    pub hash: TypeHash,
    pub name: Arc<str>,
    pub flavor: TypeFlavor,
}

impl NamedType {
    pub fn new(name: &str, flavor: TypeFlavor) -> Self {
        Self {
            hash: TypeHash::from_name(name),
            name: Arc::from(name),
            flavor,
        }
    }
}

/// The non-nullable part of a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Builtin(BuiltinType),
    Named(NamedType),
    /// Placeholder for an operand whose type failed to bind.
    Error,
}

/// A complete type: its kind plus the nullable wrapper flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataType {
    kind: TypeKind,
    nullable: bool,
}

impl DataType {
    /// A non-nullable built-in type.
    pub const fn builtin(ty: BuiltinType) -> Self {
        Self {
            kind: TypeKind::Builtin(ty),
            nullable: false,
        }
    }

    /// A nullable built-in value type such as `int?`.
    pub fn nullable_builtin(ty: BuiltinType) -> Self {
        debug_assert!(ty.is_value_type(), "{ty} cannot be nullable");
        Self {
            kind: TypeKind::Builtin(ty),
            nullable: true,
        }
    }

    /// A non-nullable user-declared type.
    pub fn named(named: NamedType) -> Self {
        Self {
            kind: TypeKind::Named(named),
            nullable: false,
        }
    }

    /// The error type.
    pub const fn error() -> Self {
        Self {
            kind: TypeKind::Error,
            nullable: false,
        }
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, TypeKind::Error)
    }

    /// Built-in value types, structs and every nullable type.
    pub fn is_value_type(&self) -> bool {
        match &self.kind {
            TypeKind::Builtin(ty) => ty.is_value_type(),
            TypeKind::Named(named) => named.flavor == TypeFlavor::Value,
            TypeKind::Error => false,
        }
    }

    /// Non-nullable value types are the only types that may be wrapped.
    pub fn is_non_nullable_value_type(&self) -> bool {
        !self.nullable && self.is_value_type()
    }

    /// The built-in type, if this is a non-nullable built-in.
    pub fn as_builtin(&self) -> Option<BuiltinType> {
        match self.kind {
            TypeKind::Builtin(ty) if !self.nullable => Some(ty),
            _ => None,
        }
    }

    /// The built-in type after looking through a nullable wrapper.
    pub fn underlying_builtin(&self) -> Option<BuiltinType> {
        match self.kind {
            TypeKind::Builtin(ty) => Some(ty),
            _ => None,
        }
    }

    /// The named type after looking through a nullable wrapper.
    pub fn as_named(&self) -> Option<&NamedType> {
        match &self.kind {
            TypeKind::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Check for a specific non-nullable built-in type.
    pub fn is_builtin(&self, ty: BuiltinType) -> bool {
        self.as_builtin() == Some(ty)
    }

    /// Wrap in a nullable. `None` for reference types, the error type and
    /// types that are already nullable.
    pub fn to_nullable(&self) -> Option<DataType> {
        if !self.is_non_nullable_value_type() {
            return None;
        }
        Some(Self {
            kind: self.kind.clone(),
            nullable: true,
        })
    }

    /// The type with any nullable wrapper removed.
    pub fn underlying(&self) -> DataType {
        Self {
            kind: self.kind.clone(),
            nullable: false,
        }
    }

    /// Hash of the full type, distinguishing `T` from `T?`.
    pub fn type_hash(&self) -> TypeHash {
        let base = match &self.kind {
            TypeKind::Builtin(ty) => ty.type_hash(),
            TypeKind::Named(named) => named.hash,
            TypeKind::Error => return TypeHash::EMPTY,
        };
        if self.nullable {
            TypeHash::from_nullable(base)
        } else {
            base
        }
    }
}

impl From<BuiltinType> for DataType {
    fn from(ty: BuiltinType) -> Self {
        DataType::builtin(ty)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Builtin(ty) => write!(f, "{ty}")?,
            TypeKind::Named(named) => write!(f, "{}", named.name)?,
            TypeKind::Error => return write!(f, "<error>"),
        }
        if self.nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}
