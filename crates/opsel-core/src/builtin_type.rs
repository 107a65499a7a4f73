//! Built-in types that take part in operator promotion.

use std::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::TypeHash;

/// The fifteen built-in types.
///
/// The discriminants are the canonical category indices used by the
/// operator fast-path tables, so the declaration order is significant:
/// object, string, bool, char, the four signed integers, the four unsigned
/// integers, then float, double and decimal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u8)]
pub enum BuiltinType {
    Object = 0,
    String = 1,
    Bool = 2,
    Char = 3,
    SByte = 4,
    Short = 5,
    Int = 6,
    Long = 7,
    Byte = 8,
    UShort = 9,
    UInt = 10,
    ULong = 11,
    Float = 12,
    Double = 13,
    Decimal = 14,
}

impl BuiltinType {
    /// Number of built-in types.
    pub const COUNT: usize = 15;

    /// Every built-in type in category order.
    pub const ALL: [BuiltinType; Self::COUNT] = [
        BuiltinType::Object,
        BuiltinType::String,
        BuiltinType::Bool,
        BuiltinType::Char,
        BuiltinType::SByte,
        BuiltinType::Short,
        BuiltinType::Int,
        BuiltinType::Long,
        BuiltinType::Byte,
        BuiltinType::UShort,
        BuiltinType::UInt,
        BuiltinType::ULong,
        BuiltinType::Float,
        BuiltinType::Double,
        BuiltinType::Decimal,
    ];

    /// Get the source-level keyword of this type.
    pub const fn name(self) -> &'static str {
        match self {
            BuiltinType::Object => "object",
            BuiltinType::String => "string",
            BuiltinType::Bool => "bool",
            BuiltinType::Char => "char",
            BuiltinType::SByte => "sbyte",
            BuiltinType::Short => "short",
            BuiltinType::Int => "int",
            BuiltinType::Long => "long",
            BuiltinType::Byte => "byte",
            BuiltinType::UShort => "ushort",
            BuiltinType::UInt => "uint",
            BuiltinType::ULong => "ulong",
            BuiltinType::Float => "float",
            BuiltinType::Double => "double",
            BuiltinType::Decimal => "decimal",
        }
    }

    /// Get the TypeHash for this built-in type.
    pub fn type_hash(self) -> TypeHash {
        TypeHash::from_name(self.name())
    }

    /// Everything except `object` and `string` is a value type.
    pub const fn is_value_type(self) -> bool {
        !matches!(self, BuiltinType::Object | BuiltinType::String)
    }

    pub const fn is_signed_integral(self) -> bool {
        matches!(
            self,
            BuiltinType::SByte | BuiltinType::Short | BuiltinType::Int | BuiltinType::Long
        )
    }

    pub const fn is_unsigned_integral(self) -> bool {
        matches!(
            self,
            BuiltinType::Byte | BuiltinType::UShort | BuiltinType::UInt | BuiltinType::ULong
        )
    }

    /// Integral, floating point, decimal or `char`.
    pub const fn is_numeric(self) -> bool {
        !matches!(
            self,
            BuiltinType::Object | BuiltinType::String | BuiltinType::Bool
        )
    }
}

impl fmt::Display for BuiltinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
