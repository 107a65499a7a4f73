//! Type classifier for the operator fast path.
//!
//! Maps a type onto one of 28 canonical categories: the 15 built-in types
//! (indices 0..=14) and the nullable forms of the 13 built-in value types
//! (indices 15..=27, `bool?` first). Everything else is not classifiable and
//! routes resolution to the full algorithm.

use opsel_core::{BuiltinType, DataType, TypeKind};

/// A canonical fast-path category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeCategory {
    builtin: BuiltinType,
    lifted: bool,
}

impl TypeCategory {
    /// Number of categories, and the dimension of every fast-path table.
    pub const COUNT: usize = 28;

    /// First index of the lifted block.
    const LIFTED_BASE: usize = BuiltinType::COUNT;

    /// Offset of the first value type (`bool`) in the built-in order.
    const FIRST_VALUE_TYPE: usize = BuiltinType::Bool as usize;

    pub const fn builtin(self) -> BuiltinType {
        self.builtin
    }

    pub const fn is_lifted(self) -> bool {
        self.lifted
    }

    /// The table index of this category.
    pub fn index(self) -> usize {
        let base = usize::from(u8::from(self.builtin));
        if self.lifted {
            Self::LIFTED_BASE + base - Self::FIRST_VALUE_TYPE
        } else {
            base
        }
    }

    /// The category with table index `index`.
    pub fn from_index(index: usize) -> Option<Self> {
        let (base, lifted) = if index < Self::LIFTED_BASE {
            (index, false)
        } else if index < Self::COUNT {
            (index - Self::LIFTED_BASE + Self::FIRST_VALUE_TYPE, true)
        } else {
            return None;
        };
        let builtin = BuiltinType::try_from(u8::try_from(base).ok()?).ok()?;
        Some(Self { builtin, lifted })
    }

    /// The type this category stands for.
    pub fn data_type(self) -> DataType {
        if self.lifted {
            DataType::nullable_builtin(self.builtin)
        } else {
            DataType::builtin(self.builtin)
        }
    }

    /// Every category in index order.
    pub fn all() -> impl Iterator<Item = TypeCategory> {
        (0..Self::COUNT).filter_map(Self::from_index)
    }
}

/// Classify a type, or `None` when it is not one of the 28 categories.
///
/// Pure and allocation free.
pub fn classify(ty: &DataType) -> Option<TypeCategory> {
    match ty.kind() {
        TypeKind::Builtin(builtin) => {
            let lifted = ty.is_nullable();
            if lifted && !builtin.is_value_type() {
                return None;
            }
            Some(TypeCategory {
                builtin: *builtin,
                lifted,
            })
        }
        TypeKind::Named(_) | TypeKind::Error => None,
    }
}
