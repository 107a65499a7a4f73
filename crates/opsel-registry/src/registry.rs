//! SymbolRegistry - storage for user-declared types, operators and conversions.
//!
//! # Storage Model
//!
//! - **Types**: every struct and class keyed by its `TypeHash`
//! - **Operators**: unary and binary operator methods keyed by declaring type
//! - **Conversions**: conversion methods keyed by declaring type
//!
//! Every declaration is validated on the way in, so the resolver can trust
//! what it reads back through [`OperatorLookup`].
//!
//! # Thread Safety
//!
//! Registration takes `&mut self`. Once populated the registry is only read,
//! and it may be shared across threads that resolve operators concurrently.
//!
//! # Example
//!
//! ```
//! use opsel_core::{BuiltinType, DataType, UnaryOperator};
//! use opsel_registry::{OperatorLookup, SymbolRegistry};
//!
//! let mut registry = SymbolRegistry::new();
//! let money = registry.register_struct("Money").unwrap();
//! registry
//!     .declare_unary_operator(&money, UnaryOperator::UnaryMinus, money.clone(), money.clone())
//!     .unwrap();
//!
//! assert_eq!(registry.unary_operators(money.type_hash()).len(), 1);
//! ```

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::debug;

use opsel_core::{
    BinaryOperator, BuiltinType, DataType, RegistrationError, TypeFlavor, TypeHash, TypeKind,
    UnaryOperator,
};

use crate::{BinaryOperatorMethod, ConversionMethod, OperatorLookup, TypeEntry, UnaryOperatorMethod};

/// Registry of user-declared types and their operator and conversion methods.
#[derive(Debug, Default)]
pub struct SymbolRegistry {
    /// Structs and classes by hash.
    types: FxHashMap<TypeHash, TypeEntry>,

    /// Unary operator methods by declaring type.
    unary_operators: FxHashMap<TypeHash, Vec<UnaryOperatorMethod>>,

    /// Binary operator methods by declaring type.
    binary_operators: FxHashMap<TypeHash, Vec<BinaryOperatorMethod>>,

    /// Conversion methods by declaring type.
    conversions: FxHashMap<TypeHash, Vec<ConversionMethod>>,
}

impl SymbolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Types
    // ==========================================================================

    /// Register a struct (value type).
    pub fn register_struct(&mut self, name: &str) -> Result<DataType, RegistrationError> {
        self.register_type(name, TypeFlavor::Value, None)
    }

    /// Register a class (reference type), optionally deriving from another class.
    pub fn register_class(
        &mut self,
        name: &str,
        base: Option<&DataType>,
    ) -> Result<DataType, RegistrationError> {
        let base_hash = match base {
            None => None,
            Some(base) => {
                let entry = self.entry_for(base)?;
                if !entry.is_class() || base.is_nullable() {
                    return Err(RegistrationError::InvalidBaseType {
                        name: name.to_string(),
                        base: base.to_string(),
                    });
                }
                Some(entry.hash)
            }
        };
        self.register_type(name, TypeFlavor::Reference, base_hash)
    }

    fn register_type(
        &mut self,
        name: &str,
        flavor: TypeFlavor,
        base: Option<TypeHash>,
    ) -> Result<DataType, RegistrationError> {
        let hash = TypeHash::from_name(name);
        let clashes_with_builtin = BuiltinType::ALL.iter().any(|ty| ty.name() == name);
        if clashes_with_builtin || self.types.contains_key(&hash) {
            return Err(RegistrationError::DuplicateType {
                name: name.to_string(),
            });
        }

        let entry = TypeEntry {
            hash,
            name: Arc::from(name),
            flavor,
            base,
        };
        let data_type = entry.data_type();
        debug!(%name, ?flavor, "registered type");
        self.types.insert(hash, entry);
        Ok(data_type)
    }

    /// Look up a registered type by name.
    pub fn lookup_type(&self, name: &str) -> Option<DataType> {
        self.types
            .get(&TypeHash::from_name(name))
            .map(TypeEntry::data_type)
    }

    /// Number of registered types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // ==========================================================================
    // Operators
    // ==========================================================================

    /// Declare a unary operator method on `declaring`.
    ///
    /// # Returns
    ///
    /// The hash of the new method.
    pub fn declare_unary_operator(
        &mut self,
        declaring: &DataType,
        operator: UnaryOperator,
        operand: DataType,
        return_type: DataType,
    ) -> Result<TypeHash, RegistrationError> {
        let owner = self.declaring_entry(declaring)?.hash;
        self.check_signature_types(declaring, &[&operand, &return_type])?;

        if operand.underlying() != *declaring {
            return Err(RegistrationError::OperatorNotOnDeclaringType {
                operator: operator.to_string(),
                declaring: declaring.to_string(),
            });
        }
        if operator.is_increment_or_decrement() && return_type != operand {
            return Err(RegistrationError::InvalidIncrementReturn {
                operator: operator.to_string(),
                declaring: declaring.to_string(),
            });
        }

        let hash = TypeHash::from_operator(owner, operator.method_name(), &[operand.type_hash()]);
        let methods = self.unary_operators.entry(owner).or_default();
        if methods.iter().any(|method| method.hash == hash) {
            return Err(RegistrationError::DuplicateOperator {
                signature: format!("{return_type} operator {operator}({operand})"),
                declaring: declaring.to_string(),
            });
        }

        debug!(declaring = %declaring, %operator, %operand, "declared unary operator");
        methods.push(UnaryOperatorMethod {
            hash,
            declaring_type: owner,
            operator,
            operand,
            return_type,
        });
        Ok(hash)
    }

    /// Declare a binary operator method on `declaring`.
    ///
    /// # Returns
    ///
    /// The hash of the new method.
    pub fn declare_binary_operator(
        &mut self,
        declaring: &DataType,
        operator: BinaryOperator,
        left: DataType,
        right: DataType,
        return_type: DataType,
    ) -> Result<TypeHash, RegistrationError> {
        let owner = self.declaring_entry(declaring)?.hash;
        let Some(method_name) = operator.method_name() else {
            return Err(RegistrationError::NotOverloadable {
                operator: operator.to_string(),
            });
        };
        self.check_signature_types(declaring, &[&left, &right, &return_type])?;

        if left.underlying() != *declaring && right.underlying() != *declaring {
            return Err(RegistrationError::OperatorNotOnDeclaringType {
                operator: operator.to_string(),
                declaring: declaring.to_string(),
            });
        }

        let hash = TypeHash::from_operator(owner, method_name, &[left.type_hash(), right.type_hash()]);
        let methods = self.binary_operators.entry(owner).or_default();
        if methods.iter().any(|method| method.hash == hash) {
            return Err(RegistrationError::DuplicateOperator {
                signature: format!("{return_type} operator {operator}({left}, {right})"),
                declaring: declaring.to_string(),
            });
        }

        debug!(declaring = %declaring, %operator, %left, %right, "declared binary operator");
        methods.push(BinaryOperatorMethod {
            hash,
            declaring_type: owner,
            operator,
            left,
            right,
            return_type,
        });
        Ok(hash)
    }

    // ==========================================================================
    // Conversions
    // ==========================================================================

    /// Declare a conversion method on `declaring`.
    ///
    /// Either `from` or `to` must be the declaring type (or its nullable form),
    /// and the two must differ.
    pub fn declare_conversion(
        &mut self,
        declaring: &DataType,
        from: DataType,
        to: DataType,
        is_implicit: bool,
    ) -> Result<TypeHash, RegistrationError> {
        let owner = self.declaring_entry(declaring)?.hash;
        self.check_signature_types(declaring, &[&from, &to])?;

        let involves_declaring = from.underlying() == *declaring || to.underlying() == *declaring;
        if !involves_declaring || from.underlying() == to.underlying() {
            return Err(RegistrationError::InvalidConversion {
                from: from.to_string(),
                to: to.to_string(),
                declaring: declaring.to_string(),
            });
        }

        let methods = self.conversions.entry(owner).or_default();
        if methods.iter().any(|method| method.from == from && method.to == to) {
            return Err(RegistrationError::DuplicateConversion {
                from: from.to_string(),
                to: to.to_string(),
                declaring: declaring.to_string(),
            });
        }

        let hash = TypeHash::from_conversion(owner, from.type_hash(), to.type_hash(), is_implicit);
        debug!(declaring = %declaring, %from, %to, is_implicit, "declared conversion");
        methods.push(ConversionMethod {
            hash,
            declaring_type: owner,
            from,
            to,
            is_implicit,
        });
        Ok(hash)
    }

    // ==========================================================================
    // Validation helpers
    // ==========================================================================

    fn entry_for(&self, ty: &DataType) -> Result<&TypeEntry, RegistrationError> {
        ty.as_named()
            .and_then(|named| self.types.get(&named.hash))
            .ok_or_else(|| RegistrationError::UnknownType {
                name: ty.to_string(),
            })
    }

    /// The declaring type must be a registered, non-nullable user type.
    fn declaring_entry(&self, declaring: &DataType) -> Result<&TypeEntry, RegistrationError> {
        if declaring.is_nullable() {
            return Err(RegistrationError::UnknownType {
                name: declaring.to_string(),
            });
        }
        self.entry_for(declaring)
    }

    fn check_signature_types(
        &self,
        declaring: &DataType,
        types: &[&DataType],
    ) -> Result<(), RegistrationError> {
        for ty in types {
            match ty.kind() {
                TypeKind::Error => {
                    return Err(RegistrationError::ErrorTypeInSignature {
                        declaring: declaring.to_string(),
                    });
                }
                TypeKind::Named(_) => {
                    self.entry_for(ty)?;
                }
                TypeKind::Builtin(_) => {}
            }
        }
        Ok(())
    }
}

impl OperatorLookup for SymbolRegistry {
    fn type_entry(&self, ty: TypeHash) -> Option<&TypeEntry> {
        self.types.get(&ty)
    }

    fn unary_operators(&self, ty: TypeHash) -> &[UnaryOperatorMethod] {
        self.unary_operators.get(&ty).map_or(&[], Vec::as_slice)
    }

    fn binary_operators(&self, ty: TypeHash) -> &[BinaryOperatorMethod] {
        self.binary_operators.get(&ty).map_or(&[], Vec::as_slice)
    }

    fn conversions(&self, ty: TypeHash) -> &[ConversionMethod] {
        self.conversions.get(&ty).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsel_core::BuiltinType;

    fn int() -> DataType {
        DataType::builtin(BuiltinType::Int)
    }

    // =========================================================================
    // Type registration
    // =========================================================================

    #[test]
    fn register_and_lookup_struct() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        assert!(money.is_value_type());
        assert_eq!(registry.lookup_type("Money"), Some(money));
        assert_eq!(registry.type_count(), 1);
    }

    #[test]
    fn duplicate_type_rejected() {
        let mut registry = SymbolRegistry::new();
        registry.register_struct("Money").unwrap();
        assert_eq!(
            registry.register_class("Money", None),
            Err(RegistrationError::DuplicateType { name: "Money".into() })
        );
    }

    #[test]
    fn builtin_names_are_reserved() {
        let mut registry = SymbolRegistry::new();
        assert!(matches!(
            registry.register_struct("decimal"),
            Err(RegistrationError::DuplicateType { .. })
        ));
    }

    #[test]
    fn class_hierarchy() {
        let mut registry = SymbolRegistry::new();
        let shape = registry.register_class("Shape", None).unwrap();
        let circle = registry.register_class("Circle", Some(&shape)).unwrap();
        let chain: Vec<_> = registry.base_chain(circle.type_hash()).collect();
        assert_eq!(chain, vec![circle.type_hash(), shape.type_hash()]);
        assert!(registry.derives_from(circle.type_hash(), shape.type_hash()));
        assert!(!registry.derives_from(shape.type_hash(), circle.type_hash()));
    }

    #[test]
    fn struct_cannot_be_base() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        assert!(matches!(
            registry.register_class("Wallet", Some(&money)),
            Err(RegistrationError::InvalidBaseType { .. })
        ));
    }

    // =========================================================================
    // Operator declarations
    // =========================================================================

    #[test]
    fn unary_operator_must_take_declaring_type() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        let result =
            registry.declare_unary_operator(&money, UnaryOperator::UnaryMinus, int(), money.clone());
        assert!(matches!(
            result,
            Err(RegistrationError::OperatorNotOnDeclaringType { .. })
        ));
    }

    #[test]
    fn increment_must_return_operand_type() {
        let mut registry = SymbolRegistry::new();
        let counter = registry.register_struct("Counter").unwrap();
        let result = registry.declare_unary_operator(
            &counter,
            UnaryOperator::PrefixIncrement,
            counter.clone(),
            int(),
        );
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidIncrementReturn { .. })
        ));
    }

    #[test]
    fn prefix_and_postfix_share_one_method() {
        let mut registry = SymbolRegistry::new();
        let counter = registry.register_struct("Counter").unwrap();
        registry
            .declare_unary_operator(
                &counter,
                UnaryOperator::PrefixIncrement,
                counter.clone(),
                counter.clone(),
            )
            .unwrap();
        let again = registry.declare_unary_operator(
            &counter,
            UnaryOperator::PostfixIncrement,
            counter.clone(),
            counter.clone(),
        );
        assert!(matches!(again, Err(RegistrationError::DuplicateOperator { .. })));
    }

    #[test]
    fn binary_operator_on_either_side() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        registry
            .declare_binary_operator(
                &money,
                BinaryOperator::Multiplication,
                money.clone(),
                int(),
                money.clone(),
            )
            .unwrap();
        registry
            .declare_binary_operator(
                &money,
                BinaryOperator::Multiplication,
                int(),
                money.clone(),
                money.clone(),
            )
            .unwrap();
        assert_eq!(registry.binary_operators(money.type_hash()).len(), 2);

        let unrelated =
            registry.declare_binary_operator(&money, BinaryOperator::Addition, int(), int(), int());
        assert!(unrelated.is_err());
    }

    #[test]
    fn conditional_operators_not_overloadable() {
        let mut registry = SymbolRegistry::new();
        let flag = registry.register_struct("Flag").unwrap();
        let result = registry.declare_binary_operator(
            &flag,
            BinaryOperator::LogicalAnd,
            flag.clone(),
            flag.clone(),
            flag.clone(),
        );
        assert_eq!(
            result,
            Err(RegistrationError::NotOverloadable { operator: "&&".into() })
        );
    }

    #[test]
    fn unknown_types_rejected() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        let mut other = SymbolRegistry::new();
        let ghost = other.register_struct("Ghost").unwrap();
        let result = registry.declare_binary_operator(
            &money,
            BinaryOperator::Addition,
            money.clone(),
            ghost,
            money.clone(),
        );
        assert_eq!(
            result,
            Err(RegistrationError::UnknownType { name: "Ghost".into() })
        );
    }

    #[test]
    fn error_type_rejected() {
        let mut registry = SymbolRegistry::new();
        let money = registry.register_struct("Money").unwrap();
        let result = registry.declare_unary_operator(
            &money,
            UnaryOperator::UnaryMinus,
            money.clone(),
            DataType::error(),
        );
        assert!(matches!(
            result,
            Err(RegistrationError::ErrorTypeInSignature { .. })
        ));
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    #[test]
    fn conversion_declarations() {
        let mut registry = SymbolRegistry::new();
        let meters = registry.register_struct("Meters").unwrap();
        let double = DataType::builtin(BuiltinType::Double);
        registry
            .declare_conversion(&meters, meters.clone(), double.clone(), true)
            .unwrap();
        registry
            .declare_conversion(&meters, double.clone(), meters.clone(), false)
            .unwrap();
        assert_eq!(registry.conversions(meters.type_hash()).len(), 2);

        let duplicate = registry.declare_conversion(&meters, meters.clone(), double.clone(), false);
        assert!(matches!(
            duplicate,
            Err(RegistrationError::DuplicateConversion { .. })
        ));

        let unrelated = registry.declare_conversion(&meters, int(), double, true);
        assert!(matches!(
            unrelated,
            Err(RegistrationError::InvalidConversion { .. })
        ));
    }

    #[test]
    fn conversion_to_self_rejected() {
        let mut registry = SymbolRegistry::new();
        let meters = registry.register_struct("Meters").unwrap();
        let result = registry.declare_conversion(
            &meters,
            meters.clone(),
            meters.to_nullable().unwrap(),
            true,
        );
        assert!(matches!(
            result,
            Err(RegistrationError::InvalidConversion { .. })
        ));
    }
}
