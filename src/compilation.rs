//! A compilation: user declarations plus the operator candidates derived
//! from them.
//!
//! Declaring an operator on a type drops that type's cached candidate set,
//! so resolution always sees the current declarations.

use tracing::debug;

use opsel_core::{
    BinaryOperator, BinaryOperatorError, DataType, RegistrationError, TypeHash, UnaryOperator,
    UnaryOperatorError,
};
use opsel_registry::SymbolRegistry;
use opsel_resolver::{
    BinaryResolution, OperatorCache, OperatorResolver, ResolverOptions, StandardConversions,
    UnaryResolution,
};

/// User declarations and the per-type operator cache built over them.
///
/// Registration takes `&mut self`; resolution takes `&self` and may run on
/// many threads at once.
#[derive(Debug, Default)]
pub struct Compilation {
    registry: SymbolRegistry,
    cache: OperatorCache,
    options: ResolverOptions,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ResolverOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn registry(&self) -> &SymbolRegistry {
        &self.registry
    }

    pub fn cache(&self) -> &OperatorCache {
        &self.cache
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    // ==========================================================================
    // Declarations
    // ==========================================================================

    pub fn register_struct(&mut self, name: &str) -> Result<DataType, RegistrationError> {
        self.registry.register_struct(name)
    }

    pub fn register_class(
        &mut self,
        name: &str,
        base: Option<&DataType>,
    ) -> Result<DataType, RegistrationError> {
        self.registry.register_class(name, base)
    }

    pub fn declare_unary_operator(
        &mut self,
        declaring: &DataType,
        operator: UnaryOperator,
        operand: DataType,
        return_type: DataType,
    ) -> Result<TypeHash, RegistrationError> {
        let method = self
            .registry
            .declare_unary_operator(declaring, operator, operand, return_type)?;
        self.invalidate(declaring);
        Ok(method)
    }

    pub fn declare_binary_operator(
        &mut self,
        declaring: &DataType,
        operator: BinaryOperator,
        left: DataType,
        right: DataType,
        return_type: DataType,
    ) -> Result<TypeHash, RegistrationError> {
        let method = self
            .registry
            .declare_binary_operator(declaring, operator, left, right, return_type)?;
        self.invalidate(declaring);
        Ok(method)
    }

    /// Conversions are looked up live, so no cached state depends on them.
    pub fn declare_conversion(
        &mut self,
        declaring: &DataType,
        from: DataType,
        to: DataType,
        is_implicit: bool,
    ) -> Result<TypeHash, RegistrationError> {
        self.registry.declare_conversion(declaring, from, to, is_implicit)
    }

    fn invalidate(&self, declaring: &DataType) {
        if self.cache.invalidate(declaring.type_hash()) {
            debug!(declaring = %declaring, "invalidated cached operators");
        }
    }

    // ==========================================================================
    // Resolution
    // ==========================================================================

    /// A resolver over this compilation using [`StandardConversions`].
    pub fn resolver(
        &self,
    ) -> OperatorResolver<'_, SymbolRegistry, StandardConversions<'_, SymbolRegistry>> {
        OperatorResolver::standard(&self.registry, &self.cache).with_options(self.options)
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_unary(
        &self,
        op: UnaryOperator,
        operand: &DataType,
    ) -> Result<UnaryResolution, UnaryOperatorError> {
        self.resolver().resolve_unary(op, operand)
    }

    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_binary(
        &self,
        op: BinaryOperator,
        left: &DataType,
        right: &DataType,
    ) -> Result<BinaryResolution, BinaryOperatorError> {
        self.resolver().resolve_binary(op, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opsel_core::{BuiltinType, OperandTypes};

    #[test]
    fn new_declaration_invalidates_cached_set() {
        let mut compilation = Compilation::new();
        let money = compilation.register_struct("Money").unwrap();
        compilation
            .declare_binary_operator(
                &money,
                BinaryOperator::Addition,
                money.clone(),
                money.clone(),
                money.clone(),
            )
            .unwrap();

        let long = DataType::builtin(BuiltinType::Long);
        assert!(
            compilation
                .resolve_binary(BinaryOperator::Addition, &money, &long)
                .is_err()
        );
        assert_eq!(compilation.cache().len(), 1);

        compilation
            .declare_binary_operator(
                &money,
                BinaryOperator::Addition,
                money.clone(),
                long.clone(),
                money.clone(),
            )
            .unwrap();
        assert!(compilation.cache().is_empty());

        let resolution = compilation
            .resolve_binary(BinaryOperator::Addition, &money, &long)
            .unwrap();
        assert_eq!(resolution.signature.kind.operands(), OperandTypes::UserDefined);
        assert_eq!(resolution.signature.right, long);
    }

    #[test]
    fn options_reach_the_resolver() {
        let compilation = Compilation::with_options(ResolverOptions {
            use_fast_path: false,
        });
        assert!(!compilation.resolver().options().use_fast_path);
        assert!(Compilation::new().resolver().options().use_fast_path);
    }
}
