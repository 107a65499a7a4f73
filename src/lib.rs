//! Operator overload resolution for a statically typed language with
//! built-in numeric types, user-declared operators and nullable value types.
//!
//! The workspace is split into three crates, re-exported here:
//!
//! - `opsel-core`: types, operators, candidate signatures and errors
//! - `opsel-registry`: user-declared types, operators and conversions
//! - `opsel-resolver`: fast-path tables and full overload resolution
//!
//! [`Compilation`] ties a registry to its candidate cache and keeps the two
//! consistent as declarations are added.
//!
//! # Example
//!
//! ```
//! use opsel::prelude::*;
//!
//! let mut compilation = Compilation::new();
//! let money = compilation.register_struct("Money").unwrap();
//! compilation
//!     .declare_unary_operator(&money, UnaryOperator::UnaryMinus, money.clone(), money.clone())
//!     .unwrap();
//!
//! let resolution = compilation
//!     .resolve_unary(UnaryOperator::UnaryMinus, &money)
//!     .unwrap();
//! assert!(!resolution.signature.is_builtin());
//! ```

mod compilation;

pub use compilation::Compilation;

pub use opsel_core::{
    BetterResult, BinaryOperator, BinaryOperatorError, BinaryOperatorKind,
    BinaryOperatorSignature, BuiltinType, ConversionKind, DataType, NamedType, OperandTypes,
    OperatorSignature, RegistrationError, ResolutionFailure, TypeFlavor, TypeHash, TypeKind,
    UnaryOperator, UnaryOperatorError, UnaryOperatorKind, UnaryOperatorSignature,
};
pub use opsel_registry::{
    BinaryOperatorMethod, ConversionMethod, OperatorLookup, SymbolRegistry, TypeEntry,
    UnaryOperatorMethod,
};
pub use opsel_resolver::{
    AnalysisResult, BinaryResolution, CandidateAnalysis, CandidateState, ConversionClassifier,
    OperatorCache, OperatorResolver, ResolverOptions, StandardConversions, TypeCategory,
    UnaryResolution, UserDefinedOperators, better_operator, binary_easy_out, builtin_operators,
    classify, unary_easy_out,
};

/// Everything needed to declare types and resolve operators.
pub mod prelude {
    pub use crate::Compilation;
    pub use opsel_core::{
        BinaryOperator, BinaryOperatorError, BuiltinType, ConversionKind, DataType,
        OperatorSignature, RegistrationError, ResolutionFailure, UnaryOperator,
        UnaryOperatorError,
    };
    pub use opsel_registry::{OperatorLookup, SymbolRegistry};
    pub use opsel_resolver::{
        BinaryResolution, ConversionClassifier, OperatorCache, OperatorResolver,
        ResolverOptions, StandardConversions, UnaryResolution,
    };
}
