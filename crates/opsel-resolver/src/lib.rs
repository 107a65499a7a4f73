//! Operator overload resolution.
//!
//! This crate selects the operator implementation for a unary or binary
//! operator expression:
//!
//! - [`classify`]: canonical fast-path category of a type
//! - [`builtin_operators`]: process-wide registry of built-in signatures
//! - [`OperatorResolver`]: fast path, then gather, filter and betterness
//! - [`OperatorCache`]: per-type user-defined candidates
//! - [`ConversionClassifier`] and [`StandardConversions`]: implicit
//!   conversions and the betterness order between them
//!
//! # Example
//!
//! ```
//! use opsel_core::{BinaryOperator, BuiltinType, DataType};
//! use opsel_registry::SymbolRegistry;
//! use opsel_resolver::{OperatorCache, OperatorResolver};
//!
//! let registry = SymbolRegistry::new();
//! let cache = OperatorCache::new();
//! let resolver = OperatorResolver::standard(&registry, &cache);
//!
//! let resolution = resolver
//!     .resolve_binary(
//!         BinaryOperator::Addition,
//!         &DataType::builtin(BuiltinType::Int),
//!         &DataType::builtin(BuiltinType::Double),
//!     )
//!     .unwrap();
//! assert_eq!(resolution.return_type(), &DataType::builtin(BuiltinType::Double));
//! ```

mod builtin;
mod cache;
mod classify;
pub mod conversion;
mod operators;

pub use builtin::{BuiltinOperators, builtin_operators};
pub use cache::{OperatorCache, UserDefinedOperators};
pub use classify::{TypeCategory, classify};
pub use conversion::{ConversionClassifier, StandardConversions};
pub use operators::{
    AnalysisResult, BinaryResolution, CandidateAnalysis, CandidateState, OperatorResolver,
    ResolverOptions, UnaryResolution, better_operator, binary_easy_out, unary_easy_out,
};
