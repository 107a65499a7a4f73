//! Registry of user-declared types, operators and conversions.
//!
//! [`SymbolRegistry`] stores the declarations; [`OperatorLookup`] is the
//! read-only view the resolver consumes.

mod entries;
mod lookup;
mod registry;

pub use entries::{BinaryOperatorMethod, ConversionMethod, TypeEntry, UnaryOperatorMethod};
pub use lookup::{BaseChain, OperatorLookup};
pub use registry::SymbolRegistry;
