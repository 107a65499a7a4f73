//! Operator overload resolution.
//!
//! One entry point per arity: [`OperatorResolver::resolve_unary`] and
//! [`OperatorResolver::resolve_binary`]. Each first consults the fast-path
//! tables and, on a miss, runs the full algorithm:
//!
//! 1. Gather built-in, user-declared and lifted candidates
//! 2. Keep candidates whose operands all convert implicitly
//! 3. Pick the candidate better than every other one
//!
//! `NoApplicableOperator` and `AmbiguousOperator` are returned as errors.
//! An operand of the error type, or a fast-path hit that the conversion
//! classifier disagrees with, panics.

mod analysis;
mod betterness;
mod binary;
mod candidates;
mod easy_out;
mod unary;

pub use analysis::{AnalysisResult, CandidateAnalysis, CandidateState};
pub use betterness::better_operator;
pub use binary::BinaryResolution;
pub use easy_out::{binary_easy_out, unary_easy_out};
pub use unary::UnaryResolution;

use std::fmt;

use opsel_registry::OperatorLookup;

use crate::cache::OperatorCache;
use crate::conversion::{ConversionClassifier, StandardConversions};

/// Resolver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Consult the fast-path tables before the full algorithm. Turning this
    /// off never changes a result.
    pub use_fast_path: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            use_fast_path: true,
        }
    }
}

/// Resolves operator expressions against built-in and user-declared operators.
///
/// Holds only shared references and the conversion classifier, so one
/// resolver can serve any number of threads when `L` and `C` are `Sync`.
pub struct OperatorResolver<'a, L: ?Sized, C> {
    lookup: &'a L,
    conversions: C,
    cache: &'a OperatorCache,
    options: ResolverOptions,
}

impl<'a, L, C> OperatorResolver<'a, L, C>
where
    L: OperatorLookup + ?Sized,
    C: ConversionClassifier,
{
    pub fn new(lookup: &'a L, conversions: C, cache: &'a OperatorCache) -> Self {
        Self {
            lookup,
            conversions,
            cache,
            options: ResolverOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn conversions(&self) -> &C {
        &self.conversions
    }
}

impl<'a, L: OperatorLookup + ?Sized> OperatorResolver<'a, L, StandardConversions<'a, L>> {
    /// A resolver using [`StandardConversions`] over the same lookup.
    pub fn standard(lookup: &'a L, cache: &'a OperatorCache) -> Self {
        Self::new(lookup, StandardConversions::new(lookup), cache)
    }
}

/// Abort on a broken resolver invariant.
#[cold]
#[track_caller]
fn internal_inconsistency(args: fmt::Arguments<'_>) -> ! {
    panic!("internal inconsistency in operator resolution: {args}")
}
