//! Binary operator resolution.

use tracing::{debug, trace};

use opsel_core::{
    BinaryOperator, BinaryOperatorError, BinaryOperatorSignature, ConversionKind, DataType,
};
use opsel_registry::OperatorLookup;

use super::analysis::AnalysisResult;
use super::betterness::select_best;
use super::candidates::gather_binary;
use super::easy_out::binary_easy_out;
use super::{OperatorResolver, internal_inconsistency};
use crate::builtin::builtin_operators;
use crate::conversion::ConversionClassifier;

/// A resolved binary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryResolution {
    pub signature: BinaryOperatorSignature,
    pub left_conversion: ConversionKind,
    pub right_conversion: ConversionKind,
}

impl BinaryResolution {
    pub fn return_type(&self) -> &DataType {
        &self.signature.return_type
    }
}

impl<L, C> OperatorResolver<'_, L, C>
where
    L: OperatorLookup + ?Sized,
    C: ConversionClassifier,
{
    /// Resolve `left op right`.
    ///
    /// # Arguments
    ///
    /// * `op` - The operator
    /// * `left` - Type of the left operand; never the error type
    /// * `right` - Type of the right operand; never the error type
    ///
    /// # Returns
    ///
    /// * `Ok(BinaryResolution)` - The selected signature and both operand conversions
    /// * `Err(BinaryOperatorError)` - No applicable or no unique best candidate
    ///
    /// # Panics
    ///
    /// When an operand is the error type, or the fast path selects a signature
    /// an operand does not implicitly convert to.
    #[tracing::instrument(level = "trace", skip_all, fields(op = %op, left = %left, right = %right))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_binary(
        &self,
        op: BinaryOperator,
        left: &DataType,
        right: &DataType,
    ) -> Result<BinaryResolution, BinaryOperatorError> {
        if left.is_error() || right.is_error() {
            internal_inconsistency(format_args!("operator '{op}' applied to the error type"));
        }

        if self.options.use_fast_path {
            if let Some(resolution) = self.binary_fast_path(op, left, right) {
                return Ok(resolution);
            }
        }

        let analysis = self.analyze_binary(op, left, right);
        self.binary_outcome(op, left, right, analysis)
    }

    /// Run the full algorithm and return the analysed candidate set.
    pub fn analyze_binary(
        &self,
        op: BinaryOperator,
        left: &DataType,
        right: &DataType,
    ) -> AnalysisResult<BinaryOperatorSignature> {
        let candidates = gather_binary(op, left, right, self.lookup, self.cache);
        let operands = [left, right];
        let mut analysis = AnalysisResult::analyze(candidates, &operands, &self.conversions);
        select_best(&mut analysis, &operands, &self.conversions);
        analysis
    }

    fn binary_fast_path(
        &self,
        op: BinaryOperator,
        left: &DataType,
        right: &DataType,
    ) -> Option<BinaryResolution> {
        let Some(kind) = binary_easy_out(op, left, right) else {
            trace!("fast path miss");
            return None;
        };
        let Some(signature) = builtin_operators().binary_signature(kind) else {
            internal_inconsistency(format_args!("no built-in signature for {kind:?}"));
        };

        let left_conversion = self.conversions.classify(left, &signature.left);
        let right_conversion = self.conversions.classify(right, &signature.right);
        if !left_conversion.is_implicit() || !right_conversion.is_implicit() {
            internal_inconsistency(format_args!(
                "fast path chose '{signature}' for operands '{left}' and '{right}'"
            ));
        }

        trace!(%signature, "fast path hit");
        Some(BinaryResolution {
            signature: signature.clone(),
            left_conversion,
            right_conversion,
        })
    }

    fn binary_outcome(
        &self,
        op: BinaryOperator,
        left: &DataType,
        right: &DataType,
        analysis: AnalysisResult<BinaryOperatorSignature>,
    ) -> Result<BinaryResolution, BinaryOperatorError> {
        if let Some(chosen) = analysis.chosen() {
            debug!(signature = %chosen.signature, "resolved binary operator");
            return Ok(BinaryResolution {
                signature: chosen.signature.clone(),
                left_conversion: chosen.conversions[0],
                right_conversion: chosen.conversions[1],
            });
        }

        trace!(analysis = %analysis.dump(), "binary resolution failed");

        let error = if analysis.has_applicable() {
            BinaryOperatorError::AmbiguousOperator {
                operator: op,
                left: left.clone(),
                right: right.clone(),
                candidates: analysis.tied().cloned().collect(),
            }
        } else {
            BinaryOperatorError::NoApplicableOperator {
                operator: op,
                left: left.clone(),
                right: right.clone(),
                candidates: analysis.signatures().cloned().collect(),
            }
        };
        debug!(failure = ?error.failure(), candidates = error.candidates().len(), "binary resolution failed");
        Err(error)
    }
}
