//! Unary operator resolution.

use tracing::{debug, trace};

use opsel_core::{
    BuiltinType, ConversionKind, DataType, UnaryOperator, UnaryOperatorError,
    UnaryOperatorSignature,
};
use opsel_registry::OperatorLookup;

use super::analysis::AnalysisResult;
use super::betterness::select_best;
use super::candidates::gather_unary;
use super::easy_out::unary_easy_out;
use super::{OperatorResolver, internal_inconsistency};
use crate::builtin::builtin_operators;
use crate::conversion::ConversionClassifier;

/// A resolved unary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryResolution {
    pub signature: UnaryOperatorSignature,
    /// Conversion of the operand to the signature's operand type.
    pub conversion: ConversionKind,
}

impl UnaryResolution {
    pub fn return_type(&self) -> &DataType {
        &self.signature.return_type
    }
}

impl<L, C> OperatorResolver<'_, L, C>
where
    L: OperatorLookup + ?Sized,
    C: ConversionClassifier,
{
    /// Resolve `op` applied to an operand of type `operand`.
    ///
    /// # Arguments
    ///
    /// * `op` - The operator
    /// * `operand` - Type of the operand expression; never the error type
    ///
    /// # Returns
    ///
    /// * `Ok(UnaryResolution)` - The selected signature and the operand conversion
    /// * `Err(UnaryOperatorError)` - No applicable or no unique best candidate
    ///
    /// # Panics
    ///
    /// When `operand` is the error type, or the fast path selects a signature
    /// the operand does not implicitly convert to.
    #[tracing::instrument(level = "trace", skip_all, fields(op = %op, operand = %operand))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve_unary(
        &self,
        op: UnaryOperator,
        operand: &DataType,
    ) -> Result<UnaryResolution, UnaryOperatorError> {
        if operand.is_error() {
            internal_inconsistency(format_args!("operator '{op}' applied to the error type"));
        }

        if self.options.use_fast_path {
            if let Some(resolution) = self.unary_fast_path(op, operand) {
                return Ok(resolution);
            }
        }

        let analysis = self.analyze_unary(op, operand);
        self.unary_outcome(op, operand, analysis)
    }

    /// Run the full algorithm and return the analysed candidate set.
    pub fn analyze_unary(
        &self,
        op: UnaryOperator,
        operand: &DataType,
    ) -> AnalysisResult<UnaryOperatorSignature> {
        let candidates = gather_unary(op, operand, self.lookup, self.cache);
        let operands = [operand];
        let mut analysis = AnalysisResult::analyze(candidates, &operands, &self.conversions);
        select_best(&mut analysis, &operands, &self.conversions);
        analysis
    }

    fn unary_fast_path(&self, op: UnaryOperator, operand: &DataType) -> Option<UnaryResolution> {
        let Some(kind) = unary_easy_out(op, operand) else {
            trace!("fast path miss");
            return None;
        };
        let Some(signature) = builtin_operators().unary_signature(kind) else {
            internal_inconsistency(format_args!("no built-in signature for {kind:?}"));
        };

        let conversion = self.conversions.classify(operand, &signature.operand);
        if !conversion.is_implicit() {
            internal_inconsistency(format_args!(
                "fast path chose '{signature}' but '{operand}' does not convert to '{}'",
                signature.operand
            ));
        }

        trace!(%signature, "fast path hit");
        Some(UnaryResolution {
            signature: signature.clone(),
            conversion,
        })
    }

    fn unary_outcome(
        &self,
        op: UnaryOperator,
        operand: &DataType,
        analysis: AnalysisResult<UnaryOperatorSignature>,
    ) -> Result<UnaryResolution, UnaryOperatorError> {
        if let Some(chosen) = analysis.chosen() {
            debug!(signature = %chosen.signature, "resolved unary operator");
            return Ok(UnaryResolution {
                signature: chosen.signature.clone(),
                conversion: chosen.conversions[0],
            });
        }

        trace!(analysis = %analysis.dump(), "unary resolution failed");

        // -ulong has applicable floating point candidates, none of them best
        let negated_ulong = op == UnaryOperator::UnaryMinus && operand.is_builtin(BuiltinType::ULong);
        let error = if !analysis.has_applicable() || negated_ulong {
            UnaryOperatorError::NoApplicableOperator {
                operator: op,
                operand: operand.clone(),
                candidates: analysis.signatures().cloned().collect(),
            }
        } else {
            UnaryOperatorError::AmbiguousOperator {
                operator: op,
                operand: operand.clone(),
                candidates: analysis.tied().cloned().collect(),
            }
        };
        debug!(failure = ?error.failure(), candidates = error.candidates().len(), "unary resolution failed");
        Err(error)
    }
}
