//! Per-candidate analysis of one slow-path resolution.

use std::fmt::Write as _;

use opsel_core::{ConversionKind, DataType, OperatorSignature};

use crate::conversion::ConversionClassifier;

/// Where a candidate ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateState {
    /// Every operand converts implicitly and no other candidate beats it.
    Applicable,
    /// Some operand has no implicit conversion to the declared type.
    Inapplicable,
    /// Applicable, but beaten by another applicable candidate.
    Worse,
    /// The unique best candidate.
    Chosen,
}

/// One analysed candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateAnalysis<S> {
    pub signature: S,
    /// Conversion of each actual operand to the declared operand type.
    pub conversions: Vec<ConversionKind>,
    pub state: CandidateState,
}

impl<S> CandidateAnalysis<S> {
    /// Passed the applicability filter, whatever betterness decided.
    pub fn is_applicable(&self) -> bool {
        self.state != CandidateState::Inapplicable
    }
}

/// The analysed candidate set of one resolution, in gather order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult<S> {
    candidates: Vec<CandidateAnalysis<S>>,
}

impl<S: OperatorSignature> AnalysisResult<S> {
    /// Classify every operand against every candidate.
    pub(crate) fn analyze<C: ConversionClassifier + ?Sized>(
        candidates: Vec<S>,
        operands: &[&DataType],
        conversions: &C,
    ) -> Self {
        debug_assert_eq!(operands.len(), S::ARITY);
        let candidates = candidates
            .into_iter()
            .map(|signature| {
                let kinds: Vec<ConversionKind> = operands
                    .iter()
                    .enumerate()
                    .map(|(i, operand)| conversions.classify(operand, signature.operand(i)))
                    .collect();
                let state = if kinds.iter().all(|kind| kind.is_implicit()) {
                    CandidateState::Applicable
                } else {
                    CandidateState::Inapplicable
                };
                CandidateAnalysis {
                    signature,
                    conversions: kinds,
                    state,
                }
            })
            .collect();
        Self { candidates }
    }

    pub fn candidates(&self) -> &[CandidateAnalysis<S>] {
        &self.candidates
    }

    pub(crate) fn candidates_mut(&mut self) -> &mut [CandidateAnalysis<S>] {
        &mut self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// The unique best candidate, once selection has run.
    pub fn chosen(&self) -> Option<&CandidateAnalysis<S>> {
        self.candidates
            .iter()
            .find(|c| c.state == CandidateState::Chosen)
    }

    pub fn has_applicable(&self) -> bool {
        self.candidates.iter().any(CandidateAnalysis::is_applicable)
    }

    /// Applicable candidates that no other candidate beats.
    pub fn tied(&self) -> impl Iterator<Item = &S> {
        self.candidates
            .iter()
            .filter(|c| c.state == CandidateState::Applicable)
            .map(|c| &c.signature)
    }

    /// Every analysed signature.
    pub fn signatures(&self) -> impl Iterator<Item = &S> {
        self.candidates.iter().map(|c| &c.signature)
    }

    /// Human readable listing of every candidate and its outcome.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for candidate in &self.candidates {
            let marker = match candidate.state {
                CandidateState::Chosen => "chosen",
                CandidateState::Applicable => "applicable",
                CandidateState::Worse => "worse",
                CandidateState::Inapplicable => "inapplicable",
            };
            let _ = writeln!(
                out,
                "{marker:>12}  {}  {:?}",
                candidate.signature, candidate.conversions
            );
        }
        out
    }
}
