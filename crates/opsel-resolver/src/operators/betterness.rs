//! Betterness between applicable operator candidates.
//!
//! Candidate `A` beats `B` when its conversion is not worse than `B`'s at any
//! operand position and better at one or more. Candidates declaring the same
//! operand types are told apart only by lifting: the non-lifted form wins.

use opsel_core::{BetterResult, DataType, OperatorSignature};

use super::analysis::{AnalysisResult, CandidateState};
use crate::conversion::ConversionClassifier;

/// Compare two applicable candidates for the given actual operand types.
pub fn better_operator<S, C>(a: &S, b: &S, operands: &[&DataType], conversions: &C) -> BetterResult
where
    S: OperatorSignature,
    C: ConversionClassifier + ?Sized,
{
    if a.same_operands(b) {
        return match (a.is_lifted(), b.is_lifted()) {
            (false, true) => BetterResult::Left,
            (true, false) => BetterResult::Right,
            _ => BetterResult::Neither,
        };
    }

    let mut left_better = false;
    let mut right_better = false;
    for (i, operand) in operands.iter().enumerate() {
        match conversions.better_conversion(operand, a.operand(i), b.operand(i)) {
            BetterResult::Left => left_better = true,
            BetterResult::Right => right_better = true,
            BetterResult::Neither => {}
        }
    }

    match (left_better, right_better) {
        (true, false) => BetterResult::Left,
        (false, true) => BetterResult::Right,
        _ => BetterResult::Neither,
    }
}

/// Mark the unique best applicable candidate as [`CandidateState::Chosen`].
///
/// Without a unique best, applicable candidates beaten by another are marked
/// [`CandidateState::Worse`] and the rest stay [`CandidateState::Applicable`]
/// as the tied set. When every applicable candidate is beaten by some other
/// one, all of them stay in the tied set.
pub fn select_best<S, C>(analysis: &mut AnalysisResult<S>, operands: &[&DataType], conversions: &C)
where
    S: OperatorSignature,
    C: ConversionClassifier + ?Sized,
{
    let candidates = analysis.candidates_mut();
    let applicable: Vec<usize> = candidates
        .iter()
        .enumerate()
        .filter(|(_, c)| c.state == CandidateState::Applicable)
        .map(|(i, _)| i)
        .collect();

    match applicable.as_slice() {
        [] => return,
        [only] => {
            candidates[*only].state = CandidateState::Chosen;
            return;
        }
        _ => {}
    }

    let n = applicable.len();
    let mut beats = vec![false; n * n];
    for (x, &i) in applicable.iter().enumerate() {
        for (y, &j) in applicable.iter().enumerate().skip(x + 1) {
            match better_operator(
                &candidates[i].signature,
                &candidates[j].signature,
                operands,
                conversions,
            ) {
                BetterResult::Left => beats[x * n + y] = true,
                BetterResult::Right => beats[y * n + x] = true,
                BetterResult::Neither => {}
            }
        }
    }

    let winner = (0..n).find(|&x| (0..n).all(|y| x == y || beats[x * n + y]));
    if let Some(winner) = winner {
        for (x, &i) in applicable.iter().enumerate() {
            candidates[i].state = if x == winner {
                CandidateState::Chosen
            } else {
                CandidateState::Worse
            };
        }
        return;
    }

    let beaten: Vec<bool> = (0..n)
        .map(|y| (0..n).any(|x| beats[x * n + y]))
        .collect();
    if beaten.iter().all(|&b| b) {
        return;
    }
    for (y, &i) in applicable.iter().enumerate() {
        if beaten[y] {
            candidates[i].state = CandidateState::Worse;
        }
    }
}
