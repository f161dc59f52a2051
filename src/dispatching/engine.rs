//! Candidate selection with a fixed tie-breaking chain.
//!
//! Every algorithm picks the next process the same way: the rule score
//! decides first, then the earliest arrival, then the input order. The
//! chain is total, so selection is deterministic for any input.

use std::cmp::Ordering;

use super::{Candidate, DispatchingRule};

/// Compares two candidates under `rule` and the tie-breaking chain.
///
/// `Ordering::Less` means `a` is dispatched before `b`.
pub fn compare<R: DispatchingRule + ?Sized>(rule: &R, a: &Candidate, b: &Candidate) -> Ordering {
    rule.evaluate(a)
        .cmp(&rule.evaluate(b))
        .then_with(|| a.arrival_time.cmp(&b.arrival_time))
        .then_with(|| a.index.cmp(&b.index))
}

/// Returns the input index of the best candidate, or `None` if there are none.
pub fn select_best<'a, R, I>(rule: &R, candidates: I) -> Option<usize>
where
    R: DispatchingRule + ?Sized,
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .min_by(|a, b| compare(rule, a, b))
        .map(|c| c.index)
}

/// Sorts candidate indices in dispatch order (best first).
pub fn sort_indices<R: DispatchingRule + ?Sized>(rule: &R, candidates: &[Candidate]) -> Vec<usize> {
    let mut sorted: Vec<&Candidate> = candidates.iter().collect();
    sorted.sort_by(|a, b| compare(rule, a, b));
    sorted.into_iter().map(|c| c.index).collect()
}
