//! Dispatching rules for picking the next process.
//!
//! Every algorithm in [`scheduler`](crate::scheduler) selects work through
//! a [`DispatchingRule`] followed by a fixed tie-breaking chain (earliest
//! arrival, then input order).
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, select_best, Candidate};
//! use cpu_schedule::models::Process;
//!
//! let candidates = vec![
//!     Candidate::from_process(0, &Process::new("P1", 0, 6)),
//!     Candidate::from_process(1, &Process::new("P2", 0, 2)),
//! ];
//! assert_eq!(select_best(&rules::ShortestBurst, &candidates), Some(1));
//! ```

mod candidate;
mod engine;
pub mod rules;

pub use candidate::Candidate;
pub use engine::{compare, select_best, sort_indices};

use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first).
pub type RuleScore = i64;

/// A dispatching rule that scores a candidate.
///
/// # Score Convention
/// **Lower score = higher priority.** Ties are resolved by the caller,
/// not by the rule.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Scores a candidate; lower = dispatched first.
    fn evaluate(&self, candidate: &Candidate) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
