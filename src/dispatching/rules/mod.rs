//! Built-in dispatching rules.
//!
//! | Rule | Algorithm | Score |
//! |------|-----------|-------|
//! | FCFS | First-Come-First-Served | arrival time |
//! | SJF | Shortest Job First | burst time |
//! | SRTF | Shortest Remaining Time First | remaining burst |
//! | PRIORITY | Preemptive priority | priority value |
//!
//! # Score Convention
//! All rules return lower scores for candidates that should run first.

use super::{Candidate, DispatchingRule, RuleScore};

/// First-Come-First-Served.
///
/// Dispatches in arrival order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchingRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.arrival_time
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First.
///
/// Prioritizes candidates with the shortest total burst. Minimizes mean
/// waiting time among non-preemptive policies.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Like [`ShortestBurst`] but scores the burst still outstanding.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        candidate.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Priority rule.
///
/// Lower priority value = dispatched first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl DispatchingRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, candidate: &Candidate) -> RuleScore {
        i64::from(candidate.priority)
    }

    fn description(&self) -> &'static str {
        "Highest Priority First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;

    fn make_candidate(arrival: i64, burst: i64, priority: i32) -> Candidate {
        Candidate::from_process(0, &Process::new("P", arrival, burst).with_priority(priority))
    }

    #[test]
    fn test_fcfs() {
        let early = make_candidate(1, 9, 0);
        let late = make_candidate(4, 1, 0);
        assert!(Fcfs.evaluate(&early) < Fcfs.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = make_candidate(5, 2, 0);
        let long = make_candidate(0, 8, 0);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_shortest_remaining() {
        let mut started = make_candidate(0, 10, 0);
        started.remaining = 1;
        let fresh = make_candidate(0, 3, 0);
        assert!(ShortestRemaining.evaluate(&started) < ShortestRemaining.evaluate(&fresh));
        // SJF still ranks by original burst
        assert!(ShortestBurst.evaluate(&started) > ShortestBurst.evaluate(&fresh));
    }

    #[test]
    fn test_priority() {
        let high = make_candidate(0, 1, 1);
        let low = make_candidate(0, 1, 7);
        assert!(HighestPriority.evaluate(&high) < HighestPriority.evaluate(&low));
    }

    #[test]
    fn test_rule_metadata() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(ShortestRemaining.description(), "Shortest Remaining Time First");
    }
}
