//! Working-copy view of a process during simulation.

use crate::models::Process;

/// Runtime state of one process, as seen by dispatching rules.
///
/// Built from an input [`Process`] at the start of a run; `remaining` is
/// the only field the schedulers change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Position in the caller's input slice (final tie-breaker).
    pub index: usize,
    /// Arrival time.
    pub arrival_time: i64,
    /// Original burst time.
    pub burst_time: i64,
    /// CPU time still required.
    pub remaining: i64,
    /// Effective priority (lower = more important).
    pub priority: i32,
}

impl Candidate {
    /// Creates a fresh candidate for the process at `index`.
    pub fn from_process(index: usize, process: &Process) -> Self {
        Self {
            index,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            remaining: process.burst_time,
            priority: process.effective_priority(),
        }
    }

    /// Whether the candidate has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Whether all burst has been serviced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the candidate is eligible to run at `time`.
    #[inline]
    pub fn is_ready(&self, time: i64) -> bool {
        self.has_arrived(time) && !self.is_finished()
    }
}
