//! Process (schedulable unit) model.
//!
//! A process is the input description of one unit of CPU work: when it
//! becomes eligible, how much CPU time it needs, and an optional priority.
//! Records are never mutated by the schedulers; every algorithm works on
//! its own internal copy of the remaining burst.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

/// Priority assumed when a process carries none.
pub const DEFAULT_PRIORITY: i32 = 0;

/// A process to be scheduled.
///
/// Times are signed so that malformed input (negative arrivals, zero or
/// negative bursts) can be represented and rejected by
/// [`validate_processes`](crate::validation::validate_processes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier. Opaque to the schedulers.
    pub id: String,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Scheduling priority (lower value = more important). `None` = default.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a new process without a priority.
    pub fn new(id: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for dispatching, falling back to [`DEFAULT_PRIORITY`].
    #[inline]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
