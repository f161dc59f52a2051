//! Schedule result model.
//!
//! A schedule result is the complete output of one algorithm run: the
//! chronological execution trace (Gantt sequence) and one summary per
//! input process.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::Process;

/// Output of one scheduling run.
///
/// `slices` are in chronological order and never overlap. `summaries`
/// holds exactly one entry per input process, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Name of the algorithm that produced this result (e.g., "RR").
    pub algorithm: String,
    /// Execution trace: uninterrupted CPU spans, in time order.
    pub slices: Vec<ExecutionSlice>,
    /// Per-process timing table, in input order.
    pub summaries: Vec<ProcessSummary>,
}

/// One uninterrupted span where a single process occupies the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process occupying the CPU.
    pub process_id: String,
    /// First time unit of the span.
    pub start_time: i64,
    /// Length of the span (>= 1).
    pub duration: i64,
}

/// Timing table row for one fully serviced process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Process identifier.
    pub process_id: String,
    /// Arrival time copied from the input record.
    pub arrival_time: i64,
    /// Burst time copied from the input record.
    pub burst_time: i64,
    /// First time the process ran.
    pub start_time: i64,
    /// Time the last unit of burst finished.
    pub completion_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
}

/// A span where the CPU had nothing to run.
///
/// Not part of the trace; derived on demand for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// Gap start.
    pub start_time: i64,
    /// Gap end (exclusive).
    pub end_time: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(process_id: impl Into<String>, start_time: i64, duration: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            duration,
        }
    }

    /// Exclusive end of the span.
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }
}

impl ProcessSummary {
    /// Builds a summary from the observed start and completion times,
    /// deriving turnaround and waiting time.
    pub fn from_times(process: &Process, start_time: i64, completion_time: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            waiting_time: turnaround_time - process.burst_time,
            turnaround_time,
        }
    }

    /// Time between arrival and first dispatch.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

impl ScheduleResult {
    /// Creates an empty result for the named algorithm.
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    /// Whether the result holds no summaries.
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Finds the summary for a process.
    pub fn summary_for(&self, process_id: &str) -> Option<&ProcessSummary> {
        self.summaries.iter().find(|s| s.process_id == process_id)
    }

    /// Returns all slices for a process, in time order.
    pub fn slices_for(&self, process_id: &str) -> Vec<&ExecutionSlice> {
        self.slices
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Latest end time across all slices.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(|s| s.end_time()).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// Spans between t=0 and the makespan during which no process ran.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut cursor = 0;
        for slice in &self.slices {
            if slice.start_time > cursor {
                gaps.push(IdleGap {
                    start_time: cursor,
                    end_time: slice.start_time,
                });
            }
            cursor = cursor.max(slice.end_time());
        }
        gaps
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ScheduleResult {
        let p1 = Process::new("P1", 0, 5);
        let p2 = Process::new("P2", 1, 3);
        ScheduleResult {
            algorithm: "RR".into(),
            slices: vec![
                ExecutionSlice::new("P1", 0, 4),
                ExecutionSlice::new("P2", 4, 3),
                ExecutionSlice::new("P1", 7, 1),
            ],
            summaries: vec![
                ProcessSummary::from_times(&p1, 0, 8),
                ProcessSummary::from_times(&p2, 4, 7),
            ],
        }
    }

    #[test]
    fn test_summary_from_times() {
        let p = Process::new("P2", 1, 3);
        let s = ProcessSummary::from_times(&p, 5, 8);
        assert_eq!(s.turnaround_time, 7);
        assert_eq!(s.waiting_time, 4);
        assert_eq!(s.response_time(), 4);
    }

    #[test]
    fn test_slice_end_time() {
        assert_eq!(ExecutionSlice::new("P1", 3, 4).end_time(), 7);
    }

    #[test]
    fn test_lookup() {
        let r = sample_result();
        assert_eq!(r.summary_for("P1").unwrap().completion_time, 8);
        assert!(r.summary_for("P9").is_none());
        assert_eq!(r.slices_for("P1").len(), 2);
        assert!(r.slices_for("P9").is_empty());
    }

    #[test]
    fn test_makespan_and_busy_time() {
        let r = sample_result();
        assert_eq!(r.makespan(), 8);
        assert_eq!(r.busy_time(), 8);
        assert_eq!(r.context_switches(), 2);
    }

    #[test]
    fn test_idle_gaps() {
        let r = ScheduleResult {
            algorithm: "FCFS".into(),
            slices: vec![
                ExecutionSlice::new("P1", 2, 3),
                ExecutionSlice::new("P2", 5, 1),
                ExecutionSlice::new("P3", 9, 2),
            ],
            summaries: Vec::new(),
        };
        assert_eq!(
            r.idle_gaps(),
            vec![
                IdleGap {
                    start_time: 0,
                    end_time: 2
                },
                IdleGap {
                    start_time: 6,
                    end_time: 9
                },
            ]
        );
    }

    #[test]
    fn test_empty_result() {
        let r = ScheduleResult::new("FCFS");
        assert!(r.is_empty());
        assert_eq!(r.makespan(), 0);
        assert!(r.idle_gaps().is_empty());
        assert_eq!(r.context_switches(), 0);
    }
}
