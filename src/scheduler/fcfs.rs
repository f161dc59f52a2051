//! First-Come-First-Served.
//!
//! Processes run to completion in arrival order; ties keep input order.
//! Gaps between a completion and the next arrival are left implicit in the
//! trace (see [`ScheduleResult::idle_gaps`]).

use crate::dispatching::{rules, sort_indices};
use crate::models::{Process, ScheduleResult};

use super::{CpuScheduler, TraceBuilder};

/// Non-preemptive FCFS scheduler.
///
/// # Example
///
/// ```
/// use cpu_schedule::models::Process;
/// use cpu_schedule::scheduler::{CpuScheduler, Fcfs};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = Fcfs.schedule(&processes).unwrap();
/// assert_eq!(result.summary_for("P2").unwrap().waiting_time, 4);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl CpuScheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> ScheduleResult {
        let mut trace = TraceBuilder::new(self.name(), processes);
        let order = sort_indices(&rules::Fcfs, trace.candidates());

        for index in order {
            let candidate = &trace.candidates()[index];
            let (arrival, burst) = (candidate.arrival_time, candidate.remaining);
            trace.idle_until(arrival);
            trace.run(index, burst);
        }

        trace.finish()
    }
}
