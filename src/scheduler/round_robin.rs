//! Round Robin.
//!
//! FIFO ready queue; each dispatch runs for at most `quantum` units.
//!
//! # Re-admission order
//! When a process exhausts its quantum at time `t`, every process that has
//! arrived by `t` and was not yet queued is appended first, and only then
//! the preempted process. A process is admitted exactly once, at the first
//! clock value where it has arrived; admissions at the same clock follow
//! arrival order, then input order.

use std::collections::VecDeque;

use tracing::debug;

use crate::dispatching::{rules, sort_indices};
use crate::error::SchedulingError;
use crate::models::{Process, ScheduleResult};

use super::{CpuScheduler, TraceBuilder};

/// Quantum used when none is configured.
pub const DEFAULT_QUANTUM: i64 = 4;

/// Round Robin scheduler.
///
/// Every dispatch emits its own slice, so a process that keeps the CPU for
/// several consecutive quanta appears as several adjacent slices.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    /// Maximum contiguous time granted per turn (>= 1).
    pub quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler with the given quantum.
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(DEFAULT_QUANTUM)
    }
}

/// Moves every not-yet-admitted process that has arrived by `clock` to the
/// back of the queue. `order` is in arrival order; `cursor` marks the first
/// process not yet admitted.
fn admit_arrivals(
    trace: &TraceBuilder<'_>,
    order: &[usize],
    cursor: &mut usize,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&index) = order.get(*cursor) {
        if !trace.candidates()[index].has_arrived(trace.clock()) {
            break;
        }
        queue.push_back(index);
        *cursor += 1;
    }
}

impl CpuScheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn check_parameters(&self) -> Result<(), SchedulingError> {
        if self.quantum < 1 {
            return Err(SchedulingError::invalid_parameter(
                "quantum",
                format!("must be >= 1, got {}", self.quantum),
            ));
        }
        Ok(())
    }

    fn simulate(&self, processes: &[Process]) -> ScheduleResult {
        let mut trace = TraceBuilder::new(self.name(), processes);
        let order = sort_indices(&rules::Fcfs, trace.candidates());
        let mut cursor = 0;
        let mut queue = VecDeque::with_capacity(processes.len());

        loop {
            admit_arrivals(&trace, &order, &mut cursor, &mut queue);

            let Some(index) = queue.pop_front() else {
                match order.get(cursor) {
                    Some(&next) => {
                        let arrival = trace.candidates()[next].arrival_time;
                        trace.idle_until(arrival);
                        continue;
                    }
                    None => break,
                }
            };

            let slice = self.quantum.min(trace.remaining(index));
            let finished = trace.run(index, slice);

            // New arrivals enqueue ahead of the preempted process.
            admit_arrivals(&trace, &order, &mut cursor, &mut queue);
            if !finished {
                debug!(
                    process = %processes[index].id,
                    remaining = trace.remaining(index),
                    clock = trace.clock(),
                    "quantum expired"
                );
                queue.push_back(index);
            }
        }

        trace.finish()
    }
}
