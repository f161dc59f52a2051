//! Preemptive priority scheduling.
//!
//! The ready process with the lowest priority value holds the CPU and is
//! preempted when a process with a strictly lower value arrives. Processes
//! without a priority use [`DEFAULT_PRIORITY`](crate::models::DEFAULT_PRIORITY).

use crate::dispatching::rules;
use crate::models::{Process, ScheduleResult};

use super::preemptive::{simulate_preemptive, Stepping};
use super::CpuScheduler;

/// Preemptive priority scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority {
    /// Time advancement strategy.
    pub stepping: Stepping,
}

impl PreemptivePriority {
    /// Creates a priority scheduler with the given stepping.
    pub fn new(stepping: Stepping) -> Self {
        Self { stepping }
    }
}

impl CpuScheduler for PreemptivePriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn simulate(&self, processes: &[Process]) -> ScheduleResult {
        simulate_preemptive(
            self.name(),
            &rules::HighestPriority,
            processes,
            self.stepping,
        )
    }
}
