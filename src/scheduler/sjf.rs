//! Shortest Job First (non-preemptive).
//!
//! Whenever the CPU becomes free, the ready process with the smallest burst
//! runs to completion. Ties: earliest arrival, then input order. When
//! nothing is ready the clock jumps to the next arrival.

use tracing::debug;

use crate::dispatching::{rules, select_best};
use crate::models::{Process, ScheduleResult};

use super::{CpuScheduler, TraceBuilder};

/// Non-preemptive SJF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl CpuScheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, processes: &[Process]) -> ScheduleResult {
        let mut trace = TraceBuilder::new(self.name(), processes);

        while !trace.all_finished() {
            match select_best(&rules::ShortestBurst, trace.ready()) {
                Some(index) => {
                    debug!(
                        process = %processes[index].id,
                        clock = trace.clock(),
                        "sjf dispatch"
                    );
                    let burst = trace.remaining(index);
                    trace.run(index, burst);
                }
                None => match trace.next_arrival() {
                    Some(arrival) => trace.idle_until(arrival),
                    None => break,
                },
            }
        }

        trace.finish()
    }
}
