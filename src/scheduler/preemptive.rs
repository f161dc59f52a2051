//! Preemptive dispatch loop shared by SRTF and preemptive priority.
//!
//! At every decision point the best ready process (by the rule, then
//! earliest arrival, then input order) gets the CPU. Consecutive spans of
//! the same process are coalesced into one slice.
//!
//! # Stepping
//! - [`Stepping::UnitStep`] re-selects after every time unit and advances
//!   idle time one unit at a time. Reference behaviour.
//! - [`Stepping::EventDriven`] runs the selected process until the next
//!   arrival or its completion, and jumps idle time to the next arrival.
//!
//! Both produce identical results for the built-in rules: between arrivals
//! the running process stays the best candidate, since its own score can
//! only drop (SRTF) or stay fixed (priority) while the others' are fixed.

use serde::{Deserialize, Serialize};

use crate::dispatching::{select_best, DispatchingRule};
use crate::models::{Process, ScheduleResult};

use super::TraceBuilder;

/// How simulated time advances in the preemptive algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stepping {
    /// Jump to the next arrival or completion.
    #[default]
    EventDriven,
    /// Advance one time unit per decision.
    UnitStep,
}

/// Runs a preemptive simulation of `processes` under `rule`.
pub(crate) fn simulate_preemptive<R: DispatchingRule + ?Sized>(
    algorithm: &'static str,
    rule: &R,
    processes: &[Process],
    stepping: Stepping,
) -> ScheduleResult {
    let mut trace = TraceBuilder::new(algorithm, processes).coalescing();

    while !trace.all_finished() {
        let Some(index) = select_best(rule, trace.ready()) else {
            match stepping {
                Stepping::UnitStep => trace.idle_until(trace.clock() + 1),
                Stepping::EventDriven => match trace.next_arrival() {
                    Some(arrival) => trace.idle_until(arrival),
                    None => break,
                },
            }
            continue;
        };

        let span = match stepping {
            Stepping::UnitStep => 1,
            Stepping::EventDriven => {
                let remaining = trace.remaining(index);
                trace
                    .next_arrival()
                    .map_or(remaining, |arrival| remaining.min(arrival - trace.clock()))
            }
        };
        trace.run(index, span);
    }

    trace.finish()
}
