//! CPU scheduling algorithms and KPI evaluation.
//!
//! # Algorithms
//!
//! | Scheduler | Preemptive | Selection |
//! |-----------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst |
//! | [`RoundRobin`] | quantum expiry | FIFO queue |
//! | [`Srtf`] | on arrival | shortest remaining burst |
//! | [`PreemptivePriority`] | on arrival | lowest priority value |
//!
//! Ties are broken by earliest arrival, then input order. Every run works
//! on its own copy of the process state and returns a fresh
//! [`ScheduleResult`](crate::models::ScheduleResult).
//!
//! # KPI
//!
//! [`ScheduleKpi`] derives mean waiting/turnaround times and related
//! metrics from a result.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;
mod preemptive;
mod priority;
mod round_robin;
mod sjf;
mod srtf;
mod trace;

pub use fcfs::Fcfs;
pub use kpi::ScheduleKpi;
pub use preemptive::Stepping;
pub use priority::PreemptivePriority;
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};
pub use sjf::Sjf;
pub use srtf::Srtf;
pub use trace::TraceBuilder;

use tracing::{info, warn};

use crate::error::SchedulingError;
use crate::models::{Process, ScheduleResult};
use crate::validation::validate_processes;

/// A CPU scheduling algorithm.
///
/// Implementors provide [`simulate`](Self::simulate); callers normally use
/// [`schedule`](Self::schedule), which validates first.
pub trait CpuScheduler {
    /// Short algorithm name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Checks algorithm parameters.
    fn check_parameters(&self) -> Result<(), SchedulingError> {
        Ok(())
    }

    /// Runs the simulation without validating the input.
    ///
    /// For input accepted by
    /// [`validate_processes`](crate::validation::validate_processes) this
    /// produces exactly one summary per process; an empty slice yields an
    /// empty result. Otherwise the output is unspecified: a process with a
    /// non-positive burst never runs and gets no summary, and duplicate ids
    /// make `summary_for` ambiguous. Prefer [`schedule`](Self::schedule).
    fn simulate(&self, processes: &[Process]) -> ScheduleResult;

    /// Validates the input and parameters, then runs the simulation.
    ///
    /// # Errors
    /// - [`SchedulingError::InvalidInput`] if the process set fails validation.
    /// - [`SchedulingError::InvalidParameter`] if a parameter is out of range.
    fn schedule(&self, processes: &[Process]) -> Result<ScheduleResult, SchedulingError> {
        if let Err(errors) = validate_processes(processes) {
            warn!(
                algorithm = self.name(),
                errors = errors.len(),
                "rejected process set"
            );
            return Err(SchedulingError::InvalidInput(errors));
        }
        self.check_parameters()?;

        let result = self.simulate(processes);
        info!(
            algorithm = self.name(),
            processes = processes.len(),
            slices = result.slices.len(),
            makespan = result.makespan(),
            "simulation complete"
        );
        Ok(result)
    }
}
