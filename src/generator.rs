//! Random workload generation.
//!
//! Produces process sets with uniformly drawn arrival, burst and priority
//! values. Deterministic for a seeded RNG, so generated workloads can be
//! replayed.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::generator::WorkloadGenerator;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let processes = WorkloadGenerator::default().generate(5, &mut rng)?;
//! assert_eq!(processes.len(), 5);
//! assert_eq!(processes[0].id, "P1");
//! # Ok::<(), cpu_schedule::SchedulingError>(())
//! ```

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;
use crate::models::Process;

/// Value ranges for generated processes.
///
/// Defaults: arrival 0..=10, burst 1..=10, priority 1..=10.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Arrival time range.
    pub arrival: RangeInclusive<i64>,
    /// Burst time range.
    pub burst: RangeInclusive<i64>,
    /// Priority range. `None` = generated processes carry no priority.
    pub priority: Option<RangeInclusive<i32>>,
    /// Prefix for generated ids (`{prefix}{n}`, n starting at 1).
    pub id_prefix: String,
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self {
            arrival: 0..=10,
            burst: 1..=10,
            priority: Some(1..=10),
            id_prefix: "P".to_string(),
        }
    }
}

impl WorkloadGenerator {
    /// Sets the arrival time range.
    pub fn with_arrival(mut self, arrival: RangeInclusive<i64>) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst(mut self, burst: RangeInclusive<i64>) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Generated processes carry no priority.
    pub fn without_priority(mut self) -> Self {
        self.priority = None;
        self
    }

    /// Sets the id prefix.
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Checks that every range is non-empty and yields valid processes.
    pub fn check(&self) -> Result<(), SchedulingError> {
        if self.arrival.is_empty() || *self.arrival.start() < 0 {
            return Err(SchedulingError::invalid_parameter(
                "arrival",
                format!("range {:?} must be non-empty and >= 0", self.arrival),
            ));
        }
        if self.burst.is_empty() || *self.burst.start() < 1 {
            return Err(SchedulingError::invalid_parameter(
                "burst",
                format!("range {:?} must be non-empty and >= 1", self.burst),
            ));
        }
        if let Some(priority) = &self.priority {
            if priority.is_empty() {
                return Err(SchedulingError::invalid_parameter(
                    "priority",
                    format!("range {priority:?} must be non-empty"),
                ));
            }
        }
        Ok(())
    }

    /// Generates `count` processes.
    ///
    /// # Errors
    /// [`SchedulingError::InvalidParameter`] if [`check`](Self::check) fails.
    pub fn generate<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Process>, SchedulingError> {
        self.check()?;
        let processes: Vec<Process> = (1..=count)
            .map(|n| {
                let process = Process::new(
                    format!("{}{n}", self.id_prefix),
                    rng.random_range(self.arrival.clone()),
                    rng.random_range(self.burst.clone()),
                );
                match &self.priority {
                    Some(range) => process.with_priority(rng.random_range(range.clone())),
                    None => process,
                }
            })
            .collect();
        Ok(processes)
    }
}
