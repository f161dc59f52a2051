//! Schedule quality metrics (KPIs).
//!
//! Computes aggregate performance indicators from a completed
//! [`ScheduleResult`].
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Mean Waiting Time | mean(turnaround - burst) |
//! | Mean Turnaround Time | mean(completion - arrival) |
//! | Mean Response Time | mean(first start - arrival) |
//! | Makespan | Latest slice end |
//! | CPU Utilization | busy time / makespan |
//! | Throughput | processes completed / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::error::SchedulingError;
use crate::models::ScheduleResult;

/// Aggregate indicators for one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Mean time processes spent ready but not running.
    pub mean_waiting_time: f64,
    /// Mean time from arrival to completion.
    pub mean_turnaround_time: f64,
    /// Mean time from arrival to first dispatch.
    pub mean_response_time: f64,
    /// Latest completion time.
    pub makespan: i64,
    /// Fraction of [0, makespan) the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule result.
    ///
    /// # Errors
    /// [`SchedulingError::EmptyResult`] when the result has no summaries.
    pub fn calculate(result: &ScheduleResult) -> Result<Self, SchedulingError> {
        if result.summaries.is_empty() {
            return Err(SchedulingError::EmptyResult);
        }

        let count = result.summaries.len() as f64;
        // Per-process times are bounded by the validated horizon; their sum
        // across processes is not.
        let (waiting, turnaround, response) =
            result
                .summaries
                .iter()
                .fold((0i128, 0i128, 0i128), |(w, t, r), s| {
                    (
                        w + i128::from(s.waiting_time),
                        t + i128::from(s.turnaround_time),
                        r + i128::from(s.response_time()),
                    )
                });

        let makespan = result.makespan();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                result.busy_time() as f64 / makespan as f64,
                count / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(Self {
            mean_waiting_time: waiting as f64 / count,
            mean_turnaround_time: turnaround as f64 / count,
            mean_response_time: response as f64 / count,
            makespan,
            cpu_utilization,
            throughput,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionSlice, Process, ProcessSummary};

    fn make_result(entries: &[(&str, i64, i64, i64, i64)]) -> ScheduleResult {
        // (id, arrival, burst, start, completion), one slice each
        let mut result = ScheduleResult::new("TEST");
        for &(id, arrival, burst, start, completion) in entries {
            let p = Process::new(id, arrival, burst);
            result
                .slices
                .push(ExecutionSlice::new(id, start, completion - start));
            result
                .summaries
                .push(ProcessSummary::from_times(&p, start, completion));
        }
        result
    }

    #[test]
    fn test_kpi_basic() {
        let result = make_result(&[("P1", 0, 5, 0, 5), ("P2", 1, 3, 5, 8)]);

        let kpi = ScheduleKpi::calculate(&result).unwrap();
        assert!((kpi.mean_waiting_time - 2.0).abs() < 1e-10);
        assert!((kpi.mean_turnaround_time - 6.0).abs() < 1e-10);
        assert!((kpi.mean_response_time - 2.0).abs() < 1e-10); // (0 + 4) / 2
        assert_eq!(kpi.makespan, 8);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_utilization_with_idle() {
        // P1 runs 0-2, CPU idle 2-6, P2 runs 6-8
        let result = make_result(&[("P1", 0, 2, 0, 2), ("P2", 6, 2, 6, 8)]);

        let kpi = ScheduleKpi::calculate(&result).unwrap();
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.mean_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_large_times_do_not_overflow() {
        // Two turnarounds near i64::MAX / 2 each; their sum exceeds i64.
        let half = i64::MAX / 2;
        let result = make_result(&[("P1", 0, half, 0, half), ("P2", 0, 2, half, half + 2)]);

        let kpi = ScheduleKpi::calculate(&result).unwrap();
        let expected = (half as f64 + (half + 2) as f64) / 2.0;
        assert!((kpi.mean_turnaround_time - expected).abs() / expected < 1e-12);
        assert_eq!(kpi.makespan, half + 2);
    }

    #[test]
    fn test_kpi_empty() {
        let err = ScheduleKpi::calculate(&ScheduleResult::new("TEST")).unwrap_err();
        assert_eq!(err, SchedulingError::EmptyResult);
    }
}
