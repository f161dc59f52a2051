//! Shortest Remaining Time First (preemptive SJF).
//!
//! The ready process with the least remaining burst holds the CPU and is
//! preempted as soon as a process with strictly less remaining work arrives.

use crate::dispatching::rules;
use crate::models::{Process, ScheduleResult};

use super::preemptive::{simulate_preemptive, Stepping};
use super::CpuScheduler;

/// Preemptive SJF scheduler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf {
    /// Time advancement strategy.
    pub stepping: Stepping,
}

impl Srtf {
    /// Creates an SRTF scheduler with the given stepping.
    pub fn new(stepping: Stepping) -> Self {
        Self { stepping }
    }
}

impl CpuScheduler for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn simulate(&self, processes: &[Process]) -> ScheduleResult {
        simulate_preemptive(
            self.name(),
            &rules::ShortestRemaining,
            processes,
            self.stepping,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSlice;

    #[test]
    fn test_srtf_preemption() {
        let processes = vec![Process::new("P1", 0, 7), Process::new("P2", 2, 4)];

        for stepping in [Stepping::EventDriven, Stepping::UnitStep] {
            let result = Srtf::new(stepping).schedule(&processes).unwrap();
            assert_eq!(
                result.slices,
                vec![
                    ExecutionSlice::new("P1", 0, 2),
                    ExecutionSlice::new("P2", 2, 4),
                    ExecutionSlice::new("P1", 6, 5),
                ]
            );
            assert_eq!(result.summary_for("P1").unwrap().completion_time, 11);
            assert_eq!(result.summary_for("P2").unwrap().completion_time, 6);
            assert_eq!(result.summary_for("P1").unwrap().start_time, 0);
        }
    }

    #[test]
    fn test_srtf_equal_remaining_does_not_preempt() {
        // At t=2 P1 has 3 left and P2 needs 3: earlier arrival keeps the CPU.
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 2, 3)];
        let result = Srtf::default().schedule(&processes).unwrap();

        assert_eq!(
            result.slices,
            vec![
                ExecutionSlice::new("P1", 0, 5),
                ExecutionSlice::new("P2", 5, 3),
            ]
        );
    }

    #[test]
    fn test_srtf_classic_workload() {
        let processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 9),
            Process::new("P4", 3, 5),
        ];
        let result = Srtf::default().schedule(&processes).unwrap();

        let completions: Vec<i64> = result
            .summaries
            .iter()
            .map(|s| s.completion_time)
            .collect();
        assert_eq!(completions, vec![17, 5, 26, 10]);
        let total_wait: i64 = result.summaries.iter().map(|s| s.waiting_time).sum();
        assert_eq!(total_wait, 26);
    }
}
