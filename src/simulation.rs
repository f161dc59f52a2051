//! Simulation entry point.
//!
//! [`SimulationConfig`] is the single explicit input of a run: the
//! algorithm, the process set and the algorithm parameters. Nothing is read
//! from ambient state. [`run`] validates, schedules and evaluates KPIs;
//! [`compare`] runs every algorithm on the same process set.
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::simulation::{run, Algorithm, SimulationConfig};
//!
//! let config = SimulationConfig::new(Algorithm::RoundRobin)
//!     .with_process(Process::new("P1", 0, 5))
//!     .with_process(Process::new("P2", 1, 3))
//!     .with_quantum(4);
//!
//! let report = run(&config).unwrap();
//! assert_eq!(report.result.summary_for("P1").unwrap().completion_time, 8);
//! assert!((report.kpi.mean_waiting_time - 3.0).abs() < 1e-10);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SchedulingError;
use crate::models::{Process, ScheduleResult};
use crate::scheduler::{
    CpuScheduler, Fcfs, PreemptivePriority, RoundRobin, ScheduleKpi, Sjf, Srtf, Stepping,
    DEFAULT_QUANTUM,
};

/// Selectable scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round Robin (uses the quantum).
    RoundRobin,
    /// Shortest Remaining Time First.
    Srtf,
    /// Preemptive priority.
    Priority,
}

impl Algorithm {
    /// All algorithms, in presentation order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::RoundRobin,
        Algorithm::Srtf,
        Algorithm::Priority,
    ];

    /// Whether the algorithm can interrupt a running process.
    pub fn is_preemptive(self) -> bool {
        matches!(
            self,
            Algorithm::RoundRobin | Algorithm::Srtf | Algorithm::Priority
        )
    }

    fn scheduler(self, quantum: i64, stepping: Stepping) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs),
            Algorithm::Sjf => Box::new(Sjf),
            Algorithm::RoundRobin => Box::new(RoundRobin::new(quantum)),
            Algorithm::Srtf => Box::new(Srtf::new(stepping)),
            Algorithm::Priority => Box::new(PreemptivePriority::new(stepping)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::Sjf => "sjf",
            Algorithm::RoundRobin => "round_robin",
            Algorithm::Srtf => "srtf",
            Algorithm::Priority => "priority",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = SchedulingError;

    /// Parses an algorithm name, case-insensitively. Accepts the snake_case
    /// names plus the common abbreviations ("rr", "psjf").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "rr" | "round_robin" | "round-robin" => Ok(Algorithm::RoundRobin),
            "srtf" | "psjf" => Ok(Algorithm::Srtf),
            "priority" => Ok(Algorithm::Priority),
            other => Err(SchedulingError::invalid_parameter(
                "algorithm",
                format!("unknown algorithm '{other}'"),
            )),
        }
    }
}

/// Complete input of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Algorithm to run.
    pub algorithm: Algorithm,
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Round Robin quantum. `None` = [`DEFAULT_QUANTUM`].
    #[serde(default)]
    pub quantum: Option<i64>,
    /// Time advancement for SRTF and priority.
    #[serde(default)]
    pub stepping: Stepping,
}

impl SimulationConfig {
    /// Creates a config with no processes.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            processes: Vec::new(),
            quantum: None,
            stepping: Stepping::default(),
        }
    }

    /// Adds a process.
    pub fn with_process(mut self, process: Process) -> Self {
        self.processes.push(process);
        self
    }

    /// Replaces the process set.
    pub fn with_processes(mut self, processes: Vec<Process>) -> Self {
        self.processes = processes;
        self
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Sets the stepping of the preemptive algorithms.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Quantum that will be used for Round Robin.
    pub fn effective_quantum(&self) -> i64 {
        self.quantum.unwrap_or(DEFAULT_QUANTUM)
    }
}

/// Output of one simulation run: the schedule plus its KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Trace and per-process timing table.
    pub result: ScheduleResult,
    /// Aggregate metrics.
    pub kpi: ScheduleKpi,
}

/// Runs the configured algorithm and evaluates its KPIs.
///
/// # Errors
/// - [`SchedulingError::InvalidInput`] for an invalid process set.
/// - [`SchedulingError::InvalidParameter`] for a quantum below 1.
pub fn run(config: &SimulationConfig) -> Result<SimulationReport, SchedulingError> {
    debug!(
        algorithm = %config.algorithm,
        processes = config.processes.len(),
        "starting simulation"
    );
    let scheduler = config
        .algorithm
        .scheduler(config.effective_quantum(), config.stepping);
    let result = scheduler.schedule(&config.processes)?;
    let kpi = ScheduleKpi::calculate(&result)?;
    Ok(SimulationReport { result, kpi })
}

/// Runs every algorithm on its own copy of `processes`.
///
/// Reports are in [`Algorithm::ALL`] order.
pub fn compare(
    processes: &[Process],
    quantum: i64,
) -> Result<Vec<(Algorithm, SimulationReport)>, SchedulingError> {
    Algorithm::ALL
        .iter()
        .map(|&algorithm| {
            let config = SimulationConfig::new(algorithm)
                .with_processes(processes.to_vec())
                .with_quantum(quantum);
            run(&config).map(|report| (algorithm, report))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn random_processes(rng: &mut SmallRng, count: usize) -> Vec<Process> {
        (0..count)
            .map(|i| {
                Process::new(
                    format!("P{}", i + 1),
                    rng.random_range(0..=15),
                    rng.random_range(1..=8),
                )
                .with_priority(rng.random_range(0..=4))
            })
            .collect()
    }

    fn check_invariants(processes: &[Process], result: &ScheduleResult) {
        let name = &result.algorithm;
        assert_eq!(result.summaries.len(), processes.len(), "{name}");

        for p in processes {
            let s = result.summary_for(&p.id).expect("summary present");
            let slices = result.slices_for(&p.id);
            let serviced: i64 = slices.iter().map(|sl| sl.duration).sum();
            assert_eq!(serviced, p.burst_time, "{name}: {}", p.id);
            assert!(slices.iter().all(|sl| sl.duration >= 1));
            assert!(slices.iter().all(|sl| sl.start_time >= p.arrival_time));

            assert_eq!(s.start_time, slices[0].start_time);
            assert_eq!(s.completion_time, slices[slices.len() - 1].end_time());
            assert_eq!(s.turnaround_time, s.completion_time - p.arrival_time);
            assert_eq!(s.waiting_time, s.turnaround_time - p.burst_time);
            assert!(s.waiting_time >= 0);
            assert!(s.turnaround_time >= p.burst_time);
        }

        for w in result.slices.windows(2) {
            assert!(w[0].end_time() <= w[1].start_time, "{name}: overlap");
        }
    }

    #[test]
    fn test_fcfs_scenario_metrics() {
        let config = SimulationConfig::new(Algorithm::Fcfs)
            .with_process(Process::new("P1", 0, 5))
            .with_process(Process::new("P2", 1, 3));

        let report = run(&config).unwrap();
        assert!((report.kpi.mean_waiting_time - 2.0).abs() < 1e-10);
        assert!((report.kpi.mean_turnaround_time - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_default_quantum_applied() {
        let config = SimulationConfig::new(Algorithm::RoundRobin)
            .with_process(Process::new("P1", 0, 9));
        assert_eq!(config.effective_quantum(), DEFAULT_QUANTUM);

        let report = run(&config).unwrap();
        let durations: Vec<i64> = report.result.slices.iter().map(|s| s.duration).collect();
        assert_eq!(durations, vec![4, 4, 1]);
    }

    #[test]
    fn test_invalid_quantum() {
        let config = SimulationConfig::new(Algorithm::RoundRobin)
            .with_process(Process::new("P1", 0, 1))
            .with_quantum(0);
        assert!(matches!(
            run(&config),
            Err(SchedulingError::InvalidParameter { .. })
        ));

        // Quantum is ignored by the other algorithms.
        let config = SimulationConfig {
            algorithm: Algorithm::Fcfs,
            ..config
        };
        assert!(run(&config).is_ok());
    }

    #[test]
    fn test_empty_config_rejected() {
        let err = run(&SimulationConfig::new(Algorithm::Sjf)).unwrap_err();
        assert!(matches!(err, SchedulingError::InvalidInput(_)));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "algorithm": "round_robin",
            "processes": [
                {"id": "P1", "arrival_time": 0, "burst_time": 5},
                {"id": "P2", "arrival_time": 1, "burst_time": 3, "priority": 2}
            ],
            "quantum": 2
        }"#;
        let config: SimulationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.algorithm, Algorithm::RoundRobin);
        assert_eq!(config.quantum, Some(2));
        assert_eq!(config.stepping, Stepping::EventDriven);
        assert_eq!(config.processes[1].priority, Some(2));

        let report = run(&config).unwrap();
        let back: SimulationReport =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(back.result, report.result);
    }

    #[test]
    fn test_algorithm_parse() {
        assert_eq!("RR".parse::<Algorithm>().unwrap(), Algorithm::RoundRobin);
        assert_eq!(" Fcfs ".parse::<Algorithm>().unwrap(), Algorithm::Fcfs);
        assert_eq!("psjf".parse::<Algorithm>().unwrap(), Algorithm::Srtf);
        assert!("lottery".parse::<Algorithm>().is_err());
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert!(!Algorithm::Sjf.is_preemptive());
        assert!(Algorithm::Srtf.is_preemptive());
    }

    #[test]
    fn test_compare_runs_all() {
        let processes = vec![
            Process::new("P1", 0, 7).with_priority(2),
            Process::new("P2", 2, 4).with_priority(1),
        ];
        let reports = compare(&processes, 4).unwrap();
        assert_eq!(reports.len(), 5);
        let algorithms: Vec<Algorithm> = reports.iter().map(|(a, _)| *a).collect();
        assert_eq!(algorithms, Algorithm::ALL.to_vec());

        let srtf = &reports[3].1.result;
        assert_eq!(srtf.summary_for("P1").unwrap().completion_time, 11);
        assert_eq!(srtf.summary_for("P2").unwrap().completion_time, 6);
    }

    #[test]
    fn test_random_workload_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);
        for round in 0..50 {
            let processes = random_processes(&mut rng, 1 + round % 9);
            for algorithm in Algorithm::ALL {
                let config = SimulationConfig::new(algorithm)
                    .with_processes(processes.clone())
                    .with_quantum(1 + (round as i64) % 4);
                let report = run(&config).unwrap();
                check_invariants(&processes, &report.result);

                if !algorithm.is_preemptive() {
                    // One uninterrupted slice per process.
                    assert_eq!(report.result.slices.len(), processes.len());
                }
            }
        }
    }

    #[test]
    fn test_idempotent_runs() {
        let mut rng = SmallRng::seed_from_u64(7);
        let processes = random_processes(&mut rng, 12);
        for algorithm in Algorithm::ALL {
            let config = SimulationConfig::new(algorithm).with_processes(processes.clone());
            assert_eq!(run(&config).unwrap(), run(&config).unwrap());
        }
    }

    #[test]
    fn test_event_driven_matches_unit_step() {
        let mut rng = SmallRng::seed_from_u64(1234);
        for _ in 0..40 {
            let processes = random_processes(&mut rng, 10);
            for algorithm in [Algorithm::Srtf, Algorithm::Priority] {
                let config = SimulationConfig::new(algorithm).with_processes(processes.clone());
                let event = run(&config).unwrap();
                let unit = run(&config.clone().with_stepping(Stepping::UnitStep)).unwrap();
                assert_eq!(event, unit);
            }
        }
    }
}
