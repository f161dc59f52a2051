//! Classical CPU scheduling simulation.
//!
//! Simulates single-CPU scheduling of a fixed process set and produces,
//! for each run, a per-process timing table and a chronological execution
//! trace (Gantt sequence).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ExecutionSlice`,
//!   `ProcessSummary`, `ScheduleResult`
//! - **`dispatching`**: Selection rules (FCFS, SJF, SRTF, priority) and the
//!   shared tie-breaking chain
//! - **`scheduler`**: The five algorithms and `ScheduleKpi`
//! - **`simulation`**: Explicit run configuration, single runs and
//!   side-by-side comparison
//! - **`generator`**: Seeded random workloads
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times)
//!
//! # Determinism
//!
//! Every run is a pure function of its configuration: no global state, no
//! mutation of the caller's processes, and a total tie-breaking order.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod simulation;
pub mod validation;

pub use error::SchedulingError;
