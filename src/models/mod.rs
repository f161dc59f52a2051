//! CPU scheduling domain models.
//!
//! Provides the input and output types shared by every algorithm.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input: one schedulable unit (arrival, burst, priority) |
//! | `ExecutionSlice` | Output: one uninterrupted CPU span (Gantt bar) |
//! | `ProcessSummary` | Output: timing table row for one process |
//! | `ScheduleResult` | Output: trace + summaries of one run |

mod process;
mod schedule;

pub use process::{Process, DEFAULT_PRIORITY};
pub use schedule::{ExecutionSlice, IdleGap, ProcessSummary, ScheduleResult};
