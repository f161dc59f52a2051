//! Shared simulation bookkeeping.
//!
//! [`TraceBuilder`] owns everything an algorithm mutates during a run:
//! the clock, a working copy of each process (remaining burst), first-start
//! and completion times, and the execution trace. The caller's records are
//! only borrowed to build the final summaries.

use tracing::{debug, trace};

use crate::dispatching::Candidate;
use crate::models::{ExecutionSlice, Process, ProcessSummary, ScheduleResult};

/// Clock, working copies and trace for one scheduling run.
#[derive(Debug)]
pub struct TraceBuilder<'a> {
    algorithm: &'static str,
    processes: &'a [Process],
    candidates: Vec<Candidate>,
    first_start: Vec<Option<i64>>,
    completion: Vec<Option<i64>>,
    slices: Vec<ExecutionSlice>,
    clock: i64,
    coalesce: bool,
}

impl<'a> TraceBuilder<'a> {
    /// Starts a run at t=0.
    pub fn new(algorithm: &'static str, processes: &'a [Process]) -> Self {
        Self {
            algorithm,
            processes,
            candidates: processes
                .iter()
                .enumerate()
                .map(|(i, p)| Candidate::from_process(i, p))
                .collect(),
            first_start: vec![None; processes.len()],
            completion: vec![None; processes.len()],
            slices: Vec::new(),
            clock: 0,
            coalesce: false,
        }
    }

    /// Merges back-to-back runs of the same process into one slice.
    pub fn coalescing(mut self) -> Self {
        self.coalesce = true;
        self
    }

    /// Current simulated time.
    #[inline]
    pub fn clock(&self) -> i64 {
        self.clock
    }

    /// Working copies, indexed like the input slice.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// CPU time still required by the process at `index`.
    #[inline]
    pub fn remaining(&self, index: usize) -> i64 {
        self.candidates[index].remaining
    }

    /// Processes that have arrived and still need CPU time.
    pub fn ready(&self) -> impl Iterator<Item = &Candidate> + '_ {
        let clock = self.clock;
        self.candidates.iter().filter(move |c| c.is_ready(clock))
    }

    /// Whether every process has been fully serviced.
    pub fn all_finished(&self) -> bool {
        self.candidates.iter().all(Candidate::is_finished)
    }

    /// Earliest arrival strictly after the current clock, among unfinished
    /// processes.
    pub fn next_arrival(&self) -> Option<i64> {
        self.candidates
            .iter()
            .filter(|c| !c.is_finished() && c.arrival_time > self.clock)
            .map(|c| c.arrival_time)
            .min()
    }

    /// Leaves the CPU idle until `time`.
    pub fn idle_until(&mut self, time: i64) {
        if time > self.clock {
            debug!(
                algorithm = self.algorithm,
                from = self.clock,
                to = time,
                "cpu idle"
            );
            self.clock = time;
        }
    }

    /// Runs the process at `index` for `duration` units from the current
    /// clock and advances the clock.
    ///
    /// Returns `true` if the process finished.
    pub fn run(&mut self, index: usize, duration: i64) -> bool {
        debug_assert!(duration >= 1);
        debug_assert!(duration <= self.candidates[index].remaining);

        let start = self.clock;
        let processes = self.processes;
        let process_id = &processes[index].id;
        self.first_start[index].get_or_insert(start);

        let merged = match self.slices.last_mut() {
            Some(last)
                if self.coalesce && last.process_id == *process_id && last.end_time() == start =>
            {
                last.duration += duration;
                true
            }
            _ => false,
        };
        if !merged {
            self.slices
                .push(ExecutionSlice::new(process_id.clone(), start, duration));
        }
        trace!(
            algorithm = self.algorithm,
            process = %process_id,
            start,
            duration,
            "slice"
        );

        self.clock += duration;
        let candidate = &mut self.candidates[index];
        candidate.remaining -= duration;
        if candidate.is_finished() {
            self.completion[index] = Some(self.clock);
            debug!(
                algorithm = self.algorithm,
                process = %process_id,
                completion = self.clock,
                "process finished"
            );
            true
        } else {
            false
        }
    }

    /// Builds the result: the trace plus one summary per finished process,
    /// in input order.
    pub fn finish(self) -> ScheduleResult {
        let summaries = self
            .processes
            .iter()
            .zip(self.first_start.iter().zip(&self.completion))
            .filter_map(|(p, (start, completion))| match (start, completion) {
                (Some(start), Some(completion)) => {
                    Some(ProcessSummary::from_times(p, *start, *completion))
                }
                _ => None,
            })
            .collect();

        ScheduleResult {
            algorithm: self.algorithm.to_string(),
            slices: self.slices,
            summaries,
        }
    }
}
