//! Process model.
//!
//! A process is the unit of work submitted to the simulated processor.
//! It is immutable once built; the only state that changes during a run is
//! the remaining service time, tracked separately in [`ProcessRun`].
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimulationError};

/// A process to be scheduled.
///
/// Construct with [`Process::new`], which enforces:
/// - non-empty name
/// - `arrival_time >= 0`
/// - `service_time > 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcessFields")]
pub struct Process {
    name: String,
    arrival_time: i64,
    service_time: i64,
}

#[derive(Deserialize)]
struct ProcessFields {
    name: String,
    arrival_time: i64,
    service_time: i64,
}

impl TryFrom<ProcessFields> for Process {
    type Error = SimulationError;

    fn try_from(fields: ProcessFields) -> Result<Self> {
        Process::new(fields.name, fields.arrival_time, fields.service_time)
    }
}

impl Process {
    /// Creates a validated process.
    pub fn new(name: impl Into<String>, arrival_time: i64, service_time: i64) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimulationError::invalid("process name must not be empty"));
        }
        if arrival_time < 0 {
            return Err(SimulationError::invalid(format!(
                "process '{name}': arrival time must be >= 0, got {arrival_time}"
            )));
        }
        if service_time <= 0 {
            return Err(SimulationError::invalid(format!(
                "process '{name}': service time must be > 0, got {service_time}"
            )));
        }
        Ok(Self {
            name,
            arrival_time,
            service_time,
        })
    }

    /// Unique process identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instant the process becomes eligible to run.
    pub fn arrival_time(&self) -> i64 {
        self.arrival_time
    }

    /// Total processor time the process needs.
    pub fn service_time(&self) -> i64 {
        self.service_time
    }
}

/// Lifecycle of a process within one preemptive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// Arrival time not yet reached.
    Unarrived,
    /// Waiting for the processor.
    Ready,
    /// Currently holding the processor.
    Running,
    /// All service time consumed. Terminal.
    Finished,
}

/// Mutable per-run bookkeeping for one process.
///
/// Refers to its process by index into the slice being scheduled, so the
/// process itself is never copied or mutated.
#[derive(Debug, Clone)]
pub struct ProcessRun {
    /// Index into the scheduled process slice.
    pub index: usize,
    remaining_time: i64,
    state: ProcessState,
}

impl ProcessRun {
    /// Starts tracking `process` (found at `index`) in the `Unarrived` state.
    pub fn new(index: usize, process: &Process) -> Self {
        Self {
            index,
            remaining_time: process.service_time(),
            state: ProcessState::Unarrived,
        }
    }

    /// Service time not yet consumed.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Whether the process has consumed all of its service time.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    /// Unarrived → Ready.
    pub fn arrive(&mut self) -> bool {
        self.transition(ProcessState::Unarrived, ProcessState::Ready)
    }

    /// Ready → Running.
    pub fn dispatch(&mut self) -> bool {
        self.transition(ProcessState::Ready, ProcessState::Running)
    }

    /// Running → Ready.
    pub fn preempt(&mut self) -> bool {
        self.transition(ProcessState::Running, ProcessState::Ready)
    }

    /// Runs a `Running` process for up to `units` ticks.
    ///
    /// Returns the ticks actually consumed (never more than the remaining
    /// time). Moves to `Finished` when remaining time reaches zero.
    pub fn execute(&mut self, units: i64) -> i64 {
        if self.state != ProcessState::Running || units <= 0 {
            return 0;
        }
        let used = units.min(self.remaining_time);
        self.remaining_time -= used;
        if self.remaining_time == 0 {
            self.state = ProcessState::Finished;
        }
        used
    }

    fn transition(&mut self, from: ProcessState, to: ProcessState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}
