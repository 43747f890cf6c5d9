//! Simulation driver.
//!
//! Turns raw form text into a validated [`SimulationRequest`], runs the
//! selected policy and hands back the [`Timeline`].
//!
//! # Row rules
//! 1. At most `max_rows` raw rows.
//! 2. A row whose name is blank is skipped; it is the only optional row.
//! 3. Every other row must have integer arrival and service fields that
//!    satisfy the [`Process`] contract.
//! 4. At least one row must remain.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::SimulatorConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Process, Timeline};
use crate::policy::{self, Algorithm};
use crate::validation::{validate_processes, validate_timeline};

/// One unparsed process row, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Process name; blank means "row not used".
    pub name: String,
    /// Arrival time text.
    pub arrival: String,
    /// Service time text.
    pub service: String,
}

impl RawRow {
    /// Creates a raw row.
    pub fn new(
        name: impl Into<String>,
        arrival: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arrival: arrival.into(),
            service: service.into(),
        }
    }

    /// Whether the row is left unused.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Everything the presentation layer collected for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// Process rows in form order.
    pub rows: Vec<RawRow>,
    /// Policy identifier (e.g., "FCFS", "RoundRobin").
    pub policy: String,
    /// Round Robin quantum text.
    pub quantum: Option<String>,
}

impl SimulationInput {
    /// Creates an input for `policy` with no rows.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            policy: policy.into(),
            quantum: None,
        }
    }

    /// Adds a row.
    pub fn with_row(mut self, row: RawRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Sets the quantum text.
    pub fn with_quantum(mut self, quantum: impl Into<String>) -> Self {
        self.quantum = Some(quantum.into());
        self
    }
}

/// A validated, ready-to-run simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRequest {
    /// Processes in input order.
    pub processes: Vec<Process>,
    /// Selected policy.
    pub algorithm: Algorithm,
    /// Time quantum (Round Robin only).
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request without a quantum.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
            quantum: None,
        }
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Runs the selected policy.
    pub fn run(&self) -> Result<Timeline> {
        let timeline = policy::schedule(self.algorithm, &self.processes, self.quantum)?;
        debug_assert!(
            validate_timeline(&timeline, &self.processes).is_ok(),
            "policy {} produced an inconsistent timeline",
            self.algorithm
        );
        Ok(timeline)
    }
}

/// Validates raw input and runs simulations.
///
/// Holds only immutable configuration, so one instance can serve any
/// number of independent requests.
///
/// # Example
///
/// ```
/// use cpu_schedule::simulation::{RawRow, SimulationInput, Simulator};
///
/// let input = SimulationInput::new("SJN")
///     .with_row(RawRow::new("A", "0", "5"))
///     .with_row(RawRow::new("B", "0", "2"));
///
/// let timeline = Simulator::new().simulate(&input).unwrap();
/// assert_eq!(timeline.intervals()[0].process_name, "B");
/// assert_eq!(timeline.makespan(), 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulatorConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator with the given configuration.
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Parses and validates `input` without running it.
    pub fn prepare(&self, input: &SimulationInput) -> Result<SimulationRequest> {
        self.build_request(input).inspect_err(|e| {
            warn!(policy = %input.policy, error = %e, "simulation input rejected");
        })
    }

    /// Validates `input` and runs the selected policy.
    ///
    /// Returns either a complete timeline or an error; never a partial result.
    pub fn simulate(&self, input: &SimulationInput) -> Result<Timeline> {
        let request = self.prepare(input)?;
        let timeline = request.run()?;
        info!(
            algorithm = %request.algorithm,
            preemptive = request.algorithm.is_preemptive(),
            processes = request.processes.len(),
            intervals = timeline.len(),
            makespan = timeline.makespan(),
            "simulation finished"
        );
        Ok(timeline)
    }

    fn build_request(&self, input: &SimulationInput) -> Result<SimulationRequest> {
        if input.rows.len() > self.config.max_rows {
            return Err(SimulationError::invalid(format!(
                "at most {} process rows are allowed, got {}",
                self.config.max_rows,
                input.rows.len()
            )));
        }

        let mut processes = Vec::with_capacity(input.rows.len());
        for (i, row) in input.rows.iter().enumerate() {
            if row.is_blank() {
                debug!(row = i + 1, "skipping blank row");
                continue;
            }
            processes.push(parse_row(i + 1, row)?);
        }
        validate_processes(&processes)?;

        let algorithm: Algorithm = input.policy.trim().parse()?;
        let quantum = if algorithm.requires_quantum() {
            Some(parse_quantum(input.quantum.as_deref())?)
        } else {
            None
        };

        Ok(SimulationRequest {
            processes,
            algorithm,
            quantum,
        })
    }
}

fn parse_row(row_number: usize, row: &RawRow) -> Result<Process> {
    let name = row.name.trim();
    let arrival = parse_int(&row.arrival).ok_or_else(|| {
        SimulationError::invalid(format!(
            "row {row_number} ('{name}'): arrival time '{}' is not an integer",
            row.arrival
        ))
    })?;
    let service = parse_int(&row.service).ok_or_else(|| {
        SimulationError::invalid(format!(
            "row {row_number} ('{name}'): CPU cycle '{}' is not an integer",
            row.service
        ))
    })?;
    Process::new(name, arrival, service).map_err(|e| match e {
        SimulationError::InvalidInput(msg) => {
            SimulationError::invalid(format!("row {row_number}: {msg}"))
        }
        other => other,
    })
}

fn parse_quantum(text: Option<&str>) -> Result<i64> {
    let text = text.unwrap_or("").trim();
    if text.is_empty() {
        return Err(SimulationError::invalid(
            "Round Robin requires a time quantum",
        ));
    }
    let quantum = parse_int(text).ok_or_else(|| {
        SimulationError::invalid(format!("time quantum '{text}' is not an integer"))
    })?;
    if quantum <= 0 {
        return Err(SimulationError::invalid(format!(
            "time quantum must be > 0, got {quantum}"
        )));
    }
    Ok(quantum)
}

fn parse_int(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
