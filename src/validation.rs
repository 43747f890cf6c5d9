//! Input and output validation.
//!
//! Two sides of the simulation boundary are checked here:
//! - **Input**: a process set must be non-empty with unique names.
//! - **Output**: a timeline must honour the interval contract for the
//!   process set it was computed from. All issues are collected, not just
//!   the first one.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, SimulationError};
use crate::models::{Interval, Process, Timeline};

/// Timeline validation result.
pub type TimelineValidation = std::result::Result<(), Vec<TimelineViolation>>;

/// A broken timeline invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineViolation {
    /// Violation category.
    pub kind: TimelineViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of timeline violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineViolationKind {
    /// An interval with `end <= start`.
    EmptyInterval,
    /// An interval starts before its predecessor.
    OutOfOrder,
    /// An interval starts before its predecessor ended.
    Overlap,
    /// An interval names a process that is not in the input set.
    UnknownProcess,
    /// A process runs before its arrival time.
    StartsBeforeArrival,
    /// A process's interval durations do not add up to its service time.
    ServiceMismatch,
}

impl TimelineViolation {
    fn new(kind: TimelineViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Checks that a process set can be scheduled.
///
/// A set that passes has a [`schedule_horizon`], so no policy clock can
/// overflow while scheduling it.
///
/// # Errors
/// - `EmptyInput` if `processes` is empty.
/// - `InvalidInput` if two processes share a name, or if the last arrival
///   plus the total service time does not fit in an `i64`.
pub fn validate_processes(processes: &[Process]) -> Result<()> {
    if processes.is_empty() {
        return Err(SimulationError::EmptyInput);
    }

    let mut names = HashSet::new();
    for p in processes {
        if !names.insert(p.name()) {
            return Err(SimulationError::invalid(format!(
                "duplicate process name '{}'",
                p.name()
            )));
        }
    }

    schedule_horizon(processes)?;
    Ok(())
}

/// Upper bound on every instant a schedule of `processes` can reach.
///
/// The processor only idles while waiting for an arrival, so no interval
/// ends later than the last arrival plus the total service time.
///
/// # Errors
/// `InvalidInput` if that bound does not fit in an `i64`.
pub fn schedule_horizon(processes: &[Process]) -> Result<i64> {
    let last_arrival = processes
        .iter()
        .map(Process::arrival_time)
        .max()
        .unwrap_or(0);
    processes
        .iter()
        .try_fold(last_arrival, |acc, p| acc.checked_add(p.service_time()))
        .ok_or_else(|| {
            SimulationError::invalid(format!(
                "arrival and service times are too large: the schedule would run past t={}",
                i64::MAX
            ))
        })
}

/// Validates a timeline against the processes it was computed from.
///
/// Checks:
/// 1. Every interval is non-empty and starts at or after t=0
/// 2. Intervals are in non-decreasing start order
/// 3. No interval starts before the previous one ended
/// 4. Every interval names a known process
/// 5. No process runs before its arrival time
/// 6. Each process's total run time equals its service time
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(violations)` with every detected issue.
pub fn validate_timeline(timeline: &Timeline, processes: &[Process]) -> TimelineValidation {
    let mut violations = Vec::new();
    let by_name: HashMap<&str, &Process> = processes.iter().map(|p| (p.name(), p)).collect();
    let mut executed: HashMap<&str, i64> = HashMap::new();

    let mut previous: Option<&Interval> = None;
    for interval in timeline {
        let name = interval.process_name.as_str();

        if interval.start < 0 || interval.end <= interval.start {
            violations.push(TimelineViolation::new(
                TimelineViolationKind::EmptyInterval,
                format!(
                    "Interval {}:{}-{} is empty or negative",
                    name, interval.start, interval.end
                ),
            ));
        }

        if let Some(prev) = previous {
            if interval.start < prev.start {
                violations.push(TimelineViolation::new(
                    TimelineViolationKind::OutOfOrder,
                    format!(
                        "Interval {}:{} starts before preceding {}:{}",
                        name, interval.start, prev.process_name, prev.start
                    ),
                ));
            } else if interval.start < prev.end {
                violations.push(TimelineViolation::new(
                    TimelineViolationKind::Overlap,
                    format!(
                        "Interval {}:{}-{} overlaps {}:{}-{}",
                        name,
                        interval.start,
                        interval.end,
                        prev.process_name,
                        prev.start,
                        prev.end
                    ),
                ));
            }
        }
        previous = Some(interval);

        match by_name.get(name) {
            Some(process) => {
                if interval.start < process.arrival_time() {
                    violations.push(TimelineViolation::new(
                        TimelineViolationKind::StartsBeforeArrival,
                        format!(
                            "Process '{}' runs at {} before arriving at {}",
                            name,
                            interval.start,
                            process.arrival_time()
                        ),
                    ));
                }
                let ran = executed.entry(name).or_insert(0);
                *ran = ran.saturating_add(interval.duration());
            }
            None => violations.push(TimelineViolation::new(
                TimelineViolationKind::UnknownProcess,
                format!("Interval references unknown process '{name}'"),
            )),
        }
    }

    for process in processes {
        let ran = executed.get(process.name()).copied().unwrap_or(0);
        if ran != process.service_time() {
            violations.push(TimelineViolation::new(
                TimelineViolationKind::ServiceMismatch,
                format!(
                    "Process '{}' ran for {} but needs {}",
                    process.name(),
                    ran,
                    process.service_time()
                ),
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}
