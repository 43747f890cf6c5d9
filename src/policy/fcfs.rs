//! First-Come-First-Served.
//!
//! Non-preemptive. Processes run in arrival order; equal arrivals keep
//! their input order. The processor idles until the next arrival when it
//! runs dry.

use tracing::debug;

use crate::error::Result;
use crate::models::{Interval, Process, Timeline};
use crate::validation::validate_processes;

/// Schedules `processes` first-come-first-served.
///
/// Each process yields exactly one interval of length `service_time`.
///
/// # Errors
/// `EmptyInput` for an empty slice, `InvalidInput` for duplicate names or
/// times that would run the clock past `i64::MAX`.
pub fn fcfs(processes: &[Process]) -> Result<Timeline> {
    validate_processes(processes)?;

    // Stable: ties keep input order
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| processes[i].arrival_time());

    let mut timeline = Timeline::new();
    let mut clock = 0;
    for i in order {
        let process = &processes[i];
        let start = clock.max(process.arrival_time());
        let end = start + process.service_time();
        timeline.add_interval(Interval::new(process.name(), start, end));
        clock = end;
    }

    debug!(
        processes = processes.len(),
        intervals = timeline.len(),
        makespan = timeline.makespan(),
        "fcfs schedule computed"
    );
    Ok(timeline)
}
