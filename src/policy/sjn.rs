//! Shortest-Job-Next (non-preemptive).
//!
//! Whenever the processor frees up, the arrived process with the smallest
//! service time runs to completion.
//!
//! # Complexity
//! O(n²) for n processes.

use tracing::debug;

use super::ordering::{select_best, Candidate, ReadyOrder, ShortestService};
use crate::error::Result;
use crate::models::{Interval, Process, Timeline};
use crate::validation::validate_processes;

/// Schedules `processes` shortest-job-next.
///
/// Ties on service time go to the earliest arrival, then input order.
///
/// # Errors
/// `EmptyInput` for an empty slice, `InvalidInput` for duplicate names or
/// times that would run the clock past `i64::MAX`.
pub fn sjn(processes: &[Process]) -> Result<Timeline> {
    validate_processes(processes)?;

    let mut pool: Vec<usize> = (0..processes.len()).collect();
    let mut timeline = Timeline::new();
    let mut clock = 0;

    while !pool.is_empty() {
        let arrived = pool
            .iter()
            .map(|&i| Candidate::new(i, &processes[i], processes[i].service_time()))
            .filter(|c| c.process.arrival_time() <= clock);

        let Some(best) = select_best(&ShortestService, arrived) else {
            // Nothing ready: idle until the next arrival
            clock = pool
                .iter()
                .map(|&i| processes[i].arrival_time())
                .min()
                .unwrap_or(clock);
            continue;
        };

        let end = clock + best.process.service_time();
        timeline.add_interval(Interval::new(best.process.name(), clock, end));
        clock = end;
        pool.retain(|&i| i != best.index);
    }

    debug!(
        ordering = ShortestService.name(),
        processes = processes.len(),
        intervals = timeline.len(),
        makespan = timeline.makespan(),
        "sjn schedule computed"
    );
    Ok(timeline)
}
