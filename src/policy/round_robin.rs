//! Round Robin (preemptive, fixed quantum).
//!
//! The ready queue is seeded once, in input order, and then simply rotated:
//! a process that does not finish within its quantum goes to the tail.
//!
//! Late arrivals are not inserted into the rotation by arrival time. When
//! the head of the queue has not arrived yet, the processor idles until it
//! does, even if a process further back is already waiting. This mirrors
//! the reference simulator's simplified model and is kept on purpose.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{Result, SimulationError};
use crate::models::{Interval, Process, ProcessRun, Timeline};
use crate::validation::validate_processes;

/// Schedules `processes` round robin with the given `quantum`.
///
/// Each turn yields one interval: `quantum` ticks if more than that
/// remains, otherwise the rest of the process's service time.
///
/// # Errors
/// - `InvalidInput` if `quantum <= 0`, names are duplicated, or the times
///   would run the clock past `i64::MAX`.
/// - `EmptyInput` for an empty slice.
pub fn round_robin(processes: &[Process], quantum: i64) -> Result<Timeline> {
    if quantum <= 0 {
        return Err(SimulationError::invalid(format!(
            "time quantum must be > 0, got {quantum}"
        )));
    }
    validate_processes(processes)?;

    let mut queue: VecDeque<ProcessRun> = processes
        .iter()
        .enumerate()
        .map(|(i, p)| ProcessRun::new(i, p))
        .collect();

    let mut timeline = Timeline::new();
    let mut clock = 0;

    while let Some(mut run) = queue.pop_front() {
        let process = &processes[run.index];
        clock = clock.max(process.arrival_time());

        // Only the first turn moves Unarrived → Ready
        run.arrive();
        run.dispatch();
        let used = run.execute(quantum);
        timeline.add_interval(Interval::new(process.name(), clock, clock + used));
        clock += used;

        if !run.is_finished() {
            run.preempt();
            queue.push_back(run);
        }
    }

    debug!(
        processes = processes.len(),
        quantum,
        intervals = timeline.len(),
        makespan = timeline.makespan(),
        "round robin schedule computed"
    );
    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str, arrival: i64, service: i64) -> Process {
        Process::new(name, arrival, service).unwrap()
    }

    #[test]
    fn test_rr_rotation() {
        let timeline = round_robin(&[p("A", 0, 5), p("B", 0, 3)], 2).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[
                Interval::new("A", 0, 2),
                Interval::new("B", 2, 4),
                Interval::new("A", 4, 6),
                Interval::new("B", 6, 7),
                Interval::new("A", 7, 8),
            ]
        );
    }

    #[test]
    fn test_rr_single_process_keeps_quantum_slices() {
        let timeline = round_robin(&[p("A", 0, 5)], 2).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[
                Interval::new("A", 0, 2),
                Interval::new("A", 2, 4),
                Interval::new("A", 4, 5),
            ]
        );
    }

    #[test]
    fn test_rr_large_quantum_degenerates_to_input_order() {
        let timeline = round_robin(&[p("A", 0, 3), p("B", 0, 2)], 10).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[Interval::new("A", 0, 3), Interval::new("B", 3, 5)]
        );
    }

    #[test]
    fn test_rr_fixed_queue_order_ignores_arrival_order() {
        // B is first in the queue; the processor waits for it even though
        // A is already present.
        let timeline = round_robin(&[p("B", 3, 1), p("A", 0, 1)], 2).unwrap();
        assert_eq!(
            timeline.intervals(),
            &[Interval::new("B", 3, 4), Interval::new("A", 4, 5)]
        );
    }

    #[test]
    fn test_rr_rejects_non_positive_quantum() {
        for q in [0, -3] {
            assert!(matches!(
                round_robin(&[p("A", 0, 1)], q),
                Err(SimulationError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_rr_rejects_overflowing_times() {
        let err = round_robin(&[p("A", i64::MAX - 7, 100)], 50).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidInput(_)));
    }

    #[test]
    fn test_rr_empty() {
        assert_eq!(round_robin(&[], 2), Err(SimulationError::EmptyInput));
    }
}
