//! Shortest-Remaining-Time (preemptive).
//!
//! # Algorithm
//!
//! Time advances in unit steps. At each step:
//! 1. Admit every process whose arrival time has been reached.
//! 2. Run the ready process with the least remaining time for one tick.
//! 3. A switch of running process closes the previous interval.
//!
//! Arrivals are admitted before the step is evaluated, so a process that
//! arrives at the same instant another one completes competes for that
//! tick. When nothing is ready the clock jumps to the next arrival; idle
//! gaps are never emitted as intervals.
//!
//! Between two arrivals the running process only gets shorter, so it keeps
//! winning every tick. The ticks up to the next arrival (or completion) are
//! therefore executed as one slice; the timeline is the same as stepping
//! one unit at a time.
//!
//! # Complexity
//! O(n²) for n processes, independent of the service times.

use tracing::debug;

use super::ordering::{select_best, Candidate, ReadyOrder, ShortestRemaining};
use crate::error::Result;
use crate::models::{Process, ProcessRun, ProcessState, Timeline};
use crate::validation::validate_processes;

/// Schedules `processes` shortest-remaining-time-first.
///
/// Ties on remaining time go to the earliest arrival, then name.
///
/// # Errors
/// `EmptyInput` for an empty slice, `InvalidInput` for duplicate names or
/// times that would run the clock past `i64::MAX`.
pub fn srt(processes: &[Process]) -> Result<Timeline> {
    validate_processes(processes)?;

    let mut runs: Vec<ProcessRun> = processes
        .iter()
        .enumerate()
        .map(|(i, p)| ProcessRun::new(i, p))
        .collect();

    let mut arrivals: Vec<usize> = (0..processes.len()).collect();
    arrivals.sort_by_key(|&i| processes[i].arrival_time());
    let mut next_arrival = 0;

    let mut timeline = Timeline::new();
    let mut clock = 0;
    let mut running: Option<usize> = None;
    let mut finished = 0;
    let mut preemptions = 0usize;

    while finished < processes.len() {
        while next_arrival < arrivals.len()
            && processes[arrivals[next_arrival]].arrival_time() <= clock
        {
            runs[arrivals[next_arrival]].arrive();
            next_arrival += 1;
        }

        let ready = runs
            .iter()
            .filter(|r| matches!(r.state(), ProcessState::Ready | ProcessState::Running))
            .map(|r| Candidate::new(r.index, &processes[r.index], r.remaining_time()));

        let Some(best) = select_best(&ShortestRemaining, ready) else {
            match arrivals.get(next_arrival) {
                Some(&i) => {
                    clock = processes[i].arrival_time();
                    continue;
                }
                // Unreachable for a consistent run state
                None => break,
            }
        };
        let current = best.index;

        if running != Some(current) {
            if let Some(previous) = running {
                if runs[previous].preempt() {
                    preemptions += 1;
                }
            }
            runs[current].dispatch();
            running = Some(current);
        }

        let slice = match arrivals.get(next_arrival) {
            Some(&i) => processes[i].arrival_time() - clock,
            None => runs[current].remaining_time(),
        };
        let used = runs[current].execute(slice);
        timeline.extend_or_add(processes[current].name(), clock, clock + used);
        clock += used;

        if runs[current].is_finished() {
            finished += 1;
            running = None;
        }
    }

    debug!(
        ordering = ShortestRemaining.name(),
        processes = processes.len(),
        intervals = timeline.len(),
        preemptions,
        makespan = timeline.makespan(),
        "srt schedule computed"
    );
    Ok(timeline)
}
