//! Ready-set ordering for the shortest-first policies.
//!
//! Each ordering is a fixed ladder of keys; the next key is consulted only
//! when the previous one ties. The last key is always unique per process,
//! so selection never depends on iteration order.

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::models::Process;

/// A ready process as seen by an ordering.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// Position in the input process slice.
    pub index: usize,
    /// The process itself.
    pub process: &'a Process,
    /// Service time not yet consumed.
    pub remaining_time: i64,
}

impl<'a> Candidate<'a> {
    /// Creates a candidate view.
    pub fn new(index: usize, process: &'a Process, remaining_time: i64) -> Self {
        Self {
            index,
            process,
            remaining_time,
        }
    }
}

/// Total order over ready processes.
///
/// `Ordering::Less` = runs first.
pub trait ReadyOrder: Send + Sync + Debug {
    /// Ordering name, used as a log field (e.g., "SJN").
    fn name(&self) -> &'static str;

    /// Compares two candidates.
    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering;
}

/// Shortest total service time first.
///
/// Tie-break: earliest arrival, then input order.
#[derive(Debug, Clone, Copy)]
pub struct ShortestService;

impl ReadyOrder for ShortestService {
    fn name(&self) -> &'static str {
        "SJN"
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        a.process
            .service_time()
            .cmp(&b.process.service_time())
            .then_with(|| a.process.arrival_time().cmp(&b.process.arrival_time()))
            .then_with(|| a.index.cmp(&b.index))
    }
}

/// Least remaining service time first.
///
/// Tie-break: earliest arrival, then name.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl ReadyOrder for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn compare(&self, a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
        a.remaining_time
            .cmp(&b.remaining_time)
            .then_with(|| a.process.arrival_time().cmp(&b.process.arrival_time()))
            .then_with(|| a.process.name().cmp(b.process.name()))
            .then_with(|| a.index.cmp(&b.index))
    }
}

/// Returns the candidate that runs first, or `None` if there are none.
pub fn select_best<'a, O, I>(order: &O, candidates: I) -> Option<Candidate<'a>>
where
    O: ReadyOrder + ?Sized,
    I: IntoIterator<Item = Candidate<'a>>,
{
    candidates.into_iter().min_by(|a, b| order.compare(a, b))
}
