//! Timeline (simulation output) model.
//!
//! A timeline is the ordered list of execution intervals on the single
//! simulated processor. It is the only thing a renderer needs to draw a
//! Gantt chart.
//!
//! # Contract
//! - Intervals appear in non-decreasing `start` order.
//! - `end` of interval *i* ≤ `start` of interval *i+1* (no overlap).
//! - Idle gaps are implicit: consumers must not assume contiguity.

use serde::{Deserialize, Serialize};

/// One contiguous stretch of execution by a single process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    /// Name of the executing process.
    pub process_name: String,
    /// First tick of execution.
    pub start: i64,
    /// Tick at which execution stopped (exclusive).
    pub end: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(process_name: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            process_name: process_name.into(),
            start,
            end,
        }
    }

    /// Length of the interval in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }
}

/// A complete schedule for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing interval list as-is (no checks).
    ///
    /// Use [`crate::validation::validate_timeline`] to verify the contract.
    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Appends an interval.
    pub fn add_interval(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Appends `[start, end)` for `process_name`, extending the last
    /// interval instead when the same process simply keeps running.
    pub(crate) fn extend_or_add(&mut self, process_name: &str, start: i64, end: i64) {
        if let Some(last) = self.intervals.last_mut() {
            if last.process_name == process_name && last.end == start {
                last.end = end;
                return;
            }
        }
        self.intervals.push(Interval::new(process_name, start, end));
    }

    /// All intervals in chronological order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterates intervals in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the timeline has no intervals.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest end time across all intervals.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Returns all intervals owned by a process.
    pub fn intervals_for(&self, process_name: &str) -> Vec<&Interval> {
        self.intervals
            .iter()
            .filter(|i| i.process_name == process_name)
            .collect()
    }

    /// When a process first got the processor.
    pub fn first_start(&self, process_name: &str) -> Option<i64> {
        self.intervals
            .iter()
            .find(|i| i.process_name == process_name)
            .map(|i| i.start)
    }

    /// When a process finished (end of its last interval).
    pub fn completion_time(&self, process_name: &str) -> Option<i64> {
        self.intervals_for(process_name).iter().map(|i| i.end).max()
    }

    /// Total ticks the processor spent executing.
    ///
    /// Saturates at `i64::MAX` for hand-built timelines that would overflow.
    pub fn busy_time(&self) -> i64 {
        self.intervals
            .iter()
            .map(Interval::duration)
            .fold(0i64, i64::saturating_add)
    }

    /// Total idle ticks between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan().saturating_sub(self.busy_time())
    }

    /// Number of times the processor switched from one process to another.
    ///
    /// Idle gaps between two intervals of the same process do not count.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_name != w[1].process_name)
            .count()
    }

    /// Distinct process names in order of first appearance.
    pub fn process_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for interval in &self.intervals {
            if !names.contains(&interval.process_name.as_str()) {
                names.push(&interval.process_name);
            }
        }
        names
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
