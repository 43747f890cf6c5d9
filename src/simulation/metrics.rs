//! Timeline quality metrics.
//!
//! Computes the standard per-process and aggregate indicators of a
//! single-processor schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − service |
//! | Response | first start − arrival |
//! | Utilization | busy time / makespan |
//! | Throughput | finished processes / makespan |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::{Process, Timeline};

/// Indicators for one process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process name.
    pub name: String,
    /// When the process finished.
    pub completion_time: i64,
    /// Completion − arrival.
    pub turnaround_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Delay before first getting the processor.
    pub response_time: i64,
}

/// Aggregate indicators for a whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineMetrics {
    /// Per-process indicators, in input order.
    pub processes: Vec<ProcessMetrics>,
    /// Latest completion time.
    pub makespan: i64,
    /// Ticks spent executing.
    pub busy_time: i64,
    /// Ticks spent idle before the makespan.
    pub idle_time: i64,
    /// Busy time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Finished processes per tick.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Switches between different processes.
    pub context_switches: usize,
}

impl TimelineMetrics {
    /// Computes metrics from a timeline and the processes it scheduled.
    ///
    /// Processes that never appear in the timeline are left out.
    pub fn calculate(timeline: &Timeline, processes: &[Process]) -> Self {
        let per_process: Vec<ProcessMetrics> = processes
            .iter()
            .filter_map(|p| {
                let completion = timeline.completion_time(p.name())?;
                let first_start = timeline.first_start(p.name())?;
                let turnaround = completion.saturating_sub(p.arrival_time());
                Some(ProcessMetrics {
                    name: p.name().to_string(),
                    completion_time: completion,
                    turnaround_time: turnaround,
                    waiting_time: turnaround.saturating_sub(p.service_time()),
                    response_time: first_start.saturating_sub(p.arrival_time()),
                })
            })
            .collect();

        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                per_process.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_turnaround_time: mean(per_process.iter().map(|m| m.turnaround_time)),
            avg_waiting_time: mean(per_process.iter().map(|m| m.waiting_time)),
            avg_response_time: mean(per_process.iter().map(|m| m.response_time)),
            processes: per_process,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
        }
    }

    /// Metrics for one process.
    pub fn for_process(&self, name: &str) -> Option<&ProcessMetrics> {
        self.processes.iter().find(|m| m.name == name)
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    // i128 holds any realistic count of i64 summands
    let (sum, count) = values.fold((0i128, 0usize), |(s, c), v| (s + i128::from(v), c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{round_robin, srt};

    fn p(name: &str, arrival: i64, service: i64) -> Process {
        Process::new(name, arrival, service).unwrap()
    }

    #[test]
    fn test_metrics_srt() {
        let processes = vec![p("A", 0, 4), p("B", 1, 2)];
        let timeline = srt(&processes).unwrap(); // A:0-1, B:1-3, A:3-6
        let m = TimelineMetrics::calculate(&timeline, &processes);

        let a = m.for_process("A").unwrap();
        assert_eq!(a.completion_time, 6);
        assert_eq!(a.turnaround_time, 6);
        assert_eq!(a.waiting_time, 2);
        assert_eq!(a.response_time, 0);

        let b = m.for_process("B").unwrap();
        assert_eq!(b.turnaround_time, 2);
        assert_eq!(b.waiting_time, 0);
        assert_eq!(b.response_time, 0);

        assert_eq!(m.makespan, 6);
        assert_eq!(m.context_switches, 2);
        assert!((m.avg_turnaround_time - 4.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 1.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_round_robin_response() {
        let processes = vec![p("A", 0, 5), p("B", 0, 3)];
        let timeline = round_robin(&processes, 2).unwrap();
        let m = TimelineMetrics::calculate(&timeline, &processes);
        assert_eq!(m.for_process("B").unwrap().response_time, 2);
        assert_eq!(m.for_process("A").unwrap().completion_time, 8);
        assert!((m.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_idle_time() {
        let processes = vec![p("A", 0, 2), p("B", 6, 2)];
        let timeline = srt(&processes).unwrap();
        let m = TimelineMetrics::calculate(&timeline, &processes);
        assert_eq!(m.busy_time, 4);
        assert_eq!(m.idle_time, 4);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_skip_unscheduled() {
        let processes = vec![p("A", 0, 2), p("ghost", 0, 1)];
        let timeline = Timeline::from_intervals(vec![crate::models::Interval::new("A", 0, 2)]);
        let m = TimelineMetrics::calculate(&timeline, &processes);
        assert_eq!(m.processes.len(), 1);
        assert!(m.for_process("ghost").is_none());
    }

    #[test]
    fn test_mean_of_large_values() {
        let big = i64::MAX - 1;
        assert!((mean([big, big].into_iter()) - big as f64).abs() < 1.0);
        assert!((mean(std::iter::empty()) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = TimelineMetrics::calculate(&Timeline::new(), &[]);
        assert_eq!(m.makespan, 0);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
        assert!((m.avg_waiting_time - 0.0).abs() < 1e-10);
    }
}
