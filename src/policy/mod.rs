//! Scheduling policies.
//!
//! One pure function per policy, each mapping a process set to a
//! [`Timeline`]:
//!
//! | Policy | Function | Preemptive |
//! |--------|----------|------------|
//! | First-Come-First-Served | [`fcfs`] | no |
//! | Shortest-Job-Next | [`sjn`] | no |
//! | Shortest-Remaining-Time | [`srt`] | yes |
//! | Round Robin | [`round_robin`] | yes (quantum) |
//!
//! [`Algorithm`] names a policy; [`schedule`] dispatches on it.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

mod fcfs;
pub mod ordering;
mod round_robin;
mod sjn;
mod srt;

pub use fcfs::fcfs;
pub use round_robin::round_robin;
pub use sjn::sjn;
pub use srt::srt;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Result, SimulationError};
use crate::models::{Process, Timeline};

/// A supported scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-Next.
    #[serde(rename = "SJN")]
    Sjn,
    /// Shortest-Remaining-Time.
    #[serde(rename = "SRT")]
    Srt,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RoundRobin", alias = "Round Robin")]
    RoundRobin,
}

impl Algorithm {
    /// Every supported policy, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjn,
        Algorithm::Srt,
        Algorithm::RoundRobin,
    ];

    /// Canonical identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjn => "SJN",
            Self::Srt => "SRT",
            Self::RoundRobin => "RoundRobin",
        }
    }

    /// Whether a running process can lose the processor before finishing.
    pub const fn is_preemptive(&self) -> bool {
        matches!(self, Self::Srt | Self::RoundRobin)
    }

    /// Whether the policy needs a time quantum.
    pub const fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = SimulationError;

    /// Accepts the canonical identifiers plus the `"Round Robin"` label.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FCFS" => Ok(Self::Fcfs),
            "SJN" => Ok(Self::Sjn),
            "SRT" => Ok(Self::Srt),
            "RoundRobin" | "Round Robin" => Ok(Self::RoundRobin),
            other => Err(SimulationError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Runs `algorithm` over `processes`.
///
/// `quantum` is required for [`Algorithm::RoundRobin`] and ignored otherwise.
///
/// # Errors
/// - `EmptyInput` if `processes` is empty.
/// - `InvalidInput` for duplicate names, times too large to schedule, or a
///   missing / non-positive quantum under Round Robin.
#[instrument(level = "debug", skip(processes), fields(processes = processes.len()))]
pub fn schedule(
    algorithm: Algorithm,
    processes: &[Process],
    quantum: Option<i64>,
) -> Result<Timeline> {
    match algorithm {
        Algorithm::Fcfs => fcfs(processes),
        Algorithm::Sjn => sjn(processes),
        Algorithm::Srt => srt(processes),
        Algorithm::RoundRobin => {
            let quantum = quantum.ok_or_else(|| {
                SimulationError::invalid("Round Robin requires a time quantum")
            })?;
            round_robin(processes, quantum)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_timeline;
    use proptest::prelude::*;

    fn p(name: &str, arrival: i64, service: i64) -> Process {
        Process::new(name, arrival, service).unwrap()
    }

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SJN".parse::<Algorithm>(), Ok(Algorithm::Sjn));
        assert_eq!("SRT".parse::<Algorithm>(), Ok(Algorithm::Srt));
        assert_eq!("RoundRobin".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!("Round Robin".parse::<Algorithm>(), Ok(Algorithm::RoundRobin));
        assert_eq!(
            "Bogus".parse::<Algorithm>(),
            Err(SimulationError::UnknownPolicy("Bogus".into()))
        );
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_algorithm_serde() {
        assert_eq!(
            serde_json::to_string(&Algorithm::RoundRobin).unwrap(),
            r#""RoundRobin""#
        );
        let parsed: Algorithm = serde_json::from_str(r#""Round Robin""#).unwrap();
        assert_eq!(parsed, Algorithm::RoundRobin);
    }

    #[test]
    fn test_algorithm_flags() {
        assert!(!Algorithm::Fcfs.is_preemptive());
        assert!(!Algorithm::Sjn.is_preemptive());
        assert!(Algorithm::Srt.is_preemptive());
        assert!(Algorithm::RoundRobin.requires_quantum());
        assert!(!Algorithm::Srt.requires_quantum());
    }

    #[test]
    fn test_schedule_dispatch() {
        let processes = vec![p("A", 0, 5), p("B", 0, 2)];
        let sjn_timeline = schedule(Algorithm::Sjn, &processes, None).unwrap();
        assert_eq!(sjn_timeline.intervals()[0].process_name, "B");

        let fcfs_timeline = schedule(Algorithm::Fcfs, &processes, Some(99)).unwrap();
        assert_eq!(fcfs_timeline.intervals()[0].process_name, "A");
    }

    #[test]
    fn test_schedule_round_robin_needs_quantum() {
        let processes = vec![p("A", 0, 5)];
        assert!(matches!(
            schedule(Algorithm::RoundRobin, &processes, None),
            Err(SimulationError::InvalidInput(_))
        ));
        assert_eq!(
            schedule(Algorithm::RoundRobin, &processes, Some(5))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn test_schedule_is_deterministic() {
        let processes = vec![p("A", 0, 4), p("B", 1, 2), p("C", 1, 2), p("D", 3, 1)];
        for algorithm in Algorithm::ALL {
            let first = schedule(algorithm, &processes, Some(2)).unwrap();
            let second = schedule(algorithm, &processes, Some(2)).unwrap();
            assert_eq!(
                serde_json::to_vec(&first).unwrap(),
                serde_json::to_vec(&second).unwrap()
            );
        }
    }

    fn workload() -> impl Strategy<Value = Vec<Process>> {
        prop::collection::vec((0i64..20, 1i64..10), 1..8).prop_map(|fields| {
            fields
                .into_iter()
                .enumerate()
                .map(|(i, (arrival, service))| p(&format!("P{}", i + 1), arrival, service))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_every_policy_yields_valid_timeline(
            processes in workload(),
            quantum in 1i64..6,
        ) {
            for algorithm in Algorithm::ALL {
                let timeline = schedule(algorithm, &processes, Some(quantum)).unwrap();
                prop_assert_eq!(validate_timeline(&timeline, &processes), Ok(()));
            }
        }

        #[test]
        fn prop_fcfs_makespan_is_idle_plus_service(processes in workload()) {
            let timeline = fcfs(&processes).unwrap();
            let service: i64 = processes.iter().map(Process::service_time).sum();
            prop_assert_eq!(timeline.makespan(), timeline.idle_time() + service);
            prop_assert_eq!(timeline.len(), processes.len());
        }

        #[test]
        fn prop_non_preemptive_policies_use_one_interval_each(processes in workload()) {
            for algorithm in [Algorithm::Fcfs, Algorithm::Sjn] {
                let timeline = schedule(algorithm, &processes, None).unwrap();
                for process in &processes {
                    prop_assert_eq!(timeline.intervals_for(process.name()).len(), 1);
                }
            }
        }
    }
}
