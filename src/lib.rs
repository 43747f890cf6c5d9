//! Single-processor CPU scheduling simulator.
//!
//! Given a set of processes (name, arrival time, service time) and a
//! scheduling policy, computes the exact sequence of execution intervals
//! each process occupies. The output is a renderer-agnostic [`Timeline`].
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessRun`, `Interval`, `Timeline`
//! - **`policy`**: FCFS, SJN, SRT and Round Robin, plus the `Algorithm` enum
//! - **`simulation`**: Raw-input driver, configuration and timeline metrics
//! - **`validation`**: Process-set checks and timeline well-formedness checks
//! - **`workload`**: Seeded random workload generation
//!
//! # Example
//!
//! ```
//! use cpu_schedule::models::Process;
//! use cpu_schedule::policy::srt;
//!
//! let processes = vec![
//!     Process::new("A", 0, 4).unwrap(),
//!     Process::new("B", 1, 2).unwrap(),
//! ];
//! let timeline = srt(&processes).unwrap();
//! let bars: Vec<_> = timeline
//!     .iter()
//!     .map(|i| (i.process_name.as_str(), i.start, i.end))
//!     .collect();
//! assert_eq!(bars, vec![("A", 0, 1), ("B", 1, 3), ("A", 3, 6)]);
//! ```
//!
//! # Logging
//!
//! Events are emitted through `tracing`; install any subscriber to see them.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Stallings (2018), "Operating Systems: Internals and Design Principles", Ch. 9

pub mod error;
pub mod models;
pub mod policy;
pub mod simulation;
pub mod validation;
pub mod workload;

pub use error::{Result, SimulationError};
pub use models::{Interval, Process, Timeline};
pub use policy::Algorithm;
