//! Simulation driver and schedule metrics.
//!
//! The driver is the only boundary between raw, user-typed text and the
//! policy engine: it validates rows, picks the policy and returns either a
//! complete [`crate::models::Timeline`] or a [`crate::SimulationError`].
//!
//! # Metrics
//!
//! `TimelineMetrics` computes turnaround, waiting and response times plus
//! processor utilization for a finished timeline.

mod config;
mod driver;
mod metrics;

pub use config::{SimulatorConfig, DEFAULT_MAX_ROWS};
pub use driver::{RawRow, SimulationInput, SimulationRequest, Simulator};
pub use metrics::{ProcessMetrics, TimelineMetrics};
