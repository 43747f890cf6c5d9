//! Simulation domain models.
//!
//! Provides the input and output types of a simulation run: processes
//! going in, a timeline of execution intervals coming out.
//!
//! # Domain Mappings
//!
//! | cpu-schedule | OS textbook | Gantt chart |
//! |--------------|-------------|-------------|
//! | Process | Job / PCB | Row label |
//! | Interval | CPU burst slice | Bar |
//! | Timeline | Dispatch trace | Chart |

mod process;
mod timeline;

pub use process::{Process, ProcessRun, ProcessState};
pub use timeline::{Interval, Timeline};
