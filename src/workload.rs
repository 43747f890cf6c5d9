//! Random workload generation.
//!
//! Produces process sets for experiments and tests. Output is fully
//! determined by the RNG, so a seeded RNG reproduces the same workload.

use rand::Rng;

use crate::error::{Result, SimulationError};
use crate::models::Process;

/// Generates random process sets named `P1`, `P2`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes per workload.
    pub count: usize,
    /// Latest possible arrival time (inclusive).
    pub max_arrival: i64,
    /// Longest possible service time (inclusive).
    pub max_service: i64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes arriving in `0..=20`
    /// with service times in `1..=10`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_service: 10,
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the longest service time.
    pub fn with_max_service(mut self, max_service: i64) -> Self {
        self.max_service = max_service;
        self
    }

    /// Draws one workload.
    ///
    /// # Errors
    /// `InvalidInput` if `max_arrival < 0` or `max_service < 1`.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Vec<Process>> {
        if self.max_arrival < 0 {
            return Err(SimulationError::invalid(format!(
                "max arrival must be >= 0, got {}",
                self.max_arrival
            )));
        }
        if self.max_service < 1 {
            return Err(SimulationError::invalid(format!(
                "max service must be >= 1, got {}",
                self.max_service
            )));
        }

        (1..=self.count)
            .map(|i| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let service = rng.random_range(1..=self.max_service);
                Process::new(format!("P{i}"), arrival, service)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{schedule, Algorithm};
    use crate::validation::validate_timeline;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_within_bounds() {
        let generator = WorkloadGenerator::new(50)
            .with_max_arrival(5)
            .with_max_service(3);
        let mut rng = StdRng::seed_from_u64(42);
        let processes = generator.generate(&mut rng).unwrap();

        assert_eq!(processes.len(), 50);
        assert_eq!(processes[0].name(), "P1");
        assert_eq!(processes[49].name(), "P50");
        for p in &processes {
            assert!((0..=5).contains(&p.arrival_time()));
            assert!((1..=3).contains(&p.service_time()));
        }
    }

    #[test]
    fn test_generate_is_reproducible() {
        let generator = WorkloadGenerator::new(10);
        let a = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
        let b = generator.generate(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_rejects_bad_bounds() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(WorkloadGenerator::new(1)
            .with_max_service(0)
            .generate(&mut rng)
            .is_err());
        assert!(WorkloadGenerator::new(1)
            .with_max_arrival(-1)
            .generate(&mut rng)
            .is_err());
    }

    #[test]
    fn test_generated_workloads_schedule_cleanly() {
        let generator = WorkloadGenerator::new(8);
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let processes = generator.generate(&mut rng).unwrap();
            for algorithm in Algorithm::ALL {
                let timeline = schedule(algorithm, &processes, Some(3)).unwrap();
                assert!(validate_timeline(&timeline, &processes).is_ok());
            }
        }
    }
}
