use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::task::JoinHandle;

use crate::models::FacilityRecord;
use crate::services::catalog::CatalogStore;

/// Demo-only capacity drift
///
/// Stands in for the live capacity feed a real deployment would have:
/// every tick, each facility's `available` takes a uniform step in
/// `[-max_step, +max_step]`, clamped so numbers stay plausible. The matcher
/// never reads `available`, so drift cannot change rankings.
pub struct CapacitySimulator {
    catalog: Arc<CatalogStore>,
    interval: Duration,
    max_step: u32,
}

impl CapacitySimulator {
    pub fn new(catalog: Arc<CatalogStore>, interval: Duration, max_step: u32) -> Self {
        Self {
            catalog,
            interval,
            max_step,
        }
    }

    /// Run the drift loop on the runtime until the handle is dropped/aborted
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                ticker.tick().await;
                self.step().await;
            }
        })
    }

    /// Apply one drift step to every facility
    pub async fn step(&self) {
        let max_step = self.max_step;
        let mut rng = StdRng::from_entropy();

        self.catalog
            .update_availability(|record| drift(record, max_step, &mut rng))
            .await;

        tracing::trace!("Applied capacity drift step");
    }
}

/// Compute the next `available` for one facility
///
/// Clamped to `[min(5, capacity), max(capacity - 5, floor)]` so demo numbers
/// never hit the empty/full extremes, and never leave `[0, capacity]`.
pub fn drift<R: Rng>(record: &FacilityRecord, max_step: u32, rng: &mut R) -> u32 {
    let step = rng.gen_range(-(max_step as i64)..=max_step as i64);

    let floor = 5u32.min(record.capacity);
    let ceil = record.capacity.saturating_sub(5).max(floor);

    let next = record.available as i64 + step;
    next.clamp(floor as i64, ceil as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::seed_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(capacity: u32, available: u32) -> FacilityRecord {
        FacilityRecord {
            id: "sim".to_string(),
            name: "Sim Facility".to_string(),
            location: "Ikeja".to_string(),
            specialty: "General Care".to_string(),
            keywords: "general".to_string(),
            wait_time_minutes: 10,
            capacity,
            available,
        }
    }

    #[test]
    fn test_drift_stays_within_capacity() {
        let mut rng = StdRng::seed_from_u64(42);
        let rec = record(60, 30);

        for _ in 0..1000 {
            let next = drift(&rec, 3, &mut rng);
            assert!(next <= rec.capacity);
            assert!(next >= 5);
            assert!(next <= rec.capacity - 5);
        }
    }

    #[test]
    fn test_drift_step_is_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        let rec = record(100, 50);

        for _ in 0..1000 {
            let next = drift(&rec, 3, &mut rng);
            let delta = (next as i64 - rec.available as i64).abs();
            assert!(delta <= 3);
        }
    }

    #[test]
    fn test_drift_handles_tiny_capacity() {
        // capacity < 10 collapses the clamp window; must not underflow
        let mut rng = StdRng::seed_from_u64(99);
        let rec = record(3, 1);

        for _ in 0..100 {
            let next = drift(&rec, 3, &mut rng);
            assert!(next <= rec.capacity);
        }
    }

    #[test]
    fn test_step_preserves_catalog_invariant() {
        tokio_test::block_on(async {
            let catalog = Arc::new(
                CatalogStore::from_records(seed_catalog()).expect("valid seed"),
            );
            let simulator =
                CapacitySimulator::new(Arc::clone(&catalog), Duration::from_secs(3), 3);

            for _ in 0..10 {
                simulator.step().await;
            }

            for record in catalog.snapshot().await {
                assert!(record.available <= record.capacity);
            }
        });
    }
}
