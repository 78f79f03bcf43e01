use std::path::Path;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::FacilityRecord;

/// Errors that can occur when loading the facility catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Facility {id}: capacity must be positive")]
    ZeroCapacity { id: String },

    #[error("Facility {id}: available ({available}) exceeds capacity ({capacity})")]
    AvailabilityOverflow {
        id: String,
        available: u32,
        capacity: u32,
    },

    #[error("Duplicate facility id: {0}")]
    DuplicateId(String),
}

/// In-memory facility catalog
///
/// Loaded once at startup and read-only thereafter, except for the
/// `available` field, which the capacity simulator perturbs through
/// [`CatalogStore::update_availability`]. The matcher only ever sees
/// snapshots, so ranking stays pure.
pub struct CatalogStore {
    facilities: RwLock<Vec<FacilityRecord>>,
}

impl CatalogStore {
    /// Build a store from records, enforcing the catalog invariants:
    /// unique ids, positive capacity, `available <= capacity`.
    pub fn from_records(records: Vec<FacilityRecord>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if record.capacity == 0 {
                return Err(CatalogError::ZeroCapacity {
                    id: record.id.clone(),
                });
            }
            if record.available > record.capacity {
                return Err(CatalogError::AvailabilityOverflow {
                    id: record.id.clone(),
                    available: record.available,
                    capacity: record.capacity,
                });
            }
        }

        Ok(Self {
            facilities: RwLock::new(records),
        })
    }

    /// Load a catalog from a JSON file (an array of facility records)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let records: Vec<FacilityRecord> = serde_json::from_str(&json)?;
        Self::from_records(records)
    }

    /// Clone the current catalog in catalog order
    pub async fn snapshot(&self) -> Vec<FacilityRecord> {
        self.facilities.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.facilities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.facilities.read().await.is_empty()
    }

    /// Recompute `available` for every facility
    ///
    /// The new value is clamped to `[0, capacity]` regardless of what the
    /// supplied function returns; the catalog invariant holds even against
    /// a misbehaving caller.
    pub async fn update_availability<F>(&self, mut next_available: F)
    where
        F: FnMut(&FacilityRecord) -> u32,
    {
        let mut facilities = self.facilities.write().await;
        for record in facilities.iter_mut() {
            record.available = next_available(record).min(record.capacity);
        }
    }
}

/// Built-in demo catalog, used when no catalog file is configured
///
/// Mirrors the product's seeded hospital list: general-care facilities plus
/// a spread of specialties across Lagos districts.
pub fn seed_catalog() -> Vec<FacilityRecord> {
    let rows: Vec<(&str, &str, &str, &str, &str, u32, u32, u32)> = vec![
        (
            "fac-001",
            "City General Hospital",
            "Downtown Ikeja",
            "General Care",
            "general checkup fever malaria consultation",
            30,
            120,
            45,
        ),
        (
            "fac-002",
            "Sunrise Medical Center",
            "Victoria Island",
            "General Care",
            "general family checkup immunization",
            25,
            90,
            30,
        ),
        (
            "fac-003",
            "Heart Institute of Lagos",
            "Uptown Lekki",
            "Cardiology",
            "cardiac heart chest pain hypertension",
            10,
            60,
            22,
        ),
        (
            "fac-004",
            "Kids First Clinic",
            "Surulere",
            "Pediatrics",
            "child children baby fever vaccination",
            20,
            70,
            28,
        ),
        (
            "fac-005",
            "Lagoon Orthopedic Center",
            "Yaba",
            "Orthopedics",
            "bone joint fracture sprain back pain",
            40,
            50,
            18,
        ),
        (
            "fac-006",
            "Crescent Maternity Home",
            "Ikoyi",
            "Obstetrics",
            "pregnancy maternity antenatal delivery",
            35,
            80,
            34,
        ),
        (
            "fac-007",
            "ClearView Eye Clinic",
            "Ikeja GRA",
            "Ophthalmology",
            "eye vision glaucoma cataract",
            15,
            40,
            16,
        ),
        (
            "fac-008",
            "Harmony Dental Studio",
            "Lekki Phase 1",
            "Dentistry",
            "tooth teeth dental cavity extraction",
            45,
            30,
            12,
        ),
        (
            "fac-009",
            "Unity Teaching Hospital",
            "Idi-Araba",
            "Tertiary Care",
            "specialist tertiary surgery referral trauma",
            60,
            200,
            85,
        ),
        (
            "fac-010",
            "Palm Grove Dermatology",
            "Gbagada",
            "Dermatology",
            "skin rash allergy eczema",
            50,
            35,
            14,
        ),
    ];

    rows.into_iter()
        .map(
            |(id, name, location, specialty, keywords, wait, capacity, available)| FacilityRecord {
                id: id.to_string(),
                name: name.to_string(),
                location: location.to_string(),
                specialty: specialty.to_string(),
                keywords: keywords.to_string(),
                wait_time_minutes: wait,
                capacity,
                available,
            },
        )
        .collect()
}
