//! Patient repository
//!
//! Stores patient records and looks them up by phone number. Lookup is a
//! linear scan with exact, case-sensitive string comparison; no whitespace or
//! country-code normalization is applied, so "+966550000001" and
//! "0550000001" are distinct patients.

use chrono::Local;
use tracing::info;

use crate::error::Result;
use crate::ids::IdGenerator;
use crate::models::{BookingRequest, Patient};
use crate::schema::collections;
use crate::store::Store;
use crate::validation::InputValidator;

/// Repository for patient records
#[derive(Debug, Clone)]
pub struct PatientRepository {
    store: Store,
    ids: IdGenerator,
}

impl PatientRepository {
    /// Create a repository over the given store
    #[must_use]
    pub fn new(store: Store, ids: IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Create a new patient record and persist it
    pub fn create(&self, request: &BookingRequest) -> Result<Patient> {
        InputValidator::validate_booking(request)?;

        let now = Local::now();
        let patient = Patient {
            id: self.ids.new_id(),
            name: request.name.clone(),
            age: request.age,
            phone: request.phone.clone(),
            condition: request.condition.clone(),
            created_at: now,
            updated_at: now,
        };

        let mut patients: Vec<Patient> = self.store.read_collection(collections::PATIENTS)?;
        patients.push(patient.clone());
        self.store.write_collection(collections::PATIENTS, &patients)?;

        info!(patient_id = %patient.id, "patient created");
        Ok(patient)
    }

    /// Find the first patient whose phone equals the argument exactly
    pub fn find_by_phone(&self, phone: &str) -> Result<Option<Patient>> {
        let patients: Vec<Patient> = self.store.read_collection(collections::PATIENTS)?;
        Ok(patients.into_iter().find(|p| p.phone == phone))
    }

    /// All patient records
    pub fn list(&self) -> Result<Vec<Patient>> {
        self.store.read_collection(collections::PATIENTS)
    }
}
