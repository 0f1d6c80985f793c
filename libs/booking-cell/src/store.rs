use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::BookingError;
use crate::models::{Appointment, Doctor, Patient};

/// Store handle shared between the schema context and the service layer.
pub type SharedStore = Arc<RwLock<ClinicStore>>;

/// In-memory record sets. Lookups are linear scans in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClinicStore {
    pub doctors: Vec<Doctor>,
    pub patients: Vec<Patient>,
    pub appointments: Vec<Appointment>,
}

impl ClinicStore {
    pub fn new(doctors: Vec<Doctor>, patients: Vec<Patient>, appointments: Vec<Appointment>) -> Self {
        Self {
            doctors,
            patients,
            appointments,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Records the service starts with.
    pub fn seeded() -> Self {
        Self::new(
            vec![
                Doctor::new(1, "alpha", "clinic1", "general_physician", (1..=16).collect()),
                Doctor::new(
                    2,
                    "beta",
                    "clinic2",
                    "gynecologist",
                    std::iter::once(1).chain(3..=16).collect(),
                ),
                Doctor::new(
                    3,
                    "gamma",
                    "clinic3",
                    "orthopedic",
                    [1, 2].into_iter().chain(4..=16).collect(),
                ),
            ],
            vec![
                Patient::new(100, "alice", Some(2)),
                Patient::new(200, "bob", Some(3)),
            ],
            vec![Appointment::new(1000, 2, 100), Appointment::new(2000, 3, 200)],
        )
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn doctor(&self, doctor_id: i32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.doctor_id == doctor_id)
    }

    pub fn doctor_mut(&mut self, doctor_id: i32) -> Option<&mut Doctor> {
        self.doctors.iter_mut().find(|d| d.doctor_id == doctor_id)
    }

    pub fn patient(&self, patient_id: i32) -> Option<&Patient> {
        self.patients.iter().find(|p| p.patient_id == patient_id)
    }

    pub fn appointment(&self, appointment_id: i32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.appointment_id == appointment_id)
    }

    /// Resolves both sides of a booking at once. The doctor is looked up first,
    /// so a double miss reports the doctor.
    pub fn doctor_and_patient_mut(
        &mut self,
        doctor_id: i32,
        patient_id: i32,
    ) -> Result<(&mut Doctor, &mut Patient), BookingError> {
        let doctor = self
            .doctors
            .iter_mut()
            .find(|d| d.doctor_id == doctor_id)
            .ok_or(BookingError::DoctorNotFound(doctor_id))?;
        let patient = self
            .patients
            .iter_mut()
            .find(|p| p.patient_id == patient_id)
            .ok_or(BookingError::PatientNotFound(patient_id))?;
        Ok((doctor, patient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_matches_startup_records() {
        let store = ClinicStore::seeded();

        assert_eq!(store.doctors.len(), 3);
        assert_eq!(store.doctor(1).unwrap().available_timeslots, (1..=16).collect::<Vec<_>>());
        assert_eq!(
            store.doctor(2).unwrap().available_timeslots,
            vec![1, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
        );
        assert_eq!(
            store.doctor(3).unwrap().available_timeslots,
            vec![1, 2, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
        );
        assert_eq!(store.patient(100).unwrap().appointment_timeslot, Some(2));
        assert_eq!(store.patient(200).unwrap().patient_name, "bob");
        assert_eq!(store.appointment(2000), Some(&Appointment::new(2000, 3, 200)));
    }

    #[test]
    fn test_lookup_miss_returns_none() {
        let mut store = ClinicStore::seeded();

        assert!(store.doctor(999).is_none());
        assert!(store.doctor_mut(999).is_none());
        assert!(store.patient(999).is_none());
        assert!(store.appointment(999).is_none());
        assert!(ClinicStore::empty().doctor(1).is_none());
    }

    #[test]
    fn test_doctor_and_patient_mut_reports_doctor_first() {
        let mut store = ClinicStore::seeded();

        assert_eq!(
            store.doctor_and_patient_mut(999, 998).unwrap_err(),
            BookingError::DoctorNotFound(999)
        );
        assert_eq!(
            store.doctor_and_patient_mut(1, 998).unwrap_err(),
            BookingError::PatientNotFound(998)
        );

        let (doctor, patient) = store.doctor_and_patient_mut(1, 100).unwrap();
        doctor.remove_timeslot(1);
        patient.appointment_timeslot = Some(1);

        assert!(!store.doctor(1).unwrap().available_timeslots.contains(&1));
        assert_eq!(store.patient(100).unwrap().appointment_timeslot, Some(1));
    }

    #[test]
    fn test_timeslot_helpers_keep_duplicates_semantics() {
        let mut doctor = Doctor::new(9, "delta", "clinic9", "dermatologist", vec![4, 5, 4, 6]);

        doctor.remove_timeslot(4);
        assert_eq!(doctor.available_timeslots, vec![5, 6]);

        doctor.remove_timeslot(42);
        assert_eq!(doctor.available_timeslots, vec![5, 6]);

        doctor.free_timeslot(5);
        assert_eq!(doctor.available_timeslots, vec![5, 6, 5]);
    }
}
