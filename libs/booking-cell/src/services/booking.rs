use tracing::{debug, info, warn};

use crate::error::BookingError;
use crate::models::{
    Appointment, AppointmentConfirmation, Doctor, DoctorDetails, DoctorSlotFreed,
    NewPatientAppointment, Patient, PLACEHOLDER_PATIENT_ID,
};
use crate::store::{ClinicStore, SharedStore};

/// Resolver logic for the booking operations.
///
/// Every method holds the store lock for its whole body, so a mutation is
/// never observed half-applied. Lookups always complete before the first
/// write: a miss leaves the store exactly as it was.
#[derive(Clone)]
pub struct BookingService {
    store: SharedStore,
}

impl BookingService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Service over a fresh copy of the startup records.
    pub fn seeded() -> Self {
        Self::new(ClinicStore::seeded().into_shared())
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Name, clinic and specialty of a doctor, or `None` when no doctor matches.
    pub async fn doctor_details(&self, doctor_id: i32) -> Option<DoctorDetails> {
        debug!("Fetching details for doctor {}", doctor_id);

        let store = self.store.read().await;
        let details = store.doctor(doctor_id).map(Doctor::details);
        if details.is_none() {
            warn!("Doctor {} not found", doctor_id);
        }
        details
    }

    /// Current open slots of a doctor, or `None` when no doctor matches.
    pub async fn doctor_slots(&self, doctor_id: i32) -> Option<Vec<i32>> {
        debug!("Fetching available timeslots for doctor {}", doctor_id);

        let store = self.store.read().await;
        let slots = store.doctor(doctor_id).map(|d| d.available_timeslots.clone());
        if slots.is_none() {
            warn!("Doctor {} not found", doctor_id);
        }
        slots
    }

    /// Takes `appointment_timeslot` out of the doctor's pool and assigns it to the patient.
    ///
    /// The slot is not required to be open. A patient's previous slot is
    /// overwritten without going back to any doctor's pool.
    pub async fn book_appointment(
        &self,
        doctor_id: i32,
        patient_id: i32,
        appointment_timeslot: Option<i32>,
    ) -> Result<AppointmentConfirmation, BookingError> {
        debug!(
            "Booking timeslot {:?} with doctor {} for patient {}",
            appointment_timeslot, doctor_id, patient_id
        );

        let mut store = self.store.write().await;
        let (doctor, patient) = store
            .doctor_and_patient_mut(doctor_id, patient_id)
            .inspect_err(|e| warn!("Booking rejected: {}", e))?;

        if let Some(timeslot) = appointment_timeslot {
            doctor.remove_timeslot(timeslot);
        }
        patient.appointment_timeslot = appointment_timeslot;

        info!(
            "Patient {} booked timeslot {:?} with doctor {}",
            patient_id, appointment_timeslot, doctor_id
        );

        Ok(AppointmentConfirmation {
            doctor_name: doctor.doctor_name.clone(),
            available_timeslots: doctor.available_timeslots.clone(),
            patient_name: patient.patient_name.clone(),
            appointment_timeslot: patient.appointment_timeslot,
        })
    }

    /// Returns the patient's current slot to the doctor named by the appointment.
    ///
    /// The appointment record and the patient's slot are left in place.
    pub async fn cancel_appointment(&self, appointment_id: i32) -> Result<DoctorSlotFreed, BookingError> {
        debug!("Cancelling appointment {}", appointment_id);

        let mut store = self.store.write().await;
        let appointment = Self::find_appointment(&store, appointment_id)?;
        let freed = store
            .patient(appointment.patient_id)
            .ok_or(BookingError::PatientNotFound(appointment.patient_id))
            .inspect_err(|e| warn!("Cancellation rejected: {}", e))?
            .appointment_timeslot;
        let doctor = store
            .doctor_mut(appointment.doctor_id)
            .ok_or(BookingError::DoctorNotFound(appointment.doctor_id))
            .inspect_err(|e| warn!("Cancellation rejected: {}", e))?;

        match freed {
            Some(timeslot) => {
                doctor.free_timeslot(timeslot);
                info!(
                    "Appointment {} cancelled, timeslot {} returned to doctor {}",
                    appointment_id, timeslot, doctor.doctor_id
                );
            }
            None => info!(
                "Appointment {} cancelled, patient {} held no timeslot",
                appointment_id, appointment.patient_id
            ),
        }

        Ok(DoctorSlotFreed {
            doctor_id: doctor.doctor_id,
            available_timeslots: doctor.available_timeslots.clone(),
        })
    }

    /// Builds a patient appointment under the placeholder id carrying `patient_name`
    /// and the slot of the appointment's patient. Nothing is written back.
    pub async fn update_patient_name(
        &self,
        appointment_id: i32,
        patient_name: Option<String>,
    ) -> Result<NewPatientAppointment, BookingError> {
        debug!("Renaming patient on appointment {} to {:?}", appointment_id, patient_name);

        let store = self.store.read().await;
        let appointment = Self::find_appointment(&store, appointment_id)?;
        let patient = store
            .patient(appointment.patient_id)
            .ok_or(BookingError::PatientNotFound(appointment.patient_id))
            .inspect_err(|e| warn!("Rename rejected: {}", e))?;

        Ok(NewPatientAppointment {
            patient_id: PLACEHOLDER_PATIENT_ID,
            patient_name,
            appointment_timeslot: patient.appointment_timeslot,
        })
    }

    pub async fn doctors(&self) -> Vec<Doctor> {
        self.store.read().await.doctors.clone()
    }

    pub async fn patients(&self) -> Vec<Patient> {
        self.store.read().await.patients.clone()
    }

    pub async fn appointments(&self) -> Vec<Appointment> {
        self.store.read().await.appointments.clone()
    }

    fn find_appointment(store: &ClinicStore, appointment_id: i32) -> Result<Appointment, BookingError> {
        store.appointment(appointment_id).copied().ok_or_else(|| {
            warn!("Appointment {} not found", appointment_id);
            BookingError::AppointmentNotFound(appointment_id)
        })
    }
}
