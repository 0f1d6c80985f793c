use async_graphql::{Object, ID};

/// Identifier handed back by `updatePatientName`. No patient record carries it.
pub const PLACEHOLDER_PATIENT_ID: i32 = 300;

fn gql_id(id: i32) -> ID {
    ID::from(id.to_string())
}

// The wire schema declares `[Int]`, so every slot is exposed as nullable.
fn gql_slots(slots: &[i32]) -> Option<Vec<Option<i32>>> {
    Some(slots.iter().copied().map(Some).collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Doctor {
    pub doctor_id: i32,
    pub doctor_name: String,
    pub clinic_name: String,
    pub specialty: String,
    pub available_timeslots: Vec<i32>,
}

#[Object(name = "Doctor")]
impl Doctor {
    #[graphql(name = "doctor_id")]
    async fn gql_doctor_id(&self) -> ID {
        gql_id(self.doctor_id)
    }

    #[graphql(name = "doctor_name")]
    async fn gql_doctor_name(&self) -> Option<&str> {
        Some(&self.doctor_name)
    }

    #[graphql(name = "clinic_name")]
    async fn gql_clinic_name(&self) -> Option<&str> {
        Some(&self.clinic_name)
    }

    #[graphql(name = "specialty")]
    async fn gql_specialty(&self) -> Option<&str> {
        Some(&self.specialty)
    }

    #[graphql(name = "available_timeslots")]
    async fn gql_available_timeslots(&self) -> Option<Vec<Option<i32>>> {
        gql_slots(&self.available_timeslots)
    }
}

impl Doctor {
    pub fn new(
        doctor_id: i32,
        doctor_name: &str,
        clinic_name: &str,
        specialty: &str,
        available_timeslots: Vec<i32>,
    ) -> Self {
        Self {
            doctor_id,
            doctor_name: doctor_name.to_string(),
            clinic_name: clinic_name.to_string(),
            specialty: specialty.to_string(),
            available_timeslots,
        }
    }

    pub fn details(&self) -> DoctorDetails {
        DoctorDetails {
            doctor_name: self.doctor_name.clone(),
            clinic_name: self.clinic_name.clone(),
            specialty: self.specialty.clone(),
        }
    }

    /// Drops every occurrence of `timeslot`. Absent slots are not an error.
    pub fn remove_timeslot(&mut self, timeslot: i32) {
        self.available_timeslots.retain(|slot| *slot != timeslot);
    }

    /// Appends `timeslot` as-is: no dedup, no ordering.
    pub fn free_timeslot(&mut self, timeslot: i32) {
        self.available_timeslots.push(timeslot);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub patient_id: i32,
    pub patient_name: String,
    pub appointment_timeslot: Option<i32>,
}

#[Object(name = "Patient")]
impl Patient {
    #[graphql(name = "patient_id")]
    async fn gql_patient_id(&self) -> ID {
        gql_id(self.patient_id)
    }

    #[graphql(name = "patient_name")]
    async fn gql_patient_name(&self) -> Option<&str> {
        Some(&self.patient_name)
    }

    #[graphql(name = "appointment_timeslot")]
    async fn gql_appointment_timeslot(&self) -> Option<i32> {
        self.appointment_timeslot
    }
}

impl Patient {
    pub fn new(patient_id: i32, patient_name: &str, appointment_timeslot: Option<i32>) -> Self {
        Self {
            patient_id,
            patient_name: patient_name.to_string(),
            appointment_timeslot,
        }
    }
}

/// Links a doctor to a patient. The booked slot itself lives on the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appointment {
    pub appointment_id: i32,
    pub doctor_id: i32,
    pub patient_id: i32,
}

#[Object(name = "Appointment")]
impl Appointment {
    #[graphql(name = "appointment_id")]
    async fn gql_appointment_id(&self) -> ID {
        gql_id(self.appointment_id)
    }

    #[graphql(name = "doctor_id")]
    async fn gql_doctor_id(&self) -> Option<ID> {
        Some(gql_id(self.doctor_id))
    }

    #[graphql(name = "patient_id")]
    async fn gql_patient_id(&self) -> Option<ID> {
        Some(gql_id(self.patient_id))
    }
}

impl Appointment {
    pub fn new(appointment_id: i32, doctor_id: i32, patient_id: i32) -> Self {
        Self {
            appointment_id,
            doctor_id,
            patient_id,
        }
    }
}

// Response shapes

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorDetails {
    pub doctor_name: String,
    pub clinic_name: String,
    pub specialty: String,
}

#[Object(name = "DoctorDetails")]
impl DoctorDetails {
    #[graphql(name = "doctor_name")]
    async fn gql_doctor_name(&self) -> Option<&str> {
        Some(&self.doctor_name)
    }

    #[graphql(name = "clinic_name")]
    async fn gql_clinic_name(&self) -> Option<&str> {
        Some(&self.clinic_name)
    }

    #[graphql(name = "specialty")]
    async fn gql_specialty(&self) -> Option<&str> {
        Some(&self.specialty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentConfirmation {
    pub doctor_name: String,
    pub available_timeslots: Vec<i32>,
    pub patient_name: String,
    pub appointment_timeslot: Option<i32>,
}

#[Object(name = "AppointmentConfirmation")]
impl AppointmentConfirmation {
    #[graphql(name = "doctor_name")]
    async fn gql_doctor_name(&self) -> Option<&str> {
        Some(&self.doctor_name)
    }

    #[graphql(name = "available_timeslots")]
    async fn gql_available_timeslots(&self) -> Option<Vec<Option<i32>>> {
        gql_slots(&self.available_timeslots)
    }

    #[graphql(name = "patient_name")]
    async fn gql_patient_name(&self) -> Option<&str> {
        Some(&self.patient_name)
    }

    #[graphql(name = "appointment_timeslot")]
    async fn gql_appointment_timeslot(&self) -> Option<i32> {
        self.appointment_timeslot
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctorSlotFreed {
    pub doctor_id: i32,
    pub available_timeslots: Vec<i32>,
}

#[Object(name = "DoctorSlotFreed")]
impl DoctorSlotFreed {
    #[graphql(name = "doctor_id")]
    async fn gql_doctor_id(&self) -> ID {
        gql_id(self.doctor_id)
    }

    #[graphql(name = "available_timeslots")]
    async fn gql_available_timeslots(&self) -> Option<Vec<Option<i32>>> {
        gql_slots(&self.available_timeslots)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatientAppointment {
    pub patient_id: i32,
    pub patient_name: Option<String>,
    pub appointment_timeslot: Option<i32>,
}

#[Object(name = "NewPatientAppointment")]
impl NewPatientAppointment {
    #[graphql(name = "patient_id")]
    async fn gql_patient_id(&self) -> ID {
        gql_id(self.patient_id)
    }

    #[graphql(name = "patient_name")]
    async fn gql_patient_name(&self) -> Option<&str> {
        self.patient_name.as_deref()
    }

    #[graphql(name = "appointment_timeslot")]
    async fn gql_appointment_timeslot(&self) -> Option<i32> {
        self.appointment_timeslot
    }
}
