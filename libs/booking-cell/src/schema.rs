use async_graphql::{Context, EmptySubscription, ErrorExtensions, Object, PathSegment, Result, Schema, ID};

use crate::error::BookingError;
use crate::models::{
    Appointment, AppointmentConfirmation, Doctor, DoctorDetails, DoctorSlotFreed,
    NewPatientAppointment, Patient,
};
use crate::services::BookingService;

pub type ClinicSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the booking service available to resolvers as context data.
pub fn build_schema(service: BookingService) -> ClinicSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(service)
        .finish()
}

/// Identifiers arrive as GraphQL `ID` strings and are parsed once, here.
pub fn parse_id(kind: &'static str, id: &ID) -> Result<i32, BookingError> {
    id.0.trim().parse::<i32>().map_err(|_| BookingError::InvalidId {
        kind,
        value: id.0.clone(),
    })
}

/// Records a booking failure against the current field and resolves it to null,
/// leaving sibling fields of the same operation intact.
fn null_on_error<T>(ctx: &Context<'_>, result: Result<T, BookingError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let mut error = e.extend().into_server_error(ctx.item.pos);
            if let Some(node) = &ctx.path_node {
                error.path = node.to_string_vec().into_iter().map(PathSegment::Field).collect();
            }
            ctx.add_error(error);
            None
        }
    }
}

#[derive(Default)]
pub struct QueryRoot;

#[Object(rename_args = "snake_case")]
impl QueryRoot {
    /// Name, clinic and specialty of a doctor; null when the doctor does not exist.
    async fn get_doctor_details(&self, ctx: &Context<'_>, doctor_id: ID) -> Result<Option<DoctorDetails>> {
        let service = ctx.data::<BookingService>()?;
        let Some(doctor_id) = null_on_error(ctx, parse_id("doctor", &doctor_id)) else {
            return Ok(None);
        };
        Ok(service.doctor_details(doctor_id).await)
    }

    /// Open timeslots of a doctor; null when the doctor does not exist.
    async fn get_doctor_slots(&self, ctx: &Context<'_>, doctor_id: ID) -> Result<Option<Vec<Option<i32>>>> {
        let service = ctx.data::<BookingService>()?;
        let Some(doctor_id) = null_on_error(ctx, parse_id("doctor", &doctor_id)) else {
            return Ok(None);
        };
        Ok(service
            .doctor_slots(doctor_id)
            .await
            .map(|slots| slots.into_iter().map(Some).collect()))
    }

    async fn doctors(&self, ctx: &Context<'_>) -> Result<Vec<Doctor>> {
        Ok(ctx.data::<BookingService>()?.doctors().await)
    }

    async fn patients(&self, ctx: &Context<'_>) -> Result<Vec<Patient>> {
        Ok(ctx.data::<BookingService>()?.patients().await)
    }

    async fn appointments(&self, ctx: &Context<'_>) -> Result<Vec<Appointment>> {
        Ok(ctx.data::<BookingService>()?.appointments().await)
    }
}

/// Lookup misses come back as `NOT_FOUND` errors with the field set to null.
#[derive(Default)]
pub struct MutationRoot;

#[Object(rename_args = "snake_case")]
impl MutationRoot {
    async fn book_appointment(
        &self,
        ctx: &Context<'_>,
        doctor_id: ID,
        patient_id: ID,
        appointment_timeslot: Option<i32>,
    ) -> Result<Option<AppointmentConfirmation>> {
        let service = ctx.data::<BookingService>()?;
        let ids = parse_id("doctor", &doctor_id)
            .and_then(|doctor_id| parse_id("patient", &patient_id).map(|patient_id| (doctor_id, patient_id)));
        let Some((doctor_id, patient_id)) = null_on_error(ctx, ids) else {
            return Ok(None);
        };
        let result = service
            .book_appointment(doctor_id, patient_id, appointment_timeslot)
            .await;
        Ok(null_on_error(ctx, result))
    }

    async fn cancel_appointment(&self, ctx: &Context<'_>, appointment_id: ID) -> Result<Option<DoctorSlotFreed>> {
        let service = ctx.data::<BookingService>()?;
        let Some(appointment_id) = null_on_error(ctx, parse_id("appointment", &appointment_id)) else {
            return Ok(None);
        };
        let result = service.cancel_appointment(appointment_id).await;
        Ok(null_on_error(ctx, result))
    }

    async fn update_patient_name(
        &self,
        ctx: &Context<'_>,
        appointment_id: ID,
        patient_name: Option<String>,
    ) -> Result<Option<NewPatientAppointment>> {
        let service = ctx.data::<BookingService>()?;
        let Some(appointment_id) = null_on_error(ctx, parse_id("appointment", &appointment_id)) else {
            return Ok(None);
        };
        let result = service.update_patient_name(appointment_id, patient_name).await;
        Ok(null_on_error(ctx, result))
    }
}
