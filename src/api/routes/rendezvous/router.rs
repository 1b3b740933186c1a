//! Router for the appointments API

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Query;
use http::StatusCode;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::planning::{Appointment, Directory, Person};
use crate::store::{Collection, Repository, append, load};

async fn load_directory(store: &dyn Repository) -> anyhow::Result<Directory> {
    let beneficiaries: Vec<Person> = load(store, Collection::Beneficiaires).await?;
    let caregivers: Vec<Person> = load(store, Collection::Auxiliaires).await?;
    Ok(Directory::new(beneficiaries, caregivers))
}

/// List appointments with their counterpart resolved for display
async fn rendezvous_list(
    State(state): State<SharedState>,
    Query(params): Query<public::RendezvousQuery>,
) -> Result<Json<Vec<public::AppointmentView>>, ApiError> {
    let store = state.store.as_ref();
    let appointments: Vec<Appointment> = load(store, Collection::Rendezvous).await?;
    let directory = load_directory(store).await?;

    let resp = appointments
        .into_iter()
        .filter(|appt| params.date.as_ref().is_none_or(|date| &appt.date == date))
        .map(|appointment| public::AppointmentView {
            client_name: appointment.client_name(&directory),
            color: appointment.kind.color(),
            label: appointment.kind.label(),
            appointment,
        })
        .collect();

    Ok(Json(resp))
}

/// Create an appointment from the planning form
async fn rendezvous_create(
    State(state): State<SharedState>,
    Json(body): Json<public::NewAppointment>,
) -> Result<Response, ApiError> {
    let appointment = body.into_appointment();
    let record = serde_json::to_value(&appointment)?;
    append(state.store.as_ref(), Collection::Rendezvous, record).await?;

    tracing::info!(
        "Created appointment {} on {} ({})",
        appointment.id,
        appointment.date,
        appointment.kind.label()
    );

    Ok((StatusCode::CREATED, Json(appointment)).into_response())
}

/// Create the appointments router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/",
        axum::routing::get(rendezvous_list).post(rendezvous_create),
    )
}
