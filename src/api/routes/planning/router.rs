//! Router for the planning API

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::Query;
use chrono::Local;
use http::StatusCode;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::planning::{Appointment, YearMonth, build_month_grid};
use crate::store::{Collection, load};

async fn planning_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::PlanningQuery>,
) -> Result<Response, ApiError> {
    let today = Local::now().date_naive();
    let current = YearMonth::from_date(today);

    // Default to the current month for whatever wasn't specified
    let year = params.year.unwrap_or(current.year());
    let month = params.month.unwrap_or(current.month() as i32);

    let Some(month) = YearMonth::normalize(year, month) else {
        return Ok((
            StatusCode::BAD_REQUEST,
            format!("Year {} is out of range", year),
        )
            .into_response());
    };

    let appointments: Vec<Appointment> =
        load(state.store.as_ref(), Collection::Rendezvous).await?;
    let grid: public::MonthGrid = build_month_grid(month, &appointments, today);

    Ok(Json(grid).into_response())
}

/// Create the planning router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(planning_handler))
}
