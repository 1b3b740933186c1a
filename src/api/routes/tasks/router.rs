//! Router for the tasks API

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
use crate::store::{Collection, load};
use crate::tasks::{Task, TaskStatus, count_by_status, filter_by_status};

async fn tasks_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::TasksQuery>,
) -> Result<Response, ApiError> {
    let status = match params.statut.as_deref() {
        None | Some("") => None,
        Some(raw) => match raw.parse::<TaskStatus>() {
            Ok(status) => Some(status),
            Err(err) => return Ok((StatusCode::BAD_REQUEST, err.to_string()).into_response()),
        },
    };

    let tasks: Vec<Task> = load(state.store.as_ref(), Collection::Taches).await?;

    // Counters always cover every task so the tabs keep their totals
    let counts = count_by_status(&tasks);
    let tasks = filter_by_status(&tasks, status);

    Ok(Json(public::TasksResponse { tasks, counts }).into_response())
}

/// Create the tasks router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", axum::routing::get(tasks_handler))
}
