//! Router for the raw collection API
//!
//! Mirrors the key-value surface the dashboard pages read and write:
//! each collection is a JSON array stored under a fixed key.

use axum::{
    Json, Router,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde_json::Value;

use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::store::Collection;

fn unknown_collection(name: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        format!("Collection {} not found", name),
    )
        .into_response()
}

async fn collection_get(
    State(state): State<SharedState>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(collection) = name.parse::<Collection>() else {
        return Ok(unknown_collection(&name));
    };

    let records = state.store.get(collection).await?;
    Ok(Json(records).into_response())
}

async fn collection_put(
    State(state): State<SharedState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Response, ApiError> {
    let Ok(collection) = name.parse::<Collection>() else {
        return Ok(unknown_collection(&name));
    };

    let Value::Array(records) = body else {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Expected a JSON array for {}", collection),
        )
            .into_response());
    };

    tracing::debug!("Replacing {} with {} records", collection, records.len());
    state.store.put(collection, records).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Create the store router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/{collection}",
        axum::routing::get(collection_get).put(collection_put),
    )
}
