//! API routes module

pub mod planning;
pub mod rendezvous;
mod store;
pub mod tasks;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Raw collections, what the dashboard used to keep in local storage
        .nest("/store", store::router())
        // Month grid
        .nest("/planning", planning::router())
        // Appointment list and creation
        .nest("/rendezvous", rendezvous::router())
        // Tasks with status filter
        .nest("/taches", tasks::router())
}
