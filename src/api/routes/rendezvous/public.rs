//! Public types for the appointments API
use serde::{Deserialize, Serialize};

use crate::planning::Appointment;

pub use crate::planning::NewAppointment;

#[derive(Deserialize)]
pub struct RendezvousQuery {
    /// Only appointments on this `YYYY-MM-DD` date
    pub date: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub client_name: String,
    pub color: &'static str,
    pub label: &'static str,
}
