//! Public types for the planning API
use serde::Deserialize;

pub use crate::planning::{DayCell, MonthGrid};

#[derive(Deserialize)]
pub struct PlanningQuery {
    pub year: Option<i32>,
    /// Zero-based, out of range values roll into adjacent years
    pub month: Option<i32>,
}
