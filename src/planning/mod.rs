//! Appointment planning: the record model, client references and the
//! month grid shown on the planning page.
pub mod appointment;
pub mod client;
pub mod grid;

pub use appointment::{Appointment, AppointmentType, NewAppointment, Recurrence};
pub use client::{ClientRef, Directory, Person};
pub use grid::{DayCell, MonthGrid, YearMonth, build_month_grid, days_in_month};
