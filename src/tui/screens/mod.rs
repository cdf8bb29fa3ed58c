//! TUI screen implementations.

pub mod appointment;

pub use appointment::{AppointmentState, draw_appointment};
