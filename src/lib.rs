//! Appointment booking form for the terminal.
//!
//! The user fills in the nine appointment fields, picks a date on a month
//! calendar and submits. A simulated mailer logs the request and answers
//! with a confirmation.

pub mod config;
pub mod controller;
pub mod mail;
pub mod model;
pub mod tui;
