//! Submission handler: the stand-in for confirmation email delivery.
//!
//! The form hands a completed [`AppointmentData`](crate::model::AppointmentData)
//! to a [`SubmissionHandler`] and shows whatever [`SubmissionResult`] comes
//! back. [`MockMailer`] is the only implementation; it waits, logs the record
//! and a rendered summary, and always confirms.

mod error;
mod handler;
mod summary;

pub use error::DeliveryError;
pub use handler::{
    CONFIRMATION_MESSAGE, DEFAULT_DELAY, MockMailer, SubmissionHandler, SubmissionResult, dispatch,
};
pub use summary::render_summary;
