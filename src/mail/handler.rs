use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::DeliveryError;
use super::summary::render_summary;
use crate::model::AppointmentData;

/// Message returned by a successful confirmation.
pub const CONFIRMATION_MESSAGE: &str = "Cita confirmada y email enviado exitosamente";

/// Artificial delay of [`MockMailer`] when none is configured.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Outcome shown to the user after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    /// The fixed success result.
    pub fn confirmed() -> Self {
        Self {
            success: true,
            message: CONFIRMATION_MESSAGE.to_string(),
        }
    }

    /// A failure carrying a user-facing message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<DeliveryError> for SubmissionResult {
    fn from(err: DeliveryError) -> Self {
        Self::failed(err.to_string())
    }
}

/// Accepts a completed appointment and reports whether the confirmation
/// went out.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn submit(&self, data: AppointmentData) -> Result<SubmissionResult, DeliveryError>;
}

/// Simulated mail delivery: waits, logs, confirms.
#[derive(Debug, Clone)]
pub struct MockMailer {
    delay: Duration,
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl MockMailer {
    /// Creates a mailer that waits `delay` before answering.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl SubmissionHandler for MockMailer {
    async fn submit(&self, data: AppointmentData) -> Result<SubmissionResult, DeliveryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let raw = serde_json::to_string(&data)?;
        tracing::info!(data = %raw, "Enviando email con los siguientes datos");
        tracing::info!("Contenido del email:\n{}", render_summary(&data));

        Ok(SubmissionResult::confirmed())
    }
}

/// Runs one handler call and folds any failure into a [`SubmissionResult`].
///
/// With `timeout` set, a handler that has not answered in time yields a
/// [`DeliveryError::Timeout`] result.
pub async fn dispatch(
    handler: &dyn SubmissionHandler,
    data: AppointmentData,
    timeout: Option<Duration>,
) -> SubmissionResult {
    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, handler.submit(data))
            .await
            .unwrap_or_else(|_| Err(DeliveryError::Timeout(limit))),
        None => handler.submit(data).await,
    };

    match outcome {
        Ok(result) => {
            tracing::info!(success = result.success, message = %result.message, "submission finished");
            result
        }
        Err(err) => {
            tracing::warn!(error = %err, "submission failed");
            err.into()
        }
    }
}
