use std::time::Duration;

/// Ways a confirmation dispatch can fail.
///
/// The `Display` text is shown to the user in the result banner.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The handler did not answer within the configured timeout.
    #[error("El envío tardó más de {} ms; intente de nuevo", .0.as_millis())]
    Timeout(Duration),

    /// The mail service refused the message.
    #[error("El servicio de correo rechazó la solicitud: {0}")]
    Rejected(String),

    /// The mail service could not be reached.
    #[error("No se pudo contactar el servicio de correo: {0}")]
    Transport(String),

    /// The record could not be encoded for sending.
    #[error("No se pudo preparar el correo: {0}")]
    Encode(#[from] serde_json::Error),
}
