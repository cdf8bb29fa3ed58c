use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::appointment::{AppointmentData, Field};

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("campo obligatorio")]
    Required,
    #[error("correo electrónico inválido")]
    InvalidEmail,
}

/// Fields that failed the last validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<Field, FieldError>,
}

impl FormErrors {
    /// Returns `true` when no field is flagged.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of flagged fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if `field` is flagged invalid.
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    /// Returns the reason `field` is flagged, if it is.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.fields.get(&field).copied()
    }

    /// Flags `field`, replacing any earlier reason.
    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.fields.insert(field, error);
    }

    /// Clears the flag on `field`. Returns `true` if it was set.
    pub fn clear(&mut self, field: Field) -> bool {
        self.fields.remove(&field).is_some()
    }

    /// Flagged fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.keys().copied()
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Shape check for an email address: `local@domain.tld`, no whitespace.
///
/// Not an RFC 5322 parser.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validates a whole record.
///
/// Every field is required (checked on the trimmed value). A `correo` that
/// is not blank must also pass [`is_valid_email`]; the check runs on the raw
/// value, so surrounding whitespace fails it.
pub fn validate(data: &AppointmentData) -> FormErrors {
    let mut errors = FormErrors::default();
    for field in Field::ALL {
        if data.get(field).trim().is_empty() {
            errors.insert(field, FieldError::Required);
        }
    }
    if !data.correo.trim().is_empty() && !is_valid_email(&data.correo) {
        errors.insert(Field::Correo, FieldError::InvalidEmail);
    }
    errors
}
