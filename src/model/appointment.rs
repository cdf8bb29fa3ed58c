use serde::{Deserialize, Serialize};

use super::format::{format_cedula, format_telefono};

/// One field of the appointment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Tramite,
    Nombres,
    Correo,
    Cedula,
    Direccion,
    Institucion,
    Apellidos,
    Telefono,
    Fecha,
}

/// Input mask applied to a field on every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// Value is stored as typed.
    None,
    /// National ID, `000-00000000-0`.
    Cedula,
    /// Phone number, `000-000-0000`.
    Telefono,
}

impl Field {
    /// All fields, in declaration order. Every one of them is required.
    pub const ALL: [Field; 9] = [
        Field::Tramite,
        Field::Nombres,
        Field::Correo,
        Field::Cedula,
        Field::Direccion,
        Field::Institucion,
        Field::Apellidos,
        Field::Telefono,
        Field::Fecha,
    ];

    /// Order used by the summary panel and the confirmation email.
    pub const SUMMARY_ORDER: [Field; 9] = [
        Field::Tramite,
        Field::Institucion,
        Field::Nombres,
        Field::Apellidos,
        Field::Telefono,
        Field::Correo,
        Field::Cedula,
        Field::Direccion,
        Field::Fecha,
    ];

    /// Record key, matching the serialized field name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Tramite => "tramite",
            Self::Nombres => "nombres",
            Self::Correo => "correo",
            Self::Cedula => "cedula",
            Self::Direccion => "direccion",
            Self::Institucion => "institucion",
            Self::Apellidos => "apellidos",
            Self::Telefono => "telefono",
            Self::Fecha => "fecha",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tramite => "Trámite",
            Self::Nombres => "Nombres",
            Self::Correo => "Correo electrónico",
            Self::Cedula => "Cédula",
            Self::Direccion => "Dirección",
            Self::Institucion => "Institución",
            Self::Apellidos => "Apellidos",
            Self::Telefono => "Teléfono",
            Self::Fecha => "Fecha",
        }
    }

    /// Example value shown while the field is still empty.
    ///
    /// `Fecha` has none: its summary row is hidden until a day is picked.
    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Tramite | Self::Institucion => Some("Por defecto"),
            Self::Nombres => Some("John Doe"),
            Self::Correo => Some("johndoe@gmail.com"),
            Self::Cedula => Some("000-00000000-0"),
            Self::Direccion => Some("Calle ej. #1, Provincia, País."),
            Self::Apellidos => Some("Genez Suarez"),
            Self::Telefono => Some("000-000-0000"),
            Self::Fecha => None,
        }
    }

    /// The mask applied to raw keystrokes in this field.
    pub fn mask(self) -> Mask {
        match self {
            Self::Cedula => Mask::Cedula,
            Self::Telefono => Mask::Telefono,
            _ => Mask::None,
        }
    }

    /// Applies this field's mask to a raw input value.
    pub fn apply_mask(self, raw: &str) -> String {
        match self.mask() {
            Mask::None => raw.to_string(),
            Mask::Cedula => format_cedula(raw),
            Mask::Telefono => format_telefono(raw),
        }
    }
}

/// The appointment request collected by the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentData {
    pub tramite: String,
    pub nombres: String,
    pub correo: String,
    pub cedula: String,
    pub direccion: String,
    pub institucion: String,
    pub apellidos: String,
    pub telefono: String,
    pub fecha: String,
}

impl AppointmentData {
    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Tramite => &self.tramite,
            Field::Nombres => &self.nombres,
            Field::Correo => &self.correo,
            Field::Cedula => &self.cedula,
            Field::Direccion => &self.direccion,
            Field::Institucion => &self.institucion,
            Field::Apellidos => &self.apellidos,
            Field::Telefono => &self.telefono,
            Field::Fecha => &self.fecha,
        }
    }

    /// Overwrites the value of `field`.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Tramite => &mut self.tramite,
            Field::Nombres => &mut self.nombres,
            Field::Correo => &mut self.correo,
            Field::Cedula => &mut self.cedula,
            Field::Direccion => &mut self.direccion,
            Field::Institucion => &mut self.institucion,
            Field::Apellidos => &mut self.apellidos,
            Field::Telefono => &mut self.telefono,
            Field::Fecha => &mut self.fecha,
        };
        *slot = value.into();
    }
}
