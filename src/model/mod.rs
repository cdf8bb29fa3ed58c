//! Domain model: the appointment record, input masks, validation and the
//! month calendar.

mod appointment;
mod calendar;
mod format;
mod validation;

pub use appointment::{AppointmentData, Field, Mask};
pub use calendar::{
    CalendarCell, CalendarView, MONTH_NAMES, MonthStep, WEEKDAY_HEADERS, days_in_month,
    fecha_string, first_weekday_of_month,
};
pub use format::{CEDULA_MAX_DIGITS, TELEFONO_MAX_DIGITS, digits, format_cedula, format_telefono};
pub use validation::{FieldError, FormErrors, is_valid_email, validate};
