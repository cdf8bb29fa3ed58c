use crate::model::{AppointmentData, Field};

/// Heading of the confirmation email body.
const HEADING: &str = "Nueva cita agendada:";

/// Renders the human-readable email body for an appointment.
///
/// One `Label: value` line per field, in [`Field::SUMMARY_ORDER`]; empty
/// values are printed as empty, not replaced by placeholders.
pub fn render_summary(data: &AppointmentData) -> String {
    let mut lines = Vec::with_capacity(Field::SUMMARY_ORDER.len() + 2);
    lines.push(HEADING.to_string());
    lines.push(String::new());
    lines.extend(
        Field::SUMMARY_ORDER
            .iter()
            .map(|&field| format!("{}: {}", field.label(), data.get(field))),
    );
    lines.join("\n")
}
