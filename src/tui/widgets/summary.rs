//! Live summary panel: the record as entered so far, plus the submit button.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::model::{AppointmentData, Field};

/// Submit button caption while idle.
pub const SUBMIT_LABEL: &str = "Confirmar cita";

/// Submit button caption while a submission is in flight.
pub const SUBMITTING_LABEL: &str = "Enviando...";

/// One line per field in summary order. Empty fields show their placeholder
/// greyed out; `Fecha` is left out until a day has been picked.
fn summary_lines(data: &AppointmentData) -> Vec<Line<'_>> {
    let label = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let placeholder = Style::default().fg(Color::DarkGray);

    Field::SUMMARY_ORDER
        .iter()
        .filter_map(|&field| {
            let value = data.get(field);
            let value_span = if value.is_empty() {
                Span::styled(field.placeholder()?, placeholder)
            } else {
                Span::raw(value)
            };
            Some(Line::from(vec![
                Span::styled(format!("{}: ", field.label()), label),
                value_span,
            ]))
        })
        .collect()
}

/// Renders the summary panel with the submit button at the bottom.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_summary(data: &AppointmentData, submitting: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Datos de tu cita ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [lines_area, button_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(summary_lines(data)).wrap(Wrap { trim: false }),
        lines_area,
    );

    let (caption, style) = if submitting {
        (SUBMITTING_LABEL, Style::default().fg(Color::DarkGray))
    } else {
        (
            SUBMIT_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };
    let button = Paragraph::new(Line::from(vec![
        Span::styled(format!("[ {caption} ]"), style),
        Span::styled("  Ctrl+S", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(button, button_area);
}
