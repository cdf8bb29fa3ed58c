//! One-line banner for the last submission result.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::mail::SubmissionResult;

/// Renders `result` in green on success, red on failure.
///
/// Renders nothing before the first submission has finished.
#[mutants::skip]
pub fn draw_banner(result: Option<&SubmissionResult>, frame: &mut Frame, area: Rect) {
    let Some(result) = result else {
        return;
    };

    let (marker, color) = if result.success {
        ("\u{2714}", Color::Green)
    } else {
        ("\u{2716}", Color::Red)
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(format!("{marker} "), style),
        Span::styled(result.message.as_str(), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
