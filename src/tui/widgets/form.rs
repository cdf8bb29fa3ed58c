//! Focus ring and text inputs for the booking form.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{Field, FieldError};

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSlot {
    /// A single-line text input bound to a record field.
    Input(Field),
    /// The month calendar.
    Calendar,
}

/// Ordered focus ring over the form's slots.
#[derive(Debug, Clone)]
pub struct Form {
    slots: Vec<FormSlot>,
    focus: usize,
}

impl Form {
    /// Creates a form over `slots`. Focus starts on the first one.
    pub fn new(slots: Vec<FormSlot>) -> Self {
        Self { slots, focus: 0 }
    }

    /// The focused slot, or `None` for an empty form.
    pub fn focused(&self) -> Option<FormSlot> {
        self.slots.get(self.focus).copied()
    }

    /// Returns `true` if `slot` has focus.
    pub fn is_focused(&self, slot: FormSlot) -> bool {
        self.focused() == Some(slot)
    }

    /// Moves focus to the next slot, wrapping around.
    pub fn focus_next(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        self.focus = (self.focus + 1) % self.slots.len();
    }

    /// Moves focus to the previous slot, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.slots.is_empty() {
            return;
        }
        self.focus = (self.focus + self.slots.len() - 1) % self.slots.len();
    }
}

/// What one text input shows.
#[derive(Debug, Clone, Copy)]
pub struct InputView<'a> {
    pub field: Field,
    pub value: &'a str,
    pub error: Option<FieldError>,
    pub focused: bool,
}

/// Renders `inputs` stacked vertically, three rows each.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_inputs(inputs: &[InputView<'_>], frame: &mut Frame, area: Rect) {
    let row_height = 3_u16;
    let constraints: Vec<Constraint> = inputs
        .iter()
        .map(|_| Constraint::Length(row_height))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (input, row) in inputs.iter().zip(rows.iter()) {
        let border_color = if input.error.is_some() {
            Color::Red
        } else if input.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(format!("{} *", input.field.label()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut spans = Vec::new();
        let placeholder = input.field.placeholder();
        if input.value.is_empty()
            && !input.focused
            && let Some(placeholder) = placeholder
        {
            spans.push(Span::styled(placeholder, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::raw(input.value));
        }
        if input.focused {
            spans.push(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), *row);

        if let Some(err) = input.error {
            let err_area = Rect {
                x: row.x + 2,
                y: row.y + row_height.saturating_sub(1),
                width: row.width.saturating_sub(4),
                height: 1,
            };
            let err_line = Paragraph::new(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(err_line, err_area);
        }
    }
}
