//! Month grid widget for picking the appointment date.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{CalendarCell, CalendarView, WEEKDAY_HEADERS};

/// Width of one day column, in terminal cells.
const CELL_WIDTH: usize = 3;

/// Rows needed to draw any month: header, weekday row, six weeks, borders.
pub const CALENDAR_HEIGHT: u16 = 10;

/// Columns needed to draw the grid, borders included.
pub const CALENDAR_WIDTH: u16 = (CELL_WIDTH * 7) as u16 + 2;

/// Lines of the grid: month header, weekday headers, then one line per week.
///
/// `cursor` marks the day the keyboard is on; `None` when the calendar does
/// not have focus.
fn calendar_lines(view: &CalendarView, cursor: Option<u32>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(8);

    lines.push(Line::from(vec![
        Span::styled("< ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} {}", view.month_name(), view.year()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" >", Style::default().fg(Color::DarkGray)),
    ]));

    lines.push(Line::from(
        WEEKDAY_HEADERS
            .iter()
            .map(|h| {
                Span::styled(
                    format!("{h:>width$}", width = CELL_WIDTH - 1) + " ",
                    Style::default().fg(Color::DarkGray),
                )
            })
            .collect::<Vec<_>>(),
    ));

    let selected = view.selected_day();
    for week in view.cells().chunks(7) {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match *cell {
                CalendarCell::Blank => Span::raw(" ".repeat(CELL_WIDTH)),
                CalendarCell::Day(day) => {
                    let mut style = Style::default();
                    if selected == Some(day) {
                        style = style.fg(Color::White).bg(Color::Blue);
                    }
                    if cursor == Some(day) {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    Span::styled(format!("{day:>2} "), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// Renders the calendar inside a bordered block.
///
/// The border is red when the date is flagged and yellow while focused.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_calendar(
    view: &CalendarView,
    cursor: Option<u32>,
    invalid: bool,
    frame: &mut Frame,
    area: Rect,
) {
    let border_color = if invalid {
        Color::Red
    } else if cursor.is_some() {
        Color::Yellow
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Fecha * ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let paragraph = Paragraph::new(calendar_lines(view, cursor))
        .alignment(Alignment::Left)
        .block(block);
    frame.render_widget(paragraph, area);
}
