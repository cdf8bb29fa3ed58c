//! Appointment booking screen: the inputs, the calendar and the summary panel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::controller::FormController;
use crate::model::{CalendarView, Field, MonthStep};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::{
    CALENDAR_HEIGHT, CALENDAR_WIDTH, Form, FormSlot, InputView, draw_banner, draw_calendar,
    draw_inputs, draw_summary,
};

/// Inputs drawn in the left column, top to bottom.
const LEFT_COLUMN: [Field; 5] = [
    Field::Tramite,
    Field::Nombres,
    Field::Correo,
    Field::Cedula,
    Field::Direccion,
];

/// Inputs drawn in the right column, above the calendar.
const RIGHT_COLUMN: [Field; 3] = [Field::Institucion, Field::Apellidos, Field::Telefono];

/// State for the booking screen.
#[derive(Debug, Clone)]
pub struct AppointmentState {
    form: Form,
    controller: FormController,
    /// Day the calendar keyboard cursor is on, always within the shown month.
    cursor: u32,
}

impl AppointmentState {
    /// Creates an empty form showing `calendar`.
    pub fn new(calendar: CalendarView) -> Self {
        let cursor = calendar.selected_day().unwrap_or(1);
        let slots = LEFT_COLUMN
            .iter()
            .chain(RIGHT_COLUMN.iter())
            .map(|&field| FormSlot::Input(field))
            .chain(std::iter::once(FormSlot::Calendar))
            .collect();
        Self {
            form: Form::new(slots),
            controller: FormController::new(calendar),
            cursor,
        }
    }

    /// Returns the focus ring for rendering.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Returns the form controller.
    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Returns the form controller for applying submission results.
    pub fn controller_mut(&mut self) -> &mut FormController {
        &mut self.controller
    }

    /// Day under the calendar cursor.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    fn submit(&mut self) -> Action {
        match self.controller.begin_submit() {
            Some(data) => Action::Submit(data),
            None => Action::None,
        }
    }

    fn handle_input_key(&mut self, field: Field, code: KeyCode) -> Action {
        match code {
            KeyCode::Char(ch) => {
                let mut raw = self.controller.data().get(field).to_string();
                raw.push(ch);
                self.controller.edit_field(field, &raw);
                Action::None
            }
            KeyCode::Backspace => {
                let mut raw = self.controller.data().get(field).to_string();
                if raw.pop().is_some() {
                    self.controller.edit_field(field, &raw);
                }
                Action::None
            }
            KeyCode::Enter => self.submit(),
            _ => Action::None,
        }
    }

    fn handle_calendar_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Up => self.move_cursor(-7),
            KeyCode::Down => self.move_cursor(7),
            KeyCode::Char('[') | KeyCode::PageUp => self.navigate(MonthStep::Prev),
            KeyCode::Char(']') | KeyCode::PageDown => self.navigate(MonthStep::Next),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.select_day(self.cursor);
            }
            _ => {}
        }
        Action::None
    }

    fn move_cursor(&mut self, delta: i64) {
        let days = i64::from(self.controller.calendar().days_in_month().max(1));
        let moved = (i64::from(self.cursor) + delta).clamp(1, days);
        self.cursor = u32::try_from(moved).unwrap_or(1);
    }

    fn navigate(&mut self, step: MonthStep) {
        self.controller.navigate_month(step);
        let calendar = self.controller.calendar();
        self.cursor = calendar
            .selected_day()
            .unwrap_or_else(|| self.cursor.min(calendar.days_in_month()).max(1));
    }
}

impl ScreenState for AppointmentState {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => self.submit(),
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Tab => {
                self.form.focus_next();
                return Action::None;
            }
            KeyCode::BackTab => {
                self.form.focus_prev();
                return Action::None;
            }
            KeyCode::Esc => return Action::Quit,
            _ => {}
        }

        match self.form.focused() {
            Some(FormSlot::Input(field)) => self.handle_input_key(field, key.code),
            Some(FormSlot::Calendar) => self.handle_calendar_key(key.code),
            None => Action::None,
        }
    }
}

fn input_views<'a>(state: &'a AppointmentState, fields: &[Field]) -> Vec<InputView<'a>> {
    let controller = state.controller();
    fields
        .iter()
        .map(|&field| InputView {
            field,
            value: controller.data().get(field),
            error: controller.errors().get(field),
            focused: state.form().is_focused(FormSlot::Input(field)),
        })
        .collect()
}

/// Renders the booking screen.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_appointment(state: &AppointmentState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Agenda tu cita ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [banner_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let controller = state.controller();
    draw_banner(controller.result(), frame, banner_area);

    let [form_area, summary_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
            .areas(body_area);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(form_area);

    draw_inputs(&input_views(state, &LEFT_COLUMN), frame, left_area);

    let [right_inputs_area, calendar_row, _spacer] = Layout::vertical([
        Constraint::Length(3 * RIGHT_COLUMN.len() as u16),
        Constraint::Length(CALENDAR_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(right_area);
    let [calendar_area, _] =
        Layout::horizontal([Constraint::Length(CALENDAR_WIDTH), Constraint::Min(0)])
            .areas(calendar_row);
    draw_inputs(&input_views(state, &RIGHT_COLUMN), frame, right_inputs_area);

    let cursor = state
        .form()
        .is_focused(FormSlot::Calendar)
        .then_some(state.cursor());
    draw_calendar(
        controller.calendar(),
        cursor,
        controller.errors().contains(Field::Fecha),
        frame,
        calendar_area,
    );

    draw_summary(
        controller.data(),
        controller.is_submitting(),
        frame,
        summary_area,
    );

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: campo  Flechas: día  [/]: mes  Espacio: elegir  Enter/Ctrl+S: enviar  Esc: salir",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;
    use crate::mail::SubmissionResult;
    use crate::model::FieldError;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn make_state() -> AppointmentState {
        AppointmentState::new(CalendarView::new(2025, 6).unwrap())
    }

    fn type_string(state: &mut AppointmentState, s: &str) {
        for ch in s.chars() {
            state.handle_key(press(KeyCode::Char(ch)));
        }
    }

    fn focus(state: &mut AppointmentState, slot: FormSlot) {
        while state.form().focused() != Some(slot) {
            state.handle_key(press(KeyCode::Tab));
        }
    }

    /// Fills every input in focus order and leaves focus on the calendar.
    fn fill_inputs(state: &mut AppointmentState) {
        let values = [
            "Licencia de conducir",
            "John",
            "johndoe@gmail.com",
            "00112345678",
            "Calle 1",
            "INTRANT",
            "Doe",
            "8095551234",
        ];
        for value in values {
            type_string(state, value);
            state.handle_key(press(KeyCode::Tab));
        }
        assert_eq!(state.form().focused(), Some(FormSlot::Calendar));
    }

    mod typing {
        use super::*;

        #[test]
        fn chars_fill_focused_field() {
            let mut state = make_state();
            type_string(&mut state, "Pasaporte");
            assert_eq!(state.controller().data().tramite, "Pasaporte");
        }

        #[test]
        fn backspace_deletes_char() {
            let mut state = make_state();
            type_string(&mut state, "AB");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.controller().data().tramite, "A");
        }

        #[test]
        fn backspace_on_empty_field_is_noop() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.controller().data().tramite, "");
        }

        #[test]
        fn telefono_is_masked_while_typing() {
            let mut state = make_state();
            focus(&mut state, FormSlot::Input(Field::Telefono));
            type_string(&mut state, "(809) 555-1234 ext 9");
            assert_eq!(state.controller().data().telefono, "809-555-1234");
        }

        #[test]
        fn backspace_over_separator_drops_it() {
            let mut state = make_state();
            focus(&mut state, FormSlot::Input(Field::Telefono));
            type_string(&mut state, "8095551");
            assert_eq!(state.controller().data().telefono, "809-555-1");
            state.handle_key(press(KeyCode::Backspace));
            assert_eq!(state.controller().data().telefono, "809-555");
        }

        #[test]
        fn cedula_is_masked_while_typing() {
            let mut state = make_state();
            focus(&mut state, FormSlot::Input(Field::Cedula));
            type_string(&mut state, "0011234");
            assert_eq!(state.controller().data().cedula, "001-1234");
        }

        #[test]
        fn editing_clears_that_fields_error() {
            let mut state = make_state();
            state.handle_key(ctrl('s'));
            assert!(state.controller().errors().contains(Field::Tramite));
            type_string(&mut state, "x");
            assert!(!state.controller().errors().contains(Field::Tramite));
            assert!(state.controller().errors().contains(Field::Nombres));
        }
    }

    mod focus_cycling {
        use super::*;

        #[test]
        fn tab_visits_inputs_then_calendar() {
            let mut state = make_state();
            let mut seen = vec![state.form().focused().unwrap()];
            for _ in 0..8 {
                state.handle_key(press(KeyCode::Tab));
                seen.push(state.form().focused().unwrap());
            }
            assert_eq!(seen[0], FormSlot::Input(Field::Tramite));
            assert_eq!(seen[5], FormSlot::Input(Field::Institucion));
            assert_eq!(seen[8], FormSlot::Calendar);
            state.handle_key(press(KeyCode::Tab));
            assert_eq!(state.form().focused(), Some(FormSlot::Input(Field::Tramite)));
        }

        #[test]
        fn backtab_wraps_to_calendar() {
            let mut state = make_state();
            state.handle_key(press(KeyCode::BackTab));
            assert_eq!(state.form().focused(), Some(FormSlot::Calendar));
        }

        #[test]
        fn esc_quits() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::Esc)), Action::Quit);
        }

        #[test]
        fn unhandled_key_returns_none() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::F(1))), Action::None);
            assert_eq!(state.handle_key(ctrl('x')), Action::None);
        }
    }

    mod calendar {
        use super::*;

        fn on_calendar(year: i32, month: u32) -> AppointmentState {
            let mut state = AppointmentState::new(CalendarView::new(year, month).unwrap());
            focus(&mut state, FormSlot::Calendar);
            state
        }

        #[test]
        fn cursor_starts_on_first_day() {
            let state = on_calendar(2025, 6);
            assert_eq!(state.cursor(), 1);
        }

        #[test]
        fn arrows_move_cursor_within_month() {
            let mut state = on_calendar(2025, 6);
            state.handle_key(press(KeyCode::Down));
            state.handle_key(press(KeyCode::Right));
            assert_eq!(state.cursor(), 9);
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.cursor(), 2);
        }

        #[test]
        fn cursor_clamps_at_month_edges() {
            let mut state = on_calendar(2025, 6);
            state.handle_key(press(KeyCode::Left));
            state.handle_key(press(KeyCode::Up));
            assert_eq!(state.cursor(), 1);
            for _ in 0..6 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.cursor(), 30);
        }

        #[test]
        fn enter_selects_cursor_day() {
            let mut state = on_calendar(2025, 6);
            for _ in 0..23 {
                state.handle_key(press(KeyCode::Right));
            }
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(state.controller().data().fecha, "24/6/2025");
        }

        #[test]
        fn space_selects_cursor_day() {
            let mut state = on_calendar(2025, 6);
            state.handle_key(press(KeyCode::Char(' ')));
            assert_eq!(state.controller().data().fecha, "1/6/2025");
        }

        #[test]
        fn brackets_change_month() {
            let mut state = on_calendar(2025, 12);
            state.handle_key(press(KeyCode::Char(']')));
            let calendar = state.controller().calendar();
            assert_eq!((calendar.year(), calendar.month()), (2026, 1));
            state.handle_key(press(KeyCode::PageUp));
            state.handle_key(press(KeyCode::Char('[')));
            let calendar = state.controller().calendar();
            assert_eq!((calendar.year(), calendar.month()), (2025, 11));
        }

        #[test]
        fn navigating_clamps_cursor_to_shorter_month() {
            let mut state = on_calendar(2025, 1);
            for _ in 0..5 {
                state.handle_key(press(KeyCode::Down));
            }
            assert_eq!(state.cursor(), 31);
            state.handle_key(press(KeyCode::PageDown));
            assert_eq!(state.cursor(), 28);
        }

        #[test]
        fn navigating_back_returns_cursor_to_selection() {
            let mut state = on_calendar(2025, 6);
            for _ in 0..9 {
                state.handle_key(press(KeyCode::Right));
            }
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(press(KeyCode::Char(']')));
            state.handle_key(press(KeyCode::Char('[')));
            assert_eq!(state.cursor(), 10);
            assert_eq!(state.controller().data().fecha, "10/6/2025");
        }

        #[test]
        fn typing_on_calendar_does_not_edit_inputs() {
            let mut state = on_calendar(2025, 6);
            type_string(&mut state, "abc");
            assert_eq!(state.controller().data(), &Default::default());
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn empty_form_flags_every_field() {
            let mut state = make_state();
            assert_eq!(state.handle_key(press(KeyCode::Enter)), Action::None);
            assert_eq!(state.controller().errors().len(), 9);
            assert!(!state.controller().is_submitting());
        }

        #[test]
        fn missing_date_blocks_submission() {
            let mut state = make_state();
            fill_inputs(&mut state);
            assert_eq!(state.handle_key(ctrl('s')), Action::None);
            let errors: Vec<Field> = state.controller().errors().fields().collect();
            assert_eq!(errors, vec![Field::Fecha]);
        }

        #[test]
        fn bad_email_is_flagged() {
            let mut state = make_state();
            focus(&mut state, FormSlot::Input(Field::Correo));
            type_string(&mut state, "johndoe");
            state.handle_key(press(KeyCode::Enter));
            assert_eq!(
                state.controller().errors().get(Field::Correo),
                Some(FieldError::InvalidEmail)
            );
        }

        #[test]
        fn complete_form_yields_submit_action() {
            let mut state = make_state();
            fill_inputs(&mut state);
            state.handle_key(press(KeyCode::Enter));

            match state.handle_key(ctrl('s')) {
                Action::Submit(data) => {
                    assert_eq!(data.cedula, "001-12345678");
                    assert_eq!(data.telefono, "809-555-1234");
                    assert_eq!(data.fecha, "1/6/2025");
                }
                other => panic!("expected Submit, got {other:?}"),
            }
            assert!(state.controller().is_submitting());
        }

        #[test]
        fn enter_on_input_submits() {
            let mut state = make_state();
            fill_inputs(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(press(KeyCode::Tab));
            assert!(matches!(
                state.handle_key(press(KeyCode::Enter)),
                Action::Submit(_)
            ));
        }

        #[test]
        fn second_trigger_while_in_flight_is_ignored() {
            let mut state = make_state();
            fill_inputs(&mut state);
            state.handle_key(press(KeyCode::Enter));
            assert!(matches!(state.handle_key(ctrl('s')), Action::Submit(_)));
            assert_eq!(state.handle_key(ctrl('s')), Action::None);
        }

        #[test]
        fn finished_submission_allows_another() {
            let mut state = make_state();
            fill_inputs(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(ctrl('s'));
            state
                .controller_mut()
                .finish_submit(SubmissionResult::confirmed());
            assert!(matches!(state.handle_key(ctrl('s')), Action::Submit(_)));
        }
    }

    mod rendering {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        use super::*;

        fn render(state: &AppointmentState) -> String {
            let backend = TestBackend::new(120, 30);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_appointment(state, frame, frame.area()))
                .unwrap();
            let buf = terminal.backend().buffer();
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push_str(buf[(x, y)].symbol());
                }
                s.push('\n');
            }
            s
        }

        #[test]
        fn draws_all_sections() {
            let output = render(&make_state());
            assert!(output.contains("Agenda tu cita"));
            assert!(output.contains("Trámite *"));
            assert!(output.contains("Teléfono *"));
            assert!(output.contains("June 2025"));
            assert!(output.contains("Datos de tu cita"));
            assert!(output.contains("Confirmar cita"));
        }

        #[test]
        fn calendar_keeps_its_grid_width() {
            let output = render(&make_state());
            let row = output
                .lines()
                .find(|line| line.contains("Fecha *"))
                .unwrap();
            let chars: Vec<char> = row.chars().collect();
            let title = row.find(" Fecha *").unwrap();
            let start = row[..title].chars().count() - 1;
            assert_eq!(chars[start], '┌');
            let end = chars[start..].iter().position(|&c| c == '┐').unwrap();
            assert_eq!(end + 1, usize::from(CALENDAR_WIDTH));
        }

        #[test]
        fn draws_result_banner() {
            let mut state = make_state();
            fill_inputs(&mut state);
            state.handle_key(press(KeyCode::Enter));
            state.handle_key(ctrl('s'));
            assert!(render(&state).contains("Enviando..."));

            state
                .controller_mut()
                .finish_submit(SubmissionResult::confirmed());
            assert!(render(&state).contains("Cita confirmada y email enviado exitosamente"));
        }
    }
}
