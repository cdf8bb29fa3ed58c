use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::mail::{SubmissionHandler, SubmissionResult, dispatch};
use crate::model::{AppointmentData, CalendarView};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{AppointmentState, draw_appointment};

/// How long the event loop waits for a key before checking on a submission.
const TICK: Duration = Duration::from_millis(100);

/// Result shown when a submission task ends without answering.
const INTERRUPTED_MESSAGE: &str = "El envío se interrumpió; intente de nuevo";

/// Top-level application state.
pub struct App {
    screen: AppointmentState,
    handler: Arc<dyn SubmissionHandler>,
    runtime: Handle,
    timeout: Option<Duration>,
    pending: Option<oneshot::Receiver<SubmissionResult>>,
    should_quit: bool,
}

impl App {
    /// Creates an `App` showing `calendar`, sending through `handler` on
    /// `runtime`.
    pub fn new(
        calendar: CalendarView,
        handler: Arc<dyn SubmissionHandler>,
        runtime: Handle,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            screen: AppointmentState::new(calendar),
            handler,
            runtime,
            timeout,
            pending: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → poll event → dispatch → collect results.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;
            if event::poll(TICK)?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
            self.poll_submission();
        }
        Ok(())
    }

    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        draw_appointment(self.screen(), frame, frame.area());
    }

    /// Handles a key event: global keys first, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.screen.handle_key(key) {
            Action::None => {}
            Action::Submit(data) => self.spawn_submission(data),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Runs the handler for `data` on the runtime; the answer is picked up
    /// by [`poll_submission`](Self::poll_submission).
    fn spawn_submission(&mut self, data: AppointmentData) {
        let (tx, rx) = oneshot::channel();
        let handler = Arc::clone(&self.handler);
        let timeout = self.timeout;
        self.runtime.spawn(async move {
            let result = dispatch(handler.as_ref(), data, timeout).await;
            // The receiver is gone only if the app already quit.
            let _ = tx.send(result);
        });
        self.pending = Some(rx);
    }

    /// Applies a finished submission to the form, if one has arrived.
    ///
    /// Returns `true` when a result was applied.
    pub fn poll_submission(&mut self) -> bool {
        let Some(rx) = self.pending.as_mut() else {
            return false;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Closed) => {
                tracing::warn!("submission task ended without a result");
                SubmissionResult::failed(INTERRUPTED_MESSAGE)
            }
        };
        self.pending = None;
        self.screen.controller_mut().finish_submit(result);
        true
    }

    /// Returns the booking screen state.
    pub fn screen(&self) -> &AppointmentState {
        &self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
