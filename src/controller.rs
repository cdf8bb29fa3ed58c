//! Form controller: the state behind the booking screen.
//!
//! Owns the record being edited, the validation flags, the calendar, and the
//! submission status. The TUI only translates keys into these operations and
//! renders what the accessors return.

use std::time::Duration;

use crate::mail::{SubmissionHandler, SubmissionResult, dispatch};
use crate::model::{AppointmentData, CalendarView, Field, FormErrors, MonthStep, validate};

/// UI state of the appointment form.
#[derive(Debug, Clone)]
pub struct FormController {
    data: AppointmentData,
    errors: FormErrors,
    calendar: CalendarView,
    in_flight: bool,
    result: Option<SubmissionResult>,
}

impl FormController {
    /// Creates an empty form showing `calendar`.
    pub fn new(calendar: CalendarView) -> Self {
        Self {
            data: AppointmentData::default(),
            errors: FormErrors::default(),
            calendar,
            in_flight: false,
            result: None,
        }
    }

    /// The record as currently entered.
    pub fn data(&self) -> &AppointmentData {
        &self.data
    }

    /// Flags from the last validation pass, minus fields edited since.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// The calendar widget state.
    pub fn calendar(&self) -> &CalendarView {
        &self.calendar
    }

    /// Returns `true` while a submission is waiting on the handler.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    /// The last handler result, if any submission has finished.
    pub fn result(&self) -> Option<&SubmissionResult> {
        self.result.as_ref()
    }

    /// Overwrites `field` and clears its error flag.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value);
        self.errors.clear(field);
    }

    /// Applies the field's input mask to `raw`, then stores it.
    pub fn edit_field(&mut self, field: Field, raw: &str) {
        let value = field.apply_mask(raw);
        self.set_field(field, value);
    }

    /// Moves the calendar one month back or forward.
    pub fn navigate_month(&mut self, step: MonthStep) {
        self.calendar.navigate(step);
    }

    /// Picks `day` of the displayed month and writes it to `fecha`.
    ///
    /// Returns `false` if the day does not exist in that month.
    pub fn select_day(&mut self, day: u32) -> bool {
        match self.calendar.select_day(day) {
            Some(fecha) => {
                self.set_field(Field::Fecha, fecha);
                true
            }
            None => false,
        }
    }

    /// Validates the record and, if it is clean, marks a submission as in
    /// flight and returns the snapshot to hand to the handler.
    ///
    /// Returns `None` without touching any state while a submission is
    /// already in flight. On a dirty record the new errors become visible
    /// and the previous result is kept.
    pub fn begin_submit(&mut self) -> Option<AppointmentData> {
        if self.in_flight {
            tracing::debug!("submission already in flight; ignoring trigger");
            return None;
        }

        self.errors = validate(&self.data);
        if !self.errors.is_empty() {
            let invalid: Vec<&str> = self.errors.fields().map(Field::key).collect();
            tracing::debug!(?invalid, "submission blocked by validation");
            return None;
        }

        self.in_flight = true;
        tracing::info!(fecha = %self.data.fecha, "submitting appointment");
        Some(self.data.clone())
    }

    /// Records the handler's answer and clears the in-flight flag.
    pub fn finish_submit(&mut self, result: SubmissionResult) {
        self.result = Some(result);
        self.in_flight = false;
    }

    /// Validates, calls `handler` once, and stores its result.
    ///
    /// Returns `false` when nothing was sent.
    pub async fn submit(
        &mut self,
        handler: &dyn SubmissionHandler,
        timeout: Option<Duration>,
    ) -> bool {
        let Some(data) = self.begin_submit() else {
            return false;
        };
        let result = dispatch(handler, data, timeout).await;
        self.finish_submit(result);
        true
    }
}
