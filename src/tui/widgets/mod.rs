//! Reusable TUI widgets.

pub mod banner;
pub mod calendar;
pub mod form;
pub mod summary;

pub use banner::draw_banner;
pub use calendar::{CALENDAR_HEIGHT, CALENDAR_WIDTH, draw_calendar};
pub use form::{Form, FormSlot, InputView, draw_inputs};
pub use summary::draw_summary;
