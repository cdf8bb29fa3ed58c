use chrono::{Datelike, Months, NaiveDate};

/// English month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column headers, Sunday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Direction for [`CalendarView::navigate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Prev,
    Next,
}

/// One cell of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Inert padding before the first day of the month.
    Blank,
    /// A selectable day of the month.
    Day(u32),
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Number of days in `month` (1-based) of `year`.
///
/// Computed as the day before the first of the following month. Returns 0
/// for a month outside `1..=12` or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(0, |last| last.day())
}

/// Weekday of the first day of `month`, 0 = Sunday through 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    first_of_month(year, month).map_or(0, |first| first.weekday().num_days_from_sunday())
}

/// Month shown by the calendar widget plus the picked date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// First day of the reference month.
    reference: NaiveDate,
    selected: Option<NaiveDate>,
}

impl CalendarView {
    /// Creates a view of `month` (1-based) in `year` with nothing selected.
    ///
    /// Returns `None` for an invalid month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        Some(Self {
            reference: first_of_month(year, month)?,
            selected: None,
        })
    }

    /// Creates a view of the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            reference: date.with_day(1).unwrap_or(date),
            selected: None,
        }
    }

    /// Reference year.
    pub fn year(&self) -> i32 {
        self.reference.year()
    }

    /// Reference month, 1-based.
    pub fn month(&self) -> u32 {
        self.reference.month()
    }

    /// English name of the reference month.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.reference.month0() as usize]
    }

    /// Days in the reference month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Weekday index (0 = Sunday) of day 1 of the reference month.
    pub fn first_weekday(&self) -> u32 {
        first_weekday_of_month(self.year(), self.month())
    }

    /// Moves the reference month one step, wrapping across years.
    ///
    /// The selection is kept as a full date, so it only shows as selected
    /// again when its own month comes back into view.
    pub fn navigate(&mut self, step: MonthStep) {
        let one = Months::new(1);
        let moved = match step {
            MonthStep::Prev => self.reference.checked_sub_months(one),
            MonthStep::Next => self.reference.checked_add_months(one),
        };
        if let Some(reference) = moved {
            self.reference = reference;
        }
    }

    /// Selects `day` of the reference month and returns the `fecha` string
    /// (`day/month/year`, unpadded). Returns `None`, leaving the selection
    /// untouched, if the day does not exist in this month.
    pub fn select_day(&mut self, day: u32) -> Option<String> {
        let date = self.reference.with_day(day)?;
        self.selected = Some(date);
        Some(fecha_string(date))
    }

    /// The selected day, if the selection lies in the reference month.
    pub fn selected_day(&self) -> Option<u32> {
        self.selected
            .filter(|date| date.year() == self.year() && date.month() == self.month())
            .map(|date| date.day())
    }

    /// Leading blanks for the weekday offset, then one cell per day.
    pub fn cells(&self) -> Vec<CalendarCell> {
        let blanks = self.first_weekday();
        let days = self.days_in_month();
        let mut cells = Vec::with_capacity((blanks + days) as usize);
        cells.extend((0..blanks).map(|_| CalendarCell::Blank));
        cells.extend((1..=days).map(CalendarCell::Day));
        cells
    }
}

/// Renders a date the way the form stores it in `fecha`: `24/6/2025`.
pub fn fecha_string(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.day(), date.month(), date.year())
}
