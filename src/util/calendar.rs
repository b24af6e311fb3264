//! Month arithmetic for the date picker.

use chrono::{Datelike, Local, NaiveDate};

/// Format a date the way the task document stores it
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// One calendar month, laid out Sunday-first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    /// 1-12
    month: u32,
}

impl MonthView {
    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> MonthView {
        MonthView {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    /// The previous month; January goes to December of the prior year.
    pub fn prev(self) -> MonthView {
        if self.month == 1 {
            MonthView {
                year: self.year - 1,
                month: 12,
            }
        } else {
            MonthView {
                month: self.month - 1,
                ..self
            }
        }
    }

    /// The next month; December goes to January of the following year.
    pub fn next(self) -> MonthView {
        if self.month == 12 {
            MonthView {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthView {
                month: self.month + 1,
                ..self
            }
        }
    }

    fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Header text, e.g. "October 2026"
    pub fn title(self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }

    pub fn days_in_month(self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(first), Some(next_first)) => (next_first - first).num_days() as u32,
            _ => 0,
        }
    }

    /// Empty cells before day 1 in a Sunday-first week
    pub fn leading_blanks(self) -> u32 {
        self.first_day()
            .map_or(0, |d| d.weekday().num_days_from_sunday())
    }

    /// The month as week rows of seven cells; `None` cells are padding.
    pub fn weeks(self) -> Vec<[Option<u32>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = self.leading_blanks() as usize;
        for day in 1..=self.days_in_month() {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }

    pub fn date(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// `YYYY-MM-DD` for `day` of this month, `None` if the day does not exist.
    pub fn format_day(self, day: u32) -> Option<String> {
        self.date(day).map(format_date)
    }
}
