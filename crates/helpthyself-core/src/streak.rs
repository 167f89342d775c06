//! Habit streak calculation.
//!
//! A streak is the number of consecutive local calendar days, ending today,
//! on which every habit was checked. It is recomputed on demand.

use chrono::{Local, NaiveDate};

use crate::model::Habit;

/// Upper bound on days walked back, roughly ten years.
pub const MAX_STREAK_DAYS: u32 = 3650;

/// Streak ending on the current local day.
pub fn streak(habits: &[Habit]) -> u32 {
    streak_on(habits, today())
}

/// Streak ending on `today`.
///
/// Zero habits yield 0.
pub fn streak_on(habits: &[Habit], today: NaiveDate) -> u32 {
    if habits.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut day = today;
    while count < MAX_STREAK_DAYS && all_checked_on(habits, day) {
        count += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }
    count
}

/// Whether every habit has a true entry for `day`.
pub fn all_checked_on(habits: &[Habit], day: NaiveDate) -> bool {
    habits.iter().all(|h| h.is_checked_on(day))
}

/// Current local calendar day, the key used for check-ins.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
