use chrono::{Datelike, Days, NaiveDate};

/// Returns the Monday and Sunday of the calendar week containing `date`.
///
/// `None` when either end of the week falls outside the representable date range.
pub fn week_bounds(date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(offset))?;
    let sunday = monday.checked_add_days(Days::new(6))?;
    Some((monday, sunday))
}
