//! Calendar domain logic for the outfit calendar.
//!
//! Builds the month grid shown on the calendar screen: weekday padding,
//! one cell per day with the number of items worn, and today/selected
//! markers. The UI only lays the cells out.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarMonth, CurrentDateResponse};

use crate::backend::domain::models::{ClosetError, ClosetResult, OutfitLedger};
use crate::backend::io::rest::mappers::outfit_mapper::OutfitMapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarService;

impl CalendarService {
    pub fn new() -> Self {
        Self
    }

    /// Month grid for an explicit month/year
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: i32,
        ledger: &OutfitLedger,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> ClosetResult<CalendarMonth> {
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            ClosetError::validation(format!("Invalid month/year: {}/{}", month, year))
        })?;
        Ok(self.month_containing(first, ledger, today, selected))
    }

    /// Month grid for the month that contains `date`
    pub fn month_containing(
        &self,
        date: NaiveDate,
        ledger: &OutfitLedger,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> CalendarMonth {
        let first = date - Days::new(u64::from(date.day0()));
        let (month, year) = (first.month(), first.year());
        let days_in_month = self.days_in_month(month, year);
        let first_day = first.weekday().num_days_from_sunday();

        debug!("🗓️ Generating calendar for {}/{} ({} days, starts on weekday {})", month, year, days_in_month, first_day);

        let mut days = Vec::with_capacity(42);
        for _ in 0..first_day {
            days.push(Self::padding(CalendarDayType::PaddingBefore));
        }

        for (day, current) in (1..=days_in_month).zip(first.iter_days()) {
            days.push(CalendarDay {
                day,
                date: Some(OutfitMapper::format_date(current)),
                outfit_count: ledger.item_ids(current).map_or(0, |ids| ids.len()),
                is_today: current == today,
                is_selected: selected == Some(current),
                day_type: CalendarDayType::MonthDay,
            });
        }

        while days.len() % 7 != 0 {
            days.push(Self::padding(CalendarDayType::PaddingAfter));
        }

        CalendarMonth {
            month,
            year,
            title: self.month_title(month, year),
            days,
            first_day_of_week: first_day,
        }
    }

    fn padding(day_type: CalendarDayType) -> CalendarDay {
        CalendarDay {
            day: 0,
            date: None,
            outfit_count: 0,
            is_today: false,
            is_selected: false,
            day_type,
        }
    }

    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            2 => if self.is_leap_year(year) { 29 } else { 28 },
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    pub fn month_title(&self, month: u32, year: i32) -> String {
        format!("{}年{}月", year, month)
    }

    pub fn format_date_for_display(&self, date: NaiveDate) -> String {
        format!("{}年{}月{}日", date.year(), date.month(), date.day())
    }

    pub fn current_date(&self, today: NaiveDate) -> CurrentDateResponse {
        CurrentDateResponse {
            month: today.month(),
            year: today.year(),
            day: today.day(),
            formatted_date: self.format_date_for_display(today),
            iso_date: OutfitMapper::format_date(today),
        }
    }
}
