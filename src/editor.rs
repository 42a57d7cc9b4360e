// src/editor.rs
//
// Mutation operations on an existing assignment. Every period edit keeps
// the invariants live: the range never inverts (the other endpoint is
// pulled along instead), the 15-day clamp is re-applied, and date-map
// entries that fall outside the new range are dropped, not archived.
// The edited assignment replaces the stored one wholesale; read-modify-
// write coordination is the caller's concern.

use chrono::NaiveDate;
use tracing::debug;

use crate::assignment::{ShiftAssignment, ShiftSchedule, ValidationError};
use crate::calendar::{self, clamp_range_end};
use crate::model::ShiftCategoryId;

impl ShiftAssignment {
    /// Moves the start of a SPECIFIC_PERIOD window. If the new start lands
    /// after the current end, the end is pulled forward to match.
    pub fn set_period_start(&mut self, new_from: NaiveDate) -> Result<(), ValidationError> {
        match &mut self.schedule {
            ShiftSchedule::SpecificPeriod {
                from_date,
                to_date,
                date_map,
            } => {
                *from_date = new_from;
                if *to_date < new_from {
                    debug!("Period end {} pulled forward to new start {}", to_date, new_from);
                    *to_date = new_from;
                }
                *to_date = clamp_range_end(*from_date, *to_date);
                date_map.retain(|date, _| *from_date <= *date && *date <= *to_date);
                Ok(())
            }
            _ => Err(ValidationError::NotSpecificPeriod),
        }
    }

    /// Moves the end of a SPECIFIC_PERIOD window. If the new end lands
    /// before the current start, the start is pulled back to match.
    pub fn set_period_end(&mut self, new_to: NaiveDate) -> Result<(), ValidationError> {
        match &mut self.schedule {
            ShiftSchedule::SpecificPeriod {
                from_date,
                to_date,
                date_map,
            } => {
                *to_date = new_to;
                if *from_date > new_to {
                    debug!("Period start {} pulled back to new end {}", from_date, new_to);
                    *from_date = new_to;
                }
                *to_date = clamp_range_end(*from_date, *to_date);
                date_map.retain(|date, _| *from_date <= *date && *date <= *to_date);
                Ok(())
            }
            _ => Err(ValidationError::NotSpecificPeriod),
        }
    }

    /// Assigns a category to one date inside the period. Rejects dates
    /// outside the window and weekend dates.
    pub fn set_date_shift(
        &mut self,
        date: NaiveDate,
        category: ShiftCategoryId,
    ) -> Result<(), ValidationError> {
        match &mut self.schedule {
            ShiftSchedule::SpecificPeriod {
                from_date,
                to_date,
                date_map,
            } => {
                if date < *from_date || date > *to_date {
                    return Err(ValidationError::DateOutsidePeriod {
                        from: *from_date,
                        to: *to_date,
                        date,
                    });
                }
                let weekday = calendar::weekday_of(date);
                if weekday.is_weekend() {
                    return Err(ValidationError::WeekendShiftNotAllowed { weekday });
                }
                date_map.insert(date, category);
                Ok(())
            }
            _ => Err(ValidationError::NotSpecificPeriod),
        }
    }

    /// Removes the category assigned to one date, if any.
    pub fn clear_date_shift(&mut self, date: NaiveDate) -> Result<(), ValidationError> {
        match &mut self.schedule {
            ShiftSchedule::SpecificPeriod { date_map, .. } => {
                date_map.remove(&date);
                Ok(())
            }
            _ => Err(ValidationError::NotSpecificPeriod),
        }
    }

    /// Assigns a category to one weekday of a WEEKLY schedule. Weekend
    /// weekdays are rejected here the same way the constructor rejects
    /// them, so no caller path can sneak a Saturday shift in.
    pub fn set_weekday_shift(
        &mut self,
        weekday: calendar::WeekdayName,
        category: ShiftCategoryId,
    ) -> Result<(), ValidationError> {
        if weekday.is_weekend() {
            return Err(ValidationError::WeekendShiftNotAllowed { weekday });
        }
        match &mut self.schedule {
            ShiftSchedule::Weekly { day_map } => {
                day_map.insert(weekday, category);
                Ok(())
            }
            _ => Err(ValidationError::NotWeekly),
        }
    }
}
