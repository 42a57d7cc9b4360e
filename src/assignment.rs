// src/assignment.rs
//
// The shift assignment entity. The three assignment shapes are a sum type
// so each variant's required fields exist by construction; the optional-
// field shape the HR API sends is `AssignmentInput`, checked once at the
// wire boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::calendar::{self, WeekdayName, SPECIFIC_PERIOD_MAX_DAYS};
use crate::model::{DepartmentId, RoleId, ShiftCategoryId, StaffId};

// --- Error Types ---

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Default assignment requires a shift category")]
    MissingDefaultCategory,
    #[error("No shift may be assigned on {weekday}; weekends carry no shift")]
    WeekendShiftNotAllowed { weekday: WeekdayName },
    #[error("Specific period assignment requires both fromDate and toDate")]
    MissingPeriodBounds,
    #[error("Specific period spans {days} days, more than the 15-day limit")]
    PeriodTooLong { days: i64 },
    #[error("Specific period fromDate {from} is after toDate {to}")]
    InvertedPeriod { from: NaiveDate, to: NaiveDate },
    #[error("Date {date} lies outside the assignment period {from}..={to}")]
    DateOutsidePeriod {
        from: NaiveDate,
        to: NaiveDate,
        date: NaiveDate,
    },
    #[error("Operation applies only to specific period assignments")]
    NotSpecificPeriod,
    #[error("Operation applies only to weekly assignments")]
    NotWeekly,
    #[error("Unknown shift type tag '{tag}'")]
    UnknownShiftType { tag: String },
}

// --- Assignment shapes ---

/// How a staff member's shift is determined over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shiftType")]
pub enum ShiftSchedule {
    /// One category for every working day.
    #[serde(rename = "DEFAULT")]
    Default {
        #[serde(rename = "defaultShiftCategoryId")]
        shift_category_id: ShiftCategoryId,
    },
    /// One category per weekday, Monday through Friday only.
    #[serde(rename = "WEEKLY")]
    Weekly {
        #[serde(rename = "dayToShiftCategoryId")]
        day_map: BTreeMap<WeekdayName, ShiftCategoryId>,
    },
    /// One category per explicit date inside a bounded 15-day window.
    #[serde(rename = "SPECIFIC_PERIOD")]
    SpecificPeriod {
        #[serde(rename = "fromDate")]
        from_date: NaiveDate,
        #[serde(rename = "toDate")]
        to_date: NaiveDate,
        #[serde(rename = "dateToShiftCategoryId")]
        date_map: BTreeMap<NaiveDate, ShiftCategoryId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    pub staff_id: StaffId,
    pub department_id: DepartmentId,
    pub role_id: RoleId,
    /// DEFAULT schedules are not retroactive before this date.
    pub created_on: NaiveDate,
    #[serde(flatten)]
    pub(crate) schedule: ShiftSchedule,
}

impl ShiftAssignment {
    /// Builds a validated assignment. Every invariant of the schedule shape
    /// is checked here, so no caller can hold an assignment that violates
    /// the weekend or 15-day rules.
    pub fn new(
        staff_id: impl Into<String>,
        department_id: impl Into<String>,
        role_id: impl Into<String>,
        created_on: NaiveDate,
        schedule: ShiftSchedule,
    ) -> Result<Self, ValidationError> {
        Self::validate_schedule(&schedule)?;
        Ok(Self {
            staff_id: staff_id.into(),
            department_id: department_id.into(),
            role_id: role_id.into(),
            created_on,
            schedule,
        })
    }

    pub fn schedule(&self) -> &ShiftSchedule {
        &self.schedule
    }

    pub(crate) fn validate_schedule(schedule: &ShiftSchedule) -> Result<(), ValidationError> {
        match schedule {
            ShiftSchedule::Default { .. } => Ok(()),
            ShiftSchedule::Weekly { day_map } => {
                match day_map.keys().find(|weekday| weekday.is_weekend()) {
                    Some(weekday) => Err(ValidationError::WeekendShiftNotAllowed { weekday: *weekday }),
                    None => Ok(()),
                }
            }
            ShiftSchedule::SpecificPeriod {
                from_date,
                to_date,
                date_map,
            } => {
                if to_date < from_date {
                    return Err(ValidationError::InvertedPeriod {
                        from: *from_date,
                        to: *to_date,
                    });
                }
                let days = (*to_date - *from_date).num_days() + 1;
                if days > SPECIFIC_PERIOD_MAX_DAYS {
                    return Err(ValidationError::PeriodTooLong { days });
                }
                match date_map
                    .keys()
                    .find(|date| **date < *from_date || **date > *to_date)
                {
                    Some(date) => Err(ValidationError::DateOutsidePeriod {
                        from: *from_date,
                        to: *to_date,
                        date: *date,
                    }),
                    None => Ok(()),
                }
            }
        }
    }
}

// --- Wire input ---

/// The duck-typed assignment shape the HR API sends: a `shiftType` tag plus
/// a bag of optional fields. Converting into [`ShiftAssignment`] is where
/// the optional fields are checked against the tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentInput {
    pub staff_id: StaffId,
    pub department_id: DepartmentId,
    pub role_id: RoleId,
    pub created_on: NaiveDate,
    pub shift_type: String,
    #[serde(default)]
    pub default_shift_category_id: Option<ShiftCategoryId>,
    #[serde(default)]
    pub day_to_shift_category_id: Option<BTreeMap<WeekdayName, ShiftCategoryId>>,
    #[serde(default)]
    pub date_to_shift_category_id: Option<BTreeMap<NaiveDate, ShiftCategoryId>>,
    #[serde(default)]
    pub from_date: Option<NaiveDate>,
    #[serde(default)]
    pub to_date: Option<NaiveDate>,
}

impl TryFrom<AssignmentInput> for ShiftAssignment {
    type Error = ValidationError;

    fn try_from(input: AssignmentInput) -> Result<Self, Self::Error> {
        let schedule = match input.shift_type.as_str() {
            "DEFAULT" => ShiftSchedule::Default {
                shift_category_id: input
                    .default_shift_category_id
                    .ok_or(ValidationError::MissingDefaultCategory)?,
            },
            "WEEKLY" => ShiftSchedule::Weekly {
                day_map: input.day_to_shift_category_id.unwrap_or_default(),
            },
            "SPECIFIC_PERIOD" => {
                let from_date = input.from_date.ok_or(ValidationError::MissingPeriodBounds)?;
                let to_date = input.to_date.ok_or(ValidationError::MissingPeriodBounds)?;
                // An inverted wire range is repaired, not rejected: the end
                // is pulled forward to the start, then clamped to 15 days.
                let to_date = calendar::clamp_range_end(from_date, to_date.max(from_date));
                ShiftSchedule::SpecificPeriod {
                    from_date,
                    to_date,
                    date_map: input.date_to_shift_category_id.unwrap_or_default(),
                }
            }
            other => {
                return Err(ValidationError::UnknownShiftType {
                    tag: other.to_string(),
                })
            }
        };
        ShiftAssignment::new(
            input.staff_id,
            input.department_id,
            input.role_id,
            input.created_on,
            schedule,
        )
    }
}
