// src/resolver.rs
//
// The two per-day lookups every calendar cell goes through: which shift
// applies (schedule resolution) and which single status to display
// (precedence merge). Both are pure reads over immutable snapshots;
// neither ever fails, missing data resolves to None / NotAvailable so a
// rendered calendar always completes.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::assignment::{ShiftAssignment, ShiftSchedule};
use crate::calendar::{self, inclusive_range};
use crate::model::{
    AttendanceRecord, Holiday, LeaveDay, LeaveType, ShiftCategoryId, StaffRecord,
};

/// Shift category applying to `date` under the given assignment, or `None`
/// when no shift applies (weekend, outside the period, unset slot, or a
/// DEFAULT schedule queried before its creation date).
pub fn resolve_shift_for(assignment: &ShiftAssignment, date: NaiveDate) -> Option<ShiftCategoryId> {
    match assignment.schedule() {
        ShiftSchedule::Default { shift_category_id } => {
            // Not retroactive: a default shift starts at the assignment's
            // creation date, but then applies on any day of the week.
            if date < assignment.created_on {
                None
            } else {
                Some(shift_category_id.clone())
            }
        }
        ShiftSchedule::Weekly { day_map } => {
            if calendar::is_weekend(date) {
                return None;
            }
            day_map.get(&calendar::weekday_of(date)).cloned()
        }
        ShiftSchedule::SpecificPeriod {
            from_date,
            to_date,
            date_map,
        } => {
            if date < *from_date || date > *to_date {
                return None;
            }
            if calendar::is_weekend(date) {
                return None;
            }
            date_map.get(&date).cloned()
        }
    }
}

/// The single authoritative label shown for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum DayStatus {
    Holiday {
        name: String,
    },
    Leave {
        leave_type: LeaveType,
        subject: String,
        reason: String,
        approver_name: Option<String>,
    },
    Attendance {
        record: AttendanceRecord,
    },
    NotAvailable,
}

/// Merges the four day-level data sources into one status under the fixed
/// precedence holiday > approved leave > attendance > not available.
///
/// First match wins outright; signals are never combined. A holiday masks
/// an approved leave on the same day, and either masks an (erroneous)
/// attendance record. `leave_days` is expected to already contain only
/// approved leave (see `model::expand_approved`).
pub fn resolve_day_status(
    date: NaiveDate,
    holidays: &[Holiday],
    leave_days: &[LeaveDay],
    attendance: &[AttendanceRecord],
) -> DayStatus {
    let mut matching_holidays = holidays.iter().filter(|h| h.date == date);
    if let Some(holiday) = matching_holidays.next() {
        if matching_holidays.next().is_some() {
            // Duplicate holidays on one date are a data-quality problem,
            // not a rendering problem. Surface the first, flag the rest.
            warn!("Multiple holidays recorded for {}, surfacing '{}'", date, holiday.name);
        }
        return DayStatus::Holiday {
            name: holiday.name.clone(),
        };
    }

    if let Some(leave) = leave_days.iter().find(|l| l.date == date) {
        return DayStatus::Leave {
            leave_type: leave.leave_type,
            subject: leave.subject.clone(),
            reason: leave.reason.clone(),
            approver_name: leave.approver_name.clone(),
        };
    }

    if let Some(record) = attendance.iter().find(|a| a.date == date) {
        return DayStatus::Attendance {
            record: record.clone(),
        };
    }

    DayStatus::NotAvailable
}

/// The dates a calendar view should iterate for one staff member: the
/// requested range clipped so nothing precedes the joining date. The
/// status resolver is never meaningfully invoked before a staff member
/// existed, so callers go through this instead of raw ranges.
pub fn visible_calendar_range(
    staff: &StaffRecord,
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<NaiveDate> {
    inclusive_range(from.max(staff.joining_date), to)
}
