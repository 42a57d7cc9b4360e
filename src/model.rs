// src/model.rs
//
// Record shapes consumed from the HR API: staff, shift categories,
// holidays, leave requests and attendance. The core never fetches these
// itself; the caller hands in whole collections per view/session.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::calendar::local_day;

pub type StaffId = String;
pub type DepartmentId = String;
pub type RoleId = String;
pub type ShiftCategoryId = String;

// --- Staff ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    pub id: StaffId,
    pub name: String,
    pub department_id: DepartmentId,
    pub role_id: RoleId,
    /// No calendar day before this date is ever resolved for the staff
    /// member; see `visible_calendar_range`.
    pub joining_date: NaiveDate,
}

// --- Shift categories ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftCategory {
    pub id: ShiftCategoryId,
    pub name: String,
    pub work_start_time: NaiveTime,
    pub work_end_time: NaiveTime,
}

/// Label shown when an assignment references a category id missing from
/// the catalog.
pub const UNRESOLVED_CATEGORY_LABEL: &str = "Not set";

/// Lookup over the shift-category list, used only to label resolved ids.
#[derive(Debug, Clone, Default)]
pub struct ShiftCategoryCatalog {
    by_id: HashMap<ShiftCategoryId, ShiftCategory>,
}

impl ShiftCategoryCatalog {
    pub fn new(categories: Vec<ShiftCategory>) -> Self {
        Self {
            by_id: categories.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShiftCategory> {
        self.by_id.get(id)
    }

    /// Display name for a category id. An id not present in the catalog is
    /// a stale reference, not an error: rendering degrades to "Not set".
    pub fn label_for(&self, id: &str) -> &str {
        match self.by_id.get(id) {
            Some(category) => &category.name,
            None => {
                warn!("Shift category '{}' not found in catalog, labeling as '{}'", id, UNRESOLVED_CATEGORY_LABEL);
                UNRESOLVED_CATEGORY_LABEL
            }
        }
    }
}

// --- Holidays ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: String,
}

// --- Leave ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaveType {
    Full,
    Half,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// One day picked inside a leave request's day-selection breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDaySelection {
    pub date: NaiveDate,
    pub leave_type: LeaveType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub staff_id: StaffId,
    pub status: LeaveRequestStatus,
    pub subject: String,
    pub reason: String,
    pub approver_name: Option<String>,
    pub day_breakdown: Vec<LeaveDaySelection>,
}

/// One calendar day of approved leave, as consumed by the day-status
/// resolver. Only produced from `APPROVED` requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDay {
    pub date: NaiveDate,
    pub leave_type: LeaveType,
    pub subject: String,
    pub reason: String,
    pub approver_name: Option<String>,
}

/// Expands approved leave requests into per-day entries via each request's
/// day-selection breakdown. Pending and rejected requests contribute
/// nothing.
pub fn expand_approved(requests: &[LeaveRequest]) -> Vec<LeaveDay> {
    let mut days = Vec::new();
    for request in requests {
        if request.status != LeaveRequestStatus::Approved {
            continue;
        }
        for selection in &request.day_breakdown {
            days.push(LeaveDay {
                date: selection.date,
                leave_type: selection.leave_type,
                subject: request.subject.clone(),
                reason: request.reason.clone(),
                approver_name: request.approver_name.clone(),
            });
        }
    }
    days
}

// --- Attendance ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "AB")]
    Absent,
    #[serde(rename = "HD")]
    HalfDay,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    // Site-specific leave/absence codes carried through from the HR API.
    #[serde(rename = "AL")]
    AnnualLeave,
    #[serde(rename = "U")]
    Unpaid,
    #[serde(rename = "M")]
    Medical,
    #[serde(rename = "ML")]
    MaternityLeave,
    #[serde(rename = "NS")]
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub staff_id: StaffId,
    /// Calendar day, no time component. Source timestamps are truncated
    /// through `calendar::local_day` before this field is set or compared.
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub login_time: Option<NaiveDateTime>,
    pub logout_time: Option<NaiveDateTime>,
    pub total_worked_duration_minutes: u32,
    pub is_early_login: bool,
    pub is_late_login: bool,
    pub is_early_logout: bool,
    pub is_late_logout: bool,
}

impl AttendanceRecord {
    /// Opens a record for the day of `now`: login time set, status
    /// `IN_PROGRESS` until check-out finalizes it.
    pub fn check_in(id: impl Into<String>, staff_id: impl Into<String>, now: DateTime<Local>) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            date: local_day(now),
            status: AttendanceStatus::InProgress,
            login_time: Some(now.naive_local()),
            logout_time: None,
            total_worked_duration_minutes: 0,
            is_early_login: false,
            is_late_login: false,
            is_early_logout: false,
            is_late_logout: false,
        }
    }

    /// Completes the record: logout time set, worked minutes derived from
    /// the login/logout delta, status finalized.
    pub fn check_out(&mut self, now: DateTime<Local>, final_status: AttendanceStatus) {
        self.logout_time = Some(now.naive_local());
        self.status = final_status;
        self.recompute_worked_minutes();
    }

    /// Explicit edit of a finalized record: rewrites both timestamps for
    /// this record id and recomputes the worked duration.
    pub fn edit_times(&mut self, login: NaiveDateTime, logout: NaiveDateTime) {
        self.login_time = Some(login);
        self.logout_time = Some(logout);
        self.recompute_worked_minutes();
    }

    /// Sets the early/late flags by comparing the recorded timestamps
    /// against the shift category's work window.
    pub fn apply_punctuality_flags(&mut self, category: &ShiftCategory) {
        if let Some(login) = self.login_time {
            self.is_early_login = login.time() < category.work_start_time;
            self.is_late_login = login.time() > category.work_start_time;
        }
        if let Some(logout) = self.logout_time {
            self.is_early_logout = logout.time() < category.work_end_time;
            self.is_late_logout = logout.time() > category.work_end_time;
        }
    }

    fn recompute_worked_minutes(&mut self) {
        self.total_worked_duration_minutes = match (self.login_time, self.logout_time) {
            (Some(login), Some(logout)) => (logout - login).num_minutes().max(0) as u32,
            _ => 0,
        };
    }
}
