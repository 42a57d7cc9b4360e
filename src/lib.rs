//! Shift assignment and calendar day-status resolution core for the
//! workforce dashboard.
//!
//! The UI layer fetches the raw collections (staff, shift categories,
//! holidays, leave, attendance) from the HR API and calls into this crate
//! per rendered calendar cell. Everything here is a pure, synchronous
//! computation over those immutable snapshots: [`resolve_shift_for`] picks
//! the shift category applying to a day, [`resolve_day_status`] merges the
//! day-level facts under the fixed holiday > leave > attendance precedence,
//! and the assignment editor re-derives SPECIFIC_PERIOD date maps when the
//! bounding window moves. Persistence and transport stay with the caller.

mod assignment;
mod calendar;
mod editor;
mod model;
mod resolver;

pub use assignment::{AssignmentInput, ShiftAssignment, ShiftSchedule, ValidationError};
pub use calendar::{
    clamp_range_end, inclusive_range, is_weekend, local_day, weekday_of, WeekdayName,
    SPECIFIC_PERIOD_MAX_DAYS,
};
pub use model::{
    expand_approved, AttendanceRecord, AttendanceStatus, DepartmentId, Holiday, LeaveDay,
    LeaveDaySelection, LeaveRequest, LeaveRequestStatus, LeaveType, RoleId, ShiftCategory,
    ShiftCategoryCatalog, ShiftCategoryId, StaffId, StaffRecord, UNRESOLVED_CATEGORY_LABEL,
};
pub use resolver::{resolve_day_status, resolve_shift_for, visible_calendar_range, DayStatus};
