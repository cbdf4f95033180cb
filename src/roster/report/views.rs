use super::super::domain::{EmployeeId, Gender, LeaveKind, LeaveRequestId, LeaveStatus, WeekendDay};
use super::super::schedule::DayStatus;
use chrono::NaiveDate;
use serde::Serialize;

/// One employee working on a scheduled day.
#[derive(Debug, Clone, Serialize)]
pub struct PresenceEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub role: String,
}

/// One employee away on a scheduled day, tagged with the leave in effect.
#[derive(Debug, Clone, Serialize)]
pub struct AbsenceEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub kind: LeaveKind,
    pub kind_label: &'static str,
}

/// Present/absent split of the whole roster for a single date.
#[derive(Debug, Clone, Serialize)]
pub struct DayScheduleView {
    pub date: NaiveDate,
    pub present: Vec<PresenceEntry>,
    pub absent: Vec<AbsenceEntry>,
}

/// One employee currently away, with the last day of the booking.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentLeaveEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub until: NaiveDate,
}

/// One line of the weekend rotation listing.
#[derive(Debug, Clone, Serialize)]
pub struct RotationEntry {
    pub employee_id: EmployeeId,
    pub name: String,
    pub day_off: WeekendDay,
    pub day_off_label: &'static str,
}

/// The absences panel: who is away on `today`, grouped by kind, plus each
/// employee's weekend day for the week containing `today`.
#[derive(Debug, Clone, Serialize)]
pub struct AbsenceOverviewView {
    pub today: NaiveDate,
    pub on_vacation: Vec<CurrentLeaveEntry>,
    pub on_maternity: Vec<CurrentLeaveEntry>,
    pub weekend_rotation: Vec<RotationEntry>,
}

/// A leave request listed under a calendar week.
#[derive(Debug, Clone, Serialize)]
pub struct WeekRequestEntry {
    pub request_id: LeaveRequestId,
    pub employee_id: EmployeeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    pub kind: LeaveKind,
    pub kind_label: &'static str,
    pub status: LeaveStatus,
    pub status_label: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeekGroupView {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub requests: Vec<WeekRequestEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthCalendarView {
    pub month: String,
    pub month_label: String,
    pub weeks: Vec<WeekGroupView>,
}

/// A single day in an employee's month grid.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub weekend: bool,
    pub status: DayStatus,
    pub status_label: &'static str,
}

/// Header fields shown on the employee detail view.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeProfileView {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub birth_date: NaiveDate,
    pub hire_date: NaiveDate,
    pub role: String,
    pub department: String,
    pub gender: Gender,
    pub gender_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeMonthView {
    pub employee: EmployeeProfileView,
    pub month: String,
    pub month_label: String,
    pub days: Vec<DayEntry>,
}

/// One row of the directory listing, with leave badges.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeRowView {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub department: String,
    pub gender: Gender,
    pub gender_label: &'static str,
    pub hire_date: NaiveDate,
    /// Kind labels of approved bookings that have not ended by `today`.
    pub active_leaves: Vec<&'static str>,
    pub weekend_day_off: WeekendDay,
    pub weekend_day_off_label: &'static str,
}
