use super::domain::{Employee, EmployeeId, LeaveKind, LeaveRequest, LeaveStatus, WeekendDay};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const DAYS_PER_WEEK: i64 = 7;

// NaiveDate::from_ymd(1970, 1, 1).num_days_from_ce()
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRef(NaiveDate);

impl MonthRef {
    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self(date - Duration::days(i64::from(date.day0())))
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn last_day(self) -> NaiveDate {
        self.next().first_day() - Duration::days(1)
    }

    /// Number of calendar days in the month (handles leap Februaries).
    pub fn day_count(self) -> u32 {
        (self.next().first_day() - self.0).num_days() as u32
    }

    pub fn next(self) -> Self {
        // Jumping 32 days from the 1st always lands in the following month.
        Self::containing(self.0 + Duration::days(32))
    }

    pub fn prev(self) -> Self {
        Self::containing(self.0 - Duration::days(1))
    }

    /// Heading form, e.g. "February 2024".
    pub fn label(self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

impl FromStr for MonthRef {
    type Err = ParseMonthError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let first_day = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d").map_err(
            |source| ParseMonthError {
                value: trimmed.to_string(),
                source,
            },
        )?;
        Ok(Self(first_day))
    }
}

/// Raised for month arguments that are not `YYYY-MM`.
#[derive(Debug, thiserror::Error)]
#[error("'{value}' is not a YYYY-MM month")]
pub struct ParseMonthError {
    value: String,
    source: chrono::ParseError,
}

/// One fixed 7-day display window inside a month partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekPeriod {
    pub week_number: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl WeekPeriod {
    /// Whether the request sits fully inside this window, status ignored.
    pub fn contains(&self, request: &LeaveRequest) -> bool {
        request.start_date >= self.start_date && request.end_date <= self.end_date
    }
}

/// Partitions the month containing `reference` into consecutive 7-day
/// windows numbered from 1.
///
/// Windows are anchored to the 1st of the month, not to calendar weekdays,
/// and a window opens for every start date on or before the month's last
/// day. The final window may therefore run past the end of the month:
/// February 2024 produces five windows, the last spanning Feb 29 through
/// Mar 6.
pub fn weeks_in_month(reference: NaiveDate) -> Vec<WeekPeriod> {
    let month = MonthRef::containing(reference);
    let last_day = month.last_day();
    let mut windows = Vec::new();
    let mut start = month.first_day();

    while start <= last_day {
        windows.push(WeekPeriod {
            week_number: windows.len() as u32 + 1,
            start_date: start,
            end_date: start + Duration::days(6),
        });
        start += Duration::days(7);
    }

    windows
}

/// Every calendar day of the month containing `reference`, in order.
pub fn days_in_month(reference: NaiveDate) -> Vec<NaiveDate> {
    let month = MonthRef::containing(reference);
    (0..month.day_count())
        .map(|offset| month.first_day() + Duration::days(i64::from(offset)))
        .collect()
}

fn days_since_unix_epoch(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
}

/// Index of the 7-day rotation period containing `date`, counted from the
/// Unix epoch. Floored division keeps pre-1970 dates well-defined. Periods
/// start on Thursdays, so a Saturday and the following Sunday always share
/// an index.
pub fn rotation_week_index(date: NaiveDate) -> i64 {
    days_since_unix_epoch(date).div_euclid(DAYS_PER_WEEK)
}

/// The weekend day this employee has off during the week containing `date`.
///
/// Even parity of the rotation week index plus the employee's rotation key
/// means Saturday; odd means Sunday. The assignment flips every week, and
/// employees with adjacent rotation keys cover opposite days in any given
/// week.
pub fn weekend_day_off(employee: &Employee, date: NaiveDate) -> WeekendDay {
    let parity = (rotation_week_index(date) + employee.rotation_key as i64).rem_euclid(2);
    if parity == 0 {
        WeekendDay::Saturday
    } else {
        WeekendDay::Sunday
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the weekend rotation gives this employee `date` off.
///
/// Weekdays are never rotation days; on a weekend the employee is off only
/// when the day matches their assigned day for that week.
pub fn is_scheduled_off(employee: &Employee, date: NaiveDate) -> bool {
    match date.weekday() {
        Weekday::Sat => weekend_day_off(employee, date) == WeekendDay::Saturday,
        Weekday::Sun => weekend_day_off(employee, date) == WeekendDay::Sunday,
        _ => false,
    }
}

/// How one calendar day reads for one employee. Approved leave takes
/// precedence over the weekend rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    OnLeave(LeaveKind),
    WeekendOff,
    Working,
}

impl DayStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OnLeave(kind) => kind.label(),
            Self::WeekendOff => "Weekend Off",
            Self::Working => "Working",
        }
    }
}

/// Read-only leave calculator over a snapshot of requests.
///
/// Construction is free and queries walk the snapshot linearly, so results
/// always reflect exactly the slice passed in. Safe to share across threads
/// as long as the snapshot is not mutated underneath it.
#[derive(Debug, Clone, Copy)]
pub struct LeaveSchedule<'a> {
    requests: &'a [LeaveRequest],
}

impl<'a> LeaveSchedule<'a> {
    pub fn new(requests: &'a [LeaveRequest]) -> Self {
        Self { requests }
    }

    /// The approved request covering `date` for this employee, if any.
    ///
    /// Pending and rejected bookings never affect the schedule. When
    /// approved requests overlap, the most recently filed one wins.
    pub fn approved_leave_at(
        &self,
        employee_id: &EmployeeId,
        date: NaiveDate,
    ) -> Option<&'a LeaveRequest> {
        self.requests.iter().rev().find(|request| {
            request.employee_id == *employee_id
                && request.status == LeaveStatus::Approved
                && request.covers(date)
        })
    }

    pub fn is_on_leave(&self, employee_id: &EmployeeId, date: NaiveDate) -> bool {
        self.approved_leave_at(employee_id, date).is_some()
    }

    pub fn leave_kind_at(&self, employee_id: &EmployeeId, date: NaiveDate) -> Option<LeaveKind> {
        self.approved_leave_at(employee_id, date)
            .map(|request| request.kind)
    }

    /// Day classification for one employee: approved leave first, then the
    /// weekend rotation, otherwise a working day.
    pub fn day_status(&self, employee: &Employee, date: NaiveDate) -> DayStatus {
        if let Some(kind) = self.leave_kind_at(&employee.id, date) {
            DayStatus::OnLeave(kind)
        } else if is_scheduled_off(employee, date) {
            DayStatus::WeekendOff
        } else {
            DayStatus::Working
        }
    }

    /// Approved requests in progress on `today`, in filing order.
    pub fn current_leaves(&self, today: NaiveDate) -> Vec<&'a LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| request.status == LeaveStatus::Approved && request.covers(today))
            .collect()
    }

    /// Approved requests for this employee that have not ended by `today`,
    /// including bookings that only start in the future.
    pub fn active_leaves(
        &self,
        employee_id: &EmployeeId,
        today: NaiveDate,
    ) -> Vec<&'a LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| {
                request.employee_id == *employee_id
                    && request.status == LeaveStatus::Approved
                    && request.end_date >= today
            })
            .collect()
    }

    /// Requests of any status falling entirely inside the window.
    pub fn requests_within(&self, window: &WeekPeriod) -> Vec<&'a LeaveRequest> {
        self.requests
            .iter()
            .filter(|request| window.contains(request))
            .collect()
    }

    /// Whether the employee ever filed a request of this kind, any status.
    pub fn has_request_of_kind(&self, employee_id: &EmployeeId, kind: LeaveKind) -> bool {
        self.requests
            .iter()
            .any(|request| request.employee_id == *employee_id && request.kind == kind)
    }
}
