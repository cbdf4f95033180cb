//! Read models assembled from the roster for rendering and serialization.

mod views;

pub use views::{
    AbsenceEntry, AbsenceOverviewView, CurrentLeaveEntry, DayEntry, DayScheduleView,
    EmployeeMonthView, EmployeeProfileView, EmployeeRowView, MonthCalendarView, PresenceEntry,
    RotationEntry, WeekGroupView, WeekRequestEntry,
};

use super::domain::{Employee, LeaveKind};
use super::filter::{filter_employees, EmployeeFilter};
use super::schedule::{
    days_in_month, is_weekend, weekend_day_off, weeks_in_month, LeaveSchedule, MonthRef,
};
use chrono::NaiveDate;

/// Splits the roster into present and absent employees for one date.
///
/// Only approved leave makes an employee absent here; the weekend rotation
/// is reported separately by [`absence_overview`].
pub fn day_schedule(
    employees: &[Employee],
    schedule: &LeaveSchedule<'_>,
    date: NaiveDate,
) -> DayScheduleView {
    let mut present = Vec::new();
    let mut absent = Vec::new();

    for employee in employees {
        match schedule.leave_kind_at(&employee.id, date) {
            Some(kind) => absent.push(AbsenceEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                kind,
                kind_label: kind.label(),
            }),
            None => present.push(PresenceEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                role: employee.role.clone(),
            }),
        }
    }

    DayScheduleView {
        date,
        present,
        absent,
    }
}

/// Builds the absences panel for `today`: current vacation and maternity
/// bookings, each with the last day away, plus the weekend rotation line
/// for every employee.
///
/// Requests whose employee is no longer in the directory are dropped from
/// the groups rather than listed without a name.
pub fn absence_overview(
    employees: &[Employee],
    schedule: &LeaveSchedule<'_>,
    today: NaiveDate,
) -> AbsenceOverviewView {
    let mut on_vacation = Vec::new();
    let mut on_maternity = Vec::new();

    for request in schedule.current_leaves(today) {
        if let Some(employee) = employees.iter().find(|e| e.id == request.employee_id) {
            let entry = CurrentLeaveEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                until: request.end_date,
            };
            match request.kind {
                LeaveKind::Vacation => on_vacation.push(entry),
                LeaveKind::Maternity => on_maternity.push(entry),
                LeaveKind::DayOff | LeaveKind::Other => {}
            }
        }
    }

    let weekend_rotation = employees
        .iter()
        .map(|employee| {
            let day_off = weekend_day_off(employee, today);
            RotationEntry {
                employee_id: employee.id.clone(),
                name: employee.name.clone(),
                day_off,
                day_off_label: day_off.label(),
            }
        })
        .collect();

    AbsenceOverviewView {
        today,
        on_vacation,
        on_maternity,
        weekend_rotation,
    }
}

/// Month partition with each window's fully contained requests, any status.
pub fn month_calendar(
    employees: &[Employee],
    schedule: &LeaveSchedule<'_>,
    month: MonthRef,
) -> MonthCalendarView {
    let weeks = weeks_in_month(month.first_day())
        .into_iter()
        .map(|window| {
            let requests = schedule
                .requests_within(&window)
                .into_iter()
                .map(|request| WeekRequestEntry {
                    request_id: request.id.clone(),
                    employee_id: request.employee_id.clone(),
                    employee_name: employees
                        .iter()
                        .find(|e| e.id == request.employee_id)
                        .map(|e| e.name.clone()),
                    kind: request.kind,
                    kind_label: request.kind.label(),
                    status: request.status,
                    status_label: request.status.label(),
                    start_date: request.start_date,
                    end_date: request.end_date,
                })
                .collect();

            WeekGroupView {
                week_number: window.week_number,
                start_date: window.start_date,
                end_date: window.end_date,
                requests,
            }
        })
        .collect();

    MonthCalendarView {
        month: month.to_string(),
        month_label: month.label(),
        weeks,
    }
}

/// Day-by-day grid for one employee across a month, with the profile
/// header fields shown on the detail view.
pub fn employee_month(
    employee: &Employee,
    schedule: &LeaveSchedule<'_>,
    month: MonthRef,
) -> EmployeeMonthView {
    let days = days_in_month(month.first_day())
        .into_iter()
        .map(|date| {
            let status = schedule.day_status(employee, date);
            DayEntry {
                date,
                weekend: is_weekend(date),
                status,
                status_label: status.label(),
            }
        })
        .collect();

    EmployeeMonthView {
        employee: profile(employee),
        month: month.to_string(),
        month_label: month.label(),
        days,
    }
}

fn profile(employee: &Employee) -> EmployeeProfileView {
    EmployeeProfileView {
        id: employee.id.clone(),
        name: employee.name.clone(),
        email: employee.email.clone(),
        phone: employee.phone.clone(),
        address: employee.address.clone(),
        birth_date: employee.birth_date,
        hire_date: employee.hire_date,
        role: employee.role.clone(),
        department: employee.department.clone(),
        gender: employee.gender,
        gender_label: employee.gender.label(),
    }
}

/// Directory rows passing the filter, each with leave badges and the
/// weekend day for the week containing `today`.
pub fn employee_rows(
    employees: &[Employee],
    schedule: &LeaveSchedule<'_>,
    filter: &EmployeeFilter,
    today: NaiveDate,
) -> Vec<EmployeeRowView> {
    filter_employees(employees, schedule, filter)
        .into_iter()
        .map(|employee| {
            let day_off = weekend_day_off(employee, today);
            EmployeeRowView {
                id: employee.id.clone(),
                name: employee.name.clone(),
                email: employee.email.clone(),
                department: employee.department.clone(),
                gender: employee.gender,
                gender_label: employee.gender.label(),
                hire_date: employee.hire_date,
                active_leaves: schedule
                    .active_leaves(&employee.id, today)
                    .into_iter()
                    .map(|request| request.kind.label())
                    .collect(),
                weekend_day_off: day_off,
                weekend_day_off_label: day_off.label(),
            }
        })
        .collect()
}
