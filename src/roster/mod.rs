pub mod domain;
mod filter;
pub mod import;
pub mod report;
mod sample;
mod schedule;
mod store;

pub use filter::{filter_employees, EmployeeFilter};
pub use sample::sample_roster;
pub use schedule::{
    days_in_month, is_scheduled_off, is_weekend, rotation_week_index, weekend_day_off,
    weeks_in_month, DayStatus, LeaveSchedule, MonthRef, ParseMonthError, WeekPeriod,
};
pub use store::RosterStore;
