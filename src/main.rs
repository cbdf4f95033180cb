use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use leave_roster::config::{AppConfig, ConfigError};
use leave_roster::error::AppError;
use leave_roster::roster::domain::{EmployeeId, Gender, LeaveKind};
use leave_roster::roster::import::RosterCsvImporter;
use leave_roster::roster::report::{
    absence_overview, day_schedule, employee_month, employee_rows, month_calendar,
    AbsenceOverviewView, DayScheduleView, EmployeeMonthView, EmployeeRowView, MonthCalendarView,
};
use leave_roster::roster::{sample_roster, EmployeeFilter, LeaveSchedule, MonthRef, RosterStore};
use leave_roster::telemetry;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "Leave Roster",
    about = "Inspect employee leave, weekend rotation, and month calendars from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show who is away today plus the weekend rotation (default command)
    Overview(OverviewArgs),
    /// Group a month's leave requests by calendar week
    Calendar(CalendarArgs),
    /// List who is present and who is absent on one date
    Schedule(ScheduleArgs),
    /// Show one employee's profile and month day grid
    Employee(EmployeeArgs),
    /// Walk every view over built-in sample data
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
struct SourceArgs {
    /// Employee directory CSV (defaults to APP_EMPLOYEES_CSV)
    #[arg(long)]
    employees_csv: Option<PathBuf>,
    /// Leave request CSV (defaults to APP_LEAVES_CSV)
    #[arg(long)]
    leaves_csv: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
struct OverviewArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Keep only employees of this gender (male or female)
    #[arg(long, value_parser = parse_gender)]
    gender: Option<Gender>,
    /// Keep only employees with a request of this kind (vacation, dayoff, maternity, other)
    #[arg(long, value_parser = parse_leave_kind)]
    kind: Option<LeaveKind>,
    /// Case-insensitive search over names and departments
    #[arg(long)]
    search: Option<String>,
}

#[derive(Args, Debug)]
struct CalendarArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Month to partition, YYYY-MM (defaults to the current month)
    #[arg(long, value_parser = parse_month)]
    month: Option<MonthRef>,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Date to inspect (defaults to today)
    #[arg(long, value_parser = parse_date)]
    date: Option<NaiveDate>,
}

#[derive(Args, Debug)]
struct EmployeeArgs {
    #[command(flatten)]
    source: SourceArgs,
    /// Employee id to inspect
    #[arg(long)]
    id: String,
    /// Month for the day grid, YYYY-MM (defaults to the current month)
    #[arg(long, value_parser = parse_month)]
    month: Option<MonthRef>,
}

#[derive(Args, Debug)]
struct DemoArgs {
    /// Evaluation date for the walkthrough (defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Overview(OverviewArgs::default()));

    match command {
        Command::Overview(args) => run_overview(args, &config),
        Command::Calendar(args) => run_calendar(args, &config),
        Command::Schedule(args) => run_schedule(args, &config),
        Command::Employee(args) => run_employee(args, &config),
        Command::Demo(args) => run_demo(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn parse_month(raw: &str) -> Result<MonthRef, String> {
    raw.parse::<MonthRef>().map_err(|err| err.to_string())
}

fn parse_gender(raw: &str) -> Result<Gender, String> {
    raw.parse::<Gender>().map_err(|err| err.to_string())
}

fn parse_leave_kind(raw: &str) -> Result<LeaveKind, String> {
    raw.parse::<LeaveKind>().map_err(|err| err.to_string())
}

/// Command-line paths win over the configured ones. With no employee file
/// from either side the roster starts empty.
fn load_roster(source: &SourceArgs, config: &AppConfig) -> Result<RosterStore, AppError> {
    let employees = source
        .employees_csv
        .clone()
        .or_else(|| config.roster.employees_csv.clone());
    let leaves = source
        .leaves_csv
        .clone()
        .or_else(|| config.roster.leaves_csv.clone());

    let store = match employees {
        Some(path) => RosterCsvImporter::from_paths(path, leaves)?,
        None if leaves.is_some() => return Err(ConfigError::LeavesWithoutEmployees.into()),
        None => RosterStore::new(),
    };

    debug!(
        employees = store.employees().len(),
        requests = store.leave_requests().len(),
        "roster loaded"
    );
    Ok(store)
}

fn run_overview(args: OverviewArgs, config: &AppConfig) -> Result<(), AppError> {
    let OverviewArgs {
        source,
        today,
        gender,
        kind,
        search,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let store = load_roster(&source, config)?;
    let schedule = LeaveSchedule::new(store.leave_requests());

    let overview = absence_overview(store.employees(), &schedule, today);
    let filter = EmployeeFilter {
        gender,
        leave_kind: kind,
        search,
    };
    let rows = employee_rows(store.employees(), &schedule, &filter, today);

    render_overview(&overview);
    render_employee_rows(&rows);
    Ok(())
}

fn run_calendar(args: CalendarArgs, config: &AppConfig) -> Result<(), AppError> {
    let CalendarArgs { source, month } = args;
    let month = month.unwrap_or_else(|| MonthRef::containing(Local::now().date_naive()));
    let store = load_roster(&source, config)?;
    let schedule = LeaveSchedule::new(store.leave_requests());

    let view = month_calendar(store.employees(), &schedule, month);
    render_month_calendar(&view);
    Ok(())
}

fn run_schedule(args: ScheduleArgs, config: &AppConfig) -> Result<(), AppError> {
    let ScheduleArgs { source, date } = args;
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    let store = load_roster(&source, config)?;
    let schedule = LeaveSchedule::new(store.leave_requests());

    let view = day_schedule(store.employees(), &schedule, date);
    render_day_schedule(&view);
    Ok(())
}

fn run_employee(args: EmployeeArgs, config: &AppConfig) -> Result<(), AppError> {
    let EmployeeArgs { source, id, month } = args;
    let month = month.unwrap_or_else(|| MonthRef::containing(Local::now().date_naive()));
    let store = load_roster(&source, config)?;

    let employee_id = EmployeeId(id);
    match store.employee(&employee_id) {
        Some(employee) => {
            let schedule = LeaveSchedule::new(store.leave_requests());
            let view = employee_month(employee, &schedule, month);
            render_employee_month(&view);
        }
        None => println!("Employee {} not found", employee_id),
    }

    Ok(())
}

fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let store = sample_roster(today);
    let schedule = LeaveSchedule::new(store.leave_requests());
    let month = MonthRef::containing(today);

    println!("Leave roster demo (evaluated {today})\n");

    let overview = absence_overview(store.employees(), &schedule, today);
    render_overview(&overview);

    let rows = employee_rows(store.employees(), &schedule, &EmployeeFilter::default(), today);
    render_employee_rows(&rows);

    let day = day_schedule(store.employees(), &schedule, today);
    println!();
    render_day_schedule(&day);

    let calendar = month_calendar(store.employees(), &schedule, month);
    println!();
    render_month_calendar(&calendar);

    if let Some(employee) = store.employees().first() {
        let view = employee_month(employee, &schedule, month);
        println!("\nEmployee month payload");
        println!("{}", serde_json::to_string_pretty(&view)?);
    }

    Ok(())
}

fn render_overview(view: &AbsenceOverviewView) {
    println!("Absence overview for {}", view.today);

    if view.on_vacation.is_empty() {
        println!("\nOn vacation: none");
    } else {
        println!("\nOn vacation");
        for entry in &view.on_vacation {
            println!("- {} (back after {})", entry.name, entry.until);
        }
    }

    if view.on_maternity.is_empty() {
        println!("\nOn maternity leave: none");
    } else {
        println!("\nOn maternity leave");
        for entry in &view.on_maternity {
            println!("- {} (back after {})", entry.name, entry.until);
        }
    }

    println!("\nWeekend rotation this week");
    for entry in &view.weekend_rotation {
        println!("- {}: {}", entry.name, entry.day_off_label);
    }
}

fn render_employee_rows(rows: &[EmployeeRowView]) {
    if rows.is_empty() {
        println!("\nEmployees: none match");
        return;
    }

    println!("\nEmployees");
    for row in rows {
        let mut badges: Vec<String> = row
            .active_leaves
            .iter()
            .map(|label| label.to_string())
            .collect();
        badges.push(format!("off {}", row.weekend_day_off_label));

        println!(
            "- {} <{}> | {} | {} | hired {} | {}",
            row.name,
            row.email,
            row.department,
            row.gender_label,
            row.hire_date,
            badges.join(", ")
        );
    }
}

fn render_day_schedule(view: &DayScheduleView) {
    println!("Schedule for {}", view.date);

    if view.present.is_empty() {
        println!("\nPresent: none");
    } else {
        println!("\nPresent");
        for entry in &view.present {
            println!("- {} ({})", entry.name, entry.role);
        }
    }

    if view.absent.is_empty() {
        println!("\nAbsent: none");
    } else {
        println!("\nAbsent");
        for entry in &view.absent {
            println!("- {}: {}", entry.name, entry.kind_label);
        }
    }
}

fn render_month_calendar(view: &MonthCalendarView) {
    println!("Leave calendar for {}", view.month_label);

    for week in &view.weeks {
        println!(
            "\nWeek {} ({} -> {})",
            week.week_number, week.start_date, week.end_date
        );
        if week.requests.is_empty() {
            println!("- no requests");
        } else {
            for entry in &week.requests {
                let name = entry
                    .employee_name
                    .as_deref()
                    .unwrap_or("(unknown employee)");
                println!(
                    "- {}: {} {} -> {} [{}]",
                    name, entry.kind_label, entry.start_date, entry.end_date, entry.status_label
                );
            }
        }
    }
}

fn render_employee_month(view: &EmployeeMonthView) {
    let employee = &view.employee;
    println!("{} ({})", employee.name, employee.gender_label);
    println!("{} - {}", employee.role, employee.department);
    println!("Email: {}", employee.email);
    println!("Phone: {}", employee.phone);
    println!("Address: {}", employee.address);
    println!("Born: {}", employee.birth_date);
    println!("Hired: {}", employee.hire_date);

    println!("\nDays in {}", view.month_label);
    for day in &view.days {
        println!("- {}: {}", day.date, day.status_label);
    }
}
