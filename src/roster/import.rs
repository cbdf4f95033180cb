use super::domain::{EmployeeDraft, EmployeeId, LeaveRequestDraft, LeaveStatus, UnknownVariantError};
use super::store::RosterStore;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Value(UnknownVariantError),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster file: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
            RosterImportError::Value(err) => write!(f, "invalid roster value: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
            RosterImportError::Value(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<UnknownVariantError> for RosterImportError {
    fn from(err: UnknownVariantError) -> Self {
        Self::Value(err)
    }
}

/// Loads a roster from CSV exports: an employee directory and, optionally,
/// a leave request sheet keyed by employee email.
pub struct RosterCsvImporter;

impl RosterCsvImporter {
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        employees: P,
        leaves: Option<Q>,
    ) -> Result<RosterStore, RosterImportError> {
        let employee_file = std::fs::File::open(employees)?;
        match leaves {
            Some(path) => {
                let leave_file = std::fs::File::open(path)?;
                Self::from_readers(employee_file, Some(leave_file))
            }
            None => Self::from_readers(employee_file, None::<std::fs::File>),
        }
    }

    /// Reads employees first, then binds each leave row to an employee by
    /// email, compared case-insensitively. Leave rows whose email matches
    /// nobody in the directory are logged and skipped. A blank status
    /// column files the request as pending.
    pub fn from_readers<R: Read, S: Read>(
        employees: R,
        leaves: Option<S>,
    ) -> Result<RosterStore, RosterImportError> {
        let mut store = RosterStore::new();
        let mut by_email: HashMap<String, EmployeeId> = HashMap::new();

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(employees);
        for record in reader.deserialize::<EmployeeRow>() {
            let row = record?;
            let email_key = row.email.trim().to_ascii_lowercase();
            let gender = row.gender.parse()?;

            let employee = store.create_employee(EmployeeDraft {
                name: row.name,
                email: row.email,
                gender,
                department: row.department,
                role: row.role,
                hire_date: row.hire_date,
                birth_date: row.birth_date,
                phone: row.phone,
                address: row.address,
                avatar: row.avatar,
            });
            by_email.insert(email_key, employee.id);
        }

        if let Some(leaves) = leaves {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(leaves);
            for record in reader.deserialize::<LeaveRow>() {
                let row = record?;
                let email_key = row.employee_email.trim().to_ascii_lowercase();

                match by_email.get(&email_key) {
                    Some(employee_id) => {
                        let status = match row.status.as_deref() {
                            Some(value) => value.parse()?,
                            None => LeaveStatus::Pending,
                        };
                        store.seed_leave_request(
                            LeaveRequestDraft {
                                employee_id: employee_id.clone(),
                                start_date: row.start_date,
                                end_date: row.end_date,
                                kind: row.kind.parse()?,
                                notes: row.notes,
                            },
                            status,
                        );
                    }
                    None => {
                        let email = row.employee_email;
                        warn!(%email, "leave row references an unknown employee, skipped");
                    }
                }
            }
        }

        Ok(store)
    }
}

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Role")]
    role: String,
    #[serde(rename = "Hire Date")]
    hire_date: NaiveDate,
    #[serde(rename = "Birth Date")]
    birth_date: NaiveDate,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "Avatar", default, deserialize_with = "empty_string_as_none")]
    avatar: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LeaveRow {
    #[serde(rename = "Employee Email")]
    employee_email: String,
    #[serde(rename = "Start Date")]
    start_date: NaiveDate,
    #[serde(rename = "End Date")]
    end_date: NaiveDate,
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Status", default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(rename = "Notes", default, deserialize_with = "empty_string_as_none")]
    notes: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::{Gender, LeaveKind};
    use std::io::Cursor;

    const EMPLOYEES_CSV: &str = "\
Name,Email,Gender,Department,Role,Hire Date,Birth Date,Phone,Address,Avatar
Ana Lima,ana@example.com,female,Support,Analyst,2022-03-14,1994-07-02,+55 11 5550 0100,12 Harbor Lane,
Bruno Costa,bruno@example.com,male,Sales,Account Executive,2021-05-03,1990-01-15,+55 11 5550 0123,3 Pier Street,https://cdn.example.com/bruno.png
";

    const LEAVES_CSV: &str = "\
Employee Email,Start Date,End Date,Type,Status,Notes
ANA@example.com,2024-03-01,2024-03-10,vacation,approved,Beach trip
bruno@example.com,2024-03-11,2024-03-11,dayoff,,
";

    #[test]
    fn import_builds_the_directory_in_file_order() {
        let store =
            RosterCsvImporter::from_readers(Cursor::new(EMPLOYEES_CSV), None::<Cursor<&[u8]>>)
                .expect("import succeeds");

        let employees = store.employees();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Ana Lima");
        assert_eq!(employees[0].gender, Gender::Female);
        assert_eq!(employees[0].rotation_key, 0);
        assert!(employees[0].avatar.is_none());

        assert_eq!(employees[1].rotation_key, 1);
        assert_eq!(
            employees[1].avatar.as_deref(),
            Some("https://cdn.example.com/bruno.png")
        );
        assert!(store.leave_requests().is_empty());
    }

    #[test]
    fn leave_rows_bind_by_email_ignoring_case() {
        let store = RosterCsvImporter::from_readers(
            Cursor::new(EMPLOYEES_CSV),
            Some(Cursor::new(LEAVES_CSV)),
        )
        .expect("import succeeds");

        let requests = store.leave_requests();
        assert_eq!(requests.len(), 2);

        let ana = &store.employees()[0];
        assert_eq!(requests[0].employee_id, ana.id);
        assert_eq!(requests[0].kind, LeaveKind::Vacation);
        assert_eq!(requests[0].status, LeaveStatus::Approved);
        assert_eq!(requests[0].notes.as_deref(), Some("Beach trip"));
    }

    #[test]
    fn blank_status_defaults_to_pending() {
        let store = RosterCsvImporter::from_readers(
            Cursor::new(EMPLOYEES_CSV),
            Some(Cursor::new(LEAVES_CSV)),
        )
        .expect("import succeeds");

        let bruno = &store.employees()[1];
        let requests = store.leave_requests_for(&bruno.id);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].status, LeaveStatus::Pending);
        assert_eq!(requests[0].kind, LeaveKind::DayOff);
    }

    #[test]
    fn unknown_emails_are_skipped() {
        let leaves = "\
Employee Email,Start Date,End Date,Type,Status,Notes
nobody@example.com,2024-03-01,2024-03-02,vacation,approved,
";
        let store =
            RosterCsvImporter::from_readers(Cursor::new(EMPLOYEES_CSV), Some(Cursor::new(leaves)))
                .expect("import succeeds");

        assert_eq!(store.employees().len(), 2);
        assert!(store.leave_requests().is_empty());
    }

    #[test]
    fn unknown_gender_fails_the_import() {
        let employees = "\
Name,Email,Gender,Department,Role,Hire Date,Birth Date,Phone,Address,Avatar
Ana Lima,ana@example.com,robot,Support,Analyst,2022-03-14,1994-07-02,+55 11 5550 0100,12 Harbor Lane,
";
        let err = RosterCsvImporter::from_readers(Cursor::new(employees), None::<Cursor<&[u8]>>)
            .expect_err("gender is unknown");
        assert!(err.to_string().contains("unknown gender 'robot'"));
    }

    #[test]
    fn malformed_dates_fail_the_import() {
        let employees = "\
Name,Email,Gender,Department,Role,Hire Date,Birth Date,Phone,Address,Avatar
Ana Lima,ana@example.com,female,Support,Analyst,14/03/2022,1994-07-02,+55 11 5550 0100,12 Harbor Lane,
";
        let result = RosterCsvImporter::from_readers(Cursor::new(employees), None::<Cursor<&[u8]>>);
        assert!(matches!(result, Err(RosterImportError::Csv(_))));
    }
}
