use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier assigned by the store; never parsed or interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveRequestId(pub String);

impl fmt::Display for LeaveRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(UnknownVariantError::new("gender", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    Vacation,
    #[serde(rename = "dayoff")]
    DayOff,
    Maternity,
    Other,
}

impl LeaveKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vacation => "Vacation",
            Self::DayOff => "Day Off",
            Self::Maternity => "Maternity Leave",
            Self::Other => "Other Leave",
        }
    }
}

impl FromStr for LeaveKind {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vacation" => Ok(Self::Vacation),
            "dayoff" | "day_off" => Ok(Self::DayOff),
            "maternity" => Ok(Self::Maternity),
            "other" => Ok(Self::Other),
            other => Err(UnknownVariantError::new("leave kind", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl FromStr for LeaveStatus {
    type Err = UnknownVariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownVariantError::new("leave status", other)),
        }
    }
}

/// The single weekend day an employee has off in a given week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekendDay {
    Saturday,
    Sunday,
}

impl WeekendDay {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }
}

/// Raised when a textual value does not name a known variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariantError {
    kind: &'static str,
    value: String,
}

impl UnknownVariantError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Directory record. Immutable once created; the store assigns both the id
/// and the rotation key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    /// Stable numeric key feeding the weekend rotation parity. Assigned
    /// sequentially at creation, independent of the opaque id.
    pub rotation_key: u64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub department: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Employee payload as submitted; everything except store-assigned fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub department: String,
    pub role: String,
    pub hire_date: NaiveDate,
    pub birth_date: NaiveDate,
    pub phone: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A leave booking over an inclusive range of calendar dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: LeaveRequestId,
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: LeaveKind,
    pub status: LeaveStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl LeaveRequest {
    /// Whether `date` falls inside the booking window, bounds included.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Leave request payload as submitted; the store assigns the id and the
/// initial status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestDraft {
    pub employee_id: EmployeeId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kind: LeaveKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_kind_round_trips_through_wire_names() {
        for (raw, kind) in [
            ("vacation", LeaveKind::Vacation),
            ("dayoff", LeaveKind::DayOff),
            ("maternity", LeaveKind::Maternity),
            ("other", LeaveKind::Other),
        ] {
            assert_eq!(raw.parse::<LeaveKind>().expect("known kind"), kind);
            let json = serde_json::to_string(&kind).expect("serialize kind");
            assert_eq!(json, format!("\"{raw}\""));
        }
    }

    #[test]
    fn variant_parsing_trims_and_ignores_case() {
        assert_eq!(" Female ".parse::<Gender>().expect("gender"), Gender::Female);
        assert_eq!(
            "APPROVED".parse::<LeaveStatus>().expect("status"),
            LeaveStatus::Approved
        );
        assert_eq!(
            "Day_Off".parse::<LeaveKind>().expect("kind"),
            LeaveKind::DayOff
        );
    }

    #[test]
    fn unknown_variants_are_rejected_with_context() {
        let err = "weekend".parse::<LeaveKind>().expect_err("unknown kind");
        assert_eq!(err.to_string(), "unknown leave kind 'weekend'");
    }

    #[test]
    fn covers_is_inclusive_on_both_bounds() {
        let request = LeaveRequest {
            id: LeaveRequestId("r-1".to_string()),
            employee_id: EmployeeId("e-1".to_string()),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 10).expect("valid date"),
            kind: LeaveKind::Vacation,
            status: LeaveStatus::Approved,
            notes: None,
        };

        assert!(request.covers(request.start_date));
        assert!(request.covers(request.end_date));
        assert!(!request.covers(request.start_date - chrono::Duration::days(1)));
        assert!(!request.covers(request.end_date + chrono::Duration::days(1)));
    }
}
