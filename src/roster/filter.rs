use super::domain::{Employee, Gender, LeaveKind};
use super::schedule::LeaveSchedule;

/// Optional criteria for narrowing the employee list. Unset criteria match
/// everything, so the default filter passes every employee through.
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub gender: Option<Gender>,
    pub leave_kind: Option<LeaveKind>,
    pub search: Option<String>,
}

impl EmployeeFilter {
    /// Whether this employee satisfies every configured criterion.
    ///
    /// The kind criterion inspects the employee's full request history in
    /// any status. The search term matches case-insensitively against the
    /// name or the department; blank terms are ignored.
    pub fn matches(&self, employee: &Employee, schedule: &LeaveSchedule<'_>) -> bool {
        if let Some(gender) = self.gender {
            if employee.gender != gender {
                return false;
            }
        }

        if let Some(kind) = self.leave_kind {
            if !schedule.has_request_of_kind(&employee.id, kind) {
                return false;
            }
        }

        if let Some(term) = &self.search {
            let term = term.trim().to_lowercase();
            if !term.is_empty()
                && !employee.name.to_lowercase().contains(&term)
                && !employee.department.to_lowercase().contains(&term)
            {
                return false;
            }
        }

        true
    }
}

/// Employees passing the filter, in directory order.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    schedule: &LeaveSchedule<'_>,
    filter: &EmployeeFilter,
) -> Vec<&'a Employee> {
    employees
        .iter()
        .filter(|employee| filter.matches(employee, schedule))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::domain::{EmployeeId, LeaveRequest, LeaveRequestId, LeaveStatus};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn employee(id: &str, name: &str, gender: Gender, department: &str) -> Employee {
        Employee {
            id: EmployeeId(id.to_string()),
            rotation_key: 0,
            name: name.to_string(),
            email: format!("{id}@example.com"),
            gender,
            department: department.to_string(),
            role: "Agent".to_string(),
            hire_date: date(2021, 5, 3),
            birth_date: date(1990, 1, 15),
            phone: "+55 11 5550 0123".to_string(),
            address: "3 Pier Street".to_string(),
            avatar: None,
        }
    }

    fn pending_request(id: &str, employee_id: &str, kind: LeaveKind) -> LeaveRequest {
        LeaveRequest {
            id: LeaveRequestId(id.to_string()),
            employee_id: EmployeeId(employee_id.to_string()),
            start_date: date(2024, 3, 1),
            end_date: date(2024, 3, 2),
            kind,
            status: LeaveStatus::Pending,
            notes: None,
        }
    }

    fn roster() -> (Vec<Employee>, Vec<LeaveRequest>) {
        let employees = vec![
            employee("emp-1", "Ana Lima", Gender::Female, "Support"),
            employee("emp-2", "Bruno Costa", Gender::Male, "Sales"),
            employee("emp-3", "Carla Mendes", Gender::Female, "Operations"),
        ];
        let requests = vec![
            pending_request("r-1", "emp-1", LeaveKind::Vacation),
            pending_request("r-2", "emp-2", LeaveKind::Maternity),
        ];
        (employees, requests)
    }

    #[test]
    fn default_filter_matches_everyone() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);

        let matched = filter_employees(&employees, &schedule, &EmployeeFilter::default());
        assert_eq!(matched.len(), employees.len());
    }

    #[test]
    fn gender_criterion_narrows_the_list() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);
        let filter = EmployeeFilter {
            gender: Some(Gender::Female),
            ..EmployeeFilter::default()
        };

        let matched = filter_employees(&employees, &schedule, &filter);
        let names: Vec<&str> = matched.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Ana Lima", "Carla Mendes"]);
    }

    #[test]
    fn kind_criterion_counts_requests_in_any_status() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);
        let filter = EmployeeFilter {
            leave_kind: Some(LeaveKind::Maternity),
            ..EmployeeFilter::default()
        };

        // emp-2's maternity request is only pending, yet it still matches.
        let matched = filter_employees(&employees, &schedule, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Bruno Costa");
    }

    #[test]
    fn search_matches_name_or_department_case_insensitively() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);

        let by_name = EmployeeFilter {
            search: Some("ana".to_string()),
            ..EmployeeFilter::default()
        };
        let matched = filter_employees(&employees, &schedule, &by_name);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Ana Lima");

        let by_department = EmployeeFilter {
            search: Some("OPERATIONS".to_string()),
            ..EmployeeFilter::default()
        };
        let matched = filter_employees(&employees, &schedule, &by_department);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Carla Mendes");
    }

    #[test]
    fn blank_search_terms_are_ignored() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);
        let filter = EmployeeFilter {
            search: Some("   ".to_string()),
            ..EmployeeFilter::default()
        };

        assert_eq!(
            filter_employees(&employees, &schedule, &filter).len(),
            employees.len()
        );
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let (employees, requests) = roster();
        let schedule = LeaveSchedule::new(&requests);
        let filter = EmployeeFilter {
            gender: Some(Gender::Female),
            leave_kind: Some(LeaveKind::Vacation),
            search: Some("lima".to_string()),
        };

        let matched = filter_employees(&employees, &schedule, &filter);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Ana Lima");

        let conflicting = EmployeeFilter {
            gender: Some(Gender::Male),
            leave_kind: Some(LeaveKind::Vacation),
            search: None,
        };
        assert!(filter_employees(&employees, &schedule, &conflicting).is_empty());
    }
}
