use super::domain::{EmployeeDraft, Gender, LeaveKind, LeaveRequestDraft, LeaveStatus};
use super::store::RosterStore;
use chrono::{Duration, NaiveDate};

/// Builds the canned roster used by the demo command.
///
/// Bookings are placed relative to `today` so every view has content: a
/// vacation and a maternity leave in progress, a pending day off, a future
/// booking, and a rejected request that only the calendar listing shows.
pub fn sample_roster(today: NaiveDate) -> RosterStore {
    let mut store = RosterStore::new();

    let ana = store.create_employee(employee(
        "Ana Lima",
        "ana.lima@example.com",
        Gender::Female,
        "Support",
        "Support Analyst",
    ));
    let bruno = store.create_employee(employee(
        "Bruno Costa",
        "bruno.costa@example.com",
        Gender::Male,
        "Sales",
        "Account Executive",
    ));
    let carla = store.create_employee(employee(
        "Carla Mendes",
        "carla.mendes@example.com",
        Gender::Female,
        "Operations",
        "Operations Coordinator",
    ));
    let diego = store.create_employee(employee(
        "Diego Ramos",
        "diego.ramos@example.com",
        Gender::Male,
        "Operations",
        "Logistics Agent",
    ));
    let elisa = store.create_employee(employee(
        "Elisa Rocha",
        "elisa.rocha@example.com",
        Gender::Female,
        "Finance",
        "Accountant",
    ));
    store.create_employee(employee(
        "Fabio Nunes",
        "fabio.nunes@example.com",
        Gender::Male,
        "Support",
        "Support Analyst",
    ));

    store.seed_leave_request(
        LeaveRequestDraft {
            employee_id: ana.id,
            start_date: today - Duration::days(3),
            end_date: today + Duration::days(4),
            kind: LeaveKind::Vacation,
            notes: Some("Annual leave".to_string()),
        },
        LeaveStatus::Approved,
    );
    store.seed_leave_request(
        LeaveRequestDraft {
            employee_id: carla.id,
            start_date: today - Duration::days(30),
            end_date: today + Duration::days(90),
            kind: LeaveKind::Maternity,
            notes: None,
        },
        LeaveStatus::Approved,
    );
    store.seed_leave_request(
        LeaveRequestDraft {
            employee_id: diego.id,
            start_date: today + Duration::days(14),
            end_date: today + Duration::days(21),
            kind: LeaveKind::Vacation,
            notes: Some("Family visit".to_string()),
        },
        LeaveStatus::Approved,
    );
    store.seed_leave_request(
        LeaveRequestDraft {
            employee_id: elisa.id,
            start_date: today - Duration::days(10),
            end_date: today - Duration::days(9),
            kind: LeaveKind::Other,
            notes: Some("Conference".to_string()),
        },
        LeaveStatus::Rejected,
    );
    store.create_leave_request(LeaveRequestDraft {
        employee_id: bruno.id,
        start_date: today + Duration::days(3),
        end_date: today + Duration::days(3),
        kind: LeaveKind::DayOff,
        notes: None,
    });

    store
}

fn employee(
    name: &str,
    email: &str,
    gender: Gender,
    department: &str,
    role: &str,
) -> EmployeeDraft {
    EmployeeDraft {
        name: name.to_string(),
        email: email.to_string(),
        gender,
        department: department.to_string(),
        role: role.to_string(),
        hire_date: NaiveDate::from_ymd_opt(2021, 5, 3).expect("valid hire date"),
        birth_date: NaiveDate::from_ymd_opt(1991, 9, 12).expect("valid birth date"),
        phone: "+55 11 5550 0100".to_string(),
        address: "Rua do Porto 18, Santos".to_string(),
        avatar: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::schedule::LeaveSchedule;

    #[test]
    fn sample_covers_every_demo_view() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        let store = sample_roster(today);

        assert_eq!(store.employees().len(), 6);
        assert_eq!(store.leave_requests().len(), 5);

        let schedule = LeaveSchedule::new(store.leave_requests());
        let current = schedule.current_leaves(today);
        let kinds: Vec<LeaveKind> = current.iter().map(|request| request.kind).collect();
        assert!(kinds.contains(&LeaveKind::Vacation));
        assert!(kinds.contains(&LeaveKind::Maternity));

        assert!(store
            .leave_requests()
            .iter()
            .any(|request| request.status == LeaveStatus::Pending));
        assert!(store
            .leave_requests()
            .iter()
            .any(|request| request.start_date > today));
    }
}
