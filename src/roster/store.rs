use super::domain::{
    Employee, EmployeeDraft, EmployeeId, LeaveRequest, LeaveRequestDraft, LeaveRequestId,
    LeaveStatus,
};
use uuid::Uuid;

/// In-memory roster state: the employee directory plus every leave request
/// filed during the session.
///
/// All writes go through the `create_*`/`seed_*` methods so identifiers and
/// rotation keys are always store-assigned. Reads hand out slices that
/// callers treat as immutable snapshots; nothing is cached or indexed.
#[derive(Debug, Default)]
pub struct RosterStore {
    employees: Vec<Employee>,
    leave_requests: Vec<LeaveRequest>,
    next_rotation_key: u64,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new employee and returns the stored record.
    ///
    /// The record receives a random v4 UUID and the next rotation key in
    /// this store's sequence; both stay fixed for the record's lifetime.
    pub fn create_employee(&mut self, draft: EmployeeDraft) -> Employee {
        let rotation_key = self.next_rotation_key;
        self.next_rotation_key += 1;

        let employee = Employee {
            id: EmployeeId(Uuid::new_v4().to_string()),
            rotation_key,
            name: draft.name,
            email: draft.email,
            gender: draft.gender,
            department: draft.department,
            role: draft.role,
            hire_date: draft.hire_date,
            birth_date: draft.birth_date,
            phone: draft.phone,
            address: draft.address,
            avatar: draft.avatar,
        };

        self.employees.push(employee.clone());
        employee
    }

    /// Files a new leave request. Every request starts out `pending`.
    pub fn create_leave_request(&mut self, draft: LeaveRequestDraft) -> LeaveRequest {
        self.record_leave_request(draft, LeaveStatus::Pending)
    }

    /// Records a leave request that already carries a status.
    ///
    /// This is the hydration path for importers, sample data, and tests;
    /// live bookings go through [`Self::create_leave_request`]. It is not a
    /// status transition: existing requests are never modified.
    pub fn seed_leave_request(
        &mut self,
        draft: LeaveRequestDraft,
        status: LeaveStatus,
    ) -> LeaveRequest {
        self.record_leave_request(draft, status)
    }

    fn record_leave_request(
        &mut self,
        draft: LeaveRequestDraft,
        status: LeaveStatus,
    ) -> LeaveRequest {
        let request = LeaveRequest {
            id: LeaveRequestId(Uuid::new_v4().to_string()),
            employee_id: draft.employee_id,
            start_date: draft.start_date,
            end_date: draft.end_date,
            kind: draft.kind,
            status,
            notes: draft.notes,
        };

        self.leave_requests.push(request.clone());
        request
    }

    /// Directory in creation order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Every request in filing order.
    pub fn leave_requests(&self) -> &[LeaveRequest] {
        &self.leave_requests
    }

    /// Looks up one employee. Unknown ids yield `None`, never an error.
    pub fn employee(&self, id: &EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|employee| &employee.id == id)
    }

    pub fn leave_requests_for(&self, employee_id: &EmployeeId) -> Vec<&LeaveRequest> {
        self.leave_requests
            .iter()
            .filter(|request| &request.employee_id == employee_id)
            .collect()
    }
}
