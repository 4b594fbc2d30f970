use crate::{
    api::{AttendanceFilters, AttendanceStatus, CreateAttendance},
    utils::{
        time::{date_input_value, parse_date_input},
        validation::{required, FormError},
    },
};
use chrono::NaiveDate;

pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load attendance records. Please make sure the backend server is running.";
pub const CREATED_MESSAGE: &str = "Attendance marked successfully!";
pub const DELETED_MESSAGE: &str = "Attendance record deleted successfully!";
pub const DELETE_PROMPT: &str =
    "Are you sure you want to delete this attendance record?\n\nThis action cannot be undone.";
pub const EMPTY_TITLE: &str = "No Attendance Records";
pub const EMPTY_MESSAGE: &str = "No attendance records match your filters. Try adjusting your search criteria or mark new attendance.";

/// Raw input values of the mark-attendance form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceFormState {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

impl AttendanceFormState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: date_input_value(today),
            status: String::new(),
        }
    }

    /// Required fields first, then the date. An unknown status counts as missing.
    pub fn validate(&self, today: NaiveDate) -> Result<CreateAttendance, FormError> {
        let employee_id = required(&self.employee_id);
        let date = required(&self.date);
        let status = AttendanceStatus::parse(&self.status);
        let (Some(employee_id), Some(date), Some(status)) = (employee_id, date, status) else {
            return Err(FormError::MissingFields);
        };
        let date = parse_date_input(&date).ok_or(FormError::InvalidDate)?;
        if date > today {
            return Err(FormError::FutureDate);
        }
        Ok(CreateAttendance {
            employee_id,
            date,
            status,
        })
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }
}

/// Raw input values of the filter bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterFormState {
    pub employee_id: String,
    pub date: String,
    pub status: String,
}

impl FilterFormState {
    /// Blank or unparsable inputs are left out.
    pub fn to_filters(&self) -> AttendanceFilters {
        AttendanceFilters {
            employee_id: required(&self.employee_id),
            date: parse_date_input(&self.date),
            status: AttendanceStatus::parse(&self.status),
        }
    }
}

/// Resource key for the attendance list. Bumping `token` refetches with the
/// same filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub filters: AttendanceFilters,
    pub token: u32,
}

impl AttendanceQuery {
    pub fn with_filters(&self, filters: AttendanceFilters) -> Self {
        Self {
            filters,
            token: self.token.wrapping_add(1),
        }
    }

    pub fn refresh(&self) -> Self {
        self.with_filters(self.filters.clone())
    }
}
