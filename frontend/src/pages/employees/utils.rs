use crate::{
    api::CreateEmployee,
    utils::{
        text::is_valid_email,
        validation::{required, FormError},
    },
};

pub const LOAD_ERROR_MESSAGE: &str =
    "Failed to load employees. Please make sure the backend server is running.";
pub const CREATED_MESSAGE: &str = "Employee added successfully!";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormState {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeFormState {
    /// Required fields are checked before the email shape.
    pub fn validate(&self) -> Result<CreateEmployee, FormError> {
        let (Some(employee_id), Some(full_name), Some(email), Some(department)) = (
            required(&self.employee_id),
            required(&self.full_name),
            required(&self.email),
            required(&self.department),
        ) else {
            return Err(FormError::MissingFields);
        };
        if !is_valid_email(&email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(CreateEmployee {
            employee_id,
            full_name,
            email,
            department,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub fn delete_prompt(employee_code: &str) -> String {
    format!(
        "Are you sure you want to delete employee {}?\n\nThis action cannot be undone and will also delete all attendance records for this employee.",
        employee_code
    )
}
