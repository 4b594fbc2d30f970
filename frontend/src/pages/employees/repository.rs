use crate::api::{ApiClient, ApiError, CreateEmployee, Employee, EmployeeStats, Listing};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl Default for EmployeesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeesRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_employees(&self) -> Result<Listing<Employee>, ApiError> {
        let envelope = self.client.list_employees().await?.ensure_success()?;
        Ok(envelope.into_listing())
    }

    pub async fn create_employee(&self, payload: CreateEmployee) -> Result<(), ApiError> {
        self.client
            .create_employee(&payload)
            .await?
            .ensure_success()
            .map(|_| ())
    }

    /// Returns the backend's confirmation message, if it sent one.
    pub async fn delete_employee(&self, id: i64) -> Result<Option<String>, ApiError> {
        let envelope = self.client.delete_employee(id).await?.ensure_success()?;
        Ok(envelope.message.filter(|m| !m.trim().is_empty()))
    }

    pub async fn fetch_stats(&self, employee_code: &str) -> Result<EmployeeStats, ApiError> {
        self.client
            .get_employee_stats(employee_code)
            .await?
            .ensure_success()?
            .data
            .ok_or_else(|| ApiError::from_error_value(200, None, None))
    }
}
