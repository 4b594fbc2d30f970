use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiEnvelope, ApiError, CreateEmployee, Employee, EmployeeStats, UpdateEmployee},
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<ApiEnvelope<Vec<Employee>>, ApiError> {
        self.get_json("/employees/", &[]).await
    }

    pub async fn get_employee(&self, id: i64) -> Result<ApiEnvelope<Employee>, ApiError> {
        self.get_json(&format!("/employees/{}/", id), &[]).await
    }

    pub async fn create_employee(
        &self,
        payload: &CreateEmployee,
    ) -> Result<ApiEnvelope<Employee>, ApiError> {
        self.request_json(Method::POST, "/employees/", &[], Some(payload))
            .await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &UpdateEmployee,
    ) -> Result<ApiEnvelope<Employee>, ApiError> {
        self.request_json(
            Method::PUT,
            &format!("/employees/{}/", id),
            &[],
            Some(payload),
        )
        .await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<ApiEnvelope<Value>, ApiError> {
        self.request_json::<_, Value>(Method::DELETE, &format!("/employees/{}/", id), &[], None)
            .await
    }

    pub async fn get_employee_stats(
        &self,
        employee_code: &str,
    ) -> Result<ApiEnvelope<EmployeeStats>, ApiError> {
        let code = utf8_percent_encode(employee_code.trim(), NON_ALPHANUMERIC);
        self.get_json(&format!("/employees/{}/stats/", code), &[])
            .await
    }
}
