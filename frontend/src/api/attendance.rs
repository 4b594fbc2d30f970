use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{
        ApiEnvelope, ApiError, AttendanceFilters, AttendanceRecord, CreateAttendance,
        UpdateAttendance,
    },
};

impl ApiClient {
    pub async fn list_attendance(
        &self,
        filters: &AttendanceFilters,
    ) -> Result<ApiEnvelope<Vec<AttendanceRecord>>, ApiError> {
        self.get_json("/attendance/", &filters.query_params()).await
    }

    pub async fn get_attendance(&self, id: i64) -> Result<ApiEnvelope<AttendanceRecord>, ApiError> {
        self.get_json(&format!("/attendance/{}/", id), &[]).await
    }

    pub async fn create_attendance(
        &self,
        payload: &CreateAttendance,
    ) -> Result<ApiEnvelope<AttendanceRecord>, ApiError> {
        self.request_json(Method::POST, "/attendance/", &[], Some(payload))
            .await
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        payload: &UpdateAttendance,
    ) -> Result<ApiEnvelope<AttendanceRecord>, ApiError> {
        self.request_json(
            Method::PUT,
            &format!("/attendance/{}/", id),
            &[],
            Some(payload),
        )
        .await
    }

    pub async fn delete_attendance(&self, id: i64) -> Result<ApiEnvelope<Value>, ApiError> {
        self.request_json::<_, Value>(Method::DELETE, &format!("/attendance/{}/", id), &[], None)
            .await
    }
}
