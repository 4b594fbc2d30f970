use crate::api::{
    ApiClient, ApiError, AttendanceFilters, AttendanceRecord, CreateAttendance, Listing,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl Default for AttendanceRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_records(
        &self,
        filters: &AttendanceFilters,
    ) -> Result<Listing<AttendanceRecord>, ApiError> {
        let envelope = self.client.list_attendance(filters).await?.ensure_success()?;
        Ok(envelope.into_listing())
    }

    pub async fn mark_attendance(&self, payload: CreateAttendance) -> Result<(), ApiError> {
        self.client
            .create_attendance(&payload)
            .await?
            .ensure_success()
            .map(|_| ())
    }

    pub async fn delete_record(&self, id: i64) -> Result<Option<String>, ApiError> {
        let envelope = self.client.delete_attendance(id).await?.ensure_success()?;
        Ok(envelope.message.filter(|m| !m.trim().is_empty()))
    }
}
