use crate::api::{ApiClient, ApiError, DashboardStats};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardRepository {
    pub fn new() -> Self {
        Self::new_with_client(Rc::new(ApiClient::new()))
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// Missing `data` reads as an all-zero snapshot.
    pub async fn fetch_stats(&self) -> Result<DashboardStats, ApiError> {
        let envelope = self.client.get_dashboard_stats().await?.ensure_success()?;
        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn fetch_stats_unwraps_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/");
            then.status(200).json_body(json!({
                "success": true,
                "data": { "total_employees": 5, "present_today": 4, "absent_today": 1, "attendance_rate": 80.0 }
            }));
        });

        let stats = repository(&server).fetch_stats().await.unwrap();
        assert_eq!(stats.total_employees, 5);
        assert_eq!(stats.attendance_rate, 80.0);
    }

    #[tokio::test]
    async fn unsuccessful_envelope_is_an_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/");
            then.status(200).json_body(json!({
                "success": false,
                "error": "Stats are unavailable."
            }));
        });

        let err = repository(&server).fetch_stats().await.unwrap_err();
        assert_eq!(err.message, "Stats are unavailable.");
    }

    #[tokio::test]
    async fn missing_data_reads_as_zeroes() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/dashboard/");
            then.status(200).json_body(json!({ "success": true }));
        });

        let stats = repository(&server).fetch_stats().await.unwrap();
        assert_eq!(stats, DashboardStats::default());
    }
}
