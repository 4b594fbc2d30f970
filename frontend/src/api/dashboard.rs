use super::{
    client::ApiClient,
    types::{ApiEnvelope, ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<ApiEnvelope<DashboardStats>, ApiError> {
        self.get_json("/dashboard/", &[]).await
    }
}
