use super::repository::DashboardRepository;
use crate::api::{ApiClient, ApiError, DashboardStats};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub stats_resource: Resource<(), Result<DashboardStats, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));

    let stats_resource = create_resource(
        || (),
        move |_| {
            let repo = repository.clone();
            async move {
                repo.fetch_stats().await.map_err(|err| {
                    log::error!("Error loading dashboard: {}", err.display_text());
                    err
                })
            }
        },
    );

    DashboardViewModel { stats_resource }
}
