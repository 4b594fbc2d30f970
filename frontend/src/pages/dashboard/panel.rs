use super::{
    utils::{stat_cards, LOAD_ERROR_MESSAGE, NO_RECENT_MESSAGE},
    view_model::use_dashboard_view_model,
};
use crate::{
    api::DashboardStats,
    components::{
        cards::StatCard,
        layout::{ErrorMessage, Layout, LoadingSpinner, PageHeader},
        tables::AttendanceTable,
    },
    utils::time::format_date,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();

    view! {
        <Title text="Dashboard | HRMS Lite" />
        <Layout>
            <PageHeader title="Dashboard" subtitle="Overview of your workforce and today's attendance" />
            {move || match vm.stats_resource.get() {
                None => view! { <LoadingSpinner message="Loading dashboard..." /> }.into_view(),
                Some(Err(_)) => view! { <ErrorMessage message=LOAD_ERROR_MESSAGE /> }.into_view(),
                Some(Ok(stats)) => view! { <DashboardContent stats=stats /> }.into_view(),
            }}
        </Layout>
    }
}

#[component]
pub fn DashboardContent(stats: DashboardStats) -> impl IntoView {
    let cards = stat_cards(&stats);
    let heading = match stats.today_date {
        Some(date) => format!("Recent Attendance (today: {})", format_date(date)),
        None => "Recent Attendance".to_string(),
    };
    let recent = stats.recent_attendance;

    view! {
        <div class="space-y-6">
            <dl class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {cards.into_iter().map(|card| view! { <StatCard card=card /> }).collect_view()}
            </dl>
            <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <h3 class="text-lg font-medium text-fg">{heading}</h3>
                <AttendanceTable
                    records=Signal::derive(move || recent.clone())
                    empty_icon="📋"
                    empty_title="No Recent Attendance"
                    empty_message=NO_RECENT_MESSAGE
                />
            </section>
        </div>
    }
}
