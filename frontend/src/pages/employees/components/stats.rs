use crate::{
    api::{ApiError, EmployeeStats},
    components::layout::{ErrorMessage, LoadingSpinner},
};
use leptos::*;

/// Side card with one employee's attendance totals.
#[component]
pub fn EmployeeStatsCard(
    stats: Resource<Option<String>, Option<Result<EmployeeStats, ApiError>>>,
    #[prop(into)] selected: Signal<Option<String>>,
    #[prop(into)] loading: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || selected.with(Option::is_some)>
            <aside class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
                <div class="flex items-start justify-between">
                    <h3 class="text-lg font-medium text-fg">
                        {move || format!("Attendance Summary: {}", selected.get().unwrap_or_default())}
                    </h3>
                    <button
                        type="button"
                        aria-label="Close"
                        class="text-fg-muted hover:text-fg"
                        on:click=move |_| on_close.call(())
                    >
                        {"✕"}
                    </button>
                </div>
                {move || match (loading.get(), stats.get().flatten()) {
                    (true, _) | (_, None) => {
                        view! { <LoadingSpinner message="Loading statistics..." /> }.into_view()
                    }
                    (_, Some(Err(err))) => {
                        view! { <ErrorMessage message=err.display_text() /> }.into_view()
                    }
                    (_, Some(Ok(stats))) => stats_body(stats).into_view(),
                }}
            </aside>
        </Show>
    }
}

fn stats_body(stats: EmployeeStats) -> impl IntoView {
    let rows = [
        ("Total Days", stats.total_days.to_string()),
        ("Present", stats.present_days.to_string()),
        ("Absent", stats.absent_days.to_string()),
        ("Attendance Rate", format!("{}%", stats.attendance_rate)),
    ];
    view! {
        <div class="space-y-3">
            <p class="text-sm text-fg-muted">{stats.employee_name}</p>
            <dl class="grid grid-cols-2 gap-4">
                {rows
                    .into_iter()
                    .map(|(label, value)| view! {
                        <div>
                            <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                            <dd class="mt-1 text-2xl font-semibold text-fg">{value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}
