use crate::{
    api::{ApiError, AttendanceRecord, Listing},
    components::{
        layout::{CountBadge, ErrorMessage, LoadingSpinner},
        tables::AttendanceTable,
    },
    pages::attendance::utils::{AttendanceQuery, EMPTY_MESSAGE, EMPTY_TITLE, LOAD_ERROR_MESSAGE},
};
use leptos::*;

#[component]
pub fn AttendanceList(
    records: Resource<AttendanceQuery, Result<Listing<AttendanceRecord>, ApiError>>,
    #[prop(into)] loading: Signal<bool>,
    on_delete: Callback<AttendanceRecord>,
) -> impl IntoView {
    let listing = Signal::derive(move || records.get().and_then(Result::ok).unwrap_or_default());
    let rows = Signal::derive(move || listing.with(|listing| listing.items.clone()));
    let count = Signal::derive(move || listing.with(|listing| listing.count));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-fg">"Attendance Records"</h3>
                <CountBadge count=count noun="Record" />
            </div>
            {move || match (loading.get(), records.get()) {
                (true, _) | (_, None) => {
                    view! { <LoadingSpinner message="Loading attendance records..." /> }.into_view()
                }
                (_, Some(Err(_))) => view! { <ErrorMessage message=LOAD_ERROR_MESSAGE /> }.into_view(),
                (_, Some(Ok(_))) => view! {
                    <AttendanceTable
                        records=rows
                        on_delete=on_delete
                        empty_icon="📋"
                        empty_title=EMPTY_TITLE
                        empty_message=EMPTY_MESSAGE
                    />
                }
                .into_view(),
            }}
        </section>
    }
}
