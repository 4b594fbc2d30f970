use super::form::StatusSelect;
use crate::{
    components::common::{FieldLabel, FormField},
    pages::attendance::utils::FilterFormState,
};
use leptos::*;

#[component]
pub fn AttendanceFilterBar(
    filter_state: RwSignal<FilterFormState>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"Filter Records"</h3>
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end">
                <FormField
                    label="Employee ID"
                    placeholder="Any employee"
                    value=Signal::derive(move || filter_state.with(|s| s.employee_id.clone()))
                    on_input=Callback::new(move |value| filter_state.update(|s| s.employee_id = value))
                    on_enter=on_apply
                />
                <FormField
                    label="Date"
                    input_type="date"
                    value=Signal::derive(move || filter_state.with(|s| s.date.clone()))
                    on_input=Callback::new(move |value| filter_state.update(|s| s.date = value))
                    on_enter=on_apply
                />
                <label class="block">
                    <FieldLabel text="Status" />
                    <StatusSelect
                        value=Signal::derive(move || filter_state.with(|s| s.status.clone()))
                        on_change=Callback::new(move |value| filter_state.update(|s| s.status = value))
                        placeholder="All"
                        on_enter=on_apply
                    />
                </label>
                <div class="flex gap-2">
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                        on:click=move |_| on_apply.call(())
                    >
                        "Apply Filters"
                    </button>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                        on:click=move |_| on_clear.call(())
                    >
                        "Clear"
                    </button>
                </div>
            </div>
        </section>
    }
}
