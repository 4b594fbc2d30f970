use crate::{
    api::AttendanceStatus,
    components::common::{FieldLabel, FormField, SubmitButton, INPUT_CLASSES},
    pages::attendance::utils::AttendanceFormState,
    utils::time::date_input_value,
};
use chrono::NaiveDate;
use leptos::{ev, *};

#[component]
pub fn AttendanceForm(
    form_state: RwSignal<AttendanceFormState>,
    #[prop(into)] pending: Signal<bool>,
    today: NaiveDate,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-lg font-medium text-fg">"Mark Attendance"</h3>
            <form class="grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=handle_submit>
                <FormField
                    label="Employee ID"
                    placeholder="e.g. EMP001"
                    required=true
                    value=Signal::derive(move || form_state.with(|s| s.employee_id.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.employee_id = value))
                />
                <FormField
                    label="Date"
                    input_type="date"
                    required=true
                    max=date_input_value(today)
                    value=Signal::derive(move || form_state.with(|s| s.date.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.date = value))
                />
                <label class="block">
                    <FieldLabel text="Status" required=true />
                    <StatusSelect
                        value=Signal::derive(move || form_state.with(|s| s.status.clone()))
                        on_change=Callback::new(move |value| form_state.update(|s| s.status = value))
                        placeholder="Select status"
                    />
                </label>
                <div class="md:col-span-3">
                    <SubmitButton busy=pending label="Mark Attendance" busy_label="Marking Attendance..." />
                </div>
            </form>
        </section>
    }
}

/// Present/Absent picker with a blank leading option.
#[component]
pub fn StatusSelect(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    placeholder: &'static str,
    #[prop(optional)] on_enter: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <select
            class=INPUT_CLASSES
            prop:value=move || value.get()
            on:change=move |ev| on_change.call(event_target_value(&ev))
            on:keydown=move |ev: ev::KeyboardEvent| {
                if let Some(cb) = on_enter {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        cb.call(());
                    }
                }
            }
        >
            <option value="">{placeholder}</option>
            {AttendanceStatus::ALL
                .iter()
                .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                .collect_view()}
        </select>
    }
}
