use crate::{
    components::common::{FormField, SubmitButton},
    pages::employees::utils::EmployeeFormState,
};
use leptos::{ev, *};

#[component]
pub fn EmployeeForm(
    form_state: RwSignal<EmployeeFormState>,
    #[prop(into)] pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-lg font-medium text-fg">"Add New Employee"</h3>
                <p class="text-sm text-fg-muted">"All fields are required."</p>
            </div>
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=handle_submit>
                <FormField
                    label="Employee ID"
                    placeholder="e.g. EMP001"
                    required=true
                    value=Signal::derive(move || form_state.with(|s| s.employee_id.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.employee_id = value))
                />
                <FormField
                    label="Full Name"
                    placeholder="e.g. Jane Doe"
                    required=true
                    value=Signal::derive(move || form_state.with(|s| s.full_name.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.full_name = value))
                />
                <FormField
                    label="Email"
                    input_type="email"
                    placeholder="e.g. jane@company.com"
                    required=true
                    value=Signal::derive(move || form_state.with(|s| s.email.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.email = value))
                />
                <FormField
                    label="Department"
                    placeholder="e.g. Engineering"
                    required=true
                    value=Signal::derive(move || form_state.with(|s| s.department.clone()))
                    on_input=Callback::new(move |value| form_state.update(|s| s.department = value))
                />
                <div class="md:col-span-2">
                    <SubmitButton busy=pending label="Add Employee" busy_label="Adding Employee..." />
                </div>
            </form>
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_all_fields_and_idle_label() {
        let html = render_to_string(move || {
            view! {
                <EmployeeForm
                    form_state=create_rw_signal(EmployeeFormState::default())
                    pending=Signal::derive(|| false)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        for label in ["Employee ID", "Full Name", "Email", "Department", "Add Employee"] {
            assert!(html.contains(label), "missing {}", label);
        }
        assert!(html.contains("type=\"email\""));
    }

    #[test]
    fn pending_swaps_submit_label() {
        let html = render_to_string(move || {
            view! {
                <EmployeeForm
                    form_state=create_rw_signal(EmployeeFormState::default())
                    pending=Signal::derive(|| true)
                    on_submit=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Adding Employee..."));
    }
}
