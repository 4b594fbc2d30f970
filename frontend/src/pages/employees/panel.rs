use super::{
    components::{EmployeeForm, EmployeeList, EmployeeStatsCard},
    view_model::use_employees_view_model,
};
use crate::{
    api::Employee,
    components::{
        alert::AlertBanner,
        confirm_dialog::ConfirmDialog,
        layout::{Layout, PageHeader},
    },
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = use_employees_view_model();
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));

    view! {
        <Title text="Employees | HRMS Lite" />
        <Layout>
            <PageHeader title="Employee Management" subtitle="Add, view, and remove employees" />
            <div class="space-y-6">
                <AlertBanner alerts=vm.alerts />
                <EmployeeForm
                    form_state=vm.form
                    pending=vm.create_action.pending()
                    on_submit=Callback::new(move |_| vm.submit())
                />
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2">
                        <EmployeeList
                            employees=vm.employees_resource
                            loading=vm.employees_resource.loading()
                            on_delete=Callback::new(move |employee| vm.request_delete(employee))
                            on_select=Callback::new(move |employee: Employee| {
                                vm.show_stats(employee.employee_id)
                            })
                        />
                    </div>
                    <EmployeeStatsCard
                        stats=vm.stats_resource
                        selected=vm.selected_stats
                        loading=vm.stats_resource.loading()
                        on_close=Callback::new(move |_| vm.close_stats())
                    />
                </div>
            </div>
            <ConfirmDialog
                is_open=delete_open
                title="Delete Employee"
                message=Signal::derive(move || vm.delete_prompt())
                confirm_label="Delete"
                confirm_disabled=vm.delete_action.pending()
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </Layout>
    }
}
