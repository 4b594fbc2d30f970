use super::{
    components::{AttendanceFilterBar, AttendanceForm, AttendanceList},
    utils::DELETE_PROMPT,
    view_model::use_attendance_view_model,
};
use crate::{
    components::{
        alert::AlertBanner,
        confirm_dialog::ConfirmDialog,
        layout::{Layout, PageHeader},
    },
    utils::time::today_local,
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let vm = use_attendance_view_model();
    let delete_open = Signal::derive(move || vm.pending_delete.with(Option::is_some));

    view! {
        <Title text="Attendance | HRMS Lite" />
        <Layout>
            <PageHeader title="Attendance Management" subtitle="Mark and review daily attendance" />
            <div class="space-y-6">
                <AlertBanner alerts=vm.alerts />
                <AttendanceForm
                    form_state=vm.form
                    pending=vm.create_action.pending()
                    today=today_local()
                    on_submit=Callback::new(move |_| vm.submit())
                />
                <AttendanceFilterBar
                    filter_state=vm.filter_form
                    on_apply=Callback::new(move |_| vm.apply_filters())
                    on_clear=Callback::new(move |_| vm.clear_filters())
                />
                <AttendanceList
                    records=vm.records_resource
                    loading=vm.records_resource.loading()
                    on_delete=Callback::new(move |record| vm.request_delete(record))
                />
            </div>
            <ConfirmDialog
                is_open=delete_open
                title="Delete Attendance Record"
                message=DELETE_PROMPT.to_string()
                confirm_label="Delete"
                confirm_disabled=vm.delete_action.pending()
                destructive=true
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn page_renders_form_filters_and_loading_list() {
        let html = render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://unused.invalid/api"));
            view! { <AttendancePage /> }
        });
        assert!(html.contains("Attendance Management"));
        assert!(html.contains("Mark Attendance"));
        assert!(html.contains("Apply Filters"));
        assert!(html.contains("Loading attendance records..."));
        assert!(!html.contains("alertdialog"));
    }
}
