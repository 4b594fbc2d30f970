use super::{
    repository::EmployeesRepository,
    utils::{delete_prompt, EmployeeFormState, CREATED_MESSAGE, DELETED_MESSAGE},
};
use crate::{
    api::{ApiClient, ApiError, CreateEmployee, Employee, EmployeeStats, Listing},
    components::alert::Alerts,
    utils::dom::scroll_to_top,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub repository: StoredValue<EmployeesRepository>,
    pub form: RwSignal<EmployeeFormState>,
    pub alerts: Alerts,
    pub reload: RwSignal<u32>,
    pub employees_resource: Resource<u32, Result<Listing<Employee>, ApiError>>,
    pub create_action: Action<CreateEmployee, Result<(), ApiError>>,
    pub delete_action: Action<i64, Result<Option<String>, ApiError>>,
    pub pending_delete: RwSignal<Option<Employee>>,
    pub selected_stats: RwSignal<Option<String>>,
    pub stats_resource: Resource<Option<String>, Option<Result<EmployeeStats, ApiError>>>,
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(EmployeeFormState::default());
    let alerts = Alerts::new();
    let reload = create_rw_signal(0u32);
    let pending_delete = create_rw_signal(None::<Employee>);
    let selected_stats = create_rw_signal(None::<String>);

    let repo_for_list = repository.clone();
    let employees_resource = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move {
                repo.fetch_employees().await.map_err(|err| {
                    log::error!("Error loading employees: {}", err.display_text());
                    err
                })
            }
        },
    );

    let repo_for_stats = repository.clone();
    let stats_resource = create_resource(
        move || selected_stats.get(),
        move |code| {
            let repo = repo_for_stats.clone();
            async move {
                match code {
                    Some(code) => Some(repo.fetch_stats(&code).await),
                    None => None,
                }
            }
        },
    );

    let repo_for_create = repository.clone();
    let create_employee_action = create_action(move |payload: &CreateEmployee| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.create_employee(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_employee_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_employee(id).await }
    });

    let vm = EmployeesViewModel {
        repository: store_value(repository),
        form,
        alerts,
        reload,
        employees_resource,
        create_action: create_employee_action,
        delete_action: delete_employee_action,
        pending_delete,
        selected_stats,
        stats_resource,
    };

    create_effect(move |_| {
        if let Some(result) = create_employee_action.value().get() {
            vm.apply_create_result(result);
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_employee_action.value().get() {
            vm.apply_delete_result(result);
        }
    });

    vm
}

impl EmployeesViewModel {
    /// Validates the form; a rejected form raises an error alert.
    pub fn prepare_submit(&self) -> Option<CreateEmployee> {
        match self.form.with_untracked(EmployeeFormState::validate) {
            Ok(payload) => Some(payload),
            Err(err) => {
                self.alerts.error(err.to_string());
                None
            }
        }
    }

    pub fn submit(&self) {
        if let Some(payload) = self.prepare_submit() {
            self.create_action.dispatch(payload);
        }
    }

    pub fn apply_create_result(&self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.alerts.success(CREATED_MESSAGE);
                self.form.update(EmployeeFormState::reset);
                self.bump_reload();
                scroll_to_top();
            }
            Err(err) => {
                log::error!("Error creating employee: {}", err.display_text());
                self.alerts.api_error(&err);
            }
        }
    }

    pub fn request_delete(&self, employee: Employee) {
        self.pending_delete.set(Some(employee));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Prompt text for the pending target, empty when nothing is pending.
    pub fn delete_prompt(&self) -> String {
        self.pending_delete
            .with(|target| target.as_ref().map(|e| delete_prompt(&e.employee_id)))
            .unwrap_or_default()
    }

    pub fn confirm_delete(&self) {
        if let Some(employee) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(employee.id);
        }
    }

    pub fn apply_delete_result(&self, result: Result<Option<String>, ApiError>) {
        match result {
            Ok(message) => {
                self.alerts
                    .success(message.unwrap_or_else(|| DELETED_MESSAGE.to_string()));
                self.selected_stats.set(None);
                self.bump_reload();
            }
            Err(err) => {
                log::error!("Error deleting employee: {}", err.display_text());
                self.alerts.api_error(&err);
            }
        }
    }

    pub fn show_stats(&self, employee_code: String) {
        self.selected_stats.set(Some(employee_code));
    }

    pub fn close_stats(&self) {
        self.selected_stats.set(None);
    }

    fn bump_reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::components::alert::AlertLevel;
    use serde_json::json;

    fn view_model(server: &MockServer) -> (RuntimeId, EmployeesViewModel) {
        let runtime = create_runtime();
        leptos_reactive::suppress_resource_load(true);
        provide_context(ApiClient::new_with_base_url(server.url("/api")));
        (runtime, use_employees_view_model())
    }

    fn teardown(runtime: RuntimeId) {
        leptos_reactive::suppress_resource_load(false);
        runtime.dispose();
    }

    fn sample_employee() -> Employee {
        serde_json::from_value(json!({
            "id": 4,
            "employee_id": "E004",
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "department": "Engineering",
            "created_at": "2024-01-05T10:30:00Z"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn create_and_delete_actions_start_idle() {
        let server = MockServer::start_async().await;
        let (runtime, vm) = view_model(&server);

        assert!(!vm.create_action.pending().get_untracked());
        assert!(!vm.delete_action.pending().get_untracked());
        assert_eq!(vm.create_action.version().get_untracked(), 0);
        assert!(vm.create_action.value().get_untracked().is_none());
        assert!(vm.delete_action.value().get_untracked().is_none());
        assert!(server.hits().is_empty());

        teardown(runtime);
    }

    #[tokio::test]
    async fn invalid_form_alerts_without_request() {
        let server = MockServer::start_async().await;
        let (runtime, vm) = view_model(&server);

        vm.form.set(EmployeeFormState {
            employee_id: "E001".into(),
            full_name: "Ada".into(),
            email: "ada-at-example".into(),
            department: "Eng".into(),
        });
        assert!(vm.prepare_submit().is_none());
        let alert = vm.alerts.current_untracked().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.message, "Please enter a valid email address.");
        assert!(server.hits().is_empty());

        teardown(runtime);
    }

    #[tokio::test]
    async fn successful_create_resets_form_and_reloads() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employees/");
            then.status(201).json_body(json!({ "success": true }));
        });
        let (runtime, vm) = view_model(&server);

        vm.form.set(EmployeeFormState {
            employee_id: "E001".into(),
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            department: "Eng".into(),
        });
        let payload = vm.prepare_submit().unwrap();
        let result = vm.repository.get_value().create_employee(payload).await;
        vm.apply_create_result(result);

        assert_eq!(vm.form.get_untracked(), EmployeeFormState::default());
        assert_eq!(vm.reload.get_untracked(), 1);
        let alert = vm.alerts.current_untracked().unwrap();
        assert_eq!(alert.level, AlertLevel::Success);
        assert_eq!(alert.message, CREATED_MESSAGE);

        teardown(runtime);
    }

    #[tokio::test]
    async fn failed_create_keeps_form_and_shows_field_errors() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employees/");
            then.status(400).json_body(json!({
                "success": false,
                "error": { "employee_id": ["Employee ID already exists."] }
            }));
        });
        let (runtime, vm) = view_model(&server);

        let filled = EmployeeFormState {
            employee_id: "E001".into(),
            full_name: "Ada".into(),
            email: "ada@example.com".into(),
            department: "Eng".into(),
        };
        vm.form.set(filled.clone());
        let payload = vm.prepare_submit().unwrap();
        let result = vm.repository.get_value().create_employee(payload).await;
        vm.apply_create_result(result);

        assert_eq!(vm.form.get_untracked(), filled);
        assert_eq!(vm.reload.get_untracked(), 0);
        assert_eq!(
            vm.alerts.current_untracked().unwrap().message,
            "employee_id: Employee ID already exists."
        );

        teardown(runtime);
    }

    #[tokio::test]
    async fn cancelled_delete_sends_nothing() {
        let server = MockServer::start_async().await;
        let (runtime, vm) = view_model(&server);

        vm.request_delete(sample_employee());
        assert!(vm.delete_prompt().contains("delete employee E004?"));
        vm.cancel_delete();

        assert!(vm.pending_delete.get_untracked().is_none());
        assert!(vm.delete_prompt().is_empty());
        assert!(server.hits_for(DELETE, "/api/employees/4/").is_empty());
        assert_eq!(vm.reload.get_untracked(), 0);

        teardown(runtime);
    }

    #[tokio::test]
    async fn delete_result_prefers_backend_message() {
        let server = MockServer::start_async().await;
        let (runtime, vm) = view_model(&server);

        vm.apply_delete_result(Ok(Some("Employee E004 deleted successfully.".into())));
        assert_eq!(
            vm.alerts.current_untracked().unwrap().message,
            "Employee E004 deleted successfully."
        );
        vm.apply_delete_result(Ok(None));
        assert_eq!(vm.alerts.current_untracked().unwrap().message, DELETED_MESSAGE);
        assert_eq!(vm.reload.get_untracked(), 2);

        vm.apply_delete_result(Err(ApiError::network("connection refused")));
        let alert = vm.alerts.current_untracked().unwrap();
        assert_eq!(alert.level, AlertLevel::Error);
        assert_eq!(alert.message, crate::api::NETWORK_ERROR_MESSAGE);

        teardown(runtime);
    }

    #[tokio::test]
    async fn stats_selection_toggles() {
        let server = MockServer::start_async().await;
        let (runtime, vm) = view_model(&server);

        vm.show_stats("E004".into());
        assert_eq!(vm.selected_stats.get_untracked().as_deref(), Some("E004"));
        vm.close_stats();
        assert!(vm.selected_stats.get_untracked().is_none());

        teardown(runtime);
    }
}
