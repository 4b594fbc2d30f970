use super::{
    repository::AttendanceRepository,
    utils::{
        AttendanceFormState, AttendanceQuery, FilterFormState, CREATED_MESSAGE, DELETED_MESSAGE,
    },
};
use crate::{
    api::{ApiClient, ApiError, AttendanceFilters, AttendanceRecord, CreateAttendance, Listing},
    components::alert::Alerts,
    utils::{dom::scroll_to_top, time::today_local},
};
use leptos::*;
use std::rc::Rc;

/// Page state for `/attendance`. The applied filters live in `query` and are
/// reused by every reload until they are changed or cleared.
#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub repository: StoredValue<AttendanceRepository>,
    pub form: RwSignal<AttendanceFormState>,
    pub filter_form: RwSignal<FilterFormState>,
    pub query: RwSignal<AttendanceQuery>,
    pub alerts: Alerts,
    pub records_resource: Resource<AttendanceQuery, Result<Listing<AttendanceRecord>, ApiError>>,
    pub create_action: Action<CreateAttendance, Result<(), ApiError>>,
    pub delete_action: Action<i64, Result<Option<String>, ApiError>>,
    pub pending_delete: RwSignal<Option<AttendanceRecord>>,
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = AttendanceRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(AttendanceFormState::new(today_local()));
    let filter_form = create_rw_signal(FilterFormState::default());
    let query = create_rw_signal(AttendanceQuery::default());
    let alerts = Alerts::new();
    let pending_delete = create_rw_signal(None::<AttendanceRecord>);

    let repo_for_list = repository.clone();
    let records_resource = create_resource(
        move || query.get(),
        move |query| {
            let repo = repo_for_list.clone();
            async move {
                repo.fetch_records(&query.filters).await.map_err(|err| {
                    log::error!("Error loading attendance: {}", err.display_text());
                    err
                })
            }
        },
    );

    let repo_for_create = repository.clone();
    let mark_attendance_action = create_action(move |payload: &CreateAttendance| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.mark_attendance(payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_record_action = create_action(move |id: &i64| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { repo.delete_record(id).await }
    });

    let vm = AttendanceViewModel {
        repository: store_value(repository),
        form,
        filter_form,
        query,
        alerts,
        records_resource,
        create_action: mark_attendance_action,
        delete_action: delete_record_action,
        pending_delete,
    };

    create_effect(move |_| {
        if let Some(result) = mark_attendance_action.value().get() {
            vm.apply_create_result(result, today_local());
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_record_action.value().get() {
            vm.apply_delete_result(result);
        }
    });

    vm
}

impl AttendanceViewModel {
    pub fn applied_filters(&self) -> AttendanceFilters {
        self.query.with_untracked(|query| query.filters.clone())
    }

    /// Validates against `today`; a rejected form raises an error alert.
    pub fn prepare_submit(&self, today: chrono::NaiveDate) -> Option<CreateAttendance> {
        match self.form.with_untracked(|form| form.validate(today)) {
            Ok(payload) => Some(payload),
            Err(err) => {
                self.alerts.error(err.to_string());
                None
            }
        }
    }

    pub fn submit(&self) {
        if let Some(payload) = self.prepare_submit(today_local()) {
            self.create_action.dispatch(payload);
        }
    }

    pub fn apply_create_result(&self, result: Result<(), ApiError>, today: chrono::NaiveDate) {
        match result {
            Ok(()) => {
                self.alerts.success(CREATED_MESSAGE);
                self.form.update(|form| form.reset(today));
                self.reload();
                scroll_to_top();
            }
            Err(err) => {
                log::error!("Error marking attendance: {}", err.display_text());
                self.alerts.api_error(&err);
            }
        }
    }

    /// Refetches with the filters currently applied.
    pub fn reload(&self) {
        self.query.update(|query| *query = query.refresh());
    }

    pub fn apply_filters(&self) {
        let filters = self.filter_form.with_untracked(FilterFormState::to_filters);
        self.query.update(|query| *query = query.with_filters(filters));
    }

    pub fn clear_filters(&self) {
        self.filter_form.set(FilterFormState::default());
        self.query
            .update(|query| *query = query.with_filters(AttendanceFilters::default()));
    }

    pub fn request_delete(&self, record: AttendanceRecord) {
        self.pending_delete.set(Some(record));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(record) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(record.id);
        }
    }

    pub fn apply_delete_result(&self, result: Result<Option<String>, ApiError>) {
        match result {
            Ok(message) => {
                self.alerts
                    .success(message.unwrap_or_else(|| DELETED_MESSAGE.to_string()));
                self.reload();
            }
            Err(err) => {
                log::error!("Error deleting attendance: {}", err.display_text());
                self.alerts.api_error(&err);
            }
        }
    }
}
