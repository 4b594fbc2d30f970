use crate::{
    api::{ApiError, Employee, Listing},
    components::{
        layout::{CountBadge, ErrorMessage, LoadingSpinner},
        tables::EmployeeTable,
    },
    pages::employees::utils::LOAD_ERROR_MESSAGE,
};
use leptos::*;

#[component]
pub fn EmployeeList(
    employees: Resource<u32, Result<Listing<Employee>, ApiError>>,
    #[prop(into)] loading: Signal<bool>,
    on_delete: Callback<Employee>,
    on_select: Callback<Employee>,
) -> impl IntoView {
    let listing = Signal::derive(move || {
        employees
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let rows = Signal::derive(move || listing.with(|listing| listing.items.clone()));
    let count = Signal::derive(move || listing.with(|listing| listing.count));

    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h3 class="text-lg font-medium text-fg">"All Employees"</h3>
                <CountBadge count=count noun="Employee" />
            </div>
            {move || match (loading.get(), employees.get()) {
                (true, _) | (_, None) => {
                    view! { <LoadingSpinner message="Loading employees..." /> }.into_view()
                }
                (_, Some(Err(_))) => view! { <ErrorMessage message=LOAD_ERROR_MESSAGE /> }.into_view(),
                (_, Some(Ok(_))) => view! {
                    <EmployeeTable employees=rows on_delete=on_delete on_select=on_select />
                }
                .into_view(),
            }}
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render_state(value: Option<Result<Listing<Employee>, ApiError>>, loading: bool) -> String {
        render_to_string(move || {
            let resource = create_resource(|| 0u32, |_| async { Ok(Listing::default()) });
            if let Some(value) = value {
                resource.set(value);
            }
            view! {
                <EmployeeList
                    employees=resource
                    loading=Signal::derive(move || loading)
                    on_delete=Callback::new(|_| {})
                    on_select=Callback::new(|_| {})
                />
            }
        })
    }

    fn render_with(value: Option<Result<Vec<Employee>, ApiError>>) -> String {
        let value = value.map(|result| {
            result.map(|items| Listing {
                count: items.len(),
                items,
            })
        });
        render_state(value, false)
    }

    fn employee(code: &str) -> Employee {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "employee_id": code,
            "full_name": "Grace Hopper",
            "email": "grace@example.com",
            "department": "Research",
            "created_at": "2024-01-05T10:30:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn shows_spinner_while_loading() {
        let html = render_with(None);
        assert!(html.contains("Loading employees..."));
        assert!(html.contains("0 Employees"));
    }

    #[test]
    fn shows_inline_error_on_failure() {
        let html = render_with(Some(Err(ApiError::network("refused"))));
        assert!(html.contains("Please make sure the backend server is running."));
    }

    #[test]
    fn shows_empty_state_for_empty_list() {
        let html = render_with(Some(Ok(Vec::new())));
        assert!(html.contains("No Employees Found"));
    }

    #[test]
    fn reload_shows_spinner_instead_of_stale_rows() {
        let previous = Listing {
            items: vec![employee("E001")],
            count: 1,
        };
        let html = render_state(Some(Ok(previous)), true);
        assert!(html.contains("Loading employees..."));
        assert!(!html.contains("Grace Hopper"));
    }

    #[test]
    fn badge_uses_reported_count() {
        let listing = Listing {
            items: vec![employee("E001")],
            count: 4,
        };
        let html = render_state(Some(Ok(listing)), false);
        assert!(html.contains("4 Employees"));
        assert!(html.contains("Grace Hopper"));
    }
}
