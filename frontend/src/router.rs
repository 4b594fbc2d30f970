use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{empty_state::EmptyState, layout::Layout},
    pages::{attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/employees", "/attendance"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Title text="HRMS Lite" />
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/employees" view=EmployeesPage/>
                <Route path="/attendance" view=AttendancePage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <Layout>
            <EmptyState
                icon="🧭"
                title="Page Not Found"
                description="The page you are looking for does not exist."
            />
        </Layout>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn not_found_page_renders_inside_layout() {
        let html = render_to_string(move || view! { <NotFoundPage /> });
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("HRMS Lite"));
    }
}
