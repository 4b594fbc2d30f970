use crate::{
    api::{AttendanceRecord, Employee},
    components::empty_state::EmptyState,
    utils::time::{format_date, format_date_time},
};
use chrono::Local;
use leptos::*;

const TH: &str = "px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-fg-muted";
const TD: &str = "px-4 py-3 text-sm text-fg whitespace-nowrap";

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let present = status == "Present";
    let (icon, classes) = if present {
        ("✅", "bg-status-success-bg text-status-success-text")
    } else {
        ("❌", "bg-status-error-bg text-status-error-text")
    };
    view! {
        <span class=format!(
            "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold {}",
            classes,
        )>
            <span aria-hidden="true">{icon}</span>
            {status}
        </span>
    }
}

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_delete: Callback<Employee>,
    #[prop(optional)] on_select: Option<Callback<Employee>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !employees.with(Vec::is_empty)
            fallback=|| view! {
                <EmptyState
                    icon="👥"
                    title="No Employees Found"
                    description="Start by adding your first employee using the form above."
                />
            }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=TH>"Employee ID"</th>
                            <th class=TH>"Full Name"</th>
                            <th class=TH>"Email"</th>
                            <th class=TH>"Department"</th>
                            <th class=TH>"Joined"</th>
                            <th class=TH>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|employee| employee_row(employee, on_delete, on_select))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

fn employee_row(
    employee: Employee,
    on_delete: Callback<Employee>,
    on_select: Option<Callback<Employee>>,
) -> impl IntoView {
    let joined = format_date(employee.created_at.with_timezone(&Local).date_naive());
    let for_delete = employee.clone();
    let for_select = employee.clone();
    view! {
        <tr class="hover:bg-surface-muted">
            <td class=TD>
                <button
                    type="button"
                    class="font-bold text-fg hover:underline"
                    title="View attendance summary"
                    on:click=move |_| {
                        if let Some(cb) = on_select {
                            cb.call(for_select.clone());
                        }
                    }
                >
                    {employee.employee_id}
                </button>
            </td>
            <td class=TD>{employee.full_name}</td>
            <td class=TD>{employee.email}</td>
            <td class=TD>
                <span class="inline-flex rounded-full bg-surface-muted px-2.5 py-0.5 text-xs font-medium text-fg">
                    {employee.department}
                </span>
            </td>
            <td class=TD>{joined}</td>
            <td class=TD>
                <button
                    type="button"
                    class="text-status-error-text hover:opacity-80"
                    title="Delete Employee"
                    on:click=move |_| on_delete.call(for_delete.clone())
                >
                    {"🗑️"}
                </button>
            </td>
        </tr>
    }
}

/// Attendance rows. Without `on_delete` the Actions column is omitted.
#[component]
pub fn AttendanceTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(optional)] on_delete: Option<Callback<AttendanceRecord>>,
    #[prop(into)] empty_title: String,
    #[prop(into)] empty_message: String,
    #[prop(optional)] empty_icon: Option<&'static str>,
) -> impl IntoView {
    let with_actions = on_delete.is_some();
    view! {
        <Show
            when=move || !records.with(Vec::is_empty)
            fallback=move || view! {
                <EmptyState
                    icon=empty_icon.unwrap_or("📋")
                    title=empty_title.clone()
                    description=empty_message.clone()
                />
            }
        >
            <div class="overflow-x-auto">
                <table class="min-w-full divide-y divide-border">
                    <thead class="bg-surface-muted">
                        <tr>
                            <th class=TH>"Employee ID"</th>
                            <th class=TH>"Employee Name"</th>
                            <th class=TH>"Date"</th>
                            <th class=TH>"Status"</th>
                            <th class=TH>"Marked On"</th>
                            {with_actions.then(|| view! { <th class=TH>"Actions"</th> })}
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {move || {
                            records
                                .get()
                                .into_iter()
                                .map(|record| attendance_row(record, on_delete))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

fn attendance_row(
    record: AttendanceRecord,
    on_delete: Option<Callback<AttendanceRecord>>,
) -> impl IntoView {
    let marked_on = format_date_time(&record.created_at.with_timezone(&Local));
    let actions = on_delete.map(|cb| {
        let target = record.clone();
        view! {
            <td class=TD>
                <button
                    type="button"
                    class="text-status-error-text hover:opacity-80"
                    title="Delete Record"
                    on:click=move |_| cb.call(target.clone())
                >
                    {"🗑️"}
                </button>
            </td>
        }
    });
    view! {
        <tr class="hover:bg-surface-muted">
            <td class=format!("{} font-bold", TD)>{record.employee_emp_id}</td>
            <td class=TD>{record.employee_name}</td>
            <td class=TD>{format_date(record.date)}</td>
            <td class=TD><StatusBadge status=record.status /></td>
            <td class=TD>{marked_on}</td>
            {actions}
        </tr>
    }
}
