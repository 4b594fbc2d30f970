use leptos::*;

const SUBMIT_CLASSES: &str = "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus";

/// Form submit button that disables itself and swaps its label while `busy`.
#[component]
pub fn SubmitButton(
    #[prop(into)] busy: Signal<bool>,
    label: &'static str,
    busy_label: &'static str,
) -> impl IntoView {
    view! {
        <button type="submit" class=SUBMIT_CLASSES disabled=move || busy.get()>
            <Show when=move || busy.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {move || if busy.get() { busy_label } else { label }}
        </button>
    }
}

/// Shared classes for text inputs and selects.
pub const INPUT_CLASSES: &str = "mt-1 block w-full rounded-md border border-border bg-surface px-3 py-2 text-sm text-fg shadow-sm focus:border-action-primary-bg focus:outline-none";

#[component]
pub fn FieldLabel(#[prop(into)] text: String, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <span class="block text-sm font-medium text-fg">
            {text}
            {required.then(|| view! { <span class="text-status-error-text">" *"</span> })}
        </span>
    }
}

/// Labelled text-like input bound to a string signal.
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional)] max: Option<String>,
    #[prop(optional)] on_enter: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <label class="block">
            <FieldLabel text=label required=required />
            <input
                type=input_type.unwrap_or("text")
                class=INPUT_CLASSES
                placeholder=placeholder.unwrap_or_default()
                max=max
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
                on:keydown=move |ev: ev::KeyboardEvent| {
                    if let Some(cb) = on_enter {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            cb.call(());
                        }
                    }
                }
            />
        </label>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn idle_button_shows_label() {
        let html = render_to_string(move || {
            view! { <SubmitButton busy=Signal::derive(|| false) label="Add Employee" busy_label="Adding Employee..." /> }
        });
        assert!(html.contains("Add Employee"));
        assert!(!html.contains("Adding Employee..."));
        assert!(!html.contains("animate-spin"));
    }

    #[test]
    fn busy_button_swaps_label_and_spins() {
        let html = render_to_string(move || {
            view! { <SubmitButton busy=Signal::derive(|| true) label="Add Employee" busy_label="Adding Employee..." /> }
        });
        assert!(html.contains("Adding Employee..."));
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn form_field_renders_value_and_type() {
        let html = render_to_string(move || {
            view! {
                <FormField
                    label="Date"
                    value=Signal::derive(|| "2024-01-05".to_string())
                    on_input=Callback::new(|_| {})
                    input_type="date"
                    max="2024-01-05".to_string()
                    required=true
                />
            }
        });
        assert!(html.contains("type=\"date\""));
        assert!(html.contains("max=\"2024-01-05\""));
        assert!(html.contains("Date"));
    }

    #[test]
    fn required_label_marks_field() {
        let html = render_to_string(move || view! { <FieldLabel text="Email" required=true /> });
        assert!(html.contains("Email"));
        assert!(html.contains(" *"));
    }
}
