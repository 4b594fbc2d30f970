use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatTone {
    Primary,
    Success,
    Danger,
    Warning,
}

impl StatTone {
    fn icon_classes(&self) -> &'static str {
        match self {
            StatTone::Primary => "bg-action-primary-bg text-action-primary-text",
            StatTone::Success => "bg-status-success-bg text-status-success-text",
            StatTone::Danger => "bg-status-error-bg text-status-error-text",
            StatTone::Warning => "bg-status-warning-bg text-status-warning-text",
        }
    }
}

/// One figure on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCardData {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: String,
    pub tone: StatTone,
}

#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated overflow-hidden shadow rounded-lg">
            <div class="px-4 py-5 sm:p-6 flex items-center gap-4">
                <div class=format!(
                    "w-12 h-12 flex items-center justify-center rounded-xl text-2xl {}",
                    card.tone.icon_classes(),
                )>
                    <span aria-hidden="true">{card.icon}</span>
                </div>
                <div>
                    <dt class="text-sm font-medium text-fg-muted">{card.label}</dt>
                    <dd class="mt-1 text-2xl font-semibold text-fg">{card.value}</dd>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn stat_card_renders_label_value_and_tone() {
        let html = render_to_string(move || {
            view! {
                <StatCard card=StatCardData {
                    icon: "✅",
                    label: "Present Today",
                    value: "42".into(),
                    tone: StatTone::Success,
                } />
            }
        });
        assert!(html.contains("Present Today"));
        assert!(html.contains("42"));
        assert!(html.contains("bg-status-success-bg"));
    }
}
