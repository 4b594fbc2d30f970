use crate::api::ApiError;
use leptos::*;

/// Alerts expire on their own after this long.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            AlertLevel::Success => "✅",
            AlertLevel::Error => "❌",
            AlertLevel::Warning => "⚠️",
            AlertLevel::Info => "ℹ️",
        }
    }

    pub fn classes(&self) -> &'static str {
        match self {
            AlertLevel::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            AlertLevel::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
            AlertLevel::Warning => {
                "bg-status-warning-bg border-status-warning-border text-status-warning-text"
            }
            AlertLevel::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub id: u64,
    pub level: AlertLevel,
    pub message: String,
}

/// Handle to a page's single alert slot. A new alert replaces the old one.
#[derive(Clone, Copy)]
pub struct Alerts {
    current: RwSignal<Option<Alert>>,
    next_id: StoredValue<u64>,
}

impl Default for Alerts {
    fn default() -> Self {
        Self::new()
    }
}

impl Alerts {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(0),
        }
    }

    pub fn current(&self) -> Option<Alert> {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Option<Alert> {
        self.current.get_untracked()
    }

    pub fn show(&self, level: AlertLevel, message: impl Into<String>) {
        let id = self.next_id.get_value().wrapping_add(1);
        self.next_id.set_value(id);
        self.current.set(Some(Alert {
            id,
            level,
            message: message.into(),
        }));
        self.schedule_dismiss(id);
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(AlertLevel::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(AlertLevel::Error, message);
    }

    pub fn api_error(&self, error: &ApiError) {
        self.show(AlertLevel::Error, error.display_text());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the slot only if alert `id` is still the one showing.
    pub fn dismiss_if(&self, id: u64) {
        let _ = self.current.try_update(|current| {
            if current.as_ref().is_some_and(|alert| alert.id == id) {
                *current = None;
            }
        });
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let alerts = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ALERT_TIMEOUT_MS).await;
            alerts.dismiss_if(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

#[component]
pub fn AlertBanner(alerts: Alerts) -> impl IntoView {
    view! {
        <div class="space-y-2" role="status" aria-live="polite">
            {move || {
                alerts
                    .current()
                    .map(|alert| {
                        let id = alert.id;
                        view! {
                            <div class=format!(
                                "flex items-start gap-3 rounded-lg border px-4 py-3 text-sm animate-pop-in {}",
                                alert.level.classes(),
                            )>
                                <span aria-hidden="true">{alert.level.icon()}</span>
                                <p class="flex-1 whitespace-pre-line">{alert.message}</p>
                                <button
                                    type="button"
                                    aria-label="Dismiss"
                                    class="opacity-70 hover:opacity-100"
                                    on:click=move |_| alerts.dismiss_if(id)
                                >
                                    {"✕"}
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
