use chrono::Utc;
use leptos::prelude::*;

use crate::notify::{
    Notification, NotificationDraft, NotificationId, NotificationQueue, NotifyError, Variant,
    NOTIFICATION_LIFETIME,
};

/// Handle to the page's notification queue.
///
/// Created once by [`provide_notifications`] at the root of the app and
/// copied into every component that needs to push or dismiss.
#[derive(Debug, Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NotificationQueue>,
}

impl Notifications {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Shows a notification and schedules its removal.
    pub fn push(&self, draft: NotificationDraft) {
        let Some(id) = self.queue.try_update(|q| q.push(draft, Utc::now())) else {
            return;
        };
        log::debug!("notification {id} pushed");
        let queue = self.queue;
        set_timeout(
            move || {
                // anything else overdue (throttled background tab) goes too
                queue.try_update(|q| {
                    q.dismiss(&id);
                    q.expire(Utc::now());
                });
            },
            NOTIFICATION_LIFETIME,
        );
    }

    pub fn dismiss(&self, id: &NotificationId) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.queue.with(|q| q.entries().to_vec())
    }
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn try_use_notifications() -> Result<Notifications, NotifyError> {
    use_context::<Notifications>().ok_or(NotifyError::Unavailable)
}

/// Panics outside of [`provide_notifications`]; that is an integration bug.
pub fn use_notifications() -> Notifications {
    match try_use_notifications() {
        Ok(n) => n,
        Err(e) => panic!("{e}: use_notifications called outside of the app root"),
    }
}

#[component]
pub fn ToastRegion() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="pointer-events-none fixed inset-x-0 top-4 z-[60] flex flex-col items-center px-4">
            <For
                each=move || notifications.entries()
                key=|toast| toast.id.clone()
                children=move |toast| view! { <Toast toast notifications /> }
            />
        </div>
    }
}

#[component]
fn Toast(toast: Notification, notifications: Notifications) -> impl IntoView {
    let Notification {
        id,
        title,
        description,
        variant,
        ..
    } = toast;
    let (icon, icon_class) = match variant {
        Variant::Success => ("✔", "text-green"),
        Variant::Info | Variant::Error => ("ℹ", "text-muted"),
    };

    view! {
        <div
            role="status"
            class="pointer-events-auto mt-2 w-full max-w-md rounded-lg border border-muted/30 bg-black/80 p-4 shadow-lg backdrop-blur-sm"
        >
            <div class="flex items-start gap-3">
                <span class=format!("mt-0.5 {icon_class}") aria-hidden="true">
                    {icon}
                </span>
                <div class="space-y-1">
                    <p class="text-sm font-semibold">{title}</p>
                    {description.map(|d| view! { <p class="text-xs text-muted">{d}</p> })}
                </div>
                <button
                    type="button"
                    class="ml-auto text-muted hover:text-foreground"
                    on:click=move |_| notifications.dismiss(&id)
                >
                    <span class="sr-only">"Dismiss notification"</span>
                    <span aria-hidden="true">"✕"</span>
                </button>
            </div>
        </div>
    }
}
