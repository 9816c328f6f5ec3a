//! Toast notifications.
//!
//! Every failed request and every completed mutation ends in exactly one
//! notification. Toasts dismiss themselves after the configured timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

impl NoticeLevel {
    fn class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
            NoticeLevel::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
            timeout_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|n| n.retain(|x| x.id != id));
    }

    fn push(&self, level: NoticeLevel, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|n| n.push(Notice { id, level, message }));

        if self.timeout_ms > 0 {
            let this = *self;
            spawn_local(async move {
                TimeoutFuture::new(this.timeout_ms).await;
                this.dismiss(id);
            });
        }
    }
}

pub fn use_notify() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not found")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notify = use_notify();

    view! {
        <div class="toaster">
            <For
                each=move || notify.notices.get()
                key=|n| n.id
                children=move |n: Notice| {
                    let id = n.id;
                    view! {
                        <div class=n.level.class() role="status">
                            <span class="toast__message">{n.message}</span>
                            <button class="toast__close" on:click=move |_| notify.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
