//! Transient toast notifications.
//!
//! `NotifyService` is provided once via context and passed into controllers
//! as a plain value; nothing here touches process-wide state. `ToastHost`
//! renders the queue and is mounted once in `App`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// How long a toast stays on screen, in milliseconds.
const AUTO_DISMISS_MS: u32 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Create,
    Update,
    Delete,
    Info,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Error => "toast toast--error",
            NoticeKind::Delete => "toast toast--delete",
            NoticeKind::Info => "toast toast--info",
            // create/update confirmations render like plain successes
            NoticeKind::Success | NoticeKind::Create | NoticeKind::Update => {
                "toast toast--success"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotifyService {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn items(&self) -> Vec<Notice> {
        self.items.get()
    }

    /// Fire-and-forget publish; the toast removes itself after a timeout.
    pub fn publish(&self, kind: NoticeKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Notice {
                id,
                kind,
                message: message.into(),
            });
        });

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(NoticeKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(NoticeKind::Error, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");

    view! {
        <div class="toast-host">
            <For
                each=move || notify.items()
                key=|n| n.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class()>
                            <span class="toast__message">{notice.message}</span>
                            <button class="toast__close" on:click=move |_| notify.dismiss(id)>
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_success_render_differently() {
        assert_eq!(NoticeKind::Error.css_class(), "toast toast--error");
        assert_eq!(NoticeKind::Success.css_class(), "toast toast--success");
        assert_eq!(NoticeKind::Create.css_class(), NoticeKind::Update.css_class());
    }
}
