//! Transient notifications shown in the top-right corner.
//!
//! `ToastService` is provided once at the app root; pages and controllers
//! push messages through the [`Notifier`] trait so they can be driven by a
//! recording fake in tests.

use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Danger,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Warning => "toast toast--warning",
            ToastKind::Danger => "toast toast--danger",
            ToastKind::Info => "toast toast--info",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToastKind::Success => "Success",
            ToastKind::Warning => "Warning",
            ToastKind::Danger => "Error",
            ToastKind::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

/// Anything that can show a user-facing notification
pub trait Notifier {
    fn notify(&self, kind: ToastKind, message: &str);
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    delay_ms: StoredValue<u32>,
}

impl ToastService {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            delay_ms: StoredValue::new(delay_ms),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        let svc = *self;
        let delay = self.delay_ms.get_value();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            svc.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }
}

impl Notifier for ToastService {
    fn notify(&self, kind: ToastKind, message: &str) {
        match kind {
            ToastKind::Danger => log::warn!("toast: {}", message),
            _ => log::debug!("toast: {}", message),
        }
        self.show(kind, message);
    }
}

/// Renders active toasts. Mount once, next to the page content.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-container">
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class() role="alert">
                            <div class="toast__header">
                                <strong>{toast.kind.title()}</strong>
                                <button
                                    class="button button--icon toast__close"
                                    on:click=move |_| svc.dismiss(id)
                                >
                                    {icon("x")}
                                </button>
                            </div>
                            <div class="toast__body">{toast.message.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
