use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::{AppState, UserRole};
use crate::ui::theme;
use crate::util::generate_id;

/// Long enough to read a price or order confirmation, short enough not to
/// pile up during data entry.
const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(5);
/// Oldest notices drop off once the stack is full.
const TOAST_STACK_LIMIT: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    while entries.len() >= TOAST_STACK_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let message = ToastMessage::new(kind, message.into());
    toasts.with_mut(|entries| enqueue(entries, message));
}

/// Notification stack in the top-right corner, tinted with the signed-in
/// role's accent where one applies.
#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let state = use_context::<Signal<AppState>>();
    let role = state.with(|st| st.current_role());

    let messages = toasts();
    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div {
            class: "pointer-events-none fixed right-4 top-4 z-50 flex flex-col items-end",
            ul {
                class: "space-y-2",
                for message in messages {
                    ToastCard { message, role, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(
    message: ToastMessage,
    role: Option<UserRole>,
    toasts: Signal<Vec<ToastMessage>>,
) -> Element {
    let toast_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let mut toasts = toasts.clone();
        let id = toast_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.with_mut(|items| items.retain(|toast| toast.id != id));
        }
    });

    let (frame, icon) = kind_style(message.kind);
    let dismiss_accent = role.map(theme::accent_text).unwrap_or("text-slate-400");
    let dismiss_id = message.id.clone();

    rsx! {
        li {
            class: "pointer-events-auto flex items-center gap-3 rounded-lg border px-4 py-2.5 shadow-lg backdrop-blur {frame}",
            span { class: "text-base", "{icon}" }
            p { class: "text-sm font-medium", "{message.text}" }
            button {
                class: "ml-2 text-xs font-semibold uppercase {dismiss_accent} hover:text-white",
                onclick: move |_| {
                    let mut toasts = toasts.clone();
                    let target = dismiss_id.clone();
                    toasts.with_mut(|items| items.retain(|toast| toast.id != target));
                },
                "Dismiss"
            }
        }
    }
}

fn kind_style(kind: ToastKind) -> (&'static str, &'static str) {
    match kind {
        ToastKind::Info => ("border-sky-500/40 bg-sky-500/10 text-sky-100", "ℹ️"),
        ToastKind::Success => (
            "border-emerald-500/40 bg-emerald-500/10 text-emerald-100",
            "✅",
        ),
        ToastKind::Warning => ("border-amber-500/40 bg-amber-500/10 text-amber-100", "⚠️"),
        ToastKind::Error => ("border-rose-500/40 bg-rose-500/10 text-rose-100", "⛔"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(text: &str) -> ToastMessage {
        ToastMessage::new(ToastKind::Info, text)
    }

    #[test]
    fn stack_drops_oldest_notices_when_full() {
        let mut entries = Vec::new();
        for n in 0..6 {
            enqueue(&mut entries, notice(&format!("notice {n}")));
        }
        assert_eq!(entries.len(), TOAST_STACK_LIMIT);
        assert_eq!(entries[0].text, "notice 2");
        assert_eq!(entries.last().map(|m| m.text.as_str()), Some("notice 5"));
    }

    #[test]
    fn every_notice_gets_a_distinct_id() {
        let a = notice("first");
        let b = notice("second");
        assert_ne!(a.id, b.id);
    }
}
