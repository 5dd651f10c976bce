use dioxus::prelude::*;

use crate::domain::UserRole;
use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>, role: UserRole) -> Element {
    rsx! {
        div {
            class: "{theme::panel(role)} p-4 shadow-sm",
            h3 { class: "{theme::label_class(role)}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold text-slate-100", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs text-slate-500", "{desc}" }
            }
        }
    }
}
