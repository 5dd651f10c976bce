use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, RegistrationStatus, Session, UserProfile},
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    ui::theme,
    util::assets,
    util::version::{version_label, APP_NAME},
};

/// Demo sign-in: pick one of the seeded accounts. There is no credential
/// check; the chosen profile becomes the session as-is.
#[component]
pub fn LoginPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let users = state.with(|st| st.users.clone());
    let version = version_label();

    let on_sign_in = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |user: UserProfile| {
            match user.registration_status {
                Some(RegistrationStatus::Pending) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Warning,
                        format!("{} is awaiting registration approval.", user.full_name),
                    );
                }
                Some(RegistrationStatus::Rejected) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "This registration was rejected.",
                    );
                }
                _ => {
                    state.with_mut(|st| st.login(Session::for_user(&user)));
                    persist_user_state(&state);
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        format!("Signed in as {}.", user.full_name),
                    );
                }
            }
        }
    };

    rsx! {
        div { class: "mx-auto flex min-h-screen max-w-4xl flex-col justify-center px-6 py-12",
            header { class: "mb-10 flex flex-col items-center gap-3 text-center",
                img { class: "h-14 w-14", src: assets::logo_data_uri(), alt: "FuelFlow" }
                h1 { class: "text-2xl font-semibold tracking-tight", "{APP_NAME}" }
                p { class: "text-sm text-slate-500",
                    "Demo console — pick an account to sign in. {version}"
                }
            }
            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-3",
                for user in users {
                    {
                        let station = user
                            .assigned_station_id
                            .as_deref()
                            .map(|id| state.with(|st| st.station_name(id)));
                        let pending =
                            user.registration_status == Some(RegistrationStatus::Pending);
                        let accent = theme::accent_text(user.role);
                        let mut on_sign_in = on_sign_in.clone();
                        let card_user = user.clone();
                        rsx! {
                            button {
                                class: "rounded-xl border border-slate-800 bg-slate-900/40 px-5 py-4 text-left transition hover:border-slate-600 hover:bg-slate-900/80",
                                onclick: move |_| on_sign_in(card_user.clone()),
                                p { class: "text-sm font-semibold text-slate-100", "{user.full_name}" }
                                p { class: "text-xs text-slate-500", "{user.email}" }
                                p { class: "mt-2 text-xs font-semibold uppercase tracking-wide {accent}",
                                    "{user.role.display_name()}"
                                }
                                if let Some(station) = station {
                                    p { class: "mt-1 text-xs text-slate-400", "{station}" }
                                }
                                if pending {
                                    p { class: "mt-2 text-[10px] font-semibold uppercase text-amber-300",
                                        "Registration pending"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
