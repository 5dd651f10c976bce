use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::{entries_for_role, role_allows, AppState};
use crate::ui::pages::LoginPage;
use crate::ui::theme;
use crate::util::assets;
use crate::util::persistence::clear_persisted_state;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let session = state.with(|s| s.session.clone());

    // No session: every route shows the sign-in screen.
    let Some(session) = session else {
        return rsx! {
            div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
                LoginPage {}
            }
        };
    };

    let role = session.role;
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    let on_logout = {
        let mut state = state.clone();
        move |_| {
            state.with_mut(|s| s.logout());
            clear_persisted_state();
            nav.push(Route::Dashboard {});
        }
    };

    // Deep links obey the same allow-lists as the menu.
    let allowed = role_allows(role, current_route.nav_target());

    rsx! {
        div { class: "flex min-h-screen bg-slate-950 text-slate-100 font-sans",
            aside {
                class: "flex w-64 shrink-0 flex-col border-r border-slate-800 bg-slate-950/90",
                div { class: "flex items-center gap-3 border-b border-slate-800 px-5 py-4",
                    img { class: "h-8 w-8", src: assets::logo_data_uri(), alt: "FuelFlow" }
                    div {
                        h1 { class: "text-sm font-semibold tracking-tight", "{APP_NAME}" }
                        p { class: "text-[10px] text-slate-500", "{version}" }
                    }
                }
                nav { class: "flex-1 space-y-1.5 px-3 py-4",
                    for entry in entries_for_role(role) {
                        {
                            let target = entry.target;
                            let active = current_route.nav_target() == target;
                            let class = if active {
                                theme::nav_active(role)
                            } else {
                                theme::nav_inactive(role)
                            };
                            rsx! {
                                button {
                                    class: "{class}",
                                    onclick: move |_| { nav.push(Route::for_target(target)); },
                                    "{entry.title}"
                                }
                            }
                        }
                    }
                }
                div { class: "border-t border-slate-800 px-5 py-4",
                    p { class: "text-sm font-medium text-slate-200", "{session.full_name}" }
                    p { class: "text-xs {theme::accent_text(role)}", "{session.role_label()}" }
                    button {
                        class: "mt-3 w-full rounded-lg border border-slate-700 px-3 py-1.5 text-xs font-semibold text-slate-300 hover:bg-slate-800",
                        onclick: on_logout,
                        "Sign Out"
                    }
                }
            }
            main { class: "flex-1 overflow-x-auto px-8 py-8",
                if allowed {
                    {children}
                } else {
                    div { class: "mx-auto mt-20 max-w-md rounded-xl border border-rose-500/40 bg-rose-500/10 px-6 py-8 text-center",
                        h2 { class: "text-lg font-semibold text-rose-200", "Access Denied" }
                        p { class: "mt-2 text-sm text-slate-400",
                            "Your role does not have access to this screen."
                        }
                        button {
                            class: "mt-4 {theme::btn_secondary(role)}",
                            onclick: move |_| { nav.push(Route::Dashboard {}); },
                            "Back to Dashboard"
                        }
                    }
                }
            }
        }
    }
}
