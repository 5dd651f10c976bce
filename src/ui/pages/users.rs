use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{AppState, UserRole},
    ui::components::{
        status_badge::RegistrationStatusBadge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::format_date,
    ui::theme,
};

/// Form rules carried over from the original registration flow.
fn validate_new_user(name: &str, email: &str) -> Result<(), &'static str> {
    if name.trim().len() < 3 {
        return Err("Full name must be at least 3 characters.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(())
}

#[component]
pub fn UsersPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;
    let is_admin = role == UserRole::Admin;

    let mut name_input = use_signal(String::new);
    let mut email_input = use_signal(String::new);
    let mut role_input = use_signal(|| "office_staff".to_string());
    let mut station_input = use_signal(String::new);

    // GSO managers only manage their own station's staff.
    let users = state.with(|st| {
        let mut users: Vec<_> = match (&session.station_id, is_admin) {
            (_, true) => st.users.iter().cloned().collect(),
            (Some(station_id), false) => st
                .users
                .iter()
                .filter(|u| u.assigned_station_id.as_deref() == Some(station_id.as_str()))
                .cloned()
                .collect(),
            (None, false) => Vec::new(),
        };
        users.sort_by(|a, b| a.full_name.cmp(&b.full_name));
        users
    });
    let stations = state.with(|st| st.stations.clone());
    let station_names: Vec<(String, String)> = users
        .iter()
        .map(|u| {
            let name = u
                .assigned_station_id
                .as_deref()
                .map(|id| state.with(|st| st.station_name(id)))
                .unwrap_or_else(|| "—".to_string());
            (u.id.clone(), name)
        })
        .collect();

    let on_add_user = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let session_station = session.station_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let name = name_input().trim().to_string();
            let email = email_input().trim().to_string();
            if let Err(message) = validate_new_user(&name, &email) {
                push_toast(toasts.clone(), ToastKind::Error, message);
                return;
            }

            let (new_role, station) = if is_admin {
                let parsed = match role_input().as_str() {
                    "admin" => UserRole::Admin,
                    "office_staff" => UserRole::OfficeStaff,
                    "depot_staff" => UserRole::DepotStaff,
                    "gso" => UserRole::Gso,
                    _ => UserRole::GsoStaff,
                };
                let station = match parsed {
                    UserRole::Gso | UserRole::GsoStaff => {
                        let chosen = station_input();
                        if chosen.is_empty() {
                            push_toast(
                                toasts.clone(),
                                ToastKind::Error,
                                "Station roles need an assigned station.",
                            );
                            return;
                        }
                        Some(chosen)
                    }
                    _ => None,
                };
                (parsed, station)
            } else {
                // GSO managers only register staff for their own station.
                (UserRole::GsoStaff, session_station.clone())
            };

            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.add_user(&name, &email, new_role, station, now));
            name_input.set(String::new());
            email_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, format!("Added {name}."));
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "User Management" }

            form { class: "{theme::panel(role)} flex flex-wrap items-end gap-4 p-5",
                onsubmit: on_add_user,
                div { class: "min-w-[180px] flex-1",
                    label { class: "{theme::label_class(role)}", "Full Name" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: name_input(),
                        oninput: move |evt| name_input.set(evt.value().to_string()),
                        placeholder: "Jane Doe",
                    }
                }
                div { class: "min-w-[200px] flex-1",
                    label { class: "{theme::label_class(role)}", "Email" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: email_input(),
                        oninput: move |evt| email_input.set(evt.value().to_string()),
                        placeholder: "jane@example.com",
                    }
                }
                if is_admin {
                    div { class: "w-44",
                        label { class: "{theme::label_class(role)}", "Role" }
                        select {
                            class: "mt-1 w-full {theme::input_class(role)}",
                            value: role_input(),
                            onchange: move |evt| role_input.set(evt.value().to_string()),
                            option { value: "admin", "Administrator" }
                            option { value: "office_staff", "Office Staff" }
                            option { value: "depot_staff", "Depot Staff" }
                            option { value: "gso", "GSO Manager" }
                            option { value: "gso_staff", "GSO Staff" }
                        }
                    }
                    div { class: "w-52",
                        label { class: "{theme::label_class(role)}", "Station" }
                        select {
                            class: "mt-1 w-full {theme::input_class(role)}",
                            value: station_input(),
                            onchange: move |evt| station_input.set(evt.value().to_string()),
                            option { value: "", "No station" }
                            for station in stations.iter() {
                                option { value: station.id.clone(), "{station.name}" }
                            }
                        }
                    }
                }
                button { class: "{theme::btn_primary(role)}", r#type: "submit", "Add User" }
            }

            div { class: "{theme::table_container(role)}",
                table { class: "min-w-full text-sm",
                    thead { class: "{theme::table_header(role)}",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Name" }
                            th { class: "px-4 py-3 font-medium", "Email" }
                            th { class: "px-4 py-3 font-medium", "Role" }
                            th { class: "px-4 py-3 font-medium", "Station" }
                            th { class: "px-4 py-3 font-medium", "Registration" }
                            th { class: "px-4 py-3 font-medium", "Since" }
                        }
                    }
                    tbody { class: "{theme::table_divider(role)}",
                        for user in users {
                            {
                                let station = station_names
                                    .iter()
                                    .find(|(id, _)| *id == user.id)
                                    .map(|(_, name)| name.clone())
                                    .unwrap_or_else(|| "—".to_string());
                                rsx! {
                                    tr { class: "hover:bg-slate-800/40",
                                        td { class: "px-4 py-3 font-medium text-slate-100", "{user.full_name}" }
                                        td { class: "px-4 py-3 text-slate-300", "{user.email}" }
                                        td { class: "px-4 py-3 text-slate-300", "{user.role.display_name()}" }
                                        td { class: "px-4 py-3 text-slate-400", "{station}" }
                                        td { class: "px-4 py-3",
                                            if let Some(status) = user.registration_status {
                                                RegistrationStatusBadge { status }
                                            } else {
                                                span { class: "text-xs text-slate-600", "—" }
                                            }
                                        }
                                        td { class: "px-4 py-3 text-slate-400", "{format_date(user.created_at)}" }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_form_rules() {
        assert!(validate_new_user("Jane Doe", "jane@example.com").is_ok());
        assert!(validate_new_user("Jo", "jane@example.com").is_err());
        assert!(validate_new_user("Jane Doe", "not-an-email").is_err());
        assert!(validate_new_user("  J  ", "a@b").is_err());
    }
}
