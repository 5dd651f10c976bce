use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::{
        low_stock_alerts, AppState, OrderStatus, PaymentStatus, RegistrationStatus, TruckStatus,
        UserRole,
    },
    ui::components::{
        kpi_card::KpiCard,
        orders_table::OrdersTable,
        price_table::{format_liters, PriceTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::fuel_settings::current_price_rows,
    ui::pages::orders::order_rows,
    ui::theme,
};

#[component]
pub fn DashboardPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let Some(role) = state.with(|st| st.current_role()) else {
        return rsx! { Fragment {} };
    };

    match role {
        UserRole::Admin => rsx! { AdminDashboard {} },
        UserRole::OfficeStaff => rsx! { OfficeDashboard {} },
        UserRole::DepotStaff => rsx! { DepotDashboard {} },
        UserRole::Gso | UserRole::GsoStaff => rsx! { StationDashboard {} },
    }
}

#[component]
fn AdminDashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let role = UserRole::Admin;
    let now = OffsetDateTime::now_utc();

    let (user_count, station_count, fuel_count, pending) = state.with(|st| {
        (
            st.users.iter().filter(|u| u.is_active).count(),
            st.stations.iter().filter(|s| s.is_active).count(),
            st.fuel_types.len(),
            st.pending_registrations()
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
        )
    });
    let pending_count = pending.len();
    let price_rows = state.with(|st| current_price_rows(st, now));

    let on_review = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(user_id, status): (String, RegistrationStatus)| {
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.set_registration_status(&user_id, status, now));
            let verdict = match status {
                RegistrationStatus::Approved => "approved",
                _ => "rejected",
            };
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Registration {verdict}."),
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Admin Dashboard" }
            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                KpiCard { title: "Active Users".to_string(), value: "{user_count}", role }
                KpiCard { title: "Gas Stations".to_string(), value: "{station_count}", role }
                KpiCard { title: "Fuel Types".to_string(), value: "{fuel_count}", role }
                KpiCard {
                    title: "Pending Registrations".to_string(),
                    value: "{pending_count}",
                    description: Some("GSO accounts awaiting review".to_string()),
                    role,
                }
            }
            if !pending.is_empty() {
                section { class: "{theme::panel(role)} p-5",
                    h3 { class: "text-sm font-semibold text-slate-200", "Pending GSO Registrations" }
                    ul { class: "mt-3 divide-y divide-slate-800",
                        for user in pending {
                            li { class: "flex flex-wrap items-center justify-between gap-3 py-3",
                                div {
                                    p { class: "text-sm font-medium text-slate-100", "{user.full_name}" }
                                    p { class: "text-xs text-slate-500", "{user.email}" }
                                }
                                div { class: "flex gap-2",
                                    button {
                                        class: "rounded-md border border-emerald-500/40 px-3 py-1 text-xs font-semibold text-emerald-200 hover:bg-emerald-500/10",
                                        onclick: {
                                            let mut on_review = on_review.clone();
                                            let id = user.id.clone();
                                            move |_| on_review((id.clone(), RegistrationStatus::Approved))
                                        },
                                        "Approve"
                                    }
                                    button {
                                        class: "rounded-md border border-rose-500/40 px-3 py-1 text-xs font-semibold text-rose-200 hover:bg-rose-500/10",
                                        onclick: {
                                            let mut on_review = on_review.clone();
                                            let id = user.id.clone();
                                            move |_| on_review((id.clone(), RegistrationStatus::Rejected))
                                        },
                                        "Reject"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            PriceTable { title: "Current Fuel Prices".to_string(), rows: price_rows, role }
        }
    }
}

#[component]
fn OfficeDashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let role = UserRole::OfficeStaff;
    let now = OffsetDateTime::now_utc();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };

    let (pending_rows, payment_rows, pending_count, payment_count, price_record_count) = state
        .with(|st| {
            let pending: Vec<_> = st
                .orders
                .iter()
                .filter(|o| o.status == OrderStatus::Pending)
                .collect();
            let awaiting_payment: Vec<_> = st
                .orders
                .iter()
                .filter(|o| {
                    o.payment_status == PaymentStatus::Pending
                        && matches!(o.status, OrderStatus::Delivered | OrderStatus::PickedUp)
                })
                .collect();
            (
                order_rows(st, &pending),
                order_rows(st, &awaiting_payment),
                pending.len(),
                awaiting_payment.len(),
                st.fuel_prices.len(),
            )
        });
    let price_rows = state.with(|st| current_price_rows(st, now));

    let on_confirm = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let user_id = session.user_id.clone();
        move |order_id: String| {
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.confirm_order(&order_id, &user_id, now));
            push_toast(toasts.clone(), ToastKind::Success, "Order confirmed.");
        }
    };

    let on_complete_payment = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |order_id: String| {
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.complete_payment(&order_id, now));
            push_toast(toasts.clone(), ToastKind::Success, "Payment marked as completed.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Office Dashboard" }
            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Pending Orders".to_string(),
                    value: "{pending_count}",
                    description: Some("Waiting for confirmation".to_string()),
                    role,
                }
                KpiCard {
                    title: "Awaiting Payment".to_string(),
                    value: "{payment_count}",
                    description: Some("Fulfilled but unpaid".to_string()),
                    role,
                }
                KpiCard { title: "Price Records".to_string(), value: "{price_record_count}", role }
            }
            OrdersTable {
                title: "Orders Awaiting Confirmation".to_string(),
                rows: pending_rows,
                role,
                on_confirm,
            }
            OrdersTable {
                title: "Payment Verification".to_string(),
                rows: payment_rows,
                role,
                on_complete_payment,
            }
            PriceTable { title: "Current Fuel Prices".to_string(), rows: price_rows, role }
        }
    }
}

#[component]
fn DepotDashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let role = UserRole::DepotStaff;

    let (confirmed_rows, confirmed_count, available_trucks, alerts) = state.with(|st| {
        let confirmed: Vec<_> = st
            .orders
            .iter()
            .filter(|o| o.status == OrderStatus::Confirmed)
            .collect();
        let available = st
            .trucks
            .iter()
            .filter(|t| t.status == TruckStatus::Available)
            .count();
        let alerts: Vec<(String, f64, f64)> = low_stock_alerts(&st.tanks, &st.inventory_changes)
            .into_iter()
            .map(|level| {
                (
                    st.fuel_type_name(&level.fuel_type_id),
                    level.level_liters,
                    level.capacity_liters,
                )
            })
            .collect();
        (order_rows(st, &confirmed), confirmed.len(), available, alerts)
    });
    let alert_count = alerts.len();

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Depot Dashboard" }
            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Confirmed Orders".to_string(),
                    value: "{confirmed_count}",
                    description: Some("Ready for scheduling".to_string()),
                    role,
                }
                KpiCard { title: "Available Trucks".to_string(), value: "{available_trucks}", role }
                KpiCard {
                    title: "Low Stock Tanks".to_string(),
                    value: "{alert_count}",
                    description: Some("At or below 20% capacity".to_string()),
                    role,
                }
            }
            if !alerts.is_empty() {
                section { class: "rounded-xl border border-amber-500/40 bg-amber-500/10 p-5",
                    h3 { class: "text-sm font-semibold text-amber-200", "Low Stock Alerts" }
                    ul { class: "mt-2 space-y-1 text-sm text-amber-100",
                        for (name, level, capacity) in alerts {
                            li {
                                "{name}: {format_liters(level)} of {format_liters(capacity)} remaining"
                            }
                        }
                    }
                }
            }
            OrdersTable { title: "Confirmed Orders".to_string(), rows: confirmed_rows, role }
        }
    }
}

#[component]
fn StationDashboard() -> Element {
    let state = use_context::<Signal<AppState>>();
    let nav = use_navigator();
    let now = OffsetDateTime::now_utc();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;
    let station_name = session
        .station_id
        .as_deref()
        .map(|id| state.with(|st| st.station_name(id)))
        .unwrap_or_else(|| "No assigned station".to_string());

    let (rows, total, open) = state.with(|st| {
        let mut orders = st.visible_orders();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let open = orders.iter().filter(|o| !o.status.is_terminal()).count();
        (order_rows(st, &orders), orders.len(), open)
    });
    let price_rows = state.with(|st| current_price_rows(st, now));

    // The owner additionally manages the station's staff accounts.
    let is_owner = role == UserRole::Gso;
    let heading = if is_owner {
        "Station Owner Dashboard"
    } else {
        "Station Dashboard"
    };
    let team: Vec<(String, String)> = match (is_owner, session.station_id.as_deref()) {
        (true, Some(station_id)) => state.with(|st| {
            st.station_staff(station_id)
                .into_iter()
                .map(|u| (u.full_name.clone(), u.email.clone()))
                .collect()
        }),
        _ => Vec::new(),
    };
    let team_count = team.len();

    rsx! {
        div { class: "space-y-8",
            div { class: "flex flex-wrap items-center justify-between gap-3",
                div {
                    h2 { class: "text-lg font-semibold text-slate-100", "{heading}" }
                    p { class: "text-sm {theme::accent_text(role)}", "{station_name}" }
                }
                button {
                    class: "{theme::btn_primary(role)}",
                    onclick: move |_| { nav.push(Route::PlaceOrder {}); },
                    "Place Order"
                }
            }
            if is_owner {
                section { class: "grid gap-4 sm:grid-cols-3",
                    KpiCard { title: "Station Orders".to_string(), value: "{total}", role }
                    KpiCard {
                        title: "Open Orders".to_string(),
                        value: "{open}",
                        description: Some("Not yet delivered or picked up".to_string()),
                        role,
                    }
                    KpiCard {
                        title: "Staff Accounts".to_string(),
                        value: "{team_count}",
                        description: Some("Active at this station".to_string()),
                        role,
                    }
                }
            } else {
                section { class: "grid gap-4 sm:grid-cols-2",
                    KpiCard { title: "Station Orders".to_string(), value: "{total}", role }
                    KpiCard {
                        title: "Open Orders".to_string(),
                        value: "{open}",
                        description: Some("Not yet delivered or picked up".to_string()),
                        role,
                    }
                }
            }
            if is_owner {
                section { class: "{theme::panel(role)} p-5",
                    div { class: "flex flex-wrap items-center justify-between gap-3",
                        h3 { class: "text-sm font-semibold text-slate-200", "Station Team" }
                        button {
                            class: "{theme::btn_secondary(role)}",
                            onclick: move |_| { nav.push(Route::Users {}); },
                            "Manage Users"
                        }
                    }
                    if team.is_empty() {
                        p { class: "mt-3 text-sm text-slate-500", "No staff accounts yet." }
                    } else {
                        ul { class: "mt-3 divide-y divide-slate-800",
                            for (name, email) in team {
                                li { class: "py-3",
                                    p { class: "text-sm font-medium text-slate-100", "{name}" }
                                    p { class: "text-xs text-slate-500", "{email}" }
                                }
                            }
                        }
                    }
                }
            }
            PriceTable { title: "Today's Fuel Prices".to_string(), rows: price_rows, role }
            OrdersTable { title: "Recent Orders".to_string(), rows, role }
        }
    }
}
