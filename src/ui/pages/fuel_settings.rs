use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{price_history, resolve_effective_price, upcoming_prices, AppState},
    ui::components::{
        price_table::{PriceRow, PriceTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::{format_date, parse_date_input},
    ui::theme,
};

/// One row per fuel type showing the price in force at `reference`. Fuels
/// with no record in force yet are skipped; the table's empty state covers
/// the all-unpriced case.
pub fn current_price_rows(st: &AppState, reference: OffsetDateTime) -> Vec<PriceRow> {
    st.fuel_types
        .iter()
        .filter_map(|fuel| {
            let price = resolve_effective_price(&fuel.id, &st.fuel_prices, reference)?;
            Some(PriceRow {
                fuel_type_name: fuel.name.clone(),
                delivery_price_per_liter: price.delivery_price_per_liter,
                pickup_price_per_liter: price.pickup_price_per_liter,
                effective_label: format_date(price.effective_from),
                set_by: st.user_name(&price.set_by_user_id),
                is_current: true,
                is_future: false,
            })
        })
        .collect()
}

/// Records not yet in force at `reference`, across all fuel types.
pub fn scheduled_price_rows(st: &AppState, reference: OffsetDateTime) -> Vec<PriceRow> {
    st.fuel_types
        .iter()
        .flat_map(|fuel| {
            upcoming_prices(&fuel.id, &st.fuel_prices, reference)
                .into_iter()
                .map(|price| PriceRow {
                    fuel_type_name: fuel.name.clone(),
                    delivery_price_per_liter: price.delivery_price_per_liter,
                    pickup_price_per_liter: price.pickup_price_per_liter,
                    effective_label: format_date(price.effective_from),
                    set_by: st.user_name(&price.set_by_user_id),
                    is_current: false,
                    is_future: true,
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[component]
pub fn FuelSettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let now = OffsetDateTime::now_utc();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;

    let mut new_fuel_name = use_signal(String::new);
    let mut price_fuel_id = use_signal(String::new);
    let mut delivery_input = use_signal(String::new);
    let mut pickup_input = use_signal(String::new);
    let mut effective_input = use_signal(String::new);
    let mut history_fuel_id = use_signal(String::new);

    let fuel_types = state.with(|st| st.fuel_types.clone());
    let current_rows = state.with(|st| current_price_rows(st, now));
    let scheduled_rows = state.with(|st| scheduled_price_rows(st, now));

    let history_rows = {
        let selected = history_fuel_id();
        if selected.is_empty() {
            Vec::new()
        } else {
            state.with(|st| {
                let current_id = resolve_effective_price(&selected, &st.fuel_prices, now)
                    .map(|p| p.id.clone());
                price_history(&selected, &st.fuel_prices)
                    .into_iter()
                    .map(|price| PriceRow {
                        fuel_type_name: st.fuel_type_name(&price.fuel_type_id),
                        delivery_price_per_liter: price.delivery_price_per_liter,
                        pickup_price_per_liter: price.pickup_price_per_liter,
                        effective_label: format_date(price.effective_from),
                        set_by: st.user_name(&price.set_by_user_id),
                        is_current: current_id.as_deref() == Some(price.id.as_str()),
                        is_future: price.effective_from > now,
                    })
                    .collect()
            })
        }
    };

    let on_add_fuel = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let name = new_fuel_name().trim().to_string();
            if name.len() < 2 {
                push_toast(toasts.clone(), ToastKind::Error, "Fuel name is too short.");
                return;
            }
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| {
                st.add_fuel_type(&name, now);
            });
            new_fuel_name.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, format!("Added {name}."));
        }
    };

    let on_toggle_availability = {
        let mut state = state.clone();
        move |(fuel_id, available): (String, bool)| {
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.set_fuel_availability(&fuel_id, available, now));
        }
    };

    let on_set_price = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let user_id = session.user_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let fuel_id = price_fuel_id();
            if fuel_id.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Pick a fuel type first.");
                return;
            }
            let delivery = delivery_input().trim().parse::<f64>().ok();
            let pickup = pickup_input().trim().parse::<f64>().ok();
            let (Some(delivery), Some(pickup)) = (delivery, pickup) else {
                push_toast(toasts.clone(), ToastKind::Error, "Prices must be numbers.");
                return;
            };
            if delivery <= 0.0 || pickup <= 0.0 {
                push_toast(toasts.clone(), ToastKind::Error, "Prices must be positive.");
                return;
            }
            let Some(effective_from) = parse_date_input(&effective_input()) else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Enter an effective date as YYYY-MM-DD.",
                );
                return;
            };
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| {
                st.record_fuel_price(&fuel_id, delivery, pickup, effective_from, &user_id, now);
            });
            delivery_input.set(String::new());
            pickup_input.set(String::new());
            effective_input.set(String::new());
            push_toast(
                toasts.clone(),
                ToastKind::Success,
                "New price recorded. Existing orders keep their captured rates.",
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Fuel Settings" }

            section { class: "grid gap-6 lg:grid-cols-[1fr,1fr]",
                div { class: "{theme::panel(role)} p-5",
                    h3 { class: "text-sm font-semibold text-slate-200", "Fuel Types" }
                    ul { class: "mt-3 divide-y divide-slate-800",
                        for fuel in fuel_types.iter() {
                            {
                                let fuel_id = fuel.id.clone();
                                let available = fuel.is_available;
                                let mut on_toggle = on_toggle_availability.clone();
                                rsx! {
                                    li { class: "flex items-center justify-between py-3",
                                        div {
                                            p { class: "text-sm font-medium text-slate-100", "{fuel.name}" }
                                            p { class: "text-xs text-slate-500",
                                                if available { "Available for ordering" } else { "Unavailable" }
                                            }
                                        }
                                        button {
                                            class: if available {
                                                "rounded-md border border-emerald-500/40 px-3 py-1 text-xs font-semibold text-emerald-200 hover:bg-emerald-500/10"
                                            } else {
                                                "rounded-md border border-slate-600 px-3 py-1 text-xs font-semibold text-slate-400 hover:bg-slate-800"
                                            },
                                            onclick: move |_| on_toggle((fuel_id.clone(), !available)),
                                            if available { "Mark Unavailable" } else { "Mark Available" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    form {
                        class: "mt-4 flex items-end gap-3",
                        onsubmit: on_add_fuel,
                        div { class: "flex-1",
                            label { class: "{theme::label_class(role)}", "New Fuel Type" }
                            input {
                                class: "mt-1 w-full {theme::input_class(role)}",
                                value: new_fuel_name(),
                                oninput: move |evt| new_fuel_name.set(evt.value().to_string()),
                                placeholder: "e.g. Biodiesel B20",
                            }
                        }
                        button { class: "{theme::btn_primary(role)}", r#type: "submit", "Add" }
                    }
                }

                form { class: "{theme::panel(role)} p-5",
                    onsubmit: on_set_price,
                    h3 { class: "text-sm font-semibold text-slate-200", "Set New Price" }
                    p { class: "mt-1 text-xs text-slate-500",
                        "Prices are never edited. A new record takes effect from its date; the latest effective record wins."
                    }
                    div { class: "mt-4 space-y-3",
                        div {
                            label { class: "{theme::label_class(role)}", "Fuel Type" }
                            select {
                                class: "mt-1 w-full {theme::input_class(role)}",
                                value: price_fuel_id(),
                                onchange: move |evt| price_fuel_id.set(evt.value().to_string()),
                                option { value: "", "Select a fuel type" }
                                for fuel in fuel_types.iter() {
                                    option { value: fuel.id.clone(), "{fuel.name}" }
                                }
                            }
                        }
                        div { class: "grid grid-cols-2 gap-3",
                            div {
                                label { class: "{theme::label_class(role)}", "Delivery ₱/L" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(role)}",
                                    inputmode: "decimal",
                                    value: delivery_input(),
                                    oninput: move |evt| delivery_input.set(evt.value().to_string()),
                                    placeholder: "68.00",
                                }
                            }
                            div {
                                label { class: "{theme::label_class(role)}", "Pickup ₱/L" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(role)}",
                                    inputmode: "decimal",
                                    value: pickup_input(),
                                    oninput: move |evt| pickup_input.set(evt.value().to_string()),
                                    placeholder: "66.50",
                                }
                            }
                        }
                        div {
                            label { class: "{theme::label_class(role)}", "Effective From" }
                            input {
                                class: "mt-1 w-full {theme::input_class(role)}",
                                value: effective_input(),
                                oninput: move |evt| effective_input.set(evt.value().to_string()),
                                placeholder: "2025-05-01",
                            }
                        }
                        button { class: "{theme::btn_primary(role)}", r#type: "submit", "Record Price" }
                    }
                }
            }

            PriceTable { title: "Current Prices".to_string(), rows: current_rows, role }
            if !scheduled_rows.is_empty() {
                PriceTable { title: "Scheduled Prices".to_string(), rows: scheduled_rows, role }
            }

            section { class: "space-y-3",
                div { class: "flex items-center gap-3",
                    h3 { class: "text-sm font-semibold text-slate-200", "Price History" }
                    select {
                        class: "{theme::input_class(role)}",
                        value: history_fuel_id(),
                        onchange: move |evt| history_fuel_id.set(evt.value().to_string()),
                        option { value: "", "Select a fuel type" }
                        for fuel in fuel_types.iter() {
                            option { value: fuel.id.clone(), "{fuel.name}" }
                        }
                    }
                }
                if !history_fuel_id().is_empty() {
                    PriceTable { title: "History".to_string(), rows: history_rows, role }
                }
            }
        }
    }
}
