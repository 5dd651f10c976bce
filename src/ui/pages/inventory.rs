use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{change_history, tank_levels, AppState, InventoryChangeType},
    ui::components::{
        price_table::format_liters,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::format_datetime,
    ui::theme,
};

fn parse_change_type(value: &str) -> Option<InventoryChangeType> {
    match value {
        "replenishment" => Some(InventoryChangeType::Replenishment),
        "adjustment_positive" => Some(InventoryChangeType::AdjustmentPositive),
        "adjustment_negative" => Some(InventoryChangeType::AdjustmentNegative),
        _ => None,
    }
}

#[component]
pub fn InventoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;

    let mut change_fuel_id = use_signal(String::new);
    let mut change_type_input = use_signal(|| "replenishment".to_string());
    let mut quantity_input = use_signal(String::new);
    let mut reason_input = use_signal(String::new);
    let mut history_fuel_id = use_signal(String::new);

    let fuel_types = state.with(|st| st.fuel_types.clone());
    let levels: Vec<(String, f64, f64, f64, bool)> = state.with(|st| {
        tank_levels(&st.tanks, &st.inventory_changes)
            .into_iter()
            .map(|level| {
                (
                    st.fuel_type_name(&level.fuel_type_id),
                    level.level_liters,
                    level.capacity_liters,
                    level.fill_fraction(),
                    level.is_low(),
                )
            })
            .collect()
    });

    let history: Vec<(String, &'static str, f64, f64, String, String)> = {
        let selected = history_fuel_id();
        if selected.is_empty() {
            Vec::new()
        } else {
            state.with(|st| {
                change_history(&selected, &st.inventory_changes)
                    .into_iter()
                    .map(|change| {
                        (
                            change.id.clone(),
                            change.change_type.label(),
                            change.change_type.sign(),
                            change.quantity_liters,
                            change.reason.clone().unwrap_or_default(),
                            format_datetime(change.recorded_at),
                        )
                    })
                    .collect()
            })
        }
    };

    let on_record_change = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let user_id = session.user_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let fuel_id = change_fuel_id();
            if fuel_id.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Pick a fuel type first.");
                return;
            }
            let Some(change_type) = parse_change_type(&change_type_input()) else {
                push_toast(toasts.clone(), ToastKind::Error, "Pick a change type.");
                return;
            };
            let quantity = match quantity_input().trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Quantity must be a positive number of liters.",
                    );
                    return;
                }
            };
            let reason = match reason_input().trim() {
                "" => None,
                text => Some(text.to_string()),
            };
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| {
                st.record_inventory_change(&fuel_id, change_type, quantity, reason, &user_id, now);
            });
            quantity_input.set(String::new());
            reason_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, "Inventory change recorded.");
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Depot Inventory" }

            section { class: "grid gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for (name, level, capacity, fraction, is_low) in levels {
                    {
                        let percent = fraction * 100.0;
                        let bar_class = if is_low {
                            "h-2 rounded-full bg-rose-500"
                        } else {
                            "h-2 rounded-full bg-emerald-500"
                        };
                        rsx! {
                            div { class: "{theme::panel(role)} p-4",
                                div { class: "flex items-center justify-between",
                                    h3 { class: "text-sm font-semibold text-slate-200", "{name}" }
                                    if is_low {
                                        span { class: "rounded-full border border-rose-500/40 px-2 py-0.5 text-[10px] font-semibold uppercase text-rose-200",
                                            "Low"
                                        }
                                    }
                                }
                                p { class: "mt-2 text-xl font-semibold text-slate-100", "{format_liters(level)}" }
                                p { class: "text-xs text-slate-500", "of {format_liters(capacity)} capacity" }
                                div { class: "mt-3 h-2 w-full rounded-full bg-slate-800",
                                    div { class: "{bar_class}", style: "width: {percent:.0}%" }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "{theme::panel(role)} flex flex-wrap items-end gap-4 p-5",
                onsubmit: on_record_change,
                div { class: "w-52",
                    label { class: "{theme::label_class(role)}", "Fuel Type" }
                    select {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: change_fuel_id(),
                        onchange: move |evt| change_fuel_id.set(evt.value().to_string()),
                        option { value: "", "Select a fuel type" }
                        for fuel in fuel_types.iter() {
                            option { value: fuel.id.clone(), "{fuel.name}" }
                        }
                    }
                }
                div { class: "w-48",
                    label { class: "{theme::label_class(role)}", "Change Type" }
                    select {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: change_type_input(),
                        onchange: move |evt| change_type_input.set(evt.value().to_string()),
                        option { value: "replenishment", "Replenishment" }
                        option { value: "adjustment_positive", "Adjustment (+)" }
                        option { value: "adjustment_negative", "Adjustment (-)" }
                    }
                }
                div { class: "w-36",
                    label { class: "{theme::label_class(role)}", "Liters" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "decimal",
                        value: quantity_input(),
                        oninput: move |evt| quantity_input.set(evt.value().to_string()),
                        placeholder: "5000",
                    }
                }
                div { class: "min-w-[180px] flex-1",
                    label { class: "{theme::label_class(role)}", "Reason (optional)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: reason_input(),
                        oninput: move |evt| reason_input.set(evt.value().to_string()),
                        placeholder: "Tanker delivery, stock audit...",
                    }
                }
                button { class: "{theme::btn_primary(role)}", r#type: "submit", "Record" }
            }

            section { class: "space-y-3",
                div { class: "flex items-center gap-3",
                    h3 { class: "text-sm font-semibold text-slate-200", "Change History" }
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
                    div { class: "{theme::table_container(role)}",
                        if history.is_empty() {
                            p { class: "px-4 py-6 text-sm text-slate-500", "No changes recorded for this fuel." }
                        } else {
                            table { class: "min-w-full text-sm",
                                thead { class: "{theme::table_header(role)}",
                                    tr {
                                        th { class: "px-4 py-3 font-medium", "Type" }
                                        th { class: "px-4 py-3 font-medium text-right", "Change" }
                                        th { class: "px-4 py-3 font-medium", "Reason" }
                                        th { class: "px-4 py-3 font-medium", "Recorded" }
                                    }
                                }
                                tbody { class: "{theme::table_divider(role)}",
                                    for (id, label, sign, quantity, reason, recorded) in history {
                                        {
                                            let signed = sign * quantity;
                                            let amount_class = if signed >= 0.0 {
                                                "px-4 py-3 text-right text-emerald-300"
                                            } else {
                                                "px-4 py-3 text-right text-rose-300"
                                            };
                                            rsx! {
                                                tr { key: "{id}", class: "hover:bg-slate-800/40",
                                                    td { class: "px-4 py-3 text-slate-100", "{label}" }
                                                    td { class: "{amount_class}", "{signed:+.0} L" }
                                                    td { class: "px-4 py-3 text-slate-400",
                                                        if reason.is_empty() { "—" } else { "{reason}" }
                                                    }
                                                    td { class: "px-4 py-3 text-slate-400", "{recorded}" }
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
        }
    }
}
