use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    app::Route,
    domain::{
        quote_item, resolve_effective_price, AppState, OrderDraft, OrderType, PaymentMethod,
        DELIVERY_MIN_LITERS,
    },
    ui::components::{
        price_table::format_price,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::theme,
};

#[component]
pub fn PlaceOrderPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let now = OffsetDateTime::now_utc();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;
    let station_name = session
        .station_id
        .as_deref()
        .map(|id| state.with(|st| st.station_name(id)));

    let mut draft = use_signal(OrderDraft::default);
    let mut fuel_input = use_signal(String::new);
    let mut quantity_input = use_signal(String::new);

    let fuel_types = state.with(|st| st.fuel_types.clone());
    let order_type = draft.with(|d| d.order_type);
    let payment_method = draft.with(|d| d.payment_method);
    let items = draft.with(|d| d.items.clone());
    let total: f64 = items.iter().map(|item| item.subtotal()).sum();

    // Per-fuel current rate for the picker, so unpriced or unavailable fuels
    // read as not orderable.
    let fuel_options: Vec<(String, String)> = state.with(|st| {
        fuel_types
            .iter()
            .map(|fuel| {
                let label = match (
                    fuel.is_available,
                    resolve_effective_price(&fuel.id, &st.fuel_prices, now),
                ) {
                    (true, Some(price)) => match order_type {
                        Some(ot) => {
                            format!("{} — {}/L", fuel.name, format_price(price.price_for(ot)))
                        }
                        None => fuel.name.clone(),
                    },
                    (false, _) => format!("{} (unavailable)", fuel.name),
                    (true, None) => format!("{} (no price set)", fuel.name),
                };
                (fuel.id.clone(), label)
            })
            .collect()
    });

    let on_add_item = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(order_type) = draft.with(|d| d.order_type) else {
                push_toast(toasts.clone(), ToastKind::Warning, "Select an order type first.");
                return;
            };
            let fuel_id = fuel_input();
            if fuel_id.is_empty() {
                push_toast(toasts.clone(), ToastKind::Warning, "Pick a fuel type.");
                return;
            }
            let quantity = match quantity_input().trim().parse::<f64>() {
                Ok(value) if value > 0.0 => value,
                _ => {
                    push_toast(toasts.clone(), ToastKind::Error, "Enter a positive quantity.");
                    return;
                }
            };
            if order_type == OrderType::Delivery && quantity < DELIVERY_MIN_LITERS {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Delivery orders need at least {DELIVERY_MIN_LITERS:.0} L per item."),
                );
                return;
            }

            let reference = OffsetDateTime::now_utc();
            let staged = state.with(|st| {
                st.fuel_type(&fuel_id).and_then(|fuel| {
                    quote_item(fuel, &st.fuel_prices, order_type, quantity, reference)
                })
            });
            let Some(staged) = staged else {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "That fuel is unavailable or has no price in force.",
                );
                return;
            };

            let name = staged.fuel_type_name.clone();
            draft.with_mut(|d| {
                // One line per fuel type; re-adding replaces the line.
                d.items.retain(|item| item.fuel_type_id != staged.fuel_type_id);
                d.items.push(staged);
            });
            fuel_input.set(String::new());
            quantity_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, format!("Added {name}."));
        }
    };

    let on_remove_item = move |fuel_type_id: String| {
        draft.with_mut(|d| d.items.retain(|item| item.fuel_type_id != fuel_type_id));
    };

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let now = OffsetDateTime::now_utc();
            let snapshot = draft();
            let result = state.with_mut(|st| st.place_order(&snapshot, now));
            match result {
                Ok(_) => {
                    draft.set(OrderDraft::default());
                    push_toast(
                        toasts.clone(),
                        ToastKind::Success,
                        "Order placed. The office will confirm it shortly.",
                    );
                    nav.push(Route::Orders {});
                }
                Err(err) => {
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            div {
                h2 { class: "text-lg font-semibold text-slate-100", "Place Order" }
                if let Some(name) = station_name {
                    p { class: "text-sm {theme::accent_text(role)}", "{name}" }
                }
            }

            section { class: "grid gap-6 lg:grid-cols-[1fr,1fr]",
                div { class: "{theme::panel(role)} space-y-5 p-5",
                    div {
                        h3 { class: "{theme::label_class(role)}", "Order Type" }
                        div { class: "mt-2 flex gap-2",
                            for ot in [OrderType::Delivery, OrderType::Pickup] {
                                button {
                                    class: if order_type == Some(ot) {
                                        theme::nav_active(role)
                                    } else {
                                        theme::nav_inactive(role)
                                    },
                                    onclick: move |_| draft.with_mut(|d| d.order_type = Some(ot)),
                                    "{ot.label()}"
                                }
                            }
                        }
                        if order_type == Some(OrderType::Delivery) {
                            p { class: "mt-2 text-xs text-slate-500",
                                "Delivery orders need at least {DELIVERY_MIN_LITERS:.0} L per item."
                            }
                        }
                    }
                    div {
                        h3 { class: "{theme::label_class(role)}", "Payment Method" }
                        div { class: "mt-2 flex gap-2",
                            for pm in [PaymentMethod::Cash, PaymentMethod::Cheque] {
                                button {
                                    class: if payment_method == Some(pm) {
                                        theme::nav_active(role)
                                    } else {
                                        theme::nav_inactive(role)
                                    },
                                    onclick: move |_| draft.with_mut(|d| d.payment_method = Some(pm)),
                                    "{pm.label()}"
                                }
                            }
                        }
                        if payment_method == Some(PaymentMethod::Cheque) {
                            div { class: "mt-3",
                                label { class: "{theme::label_class(role)}", "Cheque Details" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(role)}",
                                    value: draft.with(|d| d.payment_details.clone()),
                                    oninput: move |evt| {
                                        draft.with_mut(|d| d.payment_details = evt.value().to_string())
                                    },
                                    placeholder: "Cheque number, bank",
                                }
                            }
                        }
                    }
                    form { class: "space-y-3",
                        onsubmit: on_add_item,
                        h3 { class: "{theme::label_class(role)}", "Add Fuel Item" }
                        select {
                            class: "w-full {theme::input_class(role)}",
                            value: fuel_input(),
                            onchange: move |evt| fuel_input.set(evt.value().to_string()),
                            option { value: "", "Select a fuel type" }
                            for (id, label) in fuel_options.iter() {
                                option { value: id.clone(), "{label}" }
                            }
                        }
                        div { class: "flex items-end gap-3",
                            div { class: "flex-1",
                                label { class: "{theme::label_class(role)}", "Quantity (L)" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(role)}",
                                    inputmode: "decimal",
                                    value: quantity_input(),
                                    oninput: move |evt| quantity_input.set(evt.value().to_string()),
                                    placeholder: "2000",
                                }
                            }
                            button { class: "{theme::btn_secondary(role)}", r#type: "submit", "Add Item" }
                        }
                    }
                }

                div { class: "{theme::panel(role)} p-5",
                    h3 { class: "text-sm font-semibold text-slate-200", "Order Summary" }
                    if items.is_empty() {
                        p { class: "mt-4 text-sm text-slate-500", "No items yet. Add a fuel item to begin." }
                    } else {
                        table { class: "mt-3 min-w-full text-sm",
                            thead { class: "{theme::table_header(role)}",
                                tr {
                                    th { class: "px-3 py-2 font-medium", "Fuel" }
                                    th { class: "px-3 py-2 font-medium text-right", "Liters" }
                                    th { class: "px-3 py-2 font-medium text-right", "Rate" }
                                    th { class: "px-3 py-2 font-medium text-right", "Subtotal" }
                                    th { class: "px-3 py-2", "" }
                                }
                            }
                            tbody { class: "{theme::table_divider(role)}",
                                for item in items.iter() {
                                    {
                                        let fuel_type_id = item.fuel_type_id.clone();
                                        let mut on_remove = on_remove_item.clone();
                                        rsx! {
                                            tr {
                                                td { class: "px-3 py-2 text-slate-100", "{item.fuel_type_name}" }
                                                td { class: "px-3 py-2 text-right text-slate-300", "{item.quantity_liters:.0}" }
                                                td { class: "px-3 py-2 text-right text-slate-300", "{format_price(item.price_per_liter)}" }
                                                td { class: "px-3 py-2 text-right text-slate-200", "{format_price(item.subtotal())}" }
                                                td { class: "px-3 py-2 text-right",
                                                    button {
                                                        class: "text-xs font-semibold uppercase text-rose-300 hover:text-rose-100",
                                                        onclick: move |_| on_remove(fuel_type_id.clone()),
                                                        "Remove"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "mt-4 flex items-center justify-between border-t border-slate-800 pt-4",
                            span { class: "text-sm text-slate-400", "Total" }
                            span { class: "text-lg font-semibold text-slate-100", "{format_price(total)}" }
                        }
                        button {
                            class: "mt-4 w-full {theme::btn_primary(role)}",
                            onclick: on_submit,
                            "Place Order"
                        }
                    }
                }
            }
        }
    }
}
