use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{AppState, TruckStatus},
    ui::components::{
        status_badge::TruckStatusBadge,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::format_date,
    ui::theme,
};

fn parse_status(value: &str) -> Option<TruckStatus> {
    match value {
        "available" => Some(TruckStatus::Available),
        "unavailable" => Some(TruckStatus::Unavailable),
        "disabled" => Some(TruckStatus::Disabled),
        "out_for_delivery" => Some(TruckStatus::OutForDelivery),
        _ => None,
    }
}

fn status_value(status: TruckStatus) -> &'static str {
    match status {
        TruckStatus::Available => "available",
        TruckStatus::Unavailable => "unavailable",
        TruckStatus::Disabled => "disabled",
        TruckStatus::OutForDelivery => "out_for_delivery",
    }
}

#[component]
pub fn TrucksPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(role) = state.with(|st| st.current_role()) else {
        return rsx! { Fragment {} };
    };

    let mut plate_input = use_signal(String::new);
    let mut driver_input = use_signal(String::new);
    let mut capacity_input = use_signal(String::new);

    let trucks = state.with(|st| st.trucks.clone());

    let on_add_truck = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let plate = plate_input().trim().to_string();
            let driver = driver_input().trim().to_string();
            if plate.is_empty() || driver.is_empty() {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    "Plate number and driver are required.",
                );
                return;
            }
            let capacity = match capacity_input().trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Capacity must be a positive number of liters.",
                    );
                    return;
                }
            };
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.add_truck(&plate, &driver, capacity, now));
            plate_input.set(String::new());
            driver_input.set(String::new());
            capacity_input.set(String::new());
            push_toast(toasts.clone(), ToastKind::Success, format!("Added truck {plate}."));
        }
    };

    let on_status_change = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |(truck_id, value): (String, String)| {
            let Some(status) = parse_status(&value) else {
                return;
            };
            let now = OffsetDateTime::now_utc();
            state.with_mut(|st| st.set_truck_status(&truck_id, status, now));
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                format!("Truck marked {}.", status.label()),
            );
        }
    };

    rsx! {
        div { class: "space-y-8",
            h2 { class: "text-lg font-semibold text-slate-100", "Truck Records" }

            form { class: "{theme::panel(role)} flex flex-wrap items-end gap-4 p-5",
                onsubmit: on_add_truck,
                div { class: "w-40",
                    label { class: "{theme::label_class(role)}", "Plate Number" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: plate_input(),
                        oninput: move |evt| plate_input.set(evt.value().to_string()),
                        placeholder: "ABC-123",
                    }
                }
                div { class: "min-w-[180px] flex-1",
                    label { class: "{theme::label_class(role)}", "Driver" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        value: driver_input(),
                        oninput: move |evt| driver_input.set(evt.value().to_string()),
                        placeholder: "John Driver",
                    }
                }
                div { class: "w-40",
                    label { class: "{theme::label_class(role)}", "Capacity (L)" }
                    input {
                        class: "mt-1 w-full {theme::input_class(role)}",
                        inputmode: "numeric",
                        value: capacity_input(),
                        oninput: move |evt| capacity_input.set(evt.value().to_string()),
                        placeholder: "10000",
                    }
                }
                button { class: "{theme::btn_primary(role)}", r#type: "submit", "Add Truck" }
            }

            div { class: "{theme::table_container(role)}",
                table { class: "min-w-full text-sm",
                    thead { class: "{theme::table_header(role)}",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Plate" }
                            th { class: "px-4 py-3 font-medium", "Driver" }
                            th { class: "px-4 py-3 font-medium text-right", "Capacity" }
                            th { class: "px-4 py-3 font-medium", "Status" }
                            th { class: "px-4 py-3 font-medium", "Updated" }
                            th { class: "px-4 py-3 font-medium", "Change Status" }
                        }
                    }
                    tbody { class: "{theme::table_divider(role)}",
                        for truck in trucks {
                            {
                                let truck_id = truck.id.clone();
                                let mut on_change = on_status_change.clone();
                                rsx! {
                                    tr { class: "hover:bg-slate-800/40",
                                        td { class: "px-4 py-3 font-medium text-slate-100", "{truck.plate_number}" }
                                        td { class: "px-4 py-3 text-slate-300", "{truck.driver}" }
                                        td { class: "px-4 py-3 text-right text-slate-300", "{truck.capacity_liters} L" }
                                        td { class: "px-4 py-3", TruckStatusBadge { status: truck.status } }
                                        td { class: "px-4 py-3 text-slate-400", "{format_date(truck.updated_at)}" }
                                        td { class: "px-4 py-3",
                                            select {
                                                class: "{theme::input_class(role)}",
                                                value: status_value(truck.status),
                                                onchange: move |evt| on_change((truck_id.clone(), evt.value().to_string())),
                                                for status in TruckStatus::ALL {
                                                    option { value: status_value(status), "{status.label()}" }
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
