use dioxus::prelude::*;

use crate::domain::UserRole;
use crate::ui::theme;

/// One row of the pricing screen: a price record with its display context
/// already resolved (names, formatted dates, current/scheduled flags).
#[derive(Clone, PartialEq)]
pub struct PriceRow {
    pub fuel_type_name: String,
    pub delivery_price_per_liter: f64,
    pub pickup_price_per_liter: f64,
    pub effective_label: String,
    pub set_by: String,
    pub is_current: bool,
    pub is_future: bool,
}

#[component]
pub fn PriceTable(title: String, rows: Vec<PriceRow>, role: UserRole) -> Element {
    let count = rows.len();
    rsx! {
        div {
            class: "{theme::table_container(role)}",
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "{title}" }
                span { class: "text-xs text-slate-500", "{count} records" }
            }
            if rows.is_empty() {
                p { class: "px-4 py-6 text-sm text-slate-500", "No current prices found." }
            } else {
                table {
                    class: "min-w-full text-sm",
                    thead {
                        class: "{theme::table_header(role)}",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Fuel Type" }
                            th { class: "px-4 py-3 font-medium text-right", "Delivery (₱/L)" }
                            th { class: "px-4 py-3 font-medium text-right", "Pickup (₱/L)" }
                            th { class: "px-4 py-3 font-medium", "Effective From" }
                            th { class: "px-4 py-3 font-medium", "Set By" }
                            th { class: "px-4 py-3 font-medium", "" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider(role)}",
                        for row in rows {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3 font-medium text-slate-100", "{row.fuel_type_name}" }
                                td { class: "px-4 py-3 text-right text-slate-300", "{format_price(row.delivery_price_per_liter)}" }
                                td { class: "px-4 py-3 text-right text-slate-300", "{format_price(row.pickup_price_per_liter)}" }
                                td { class: "px-4 py-3 text-slate-300", "{row.effective_label}" }
                                td { class: "px-4 py-3 text-slate-400", "{row.set_by}" }
                                td {
                                    class: "px-4 py-3",
                                    if row.is_current {
                                        span {
                                            class: "rounded-full border border-emerald-500/40 px-2 py-0.5 text-[10px] font-semibold uppercase tracking-wide text-emerald-200",
                                            "Current"
                                        }
                                    } else if row.is_future {
                                        span {
                                            class: "rounded-full border border-sky-500/40 px-2 py-0.5 text-[10px] font-semibold uppercase tracking-wide text-sky-200",
                                            "Scheduled"
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

pub fn format_price(value: f64) -> String {
    format!("₱{value:.2}")
}

pub fn format_liters(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k L", value / 1000.0)
    } else {
        format!("{value:.0} L")
    }
}
