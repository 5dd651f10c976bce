use dioxus::prelude::*;

use crate::domain::{OrderStatus, PaymentStatus, UserRole};
use crate::ui::components::status_badge::{OrderStatusBadge, PaymentStatusBadge};
use crate::ui::theme;

#[derive(Clone, PartialEq)]
pub struct OrderRow {
    pub order_id: String,
    pub station: String,
    pub placed_by: String,
    pub type_label: &'static str,
    pub status: OrderStatus,
    pub payment_label: &'static str,
    pub payment_status: PaymentStatus,
    pub items_summary: String,
    pub total: f64,
    pub created_label: String,
}

/// Order list shared by the orders page and the dashboards. Office staff
/// get confirm / payment actions; everyone else gets a read-only table.
#[component]
pub fn OrdersTable(
    title: String,
    rows: Vec<OrderRow>,
    role: UserRole,
    on_confirm: Option<EventHandler<String>>,
    on_complete_payment: Option<EventHandler<String>>,
) -> Element {
    let count = rows.len();
    let has_actions = on_confirm.is_some() || on_complete_payment.is_some();
    rsx! {
        div {
            class: "{theme::table_container(role)}",
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "{title}" }
                span { class: "text-xs text-slate-500", "{count} orders" }
            }
            if rows.is_empty() {
                p { class: "px-4 py-6 text-sm text-slate-500", "No orders to show." }
            } else {
                table {
                    class: "min-w-full text-sm",
                    thead {
                        class: "{theme::table_header(role)}",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Station" }
                            th { class: "px-4 py-3 font-medium", "Placed By" }
                            th { class: "px-4 py-3 font-medium", "Type" }
                            th { class: "px-4 py-3 font-medium", "Items" }
                            th { class: "px-4 py-3 font-medium text-right", "Total" }
                            th { class: "px-4 py-3 font-medium", "Status" }
                            th { class: "px-4 py-3 font-medium", "Payment" }
                            th { class: "px-4 py-3 font-medium", "Created" }
                            if has_actions {
                                th { class: "px-4 py-3 font-medium text-right", "Actions" }
                            }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider(role)}",
                        for row in rows {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3 font-medium text-slate-100", "{row.station}" }
                                td { class: "px-4 py-3 text-slate-300", "{row.placed_by}" }
                                td { class: "px-4 py-3 text-slate-300", "{row.type_label}" }
                                td { class: "px-4 py-3 text-slate-300", "{row.items_summary}" }
                                td { class: "px-4 py-3 text-right text-slate-300", "₱{row.total:.2}" }
                                td { class: "px-4 py-3", OrderStatusBadge { status: row.status } }
                                td {
                                    class: "px-4 py-3",
                                    div { class: "flex flex-col items-start gap-1",
                                        PaymentStatusBadge { status: row.payment_status }
                                        span { class: "text-[10px] text-slate-500", "{row.payment_label}" }
                                    }
                                }
                                td { class: "px-4 py-3 text-slate-400", "{row.created_label}" }
                                if has_actions {
                                    td {
                                        class: "px-4 py-3 text-right",
                                        div { class: "flex justify-end gap-2",
                                            if let Some(confirm) = on_confirm {
                                                if row.status == OrderStatus::Pending {
                                                    button {
                                                        class: "rounded-md border border-sky-500/40 px-2 py-1 text-[11px] font-semibold text-sky-200 hover:bg-sky-500/10",
                                                        onclick: {
                                                            let order_id = row.order_id.clone();
                                                            move |_| confirm.call(order_id.clone())
                                                        },
                                                        "Confirm"
                                                    }
                                                }
                                            }
                                            if let Some(complete) = on_complete_payment {
                                                if row.payment_status == PaymentStatus::Pending
                                                    && matches!(row.status, OrderStatus::Delivered | OrderStatus::PickedUp)
                                                {
                                                    button {
                                                        class: "rounded-md border border-emerald-500/40 px-2 py-1 text-[11px] font-semibold text-emerald-200 hover:bg-emerald-500/10",
                                                        onclick: {
                                                            let order_id = row.order_id.clone();
                                                            move |_| complete.call(order_id.clone())
                                                        },
                                                        "Mark Paid"
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
}
