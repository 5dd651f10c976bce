use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::{
    domain::{items_summary, order_total, AppState, Order, UserRole},
    ui::components::{
        orders_table::{OrderRow, OrdersTable},
        toast::{push_toast, ToastKind, ToastMessage},
    },
    ui::pages::format_datetime,
};

/// Builds display rows for a set of orders against the current state.
pub fn order_rows(st: &AppState, orders: &[&Order]) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|order| OrderRow {
            order_id: order.id.clone(),
            station: st.station_name(&order.gas_station_id),
            placed_by: st.user_name(&order.placed_by_user_id),
            type_label: order.order_type.label(),
            status: order.status,
            payment_label: order.payment_method.label(),
            payment_status: order.payment_status,
            items_summary: items_summary(&order.id, &st.order_items, |id| st.fuel_type_name(id)),
            total: order_total(&order.id, &st.order_items),
            created_label: format_datetime(order.created_at),
        })
        .collect()
}

#[component]
pub fn OrdersPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(session) = state.with(|st| st.session.clone()) else {
        return rsx! { Fragment {} };
    };
    let role = session.role;
    let can_manage = matches!(role, UserRole::Admin | UserRole::OfficeStaff);

    let rows = state.with(|st| {
        let mut orders = st.visible_orders();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        order_rows(st, &orders)
    });

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
        div { class: "space-y-6",
            h2 { class: "text-lg font-semibold text-slate-100", "Orders" }
            if can_manage {
                OrdersTable {
                    title: "All Orders".to_string(),
                    rows,
                    role,
                    on_confirm,
                    on_complete_payment,
                }
            } else {
                OrdersTable {
                    title: "Orders".to_string(),
                    rows,
                    role,
                }
            }
        }
    }
}
