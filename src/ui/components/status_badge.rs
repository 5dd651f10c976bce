use dioxus::prelude::*;

use crate::domain::{OrderStatus, PaymentStatus, RegistrationStatus, TruckStatus};

fn badge(class: &'static str, label: &'static str) -> Element {
    rsx! {
        span {
            class: "inline-block rounded-full border px-2 py-0.5 text-[10px] font-semibold uppercase tracking-wide {class}",
            "{label}"
        }
    }
}

#[component]
pub fn OrderStatusBadge(status: OrderStatus) -> Element {
    let class = match status {
        OrderStatus::Pending => "border-amber-500/40 text-amber-200",
        OrderStatus::Confirmed => "border-sky-500/40 text-sky-200",
        OrderStatus::Scheduled => "border-indigo-500/40 text-indigo-200",
        OrderStatus::OutForDelivery => "border-violet-500/40 text-violet-200",
        OrderStatus::Delivered | OrderStatus::PickedUp => "border-emerald-500/40 text-emerald-200",
        OrderStatus::ReadyForPickup => "border-teal-500/40 text-teal-200",
        OrderStatus::Cancelled => "border-rose-500/40 text-rose-200",
    };
    badge(class, status.label())
}

#[component]
pub fn PaymentStatusBadge(status: PaymentStatus) -> Element {
    let class = match status {
        PaymentStatus::Pending => "border-amber-500/40 text-amber-200",
        PaymentStatus::Completed => "border-emerald-500/40 text-emerald-200",
    };
    badge(class, status.label())
}

#[component]
pub fn TruckStatusBadge(status: TruckStatus) -> Element {
    let class = match status {
        TruckStatus::Available => "border-emerald-500/40 text-emerald-200",
        TruckStatus::Unavailable => "border-amber-500/40 text-amber-200",
        TruckStatus::Disabled => "border-rose-500/40 text-rose-200",
        TruckStatus::OutForDelivery => "border-violet-500/40 text-violet-200",
    };
    badge(class, status.label())
}

#[component]
pub fn RegistrationStatusBadge(status: RegistrationStatus) -> Element {
    let class = match status {
        RegistrationStatus::Pending => "border-amber-500/40 text-amber-200",
        RegistrationStatus::Approved => "border-emerald-500/40 text-emerald-200",
        RegistrationStatus::Rejected => "border-rose-500/40 text-rose-200",
    };
    badge(class, status.label())
}
