//! Order drafting and submission. Line prices are captured through the
//! effective-price resolver at the moment the line is added, so a later
//! price record never changes an existing order.

use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use super::entities::{
    FuelPrice, FuelType, FuelTypeId, Order, OrderItem, OrderStatus, OrderType, PaymentMethod,
    PaymentStatus,
};
use super::pricing::resolve_effective_price;

/// Delivery orders ship by tanker truck; smaller lots must be picked up.
pub const DELIVERY_MIN_LITERS: f64 = 1000.0;

/// A line the user has staged but not yet submitted.
#[derive(Clone, Debug, PartialEq)]
pub struct DraftItem {
    pub fuel_type_id: FuelTypeId,
    pub fuel_type_name: String,
    pub quantity_liters: f64,
    pub price_per_liter: f64,
}

impl DraftItem {
    pub fn subtotal(&self) -> f64 {
        self.quantity_liters * self.price_per_liter
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderDraft {
    pub order_type: Option<OrderType>,
    pub payment_method: Option<PaymentMethod>,
    pub payment_details: String,
    pub items: Vec<DraftItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("Please add at least one fuel item")]
    NoItems,
    #[error("Select an order type")]
    MissingOrderType,
    #[error("Select a payment method")]
    MissingPaymentMethod,
    #[error("Cheque details required")]
    ChequeDetailsRequired,
    #[error("Quantity must be positive for {fuel_type_name}")]
    NonPositiveQuantity { fuel_type_name: String },
    #[error("Minimum 1000L per item for delivery orders ({fuel_type_name})")]
    BelowDeliveryMinimum { fuel_type_name: String },
}

/// Quote one line for the draft: the fuel must be marked available and must
/// have a price in force at `reference`. `None` means the fuel cannot be
/// ordered right now, which the form shows as an unavailable option.
pub fn quote_item(
    fuel_type: &FuelType,
    prices: &[FuelPrice],
    order_type: OrderType,
    quantity_liters: f64,
    reference: OffsetDateTime,
) -> Option<DraftItem> {
    if !fuel_type.is_available {
        return None;
    }
    let current = resolve_effective_price(&fuel_type.id, prices, reference)?;
    Some(DraftItem {
        fuel_type_id: fuel_type.id.clone(),
        fuel_type_name: fuel_type.name.clone(),
        quantity_liters,
        price_per_liter: current.price_for(order_type),
    })
}

/// Validates a complete draft; mirrors the order form rules: at least one
/// item, positive quantities, cheque payments need details, delivery lines
/// need at least [`DELIVERY_MIN_LITERS`].
pub fn validate_draft(draft: &OrderDraft) -> Result<(), OrderValidationError> {
    let order_type = draft
        .order_type
        .ok_or(OrderValidationError::MissingOrderType)?;
    let payment_method = draft
        .payment_method
        .ok_or(OrderValidationError::MissingPaymentMethod)?;

    if draft.items.is_empty() {
        return Err(OrderValidationError::NoItems);
    }
    if payment_method == PaymentMethod::Cheque && draft.payment_details.trim().is_empty() {
        return Err(OrderValidationError::ChequeDetailsRequired);
    }
    for item in &draft.items {
        if item.quantity_liters <= 0.0 {
            return Err(OrderValidationError::NonPositiveQuantity {
                fuel_type_name: item.fuel_type_name.clone(),
            });
        }
        if order_type == OrderType::Delivery && item.quantity_liters < DELIVERY_MIN_LITERS {
            return Err(OrderValidationError::BelowDeliveryMinimum {
                fuel_type_name: item.fuel_type_name.clone(),
            });
        }
    }
    Ok(())
}

/// Turns a validated draft into a pending order plus its line records.
pub fn submit_draft(
    draft: &OrderDraft,
    gas_station_id: &str,
    placed_by_user_id: &str,
    now: OffsetDateTime,
) -> Result<(Order, Vec<OrderItem>), OrderValidationError> {
    validate_draft(draft)?;
    let order_type = draft
        .order_type
        .ok_or(OrderValidationError::MissingOrderType)?;
    let payment_method = draft
        .payment_method
        .ok_or(OrderValidationError::MissingPaymentMethod)?;

    let order_id = format!("ord_{}", Uuid::new_v4().simple());
    let order = Order {
        id: order_id.clone(),
        gas_station_id: gas_station_id.to_string(),
        placed_by_user_id: placed_by_user_id.to_string(),
        order_type,
        status: OrderStatus::Pending,
        payment_method,
        payment_details: match draft.payment_details.trim() {
            "" => None,
            details => Some(details.to_string()),
        },
        payment_status: PaymentStatus::Pending,
        confirmed_by_user_id: None,
        created_at: now,
        updated_at: now,
    };

    let items = draft
        .items
        .iter()
        .map(|item| OrderItem {
            id: format!("oi_{}", Uuid::new_v4().simple()),
            order_id: order_id.clone(),
            fuel_type_id: item.fuel_type_id.clone(),
            quantity_liters: item.quantity_liters,
            price_per_liter_at_order: item.price_per_liter,
        })
        .collect();

    Ok((order, items))
}

/// Sum of line subtotals for the given order.
pub fn order_total(order_id: &str, items: &[OrderItem]) -> f64 {
    items
        .iter()
        .filter(|item| item.order_id == order_id)
        .map(OrderItem::subtotal)
        .sum()
}

/// Short human summary of the lines on an order, for list views.
pub fn items_summary(order_id: &str, items: &[OrderItem], fuel_name: impl Fn(&str) -> String) -> String {
    let lines: Vec<&OrderItem> = items.iter().filter(|i| i.order_id == order_id).collect();
    match lines.as_slice() {
        [] => "No items".to_string(),
        [only] => format!(
            "{}: {:.0} L",
            fuel_name(&only.fuel_type_id),
            only.quantity_liters
        ),
        many => {
            let total: f64 = many.iter().map(|i| i.quantity_liters).sum();
            format!("{} types, {:.0} L total", many.len(), total)
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn diesel() -> FuelType {
        FuelType {
            id: "ft_1".to_string(),
            name: "Diesel".to_string(),
            is_available: true,
            created_at: datetime!(2024-12-01 00:00 UTC),
            updated_at: datetime!(2025-03-15 00:00 UTC),
        }
    }

    fn diesel_price() -> FuelPrice {
        FuelPrice {
            id: "fp_2".to_string(),
            fuel_type_id: "ft_1".to_string(),
            delivery_price_per_liter: 68.0,
            pickup_price_per_liter: 66.5,
            effective_from: datetime!(2025-04-10 00:00 UTC),
            set_by_user_id: "usr_2".to_string(),
            created_at: datetime!(2025-04-09 15:30 UTC),
        }
    }

    fn draft_with(items: Vec<DraftItem>) -> OrderDraft {
        OrderDraft {
            order_type: Some(OrderType::Delivery),
            payment_method: Some(PaymentMethod::Cash),
            payment_details: String::new(),
            items,
        }
    }

    fn staged_diesel(quantity: f64) -> DraftItem {
        DraftItem {
            fuel_type_id: "ft_1".to_string(),
            fuel_type_name: "Diesel".to_string(),
            quantity_liters: quantity,
            price_per_liter: 68.0,
        }
    }

    #[test]
    fn quote_uses_the_channel_rate_in_force() {
        let prices = vec![diesel_price()];
        let reference = datetime!(2025-04-14 12:00 UTC);

        let delivery =
            quote_item(&diesel(), &prices, OrderType::Delivery, 2000.0, reference).unwrap();
        assert_eq!(delivery.price_per_liter, 68.0);

        let pickup = quote_item(&diesel(), &prices, OrderType::Pickup, 500.0, reference).unwrap();
        assert_eq!(pickup.price_per_liter, 66.5);
    }

    #[test]
    fn quote_refuses_unavailable_or_unpriced_fuel() {
        let prices = vec![diesel_price()];
        let mut kerosene = diesel();
        kerosene.id = "ft_3".to_string();
        kerosene.name = "Kerosene".to_string();
        assert!(quote_item(
            &kerosene,
            &prices,
            OrderType::Pickup,
            100.0,
            datetime!(2025-04-14 12:00 UTC)
        )
        .is_none());

        let mut unavailable = diesel();
        unavailable.is_available = false;
        assert!(quote_item(
            &unavailable,
            &prices,
            OrderType::Pickup,
            100.0,
            datetime!(2025-04-14 12:00 UTC)
        )
        .is_none());
    }

    #[test]
    fn captured_price_survives_later_price_records() {
        let mut prices = vec![diesel_price()];
        let reference = datetime!(2025-04-14 12:00 UTC);
        let staged =
            quote_item(&diesel(), &prices, OrderType::Delivery, 2000.0, reference).unwrap();

        prices.push(FuelPrice {
            id: "fp_9".to_string(),
            delivery_price_per_liter: 99.0,
            pickup_price_per_liter: 98.0,
            effective_from: datetime!(2025-04-14 13:00 UTC),
            ..diesel_price()
        });

        let (order, items) =
            submit_draft(&draft_with(vec![staged]), "gso_sta_1", "usr_4", reference).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price_per_liter_at_order, 68.0);
        assert_eq!(items[0].order_id, order.id);
    }

    #[test]
    fn delivery_lines_below_minimum_are_rejected() {
        let draft = draft_with(vec![staged_diesel(500.0)]);
        assert_eq!(
            validate_draft(&draft),
            Err(OrderValidationError::BelowDeliveryMinimum {
                fuel_type_name: "Diesel".to_string()
            })
        );

        let mut pickup = draft_with(vec![staged_diesel(500.0)]);
        pickup.order_type = Some(OrderType::Pickup);
        assert_eq!(validate_draft(&pickup), Ok(()));
    }

    #[test]
    fn cheque_requires_details() {
        let mut draft = draft_with(vec![staged_diesel(2000.0)]);
        draft.payment_method = Some(PaymentMethod::Cheque);
        assert_eq!(
            validate_draft(&draft),
            Err(OrderValidationError::ChequeDetailsRequired)
        );

        draft.payment_details = "CHQ-0042".to_string();
        assert_eq!(validate_draft(&draft), Ok(()));
    }

    #[test]
    fn empty_draft_is_rejected() {
        assert_eq!(
            validate_draft(&draft_with(Vec::new())),
            Err(OrderValidationError::NoItems)
        );
    }

    #[test]
    fn totals_and_summaries_cover_only_the_requested_order() {
        let items = vec![
            OrderItem {
                id: "oi_13".to_string(),
                order_id: "ord_12".to_string(),
                fuel_type_id: "ft_1".to_string(),
                quantity_liters: 6000.0,
                price_per_liter_at_order: 68.0,
            },
            OrderItem {
                id: "oi_14".to_string(),
                order_id: "ord_12".to_string(),
                fuel_type_id: "ft_4".to_string(),
                quantity_liters: 2000.0,
                price_per_liter_at_order: 78.5,
            },
            OrderItem {
                id: "oi_15".to_string(),
                order_id: "ord_13".to_string(),
                fuel_type_id: "ft_2".to_string(),
                quantity_liters: 5000.0,
                price_per_liter_at_order: 71.25,
            },
        ];

        assert_eq!(order_total("ord_12", &items), 6000.0 * 68.0 + 2000.0 * 78.5);
        assert_eq!(
            items_summary("ord_12", &items, |id| id.to_uppercase()),
            "2 types, 8000 L total"
        );
        assert_eq!(
            items_summary("ord_13", &items, |_| "Gasoline 95 RON".to_string()),
            "Gasoline 95 RON: 5000 L"
        );
        assert_eq!(items_summary("ord_99", &items, |id| id.to_string()), "No items");
    }
}
