use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// System-wide user roles. Every screen and navigation entry is gated on
/// one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    OfficeStaff,
    DepotStaff,
    Gso,
    GsoStaff,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::Admin,
        UserRole::OfficeStaff,
        UserRole::DepotStaff,
        UserRole::Gso,
        UserRole::GsoStaff,
    ];

    /// Display name lookup, defined once instead of ad-hoc switches per screen.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::OfficeStaff => "Office Staff",
            UserRole::DepotStaff => "Depot Staff",
            UserRole::Gso => "GSO Manager",
            UserRole::GsoStaff => "GSO Staff",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Approved,
    Rejected,
}

impl RegistrationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "Pending",
            RegistrationStatus::Approved => "Approved",
            RegistrationStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruckStatus {
    Available,
    Unavailable,
    Disabled,
    OutForDelivery,
}

impl TruckStatus {
    pub const ALL: [TruckStatus; 4] = [
        TruckStatus::Available,
        TruckStatus::Unavailable,
        TruckStatus::Disabled,
        TruckStatus::OutForDelivery,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TruckStatus::Available => "Available",
            TruckStatus::Unavailable => "Unavailable",
            TruckStatus::Disabled => "Disabled",
            TruckStatus::OutForDelivery => "Out for Delivery",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Delivery,
    Pickup,
}

impl OrderType {
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::Delivery => "Delivery",
            OrderType::Pickup => "Pickup",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Scheduled,
    OutForDelivery,
    Delivered,
    ReadyForPickup,
    PickedUp,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Scheduled => "Scheduled",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::ReadyForPickup => "Ready for Pickup",
            OrderStatus::PickedUp => "Picked Up",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Terminal states need no further handling by office or depot staff.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::PickedUp | OrderStatus::Cancelled
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Cheque,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Cheque => "Cheque",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Completed,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
        }
    }
}

/// Why a depot inventory level moved. The signed direction is derived from
/// the variant, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryChangeType {
    Replenishment,
    SaleDelivery,
    SalePickup,
    AdjustmentPositive,
    AdjustmentNegative,
}

impl InventoryChangeType {
    pub fn label(&self) -> &'static str {
        match self {
            InventoryChangeType::Replenishment => "Replenishment",
            InventoryChangeType::SaleDelivery => "Sale (Delivery)",
            InventoryChangeType::SalePickup => "Sale (Pickup)",
            InventoryChangeType::AdjustmentPositive => "Adjustment (+)",
            InventoryChangeType::AdjustmentNegative => "Adjustment (-)",
        }
    }

    /// +1 for stock coming in, -1 for stock going out.
    pub fn sign(&self) -> f64 {
        match self {
            InventoryChangeType::Replenishment | InventoryChangeType::AdjustmentPositive => 1.0,
            InventoryChangeType::SaleDelivery
            | InventoryChangeType::SalePickup
            | InventoryChangeType::AdjustmentNegative => -1.0,
        }
    }
}

/// Identifier for fuel products (e.g. "ft_1").
pub type FuelTypeId = String;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub registration_status: Option<RegistrationStatus>,
    pub assigned_station_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GasStation {
    pub id: String,
    pub owner_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A product that can be priced and ordered (e.g. Diesel).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    pub id: FuelTypeId,
    pub name: String,
    pub is_available: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// An immutable, time-stamped price assignment for a fuel type.
///
/// Prices form an append-only log per fuel type; the record in force at any
/// instant is a read-time projection (see `domain::pricing`), never a stored
/// status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuelPrice {
    pub id: String,
    pub fuel_type_id: FuelTypeId,
    pub delivery_price_per_liter: f64,
    pub pickup_price_per_liter: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub effective_from: OffsetDateTime,
    pub set_by_user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl FuelPrice {
    /// Per-liter rate for the given fulfilment channel.
    pub fn price_for(&self, order_type: OrderType) -> f64 {
        match order_type {
            OrderType::Delivery => self.delivery_price_per_liter,
            OrderType::Pickup => self.pickup_price_per_liter,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    pub id: String,
    pub plate_number: String,
    pub driver: String,
    pub capacity_liters: u32,
    pub status: TruckStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub gas_station_id: String,
    pub placed_by_user_id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_details: Option<String>,
    pub payment_status: PaymentStatus,
    pub confirmed_by_user_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// One fuel line on an order. `price_per_liter_at_order` is the rate the
/// resolver returned when the line was created; later price records never
/// change it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub fuel_type_id: FuelTypeId,
    pub quantity_liters: f64,
    pub price_per_liter_at_order: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.quantity_liters * self.price_per_liter_at_order
    }
}

/// Append-only depot stock movement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryChange {
    pub id: String,
    pub fuel_type_id: FuelTypeId,
    pub change_type: InventoryChangeType,
    pub quantity_liters: f64,
    pub reason: Option<String>,
    pub recorded_by_user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// Physical tank capacity at the depot, used for low-stock alerts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepotTank {
    pub fuel_type_id: FuelTypeId,
    pub capacity_liters: f64,
}
