//! Domain logic for the FuelFlow console lives here.

pub mod app_state;
pub mod entities;
pub mod inventory;
pub mod navigation;
pub mod orders;
pub mod pricing;
pub mod session;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState, PlaceOrderError};
#[allow(unused_imports)]
pub use entities::{
    DepotTank, FuelPrice, FuelType, FuelTypeId, GasStation, InventoryChange, InventoryChangeType,
    Order, OrderItem, OrderStatus, OrderType, PaymentMethod, PaymentStatus, RegistrationStatus,
    Truck, TruckStatus, UserProfile, UserRole,
};
#[allow(unused_imports)]
pub use inventory::{change_history, current_level, low_stock_alerts, tank_levels, TankLevel};
#[allow(unused_imports)]
pub use navigation::{entries_for_role, role_allows, NavEntry, NavTarget, NAV_ENTRIES};
#[allow(unused_imports)]
pub use orders::{
    items_summary, order_total, quote_item, submit_draft, validate_draft, DraftItem, OrderDraft,
    OrderValidationError, DELIVERY_MIN_LITERS,
};
#[allow(unused_imports)]
pub use pricing::{price_history, resolve_effective_price, upcoming_prices};
#[allow(unused_imports)]
pub use session::Session;
