//! In-memory application state held behind a Dioxus signal. All data is
//! synthetic; mutators append to the same logs the projections read.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::macros::datetime;
use time::OffsetDateTime;
use uuid::Uuid;

use super::entities::{
    DepotTank, FuelPrice, FuelType, FuelTypeId, GasStation, InventoryChange, InventoryChangeType,
    Order, OrderItem, OrderStatus, OrderType, PaymentMethod, PaymentStatus, RegistrationStatus,
    Truck, TruckStatus, UserProfile, UserRole,
};
use super::orders::{submit_draft, OrderDraft, OrderValidationError};
use super::session::Session;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaceOrderError {
    #[error("You must be signed in to place an order")]
    NotSignedIn,
    #[error("Your account has no assigned gas station")]
    NoStation,
    #[error(transparent)]
    Invalid(#[from] OrderValidationError),
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub session: Option<Session>,
    pub users: Vec<UserProfile>,
    pub stations: Vec<GasStation>,
    pub fuel_types: Vec<FuelType>,
    /// Append-only price log; the effective price is always a projection.
    pub fuel_prices: Vec<FuelPrice>,
    pub trucks: Vec<Truck>,
    pub orders: Vec<Order>,
    pub order_items: Vec<OrderItem>,
    /// Append-only depot stock log.
    pub inventory_changes: Vec<InventoryChange>,
    pub tanks: Vec<DepotTank>,
}

impl AppState {
    // ---- session -------------------------------------------------------

    pub fn login(&mut self, session: Session) {
        self.session = Some(session);
    }

    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn current_role(&self) -> Option<UserRole> {
        self.session.as_ref().map(|s| s.role)
    }

    // ---- lookups -------------------------------------------------------

    pub fn user(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_name(&self, id: &str) -> String {
        self.user(id)
            .map(|u| u.full_name.clone())
            .unwrap_or_else(|| "Unknown User".to_string())
    }

    pub fn station(&self, id: &str) -> Option<&GasStation> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn station_name(&self, id: &str) -> String {
        self.station(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "Unknown Station".to_string())
    }

    pub fn fuel_type(&self, id: &str) -> Option<&FuelType> {
        self.fuel_types.iter().find(|f| f.id == id)
    }

    pub fn fuel_type_name(&self, id: &str) -> String {
        self.fuel_type(id)
            .map(|f| f.name.clone())
            .unwrap_or_else(|| "Unknown Fuel".to_string())
    }

    pub fn pending_registrations(&self) -> Vec<&UserProfile> {
        self.users
            .iter()
            .filter(|u| u.registration_status == Some(RegistrationStatus::Pending))
            .collect()
    }

    /// Orders visible to the current session: head-office roles see
    /// everything, station roles only their own station. A station role
    /// with no assigned station sees nothing rather than falling back to
    /// the head-office view.
    pub fn visible_orders(&self) -> Vec<&Order> {
        let Some(session) = self.session.as_ref() else {
            return self.orders.iter().collect();
        };
        match session.role {
            UserRole::Gso | UserRole::GsoStaff => match &session.station_id {
                Some(station_id) => self
                    .orders
                    .iter()
                    .filter(|order| &order.gas_station_id == station_id)
                    .collect(),
                None => Vec::new(),
            },
            _ => self.orders.iter().collect(),
        }
    }

    /// Staff accounts assigned to a station, for the owner's team view.
    pub fn station_staff(&self, station_id: &str) -> Vec<&UserProfile> {
        self.users
            .iter()
            .filter(|u| {
                u.role == UserRole::GsoStaff
                    && u.assigned_station_id.as_deref() == Some(station_id)
            })
            .collect()
    }

    // ---- mutators (append-only where the model demands it) -------------

    pub fn record_fuel_price(
        &mut self,
        fuel_type_id: &str,
        delivery_price_per_liter: f64,
        pickup_price_per_liter: f64,
        effective_from: OffsetDateTime,
        set_by_user_id: &str,
        now: OffsetDateTime,
    ) {
        self.fuel_prices.push(FuelPrice {
            id: format!("fp_{}", Uuid::new_v4().simple()),
            fuel_type_id: fuel_type_id.to_string(),
            delivery_price_per_liter,
            pickup_price_per_liter,
            effective_from,
            set_by_user_id: set_by_user_id.to_string(),
            created_at: now,
        });
    }

    pub fn add_fuel_type(&mut self, name: &str, now: OffsetDateTime) -> FuelTypeId {
        let id = format!("ft_{}", Uuid::new_v4().simple());
        self.fuel_types.push(FuelType {
            id: id.clone(),
            name: name.to_string(),
            is_available: true,
            created_at: now,
            updated_at: now,
        });
        id
    }

    pub fn set_fuel_availability(&mut self, fuel_type_id: &str, available: bool, now: OffsetDateTime) {
        if let Some(fuel) = self.fuel_types.iter_mut().find(|f| f.id == fuel_type_id) {
            fuel.is_available = available;
            fuel.updated_at = now;
        }
    }

    pub fn add_user(
        &mut self,
        full_name: &str,
        email: &str,
        role: UserRole,
        assigned_station_id: Option<String>,
        now: OffsetDateTime,
    ) {
        self.users.push(UserProfile {
            id: format!("usr_{}", Uuid::new_v4().simple()),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role,
            is_active: true,
            registration_status: match role {
                UserRole::Gso => Some(RegistrationStatus::Pending),
                _ => None,
            },
            assigned_station_id,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn set_registration_status(
        &mut self,
        user_id: &str,
        status: RegistrationStatus,
        now: OffsetDateTime,
    ) {
        if let Some(user) = self.users.iter_mut().find(|u| u.id == user_id) {
            user.registration_status = Some(status);
            user.updated_at = now;
        }
    }

    pub fn add_truck(
        &mut self,
        plate_number: &str,
        driver: &str,
        capacity_liters: u32,
        now: OffsetDateTime,
    ) {
        self.trucks.push(Truck {
            id: format!("truck_{}", Uuid::new_v4().simple()),
            plate_number: plate_number.to_string(),
            driver: driver.to_string(),
            capacity_liters,
            status: TruckStatus::Available,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn set_truck_status(&mut self, truck_id: &str, status: TruckStatus, now: OffsetDateTime) {
        if let Some(truck) = self.trucks.iter_mut().find(|t| t.id == truck_id) {
            truck.status = status;
            truck.updated_at = now;
        }
    }

    /// Submits the draft for the signed-in station account. Returns the new
    /// order id.
    pub fn place_order(
        &mut self,
        draft: &OrderDraft,
        now: OffsetDateTime,
    ) -> Result<String, PlaceOrderError> {
        let session = self.session.as_ref().ok_or(PlaceOrderError::NotSignedIn)?;
        let station_id = session
            .station_id
            .clone()
            .ok_or(PlaceOrderError::NoStation)?;
        let (order, items) = submit_draft(draft, &station_id, &session.user_id, now)?;
        let order_id = order.id.clone();
        self.orders.push(order);
        self.order_items.extend(items);
        Ok(order_id)
    }

    pub fn confirm_order(&mut self, order_id: &str, by_user_id: &str, now: OffsetDateTime) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = OrderStatus::Confirmed;
            order.confirmed_by_user_id = Some(by_user_id.to_string());
            order.updated_at = now;
        }
    }

    pub fn complete_payment(&mut self, order_id: &str, now: OffsetDateTime) {
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.payment_status = PaymentStatus::Completed;
            order.updated_at = now;
        }
    }

    pub fn record_inventory_change(
        &mut self,
        fuel_type_id: &str,
        change_type: InventoryChangeType,
        quantity_liters: f64,
        reason: Option<String>,
        recorded_by_user_id: &str,
        now: OffsetDateTime,
    ) {
        self.inventory_changes.push(InventoryChange {
            id: format!("ic_{}", Uuid::new_v4().simple()),
            fuel_type_id: fuel_type_id.to_string(),
            change_type,
            quantity_liters,
            reason,
            recorded_by_user_id: recorded_by_user_id.to_string(),
            recorded_at: now,
        });
    }

    // ---- persistence ---------------------------------------------------

    pub fn apply_persisted(&mut self, persisted: PersistedState) {
        self.session = persisted.session;
    }

    pub fn to_persisted(&self) -> PersistedState {
        PersistedState {
            session: self.session.clone(),
        }
    }

    // ---- seed data -----------------------------------------------------

    /// The demo dataset every launch starts from.
    pub fn seeded() -> Self {
        AppState {
            session: None,
            users: seed_users(),
            stations: seed_stations(),
            fuel_types: seed_fuel_types(),
            fuel_prices: seed_fuel_prices(),
            trucks: seed_trucks(),
            orders: seed_orders(),
            order_items: seed_order_items(),
            inventory_changes: seed_inventory_changes(),
            tanks: seed_tanks(),
        }
    }
}

/// What survives a restart: the demo session only, mirroring the original
/// console's localStorage behaviour.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub session: Option<Session>,
}

fn seed_users() -> Vec<UserProfile> {
    fn user(
        id: &str,
        full_name: &str,
        email: &str,
        role: UserRole,
        registration_status: Option<RegistrationStatus>,
        assigned_station_id: Option<&str>,
    ) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            role,
            is_active: true,
            registration_status,
            assigned_station_id: assigned_station_id.map(str::to_string),
            created_at: datetime!(2024-12-01 00:00 UTC),
            updated_at: datetime!(2025-03-01 00:00 UTC),
        }
    }

    vec![
        user(
            "usr_1",
            "Alice Wonderland",
            "alice@fuelflow.example",
            UserRole::Admin,
            None,
            None,
        ),
        user(
            "usr_2",
            "Bob The Builder",
            "bob@fuelflow.example",
            UserRole::OfficeStaff,
            None,
            None,
        ),
        user(
            "usr_3",
            "Charlie Chaplin",
            "charlie@fuelflow.example",
            UserRole::DepotStaff,
            None,
            None,
        ),
        user(
            "usr_4",
            "Diana Prince",
            "diana@princefuels.example",
            UserRole::Gso,
            Some(RegistrationStatus::Approved),
            Some("gso_sta_1"),
        ),
        user(
            "usr_5",
            "Ethan Hunt",
            "ethan@princefuels.example",
            UserRole::GsoStaff,
            None,
            Some("gso_sta_1"),
        ),
        user(
            "usr_6",
            "Fiona Shrek",
            "fiona@shrekgas.example",
            UserRole::Gso,
            Some(RegistrationStatus::Pending),
            Some("gso_sta_2"),
        ),
    ]
}

fn seed_stations() -> Vec<GasStation> {
    fn station(id: &str, name: &str, owner_id: Option<&str>, address: &str) -> GasStation {
        GasStation {
            id: id.to_string(),
            owner_id: owner_id.map(str::to_string),
            name: name.to_string(),
            address: Some(address.to_string()),
            is_active: true,
            created_at: datetime!(2024-12-01 00:00 UTC),
        }
    }

    vec![
        station(
            "gso_sta_1",
            "Prince Fuels Station 1",
            Some("usr_4"),
            "14 Harbor Road",
        ),
        station("gso_sta_2", "Shrek Gas & Go", Some("usr_6"), "2 Swamp Lane"),
        station(
            "gso_sta_3",
            "Eastside Fuels (Rodriguez)",
            None,
            "88 East Avenue",
        ),
        station(
            "gso_sta_4",
            "North Star Gas (Chen)",
            None,
            "7 Polaris Street",
        ),
        station(
            "gso_sta_5",
            "Valley Petroleum (Nelson)",
            None,
            "31 Valley Drive",
        ),
    ]
}

fn seed_fuel_types() -> Vec<FuelType> {
    fn fuel(
        id: &str,
        name: &str,
        is_available: bool,
        created_at: OffsetDateTime,
        updated_at: OffsetDateTime,
    ) -> FuelType {
        FuelType {
            id: id.to_string(),
            name: name.to_string(),
            is_available,
            created_at,
            updated_at,
        }
    }

    vec![
        fuel(
            "ft_1",
            "Diesel",
            true,
            datetime!(2024-12-01 00:00 UTC),
            datetime!(2025-03-15 00:00 UTC),
        ),
        fuel(
            "ft_2",
            "Gasoline 95 RON",
            true,
            datetime!(2024-12-01 00:00 UTC),
            datetime!(2024-12-01 00:00 UTC),
        ),
        fuel(
            "ft_3",
            "Kerosene",
            false,
            datetime!(2024-12-05 00:00 UTC),
            datetime!(2025-02-10 00:00 UTC),
        ),
        fuel(
            "ft_4",
            "Premium Gasoline 97 RON",
            true,
            datetime!(2025-02-01 00:00 UTC),
            datetime!(2025-02-01 00:00 UTC),
        ),
    ]
}

fn seed_fuel_prices() -> Vec<FuelPrice> {
    fn price(
        id: &str,
        fuel_type_id: &str,
        delivery: f64,
        pickup: f64,
        effective_from: OffsetDateTime,
        set_by_user_id: &str,
        created_at: OffsetDateTime,
    ) -> FuelPrice {
        FuelPrice {
            id: id.to_string(),
            fuel_type_id: fuel_type_id.to_string(),
            delivery_price_per_liter: delivery,
            pickup_price_per_liter: pickup,
            effective_from,
            set_by_user_id: set_by_user_id.to_string(),
            created_at,
        }
    }

    vec![
        price(
            "fp_1",
            "ft_1",
            65.5,
            64.0,
            datetime!(2025-03-01 00:00 UTC),
            "usr_1",
            datetime!(2025-02-28 10:00 UTC),
        ),
        price(
            "fp_2",
            "ft_1",
            68.0,
            66.5,
            datetime!(2025-04-10 00:00 UTC),
            "usr_2",
            datetime!(2025-04-09 15:30 UTC),
        ),
        price(
            "fp_3",
            "ft_2",
            72.0,
            70.5,
            datetime!(2025-03-05 00:00 UTC),
            "usr_1",
            datetime!(2025-03-04 11:00 UTC),
        ),
        price(
            "fp_4",
            "ft_2",
            71.25,
            69.75,
            datetime!(2025-04-01 00:00 UTC),
            "usr_1",
            datetime!(2025-03-31 09:00 UTC),
        ),
        price(
            "fp_5",
            "ft_3",
            75.0,
            73.0,
            datetime!(2025-01-15 00:00 UTC),
            "usr_2",
            datetime!(2025-01-14 16:00 UTC),
        ),
        price(
            "fp_6",
            "ft_4",
            78.5,
            77.0,
            datetime!(2025-04-05 00:00 UTC),
            "usr_1",
            datetime!(2025-04-04 14:00 UTC),
        ),
        // Future-dated record; takes over on May 1st.
        price(
            "fp_7",
            "ft_1",
            70.0,
            68.5,
            datetime!(2025-05-01 00:00 UTC),
            "usr_2",
            datetime!(2025-04-14 17:00 UTC),
        ),
    ]
}

fn seed_trucks() -> Vec<Truck> {
    fn truck(
        id: &str,
        plate_number: &str,
        driver: &str,
        capacity_liters: u32,
        status: TruckStatus,
        updated_at: OffsetDateTime,
    ) -> Truck {
        Truck {
            id: id.to_string(),
            plate_number: plate_number.to_string(),
            driver: driver.to_string(),
            capacity_liters,
            status,
            created_at: datetime!(2025-01-01 00:00 UTC),
            updated_at,
        }
    }

    vec![
        truck(
            "truck_1",
            "ABC-123",
            "John Driver",
            8_000,
            TruckStatus::Available,
            datetime!(2025-04-13 12:00 UTC),
        ),
        truck(
            "truck_2",
            "XYZ-789",
            "Dave Trucker",
            10_000,
            TruckStatus::Available,
            datetime!(2025-04-14 09:00 UTC),
        ),
        truck(
            "truck_3",
            "DEF-456",
            "Mike Wheeler",
            12_000,
            TruckStatus::OutForDelivery,
            datetime!(2025-04-14 08:00 UTC),
        ),
        truck(
            "truck_4",
            "GHI-789",
            "Sarah Connor",
            8_000,
            TruckStatus::Unavailable,
            datetime!(2025-04-13 14:00 UTC),
        ),
        truck(
            "truck_5",
            "JKL-012",
            "Chris Roads",
            10_000,
            TruckStatus::Disabled,
            datetime!(2025-03-25 00:00 UTC),
        ),
    ]
}

fn seed_orders() -> Vec<Order> {
    struct Seed {
        id: &'static str,
        station: &'static str,
        placed_by: &'static str,
        order_type: OrderType,
        status: OrderStatus,
        payment_method: PaymentMethod,
        payment_status: PaymentStatus,
        confirmed_by: Option<&'static str>,
        created_at: OffsetDateTime,
        updated_at: OffsetDateTime,
    }

    let seeds = [
        Seed {
            id: "ord_9",
            station: "gso_sta_1",
            placed_by: "usr_4",
            order_type: OrderType::Delivery,
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            confirmed_by: None,
            created_at: datetime!(2025-04-14 06:10 UTC),
            updated_at: datetime!(2025-04-14 06:10 UTC),
        },
        Seed {
            id: "ord_2",
            station: "gso_sta_4",
            placed_by: "usr_5",
            order_type: OrderType::Pickup,
            status: OrderStatus::Confirmed,
            payment_method: PaymentMethod::Cheque,
            payment_status: PaymentStatus::Pending,
            confirmed_by: Some("usr_2"),
            created_at: datetime!(2025-04-13 15:30 UTC),
            updated_at: datetime!(2025-04-14 09:15 UTC),
        },
        Seed {
            id: "ord_12",
            station: "gso_sta_3",
            placed_by: "usr_4",
            order_type: OrderType::Delivery,
            status: OrderStatus::Confirmed,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            confirmed_by: Some("usr_2"),
            created_at: datetime!(2025-04-14 07:45 UTC),
            updated_at: datetime!(2025-04-14 09:30 UTC),
        },
        Seed {
            id: "ord_13",
            station: "gso_sta_5",
            placed_by: "usr_4",
            order_type: OrderType::Delivery,
            status: OrderStatus::Confirmed,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            confirmed_by: Some("usr_2"),
            created_at: datetime!(2025-04-13 16:20 UTC),
            updated_at: datetime!(2025-04-14 08:45 UTC),
        },
        Seed {
            id: "ord_10",
            station: "gso_sta_2",
            placed_by: "usr_6",
            order_type: OrderType::Delivery,
            status: OrderStatus::Delivered,
            payment_method: PaymentMethod::Cash,
            payment_status: PaymentStatus::Pending,
            confirmed_by: Some("usr_2"),
            created_at: datetime!(2025-04-11 10:00 UTC),
            updated_at: datetime!(2025-04-13 17:00 UTC),
        },
        Seed {
            id: "ord_11",
            station: "gso_sta_1",
            placed_by: "usr_5",
            order_type: OrderType::Pickup,
            status: OrderStatus::PickedUp,
            payment_method: PaymentMethod::Cheque,
            payment_status: PaymentStatus::Pending,
            confirmed_by: Some("usr_2"),
            created_at: datetime!(2025-04-10 09:00 UTC),
            updated_at: datetime!(2025-04-12 11:30 UTC),
        },
    ];

    seeds
        .into_iter()
        .map(|seed| Order {
            id: seed.id.to_string(),
            gas_station_id: seed.station.to_string(),
            placed_by_user_id: seed.placed_by.to_string(),
            order_type: seed.order_type,
            status: seed.status,
            payment_method: seed.payment_method,
            payment_details: match seed.payment_method {
                PaymentMethod::Cheque => Some("CHQ-1188".to_string()),
                PaymentMethod::Cash => None,
            },
            payment_status: seed.payment_status,
            confirmed_by_user_id: seed.confirmed_by.map(str::to_string),
            created_at: seed.created_at,
            updated_at: seed.updated_at,
        })
        .collect()
}

fn seed_order_items() -> Vec<OrderItem> {
    fn item(
        id: &str,
        order_id: &str,
        fuel_type_id: &str,
        quantity_liters: f64,
        price_per_liter: f64,
    ) -> OrderItem {
        OrderItem {
            id: id.to_string(),
            order_id: order_id.to_string(),
            fuel_type_id: fuel_type_id.to_string(),
            quantity_liters,
            price_per_liter_at_order: price_per_liter,
        }
    }

    vec![
        item("oi_2", "ord_2", "ft_2", 3_000.0, 69.75),
        item("oi_9", "ord_9", "ft_1", 5_000.0, 68.0),
        item("oi_10", "ord_10", "ft_2", 4_000.0, 71.25),
        item("oi_11", "ord_11", "ft_4", 1_500.0, 77.0),
        item("oi_13", "ord_12", "ft_1", 6_000.0, 68.0),
        item("oi_14", "ord_12", "ft_4", 2_000.0, 78.5),
        item("oi_15", "ord_13", "ft_2", 5_000.0, 71.25),
    ]
}

fn seed_inventory_changes() -> Vec<InventoryChange> {
    fn change(
        id: &str,
        fuel_type_id: &str,
        change_type: InventoryChangeType,
        quantity_liters: f64,
        reason: Option<&str>,
        recorded_at: OffsetDateTime,
    ) -> InventoryChange {
        InventoryChange {
            id: id.to_string(),
            fuel_type_id: fuel_type_id.to_string(),
            change_type,
            quantity_liters,
            reason: reason.map(str::to_string),
            recorded_by_user_id: "usr_3".to_string(),
            recorded_at,
        }
    }

    vec![
        change(
            "ic_1",
            "ft_1",
            InventoryChangeType::Replenishment,
            45_000.0,
            Some("Tanker delivery from refinery"),
            datetime!(2025-03-20 07:00 UTC),
        ),
        change(
            "ic_2",
            "ft_1",
            InventoryChangeType::SaleDelivery,
            24_000.0,
            None,
            datetime!(2025-04-02 10:00 UTC),
        ),
        change(
            "ic_3",
            "ft_1",
            InventoryChangeType::SalePickup,
            6_000.0,
            None,
            datetime!(2025-04-08 14:00 UTC),
        ),
        change(
            "ic_4",
            "ft_2",
            InventoryChangeType::Replenishment,
            50_000.0,
            Some("Tanker delivery from refinery"),
            datetime!(2025-03-28 07:30 UTC),
        ),
        change(
            "ic_5",
            "ft_2",
            InventoryChangeType::SaleDelivery,
            5_000.0,
            None,
            datetime!(2025-04-10 09:00 UTC),
        ),
        change(
            "ic_6",
            "ft_3",
            InventoryChangeType::Replenishment,
            8_000.0,
            None,
            datetime!(2025-01-20 08:00 UTC),
        ),
        change(
            "ic_7",
            "ft_3",
            InventoryChangeType::AdjustmentNegative,
            3_000.0,
            Some("Stock audit correction"),
            datetime!(2025-02-11 12:00 UTC),
        ),
        change(
            "ic_8",
            "ft_4",
            InventoryChangeType::Replenishment,
            6_000.0,
            None,
            datetime!(2025-04-03 07:00 UTC),
        ),
        change(
            "ic_9",
            "ft_4",
            InventoryChangeType::SalePickup,
            3_000.0,
            None,
            datetime!(2025-04-12 15:00 UTC),
        ),
    ]
}

fn seed_tanks() -> Vec<DepotTank> {
    fn tank(fuel_type_id: &str, capacity_liters: f64) -> DepotTank {
        DepotTank {
            fuel_type_id: fuel_type_id.to_string(),
            capacity_liters,
        }
    }

    vec![
        tank("ft_1", 100_000.0),
        tank("ft_2", 80_000.0),
        tank("ft_3", 30_000.0),
        tank("ft_4", 20_000.0),
    ]
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::inventory::low_stock_alerts;
    use crate::domain::orders::DraftItem;
    use crate::domain::pricing::resolve_effective_price;

    fn signed_in_gso() -> AppState {
        let mut state = AppState::seeded();
        let diana = state.user("usr_4").cloned().expect("seeded user");
        state.login(Session::for_user(&diana));
        state
    }

    #[test]
    fn seeded_prices_resolve_like_the_demo_dataset() {
        let state = AppState::seeded();
        let reference = datetime!(2025-04-14 12:00 UTC);

        let diesel = resolve_effective_price("ft_1", &state.fuel_prices, reference).unwrap();
        assert_eq!(diesel.id, "fp_2");

        let gasoline = resolve_effective_price("ft_2", &state.fuel_prices, reference).unwrap();
        assert_eq!(gasoline.delivery_price_per_liter, 71.25);
    }

    #[test]
    fn seeded_depot_raises_the_expected_low_stock_alerts() {
        let state = AppState::seeded();
        let alerts = low_stock_alerts(&state.tanks, &state.inventory_changes);
        let ids: Vec<&str> = alerts.iter().map(|a| a.fuel_type_id.as_str()).collect();
        // Diesel at 15k/100k, premium at 3k/20k.
        assert_eq!(ids, ["ft_1", "ft_4"]);
    }

    #[test]
    fn station_accounts_only_see_their_own_orders() {
        let state = signed_in_gso();
        let visible = state.visible_orders();
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|o| o.gas_station_id == "gso_sta_1"));

        let mut office = AppState::seeded();
        let bob = office.user("usr_2").cloned().unwrap();
        office.login(Session::for_user(&bob));
        assert_eq!(office.visible_orders().len(), office.orders.len());
    }

    #[test]
    fn station_roles_without_a_station_see_no_orders() {
        let mut state = AppState::seeded();
        // Created through the admin form with "No station" and then approved.
        state.add_user(
            "Grace Landless",
            "grace@landless.example",
            UserRole::Gso,
            None,
            datetime!(2025-04-15 09:00 UTC),
        );
        let grace = state
            .users
            .iter()
            .find(|u| u.email == "grace@landless.example")
            .cloned()
            .unwrap();
        state.set_registration_status(
            &grace.id,
            RegistrationStatus::Approved,
            datetime!(2025-04-15 10:00 UTC),
        );
        state.login(Session::for_user(&grace));
        assert!(state.visible_orders().is_empty());
    }

    #[test]
    fn station_staff_lists_only_that_stations_staff_accounts() {
        let state = AppState::seeded();
        let team: Vec<&str> = state
            .station_staff("gso_sta_1")
            .iter()
            .map(|u| u.id.as_str())
            .collect();
        // Ethan is staff there; Diana owns it and is not staff.
        assert_eq!(team, ["usr_5"]);
        assert!(state.station_staff("gso_sta_2").is_empty());
    }

    #[test]
    fn placing_an_order_appends_order_and_lines() {
        let mut state = signed_in_gso();
        let draft = OrderDraft {
            order_type: Some(OrderType::Delivery),
            payment_method: Some(PaymentMethod::Cash),
            payment_details: String::new(),
            items: vec![DraftItem {
                fuel_type_id: "ft_1".to_string(),
                fuel_type_name: "Diesel".to_string(),
                quantity_liters: 2_000.0,
                price_per_liter: 68.0,
            }],
        };

        let orders_before = state.orders.len();
        let order_id = state
            .place_order(&draft, datetime!(2025-04-14 12:00 UTC))
            .unwrap();
        assert_eq!(state.orders.len(), orders_before + 1);

        let order = state.orders.iter().find(|o| o.id == order_id).unwrap();
        assert_eq!(order.gas_station_id, "gso_sta_1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert!(state.order_items.iter().any(|i| i.order_id == order_id));
    }

    #[test]
    fn placing_an_order_requires_a_station_account() {
        let mut state = AppState::seeded();
        let draft = OrderDraft::default();
        assert_eq!(
            state.place_order(&draft, datetime!(2025-04-14 12:00 UTC)),
            Err(PlaceOrderError::NotSignedIn)
        );

        let bob = state.user("usr_2").cloned().unwrap();
        state.login(Session::for_user(&bob));
        assert_eq!(
            state.place_order(&draft, datetime!(2025-04-14 12:00 UTC)),
            Err(PlaceOrderError::NoStation)
        );
    }

    #[test]
    fn recording_a_price_never_rewrites_history() {
        let mut state = AppState::seeded();
        let history_before = state.fuel_prices.clone();
        state.record_fuel_price(
            "ft_1",
            71.0,
            69.5,
            datetime!(2025-06-01 00:00 UTC),
            "usr_2",
            datetime!(2025-04-20 10:00 UTC),
        );
        assert_eq!(state.fuel_prices.len(), history_before.len() + 1);
        assert_eq!(&state.fuel_prices[..history_before.len()], &history_before[..]);
    }

    #[test]
    fn registration_review_updates_the_pending_queue() {
        let mut state = AppState::seeded();
        assert_eq!(state.pending_registrations().len(), 1);
        state.set_registration_status(
            "usr_6",
            RegistrationStatus::Approved,
            datetime!(2025-04-15 09:00 UTC),
        );
        assert!(state.pending_registrations().is_empty());
    }

    #[test]
    fn session_round_trips_through_persisted_state() {
        let state = signed_in_gso();
        let json = serde_json::to_string(&state.to_persisted()).unwrap();
        let restored: PersistedState = serde_json::from_str(&json).unwrap();

        let mut fresh = AppState::seeded();
        fresh.apply_persisted(restored);
        assert_eq!(fresh.session, state.session);
    }
}
