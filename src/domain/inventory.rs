//! Depot inventory as a read-time projection over the append-only change
//! log. Nothing stores a "current level"; it is always recomputed.

use super::entities::{DepotTank, FuelTypeId, InventoryChange};

/// Level at or below this fraction of tank capacity raises an alert.
pub const LOW_STOCK_FRACTION: f64 = 0.2;

/// Current stock for one fuel type: signed sum over its change log.
pub fn current_level(fuel_type_id: &str, changes: &[InventoryChange]) -> f64 {
    changes
        .iter()
        .filter(|change| change.fuel_type_id == fuel_type_id)
        .map(|change| change.change_type.sign() * change.quantity_liters)
        .sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TankLevel {
    pub fuel_type_id: FuelTypeId,
    pub level_liters: f64,
    pub capacity_liters: f64,
}

impl TankLevel {
    pub fn fill_fraction(&self) -> f64 {
        if self.capacity_liters <= 0.0 {
            0.0
        } else {
            (self.level_liters / self.capacity_liters).clamp(0.0, 1.0)
        }
    }

    pub fn is_low(&self) -> bool {
        self.level_liters <= self.capacity_liters * LOW_STOCK_FRACTION
    }
}

/// Projected level for every tank at the depot, in tank order.
pub fn tank_levels(tanks: &[DepotTank], changes: &[InventoryChange]) -> Vec<TankLevel> {
    tanks
        .iter()
        .map(|tank| TankLevel {
            fuel_type_id: tank.fuel_type_id.clone(),
            level_liters: current_level(&tank.fuel_type_id, changes),
            capacity_liters: tank.capacity_liters,
        })
        .collect()
}

/// Tanks currently at or below the low-stock threshold.
pub fn low_stock_alerts(tanks: &[DepotTank], changes: &[InventoryChange]) -> Vec<TankLevel> {
    tank_levels(tanks, changes)
        .into_iter()
        .filter(TankLevel::is_low)
        .collect()
}

/// Change log for one fuel type, newest first.
pub fn change_history<'a>(
    fuel_type_id: &str,
    changes: &'a [InventoryChange],
) -> Vec<&'a InventoryChange> {
    let mut history: Vec<&InventoryChange> = changes
        .iter()
        .filter(|change| change.fuel_type_id == fuel_type_id)
        .collect();
    history.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    history
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::entities::InventoryChangeType;

    fn change(
        id: &str,
        fuel_type_id: &str,
        change_type: InventoryChangeType,
        quantity: f64,
    ) -> InventoryChange {
        InventoryChange {
            id: id.to_string(),
            fuel_type_id: fuel_type_id.to_string(),
            change_type,
            quantity_liters: quantity,
            reason: None,
            recorded_by_user_id: "usr_3".to_string(),
            recorded_at: datetime!(2025-04-10 08:00 UTC),
        }
    }

    fn diesel_log() -> Vec<InventoryChange> {
        vec![
            change("ic_1", "ft_1", InventoryChangeType::Replenishment, 40_000.0),
            change("ic_2", "ft_1", InventoryChangeType::SaleDelivery, 20_000.0),
            change("ic_3", "ft_1", InventoryChangeType::SalePickup, 6_000.0),
            change(
                "ic_4",
                "ft_1",
                InventoryChangeType::AdjustmentPositive,
                1_000.0,
            ),
            change("ic_5", "ft_2", InventoryChangeType::Replenishment, 9_000.0),
        ]
    }

    #[test]
    fn level_is_the_signed_sum_of_the_log() {
        let changes = diesel_log();
        assert_eq!(current_level("ft_1", &changes), 15_000.0);
        assert_eq!(current_level("ft_2", &changes), 9_000.0);
        assert_eq!(current_level("ft_3", &changes), 0.0);
    }

    #[test]
    fn alerts_fire_at_or_below_twenty_percent() {
        let tanks = vec![
            DepotTank {
                fuel_type_id: "ft_1".to_string(),
                capacity_liters: 100_000.0,
            },
            DepotTank {
                fuel_type_id: "ft_2".to_string(),
                capacity_liters: 20_000.0,
            },
        ];
        let changes = diesel_log();

        // Diesel sits at 15k of 100k: low. ft_2 sits at 9k of 20k: fine.
        let alerts = low_stock_alerts(&tanks, &changes);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].fuel_type_id, "ft_1");
        assert!(alerts[0].is_low());
        assert_eq!(alerts[0].fill_fraction(), 0.15);
    }

    #[test]
    fn empty_log_projects_to_zero_and_alerts() {
        let tanks = vec![DepotTank {
            fuel_type_id: "ft_4".to_string(),
            capacity_liters: 20_000.0,
        }];
        let alerts = low_stock_alerts(&tanks, &[]);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].level_liters, 0.0);
    }

    #[test]
    fn history_filters_and_sorts_newest_first() {
        let mut changes = diesel_log();
        changes[0].recorded_at = datetime!(2025-04-01 08:00 UTC);
        changes[1].recorded_at = datetime!(2025-04-12 08:00 UTC);

        let history = change_history("ft_1", &changes);
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].id, "ic_2");
        assert_eq!(history.last().map(|c| c.id.as_str()), Some("ic_1"));
    }
}
