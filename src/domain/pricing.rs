//! Effective price resolution over the append-only fuel price log.

use std::cmp::Ordering;

use time::OffsetDateTime;

use super::entities::FuelPrice;

/// Returns the price record in force for `fuel_type_id` at `reference`.
///
/// A record is in force once its `effective_from` is past or present; among
/// those, the latest `effective_from` wins. Records for other fuel types are
/// ignored, and `None` means no price has ever taken effect — a normal,
/// displayable state, not an error.
///
/// Ties on `effective_from` break on the latest `created_at`, so resolution
/// never depends on input order. The caller supplies `reference` (usually
/// now); this function never reads the clock.
pub fn resolve_effective_price<'a>(
    fuel_type_id: &str,
    prices: &'a [FuelPrice],
    reference: OffsetDateTime,
) -> Option<&'a FuelPrice> {
    prices
        .iter()
        .filter(|p| p.fuel_type_id == fuel_type_id && p.effective_from <= reference)
        .max_by(|a, b| effective_order(a, b))
}

/// Full price history for a fuel type, newest effective date first.
/// Future-dated records are included; the same tie-break as the resolver
/// keeps the ordering deterministic.
pub fn price_history<'a>(fuel_type_id: &str, prices: &'a [FuelPrice]) -> Vec<&'a FuelPrice> {
    let mut history: Vec<&FuelPrice> = prices
        .iter()
        .filter(|p| p.fuel_type_id == fuel_type_id)
        .collect();
    history.sort_by(|a, b| effective_order(b, a));
    history
}

/// Price records that have not yet taken effect at `reference`, soonest first.
pub fn upcoming_prices<'a>(
    fuel_type_id: &str,
    prices: &'a [FuelPrice],
    reference: OffsetDateTime,
) -> Vec<&'a FuelPrice> {
    let mut upcoming: Vec<&FuelPrice> = prices
        .iter()
        .filter(|p| p.fuel_type_id == fuel_type_id && p.effective_from > reference)
        .collect();
    upcoming.sort_by(|a, b| effective_order(a, b));
    upcoming
}

fn effective_order(a: &FuelPrice, b: &FuelPrice) -> Ordering {
    a.effective_from
        .cmp(&b.effective_from)
        .then(a.created_at.cmp(&b.created_at))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn price(
        id: &str,
        fuel_type_id: &str,
        delivery: f64,
        effective_from: OffsetDateTime,
        created_at: OffsetDateTime,
    ) -> FuelPrice {
        FuelPrice {
            id: id.to_string(),
            fuel_type_id: fuel_type_id.to_string(),
            delivery_price_per_liter: delivery,
            pickup_price_per_liter: delivery - 1.5,
            effective_from,
            set_by_user_id: "usr_1".to_string(),
            created_at,
        }
    }

    fn diesel_history() -> Vec<FuelPrice> {
        vec![
            price(
                "fp_1",
                "ft_1",
                65.5,
                datetime!(2025-03-01 00:00 UTC),
                datetime!(2025-02-28 10:00 UTC),
            ),
            price(
                "fp_2",
                "ft_1",
                68.0,
                datetime!(2025-04-10 00:00 UTC),
                datetime!(2025-04-09 15:30 UTC),
            ),
            price(
                "fp_7",
                "ft_1",
                70.0,
                datetime!(2025-05-01 00:00 UTC),
                datetime!(2025-04-14 17:00 UTC),
            ),
        ]
    }

    #[test]
    fn picks_latest_record_in_force() {
        let prices = diesel_history();
        let current =
            resolve_effective_price("ft_1", &prices, datetime!(2025-04-14 12:00 UTC)).unwrap();
        assert_eq!(current.id, "fp_2");
        assert_eq!(current.delivery_price_per_liter, 68.0);
    }

    #[test]
    fn none_before_first_effective_date() {
        let prices = diesel_history();
        assert!(resolve_effective_price("ft_1", &prices, datetime!(2025-02-01 00:00 UTC)).is_none());
    }

    #[test]
    fn future_record_takes_over_once_reached() {
        let prices = diesel_history();
        let current =
            resolve_effective_price("ft_1", &prices, datetime!(2025-06-01 00:00 UTC)).unwrap();
        assert_eq!(current.id, "fp_7");
        assert_eq!(current.delivery_price_per_liter, 70.0);
    }

    #[test]
    fn empty_history_resolves_to_none() {
        assert!(resolve_effective_price("ft_1", &[], datetime!(2025-04-14 12:00 UTC)).is_none());
    }

    #[test]
    fn record_effective_exactly_at_reference_counts() {
        let prices = diesel_history();
        let current =
            resolve_effective_price("ft_1", &prices, datetime!(2025-04-10 00:00 UTC)).unwrap();
        assert_eq!(current.id, "fp_2");
    }

    #[test]
    fn unrelated_fuel_types_never_change_the_result() {
        let mut prices = diesel_history();
        let baseline = resolve_effective_price("ft_1", &prices, datetime!(2025-04-14 12:00 UTC))
            .unwrap()
            .id
            .clone();
        prices.push(price(
            "fp_3",
            "ft_2",
            72.0,
            datetime!(2025-04-12 00:00 UTC),
            datetime!(2025-04-11 11:00 UTC),
        ));
        let resolved =
            resolve_effective_price("ft_1", &prices, datetime!(2025-04-14 12:00 UTC)).unwrap();
        assert_eq!(resolved.id, baseline);
    }

    #[test]
    fn later_reference_never_resolves_to_an_earlier_effective_date() {
        let prices = diesel_history();
        let earlier =
            resolve_effective_price("ft_1", &prices, datetime!(2025-03-15 00:00 UTC)).unwrap();
        let later =
            resolve_effective_price("ft_1", &prices, datetime!(2025-04-20 00:00 UTC)).unwrap();
        assert!(later.effective_from >= earlier.effective_from);
    }

    #[test]
    fn resolution_is_pure() {
        let prices = diesel_history();
        let reference = datetime!(2025-04-14 12:00 UTC);
        let first = resolve_effective_price("ft_1", &prices, reference).unwrap();
        let second = resolve_effective_price("ft_1", &prices, reference).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn equal_effective_dates_break_on_latest_created_at() {
        let effective = datetime!(2025-04-01 00:00 UTC);
        let prices = vec![
            price(
                "fp_a",
                "ft_1",
                66.0,
                effective,
                datetime!(2025-03-30 09:00 UTC),
            ),
            price(
                "fp_b",
                "ft_1",
                67.0,
                effective,
                datetime!(2025-03-31 09:00 UTC),
            ),
        ];
        let resolved =
            resolve_effective_price("ft_1", &prices, datetime!(2025-04-02 00:00 UTC)).unwrap();
        assert_eq!(resolved.id, "fp_b");

        // Input order must not matter.
        let reversed: Vec<FuelPrice> = prices.into_iter().rev().collect();
        let resolved =
            resolve_effective_price("ft_1", &reversed, datetime!(2025-04-02 00:00 UTC)).unwrap();
        assert_eq!(resolved.id, "fp_b");
    }

    #[test]
    fn history_is_newest_first_and_includes_future_records() {
        let prices = diesel_history();
        let history = price_history("ft_1", &prices);
        let ids: Vec<&str> = history.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["fp_7", "fp_2", "fp_1"]);
    }

    #[test]
    fn upcoming_lists_only_future_records_soonest_first() {
        let prices = diesel_history();
        let upcoming = upcoming_prices("ft_1", &prices, datetime!(2025-04-14 12:00 UTC));
        let ids: Vec<&str> = upcoming.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["fp_7"]);
        assert!(upcoming_prices("ft_1", &prices, datetime!(2025-06-01 00:00 UTC)).is_empty());
    }
}
