pub mod dashboard;
pub mod fuel_settings;
pub mod inventory;
pub mod login;
pub mod orders;
pub mod place_order;
pub mod trucks;
pub mod users;

pub use dashboard::DashboardPage;
pub use fuel_settings::FuelSettingsPage;
pub use inventory::InventoryPage;
pub use login::LoginPage;
pub use orders::OrdersPage;
pub use place_order::PlaceOrderPage;
pub use trucks::TrucksPage;
pub use users::UsersPage;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// "Apr 14, 2025" style label for list views.
pub fn format_date(value: OffsetDateTime) -> String {
    let fmt = format_description!("[month repr:short] [day], [year]");
    value
        .format(fmt)
        .unwrap_or_else(|_| value.date().to_string())
}

/// "Apr 14, 2025 09:15" style label.
pub fn format_datetime(value: OffsetDateTime) -> String {
    let fmt = format_description!("[month repr:short] [day], [year] [hour]:[minute]");
    value
        .format(fmt)
        .unwrap_or_else(|_| value.date().to_string())
}

/// Parses the date inputs the forms use ("2025-05-01"), anchored to midnight
/// UTC like the rest of the timeline.
pub fn parse_date_input(value: &str) -> Option<OffsetDateTime> {
    let fmt = format_description!("[year]-[month]-[day]");
    Date::parse(value.trim(), fmt)
        .ok()
        .map(|date| date.midnight().assume_utc())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn date_inputs_parse_to_midnight_utc() {
        assert_eq!(
            parse_date_input("2025-05-01"),
            Some(datetime!(2025-05-01 00:00 UTC))
        );
        assert_eq!(parse_date_input(" 2025-05-01 "), parse_date_input("2025-05-01"));
        assert!(parse_date_input("05/01/2025").is_none());
        assert!(parse_date_input("").is_none());
    }

    #[test]
    fn labels_render_month_names() {
        assert_eq!(format_date(datetime!(2025-04-14 09:15 UTC)), "Apr 14, 2025");
        assert_eq!(
            format_datetime(datetime!(2025-04-14 09:15 UTC)),
            "Apr 14, 2025 09:15"
        );
    }
}
