pub mod kpi_card;
pub mod orders_table;
pub mod price_table;
pub mod status_badge;
pub mod toast;
