pub mod customer_card;
pub mod error;
pub mod history_table;

pub use customer_card::customer_card;
pub use error::{error_banner, html_error_response};
pub use history_table::{history_table, HistoryRow};
