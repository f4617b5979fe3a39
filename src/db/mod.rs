pub mod chat;
pub mod connection;
pub mod sales;

pub use connection::Database;
