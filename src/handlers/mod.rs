pub mod chat;
pub mod sales;
