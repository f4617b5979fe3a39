pub mod chat;
pub mod customer;
pub mod record;
pub mod search;
pub mod window;
