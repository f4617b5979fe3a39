pub mod chat;
pub mod home;
pub mod sales;

pub use chat::{chat_gate_page, chat_page, ChatVm};
pub use home::home_page;
pub use sales::{sales_page, SalesView, SalesVm};
