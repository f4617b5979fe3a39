pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{html_response, text_response};
pub use redirect::{redirect, redirect_with_cookie};
pub use xlsx::xlsx_response;
