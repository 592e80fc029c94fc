pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::{html_response, html_response_clearing_flash};
pub use redirect::{hx_redirect_with_flash, redirect_with_flash};
pub use xlsx::xlsx_response;
