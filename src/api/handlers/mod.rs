//! HTTP request handlers.

pub mod info;
pub mod redirect;
pub mod shorten;

pub use info::info_handler;
pub use redirect::redirect_handler;
pub use shorten::create_url_handler;
