//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod accounts;
pub mod health;
pub mod me;
pub mod redirect;
pub mod shorten;

pub use accounts::{login_handler, register_handler};
pub use health::health_handler;
pub use me::me_handler;
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
