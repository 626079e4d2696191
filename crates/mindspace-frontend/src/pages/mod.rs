//! Top-level pages.

pub mod admin;
pub mod portal;

pub use admin::AdminDashboard;
pub use portal::{Portal, PortalUi};
