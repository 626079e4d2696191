//! # MindSpace Frontend
//!
//! Leptos-based web client for the MindSpace mental-wellness portal.
//!
//! ## Screens
//!
//! - **Public Portal**: mood check-ins, self-assessments, resources, community
//! - **Crisis Chatbot**: floating support chat with suggested activity widgets
//! - **Admin Dashboard**: mock analytics, crisis review, content management
//!
//! All business logic lives behind the HTTP backend; this crate is
//! presentation only.

pub mod app;
pub mod components;
pub mod config;
pub mod network;
pub mod pages;
pub mod state;
pub mod storage;

pub use app::App;

use wasm_bindgen::prelude::*;

/// Initialize the application
#[wasm_bindgen(start)]
pub fn main() {
    // Set panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize tracing
    tracing_wasm::set_as_global_default();

    tracing::info!("MindSpace frontend initialized");

    leptos::mount_to_body(App);
}
