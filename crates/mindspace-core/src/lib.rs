//! # MindSpace Core
//!
//! Shared domain types and client-side flow logic for the MindSpace
//! mental-wellness portal. All scoring, crisis detection, and chat inference
//! happen on the backend; this crate only models what the UI holds and
//! validates locally.

pub mod assessment;
pub mod chat;
pub mod content;
pub mod error;
pub mod types;

pub use assessment::*;
pub use chat::*;
pub use content::*;
pub use error::{Error, Result};
pub use types::*;
