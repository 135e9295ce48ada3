//! # rolodex-core
//!
//! Core types, traits, and abstractions for the rolodex contacts directory.
//!
//! This crate provides the contact model, the request and patch types the
//! repository accepts, input validation primitives, and the repository trait
//! that storage backends implement.

pub mod birthday;
pub mod defaults;
pub mod email;
pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use birthday::BirthdayWindow;
pub use email::{EmailAddress, EmailError};
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
