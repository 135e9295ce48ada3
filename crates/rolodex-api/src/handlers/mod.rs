//! HTTP handlers, grouped by resource.

pub mod contacts;
pub mod health;
