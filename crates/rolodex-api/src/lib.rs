//! # rolodex-api
//!
//! HTTP surface of the rolodex contacts directory: an axum router over the
//! `rolodex-db` repositories, with request validation, error mapping, and an
//! OpenAPI document.

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;
