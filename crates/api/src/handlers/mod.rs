//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the API.
//! Handlers delegate to `herhealth_core` through the injected store and map
//! errors via [`AppError`](crate::error::AppError).

pub mod assessment;
pub mod auth;
pub mod nutrition;
pub mod period;
