//! Domain core for the HerHealth assessment service.
//!
//! - [`scoring`] -- condition weight tables, scoring and risk classification.
//! - [`assessment`] -- recording scored submissions onto a user's history.
//! - [`period`] -- cycle prediction and cycle-length summaries.
//! - [`nutrition`] -- static food recommendations per condition.
//! - [`store`] -- the user store collaborator trait and an in-memory implementation.

pub mod assessment;
pub mod error;
pub mod nutrition;
pub mod period;
pub mod scoring;
pub mod store;
pub mod types;
