//! Repository layer: one zero-sized struct per table with associated async
//! functions taking the pool.

mod assessment_repo;
mod period_repo;
mod user_repo;

pub use assessment_repo::AssessmentRepo;
pub use period_repo::PeriodEntryRepo;
pub use user_repo::UserRepo;
