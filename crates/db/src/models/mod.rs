pub mod assessment;
pub mod period;
pub mod user;
