pub mod dashboard;
pub mod seed;
