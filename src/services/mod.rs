pub use pushkind_common::services::errors::{ServiceError, ServiceResult};

pub mod aggregation;
pub mod dashboard;
pub mod filters;
pub mod seed;
pub mod snapshot;
