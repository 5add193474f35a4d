pub mod customer;
pub mod filter;
pub mod money;
pub mod product;
pub mod report;
pub mod sale;
pub mod seed;
