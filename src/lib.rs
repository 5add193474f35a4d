use diesel_migrations::{EmbeddedMigrations, embed_migrations};

pub mod domain;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Schema migrations bundled into the binaries.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Database file used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sales_data.db";
