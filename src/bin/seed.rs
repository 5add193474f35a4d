use std::env;

use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use pushkind_common::db::establish_connection_pool;

use sales_dashboard::forms::seed::SeedForm;
use sales_dashboard::repository::DieselRepository;
use sales_dashboard::services::seed::seed_database;
use sales_dashboard::{DEFAULT_DATABASE_URL, MIGRATIONS};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or(DEFAULT_DATABASE_URL.to_string());

    let plan = match SeedForm::from_env().and_then(SeedForm::into_plan) {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("Invalid generator settings: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = conn.run_pending_migrations(MIGRATIONS) {
                log::error!("Migrations failed: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get a database connection: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let today = chrono::Local::now().date_naive();

    match seed_database(&repo, plan, today) {
        Ok(summary) => log::info!(
            "Generated {} customers, {} products and {} sales in {database_url}",
            summary.customers,
            summary.products,
            summary.sales
        ),
        Err(e) => {
            log::error!("Failed to generate sales data: {e}");
            std::process::exit(1);
        }
    }
}
