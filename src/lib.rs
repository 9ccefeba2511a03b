//! # Subscription Service
//!
//! Plans, subscriptions and prorated plan-change pricing behind a JWT
//! protected REST API.
//!
//! ## Architecture
//!
//! - **domain**: entities, the pricing model and repository traits
//! - **application**: use cases (identity, teams, billing)
//! - **infrastructure**: SeaORM persistence, migrations, JWT and bcrypt
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: error type and shutdown coordination
//! - **server**: runtime that wires everything together

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use domain::{upgrade_price, Plan, BILLING_CYCLE_DAYS};
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
