//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod plan_repository;
pub mod repository_provider;
pub mod subscription_repository;
pub mod team_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use crate::domain::DomainError;

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Maps unique-constraint violations to `Conflict`, everything else to `Database`.
fn write_err(e: sea_orm::DbErr, conflict: &str) -> DomainError {
    let msg = e.to_string();
    if msg.contains("UNIQUE") || msg.contains("duplicate") {
        DomainError::Conflict(conflict.to_string())
    } else {
        db_err(e)
    }
}
