//! Application layer: use-case orchestration over the repositories.
//!
//! HTTP handlers are thin wrappers that delegate to these services.

pub mod billing;
pub mod identity;
pub mod teams;

pub use billing::{
    PlanService, SubscriptionDetails, SubscriptionService, SubscriptionSummary, UpgradeQuote,
};
pub use identity::{require_admin, AuthResult, RegisterUser, UserService};
pub use teams::TeamService;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use crate::domain::{NewUser, RepositoryProvider, User};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_database;

    pub async fn repos() -> Arc<dyn RepositoryProvider> {
        Arc::new(SeaOrmRepositoryProvider::new(test_database().await))
    }

    /// Inserts a user directly, bypassing registration.
    pub async fn user(repos: &dyn RepositoryProvider, email: &str, is_admin: bool) -> User {
        repos
            .users()
            .create(NewUser {
                email: email.to_string(),
                name: "test".to_string(),
                password_hash: None,
                locale: "en".to_string(),
                timezone: Some("Asia/Riyadh".to_string()),
                is_admin,
            })
            .await
            .unwrap()
    }
}
