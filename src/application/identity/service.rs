//! User service: application-layer orchestration
//!
//! All user-related business logic lives here.

use std::sync::Arc;

use tracing::info;

use crate::config::AdminConfig;
use crate::domain::{DomainError, DomainResult, NewUser, RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

const MIN_PASSWORD_LEN: usize = 8;

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

/// Registration input
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub email: String,
    pub name: String,
    pub password: String,
    pub locale: String,
    pub timezone: Option<String>,
}

/// Wraps a token signing or password hashing failure.
fn server_fault(context: &str, err: impl std::fmt::Display) -> DomainError {
    DomainError::Internal(format!("{}: {}", context, err))
}

/// Loads `user_id` and fails unless the stored row has the admin flag.
///
/// Token claims are not trusted for this; an admin demoted after login
/// loses access immediately.
pub async fn require_admin(repos: &dyn RepositoryProvider, user_id: i32) -> DomainResult<User> {
    let user = repos
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| DomainError::Unauthorized("Unknown user".into()))?;

    if !user.is_admin {
        return Err(DomainError::Forbidden("Administrator access required".into()));
    }
    Ok(user)
}

pub struct UserService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl UserService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a JWT.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let invalid = || DomainError::Unauthorized("Invalid credentials".into());

        let user = self.repos.users().find_by_email(email).await?.ok_or_else(invalid)?;
        let Some(hash) = user.password_hash.as_deref() else {
            return Err(invalid());
        };

        if !verify_password(password, hash).unwrap_or(false) {
            return Err(invalid());
        }

        let token = create_token(user.id, &user.email, user.is_admin, &self.jwt_config)
            .map_err(|e| server_fault("Failed to create token", e))?;

        info!(user_id = user.id, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    // ── Registration ────────────────────────────────────────────

    /// Register a new (non-admin) user together with their personal team.
    pub async fn register(&self, input: RegisterUser) -> DomainResult<User> {
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("Name is required".into()));
        }
        if !input.email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".into()));
        }
        if input.password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        if self.repos.users().find_by_email(&input.email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let password_hash = hash_password(&input.password)
            .map_err(|e| server_fault("Failed to hash password", e))?;

        let user = self
            .repos
            .users()
            .create_with_personal_team(NewUser {
                email: input.email,
                name: input.name,
                password_hash: Some(password_hash),
                locale: input.locale,
                timezone: input.timezone,
                is_admin: false,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    /// Create the configured admin account when no users exist yet.
    /// Returns the created user, or `None` if the table was not empty.
    pub async fn create_default_admin(&self, admin: &AdminConfig) -> DomainResult<Option<User>> {
        if self.repos.users().count().await? > 0 {
            return Ok(None);
        }

        let password_hash = hash_password(&admin.password)
            .map_err(|e| server_fault("Failed to hash password", e))?;

        let user = self
            .repos
            .users()
            .create_with_personal_team(NewUser {
                email: admin.email.clone(),
                name: admin.name.clone(),
                password_hash: Some(password_hash),
                locale: "en".into(),
                timezone: None,
                is_admin: true,
            })
            .await?;

        Ok(Some(user))
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user(&self, id: i32) -> DomainResult<User> {
        self.repos
            .users()
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", "id", id))
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Change a user's password. Verifies the current password first.
    pub async fn change_password(
        &self,
        user_id: i32,
        current_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        if new_password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::Validation(format!(
                "New password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }

        let user = self.get_user(user_id).await?;

        let valid = user
            .password_hash
            .as_deref()
            .map(|hash| verify_password(current_password, hash).unwrap_or(false))
            .unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid current password".into()));
        }

        let new_hash = hash_password(new_password)
            .map_err(|e| server_fault("Failed to hash password", e))?;

        self.repos.users().update_password(user_id, &new_hash).await?;

        info!(user_id, "Password changed");
        Ok(())
    }
}
