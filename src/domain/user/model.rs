//! User domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// `None` for accounts that cannot log in with a password
    pub password_hash: Option<String>,
    pub email_verified: bool,
    pub locale: String,
    pub timezone: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: Option<String>,
    pub locale: String,
    pub timezone: Option<String>,
    pub is_admin: bool,
}
