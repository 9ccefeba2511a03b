//! Team domain entity

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Team {
    pub id: i32,
    pub name: String,
    /// Created with the account; cannot be deleted
    pub is_personal: bool,
    /// Owner
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.user_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewTeam {
    pub name: String,
    pub is_personal: bool,
    pub user_id: i32,
}
