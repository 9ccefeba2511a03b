use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Team;

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    pub id: i32,
    pub name: String,
    pub is_personal: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            name: t.name,
            is_personal: t.is_personal,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Body for both create and rename
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct TeamRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}
