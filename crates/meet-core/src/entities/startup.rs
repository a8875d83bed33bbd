//! Startup entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Startup entity - the company a founder belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Startup {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Startup {
    /// Create a new Startup
    pub fn new(id: Uuid, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}
