//! Founder entity - a user account affiliated with exactly one startup

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Founder entity
///
/// Founder profiles are maintained by a separate onboarding system; the
/// invite lifecycle only reads them. `profile_complete` reflects whether both
/// the personal and the startup profile have been filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Founder {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub startup_id: Uuid,
    pub profile_complete: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Founder {
    /// Create a new Founder with required fields
    pub fn new(
        id: Uuid,
        first_name: String,
        last_name: String,
        email: String,
        startup_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            first_name,
            last_name,
            email,
            startup_id,
            profile_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let founder = Founder::new(
            Uuid::new_v4(),
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            Uuid::new_v4(),
        );
        assert_eq!(founder.full_name(), "Ada Lovelace");
        assert!(!founder.profile_complete);
    }
}
