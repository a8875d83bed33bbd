//! Founder entity <-> model mapper

use meet_core::entities::Founder;

use crate::models::FounderModel;

impl From<FounderModel> for Founder {
    fn from(model: FounderModel) -> Self {
        Founder {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            startup_id: model.startup_id,
            profile_complete: model.profile_complete,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
