//! Startup entity <-> model mapper

use meet_core::entities::Startup;

use crate::models::StartupModel;

impl From<StartupModel> for Startup {
    fn from(model: StartupModel) -> Self {
        Startup {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
