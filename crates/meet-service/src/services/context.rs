//! Service context - dependency container for services
//!
//! Holds the repositories, the outbound client ports, and the token service.
//! Everything is constructed once at process start and injected here; the
//! services never reach for global state.

use std::sync::Arc;

use meet_common::JwtService;
use meet_core::traits::{
    FounderRepository, InviteRepository, Mailer, MeetingScheduler, StartupRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    founder_repo: Arc<dyn FounderRepository>,
    startup_repo: Arc<dyn StartupRepository>,
    invite_repo: Arc<dyn InviteRepository>,

    // External collaborators
    mailer: Arc<dyn Mailer>,
    scheduler: Arc<dyn MeetingScheduler>,

    // Services
    jwt_service: Arc<JwtService>,

    // Base URL for invite-details links embedded in mails
    frontend_url: String,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        founder_repo: Arc<dyn FounderRepository>,
        startup_repo: Arc<dyn StartupRepository>,
        invite_repo: Arc<dyn InviteRepository>,
        mailer: Arc<dyn Mailer>,
        scheduler: Arc<dyn MeetingScheduler>,
        jwt_service: Arc<JwtService>,
        frontend_url: String,
    ) -> Self {
        Self {
            founder_repo,
            startup_repo,
            invite_repo,
            mailer,
            scheduler,
            jwt_service,
            frontend_url,
        }
    }

    /// Get the founder repository
    pub fn founder_repo(&self) -> &dyn FounderRepository {
        self.founder_repo.as_ref()
    }

    /// Get the startup repository
    pub fn startup_repo(&self) -> &dyn StartupRepository {
        self.startup_repo.as_ref()
    }

    /// Get the invite repository
    pub fn invite_repo(&self) -> &dyn InviteRepository {
        self.invite_repo.as_ref()
    }

    /// Get the mail delivery port
    pub fn mailer(&self) -> &dyn Mailer {
        self.mailer.as_ref()
    }

    /// Get the calendar scheduling port
    pub fn scheduler(&self) -> &dyn MeetingScheduler {
        self.scheduler.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the frontend base URL
    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("clients", &"...")
            .field("frontend_url", &self.frontend_url)
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    founder_repo: Option<Arc<dyn FounderRepository>>,
    startup_repo: Option<Arc<dyn StartupRepository>>,
    invite_repo: Option<Arc<dyn InviteRepository>>,
    mailer: Option<Arc<dyn Mailer>>,
    scheduler: Option<Arc<dyn MeetingScheduler>>,
    jwt_service: Option<Arc<JwtService>>,
    frontend_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            founder_repo: None,
            startup_repo: None,
            invite_repo: None,
            mailer: None,
            scheduler: None,
            jwt_service: None,
            frontend_url: None,
        }
    }

    pub fn founder_repo(mut self, repo: Arc<dyn FounderRepository>) -> Self {
        self.founder_repo = Some(repo);
        self
    }

    pub fn startup_repo(mut self, repo: Arc<dyn StartupRepository>) -> Self {
        self.startup_repo = Some(repo);
        self
    }

    pub fn invite_repo(mut self, repo: Arc<dyn InviteRepository>) -> Self {
        self.invite_repo = Some(repo);
        self
    }

    pub fn mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn scheduler(mut self, scheduler: Arc<dyn MeetingScheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn frontend_url(mut self, url: impl Into<String>) -> Self {
        self.frontend_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.founder_repo
                .ok_or_else(|| ServiceError::validation("founder_repo is required"))?,
            self.startup_repo
                .ok_or_else(|| ServiceError::validation("startup_repo is required"))?,
            self.invite_repo
                .ok_or_else(|| ServiceError::validation("invite_repo is required"))?,
            self.mailer
                .ok_or_else(|| ServiceError::validation("mailer is required"))?,
            self.scheduler
                .ok_or_else(|| ServiceError::validation("scheduler is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.frontend_url
                .ok_or_else(|| ServiceError::validation("frontend_url is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
