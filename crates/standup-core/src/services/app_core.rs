//! `AppCore` - the primary application facade.
//!
//! Adapters receive an `AppCore` instance at their composition root and use
//! it to reach every service.

use crate::ports::Repos;

use super::{ProjectService, StatusService, UserService};

/// The core application facade.
pub struct AppCore {
    projects: ProjectService,
    users: UserService,
    statuses: StatusService,
}

impl AppCore {
    /// Create a new `AppCore` from the repository container.
    pub fn new(repos: Repos) -> Self {
        Self {
            projects: ProjectService::new(repos.projects.clone()),
            users: UserService::new(repos.users.clone()),
            statuses: StatusService::new(repos.statuses, repos.users, repos.projects),
        }
    }

    pub const fn projects(&self) -> &ProjectService {
        &self.projects
    }

    pub const fn users(&self) -> &UserService {
        &self.users
    }

    pub const fn statuses(&self) -> &StatusService {
        &self.statuses
    }
}
