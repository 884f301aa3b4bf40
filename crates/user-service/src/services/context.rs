//! Service context - dependency container for services

use std::sync::Arc;

use user_core::traits::UserRepository;

use super::user::UserController;

/// Service context containing all dependencies
///
/// Cloned into every request through the API state.
#[derive(Clone)]
pub struct ServiceContext {
    user_repo: Arc<dyn UserRepository>,
}

impl ServiceContext {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Controller bound to this context's repository
    pub fn users(&self) -> UserController {
        UserController::new(Arc::clone(&self.user_repo))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("user_repo", &"dyn UserRepository")
            .finish()
    }
}
