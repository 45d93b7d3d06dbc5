use std::sync::Arc;
use axum::extract::FromRef;

use groups_core::{GroupRepository, GroupService};

pub type DynGroupService = GroupService<dyn GroupRepository>;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub group_service: Arc<DynGroupService>,
}

impl AppState {
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self {
            group_service: Arc::new(GroupService::new(group_repo)),
        }
    }
}

impl FromRef<AppState> for Arc<DynGroupService> {
    fn from_ref(state: &AppState) -> Self {
        state.group_service.clone()
    }
}
