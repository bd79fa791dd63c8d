use crate::v1::error::ApiError;
use parking_lot::RwLock;
use rack_core::{LoadState, RackStore};
use std::sync::Arc;

/// Shared session. The write lock is the single writer: every command runs to
/// completion before any other request sees the store.
#[derive(Clone, Default)]
pub struct AppState {
    pub session: Arc<RwLock<LoadState>>,
}

impl AppState {
    pub fn new(session: LoadState) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
        }
    }

    pub fn read<T>(&self, f: impl FnOnce(&RackStore) -> T) -> Result<T, ApiError> {
        let session = self.session.read();
        match &*session {
            LoadState::Ready(store) => Ok(f(store)),
            LoadState::Loading => Err(ApiError::Loading),
            LoadState::Failed(e) => Err(ApiError::IngestFailed(e.to_string())),
        }
    }

    pub fn write<T>(&self, f: impl FnOnce(&mut RackStore) -> T) -> Result<T, ApiError> {
        let mut session = self.session.write();
        match &mut *session {
            LoadState::Ready(store) => Ok(f(store)),
            LoadState::Loading => Err(ApiError::Loading),
            LoadState::Failed(e) => Err(ApiError::IngestFailed(e.to_string())),
        }
    }
}
