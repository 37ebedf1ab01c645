//! In-memory session state: the current screening `ResultSet` plus its
//! mutable HR notes. Nothing here survives a restart by design.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::screening::models::ResultSet;

/// Holds at most one `ResultSet`; each analyze run replaces the previous one.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<ResultSet>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn replace(&self, result_set: ResultSet) {
        *self.inner.write().await = Some(result_set);
    }

    pub async fn current(&self) -> Option<ResultSet> {
        self.inner.read().await.clone()
    }

    /// Sets the HR note on the candidate with the given id. Returns false
    /// when no screening has run or the id is unknown.
    pub async fn set_note(&self, candidate_id: Uuid, note: String) -> bool {
        let mut guard = self.inner.write().await;
        let Some(result_set) = guard.as_mut() else {
            return false;
        };
        match result_set
            .candidates
            .iter_mut()
            .find(|c| c.id == candidate_id)
        {
            Some(candidate) => {
                candidate.hr_note = note;
                true
            }
            None => false,
        }
    }
}
