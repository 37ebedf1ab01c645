use std::sync::Arc;

use crate::embedder::Embedder;
use crate::screening::vocabulary::SkillVocabulary;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The vocabulary and embedding model are loaded once at startup and shared
/// read-only; the session store is the only mutable state in the process.
#[derive(Clone)]
pub struct AppState {
    /// Skill vocabulary, immutable for the process lifetime.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Sentence-embedding backend. Loaded once (expensive), reused for all calls.
    pub embedder: Arc<dyn Embedder>,
    /// Current screening session: one ResultSet plus its HR notes.
    pub sessions: SessionStore,
}
