//! Sentence-embedding backend behind a trait seam.
//!
//! The production backend wraps `fastembed`'s ONNX runtime; the pipeline only
//! sees `&dyn Embedder`, so tests substitute a deterministic mock instead of
//! downloading a model.

pub mod fastembed;

#[cfg(test)]
pub mod mock;

use thiserror::Error;

pub use self::fastembed::FastembedEmbedder;

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Failed to load embedding model '{model}': {source_msg}")]
    ModelLoad { model: String, source_msg: String },

    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned no embedding for the input text")]
    EmptyOutput,
}

/// Converts text into a fixed-dimensionality vector for cosine comparison.
///
/// Implementations are loaded once at startup and shared read-only across
/// all scoring calls. Inference is synchronous and CPU-bound; callers run
/// whole batches on a blocking task.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError>;

    /// Human-readable model identifier, for logs and the health endpoint.
    fn model_name(&self) -> &str;
}
