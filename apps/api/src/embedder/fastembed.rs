//! `fastembed`-backed embedder. Model weights are fetched on first load and
//! cached locally by the runtime; initialization is expensive and happens
//! once at startup.

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};
use tracing::warn;

use super::{EmbedError, Embedder};

pub struct FastembedEmbedder {
    model: TextEmbedding,
    name: String,
}

/// Maps an `EMBED_MODEL` setting to a supported fastembed model. Unknown
/// identifiers fall back to the default compact model with a warning, so a
/// typo in the environment degrades rather than killing startup.
fn resolve_model(name: &str) -> (EmbeddingModel, String) {
    // Accept both the bare name and the Hugging Face-style prefixed one.
    let short = name.rsplit('/').next().unwrap_or(name);
    match short {
        "all-MiniLM-L6-v2" => (EmbeddingModel::AllMiniLML6V2, short.to_string()),
        "all-MiniLM-L12-v2" => (EmbeddingModel::AllMiniLML12V2, short.to_string()),
        "bge-small-en-v1.5" => (EmbeddingModel::BGESmallENV15, short.to_string()),
        "bge-base-en-v1.5" => (EmbeddingModel::BGEBaseENV15, short.to_string()),
        other => {
            warn!("Unknown EMBED_MODEL '{other}', falling back to all-MiniLM-L6-v2");
            (EmbeddingModel::AllMiniLML6V2, "all-MiniLM-L6-v2".to_string())
        }
    }
}

impl FastembedEmbedder {
    pub fn load(model_name: &str) -> Result<Self, EmbedError> {
        let (model_id, name) = resolve_model(model_name);
        let model = TextEmbedding::try_new(
            InitOptions::new(model_id).with_show_download_progress(false),
        )
        .map_err(|e| EmbedError::ModelLoad {
            model: name.clone(),
            source_msg: e.to_string(),
        })?;
        Ok(Self { model, name })
    }
}

impl Embedder for FastembedEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut embeddings = self
            .model
            .embed(vec![text], None)
            .map_err(|e| EmbedError::Inference(e.to_string()))?;
        if embeddings.is_empty() {
            return Err(EmbedError::EmptyOutput);
        }
        Ok(embeddings.remove(0))
    }

    fn model_name(&self) -> &str {
        &self.name
    }
}
