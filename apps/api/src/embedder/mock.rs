//! Deterministic embedder for tests: hashed bag-of-words over a small fixed
//! dimensionality. Texts sharing vocabulary land close together, disjoint
//! texts land (near-)orthogonal, and equal texts embed identically — enough
//! to exercise the similarity contract without a model download.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::{EmbedError, Embedder};

const DIMS: usize = 64;

pub struct MockEmbedder;

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedError> {
        let mut v = vec![0.0f32; DIMS];
        for token in text.to_lowercase().split_whitespace() {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            v[(hasher.finish() % DIMS as u64) as usize] += 1.0;
        }
        Ok(v)
    }

    fn model_name(&self) -> &str {
        "mock-bag-of-words"
    }
}

/// An embedder that always fails, for exercising error propagation.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbedError> {
        Err(EmbedError::Inference("mock failure".to_string()))
    }

    fn model_name(&self) -> &str {
        "mock-failing"
    }
}
