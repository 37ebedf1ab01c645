//! Semantic similarity: 0–100 closeness of two texts via sentence
//! embeddings and cosine similarity.

use crate::embedder::{EmbedError, Embedder};

use super::round2;

/// Cosine similarity between two vectors, in [-1, 1]. A zero-norm vector
/// yields 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "embedding dimensions must match");

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Semantic-match percentage between two texts: cosine similarity of their
/// embeddings clamped to [0, 1], scaled to 0–100, rounded to two decimals.
///
/// An empty or whitespace-only side short-circuits to 0.0 without invoking
/// the model. Each call encodes exactly two texts — no batching across
/// candidates.
pub fn similarity_pct(embedder: &dyn Embedder, a: &str, b: &str) -> Result<f64, EmbedError> {
    if a.trim().is_empty() || b.trim().is_empty() {
        return Ok(0.0);
    }
    let emb_a = embedder.embed(a)?;
    let emb_b = embedder.embed(b)?;
    let sim = f64::from(cosine_similarity(&emb_a, &emb_b)).clamp(0.0, 1.0);
    Ok(round2(sim * 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedder::mock::{FailingEmbedder, MockEmbedder};

    #[test]
    fn test_cosine_identical_vectors() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_orthogonal_vectors() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_zero_norm_is_zero_not_nan() {
        let a = vec![0.0, 0.0];
        let b = vec![1.0, 2.0];
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let e = MockEmbedder;
        let a = "rust engineer with tokio experience";
        let b = "backend developer writing rust services";
        assert_eq!(
            similarity_pct(&e, a, b).unwrap(),
            similarity_pct(&e, b, a).unwrap()
        );
    }

    #[test]
    fn test_self_similarity_is_one_hundred() {
        let e = MockEmbedder;
        let text = "senior data scientist, python and sql";
        assert_eq!(similarity_pct(&e, text, text).unwrap(), 100.0);
    }

    #[test]
    fn test_empty_side_is_zero_without_model_call() {
        // FailingEmbedder errors on any embed call, so a 0.0 result proves
        // the short-circuit fired first.
        let e = FailingEmbedder;
        assert_eq!(similarity_pct(&e, "", "non-empty").unwrap(), 0.0);
        assert_eq!(similarity_pct(&e, "non-empty", "").unwrap(), 0.0);
        assert_eq!(similarity_pct(&e, "   \n\t", "non-empty").unwrap(), 0.0);
    }

    #[test]
    fn test_disjoint_texts_score_below_identical() {
        let e = MockEmbedder;
        let pct = similarity_pct(&e, "alpha beta gamma", "delta epsilon zeta").unwrap();
        assert!(pct < 90.0, "expected dissimilar texts, got {pct}");
    }

    #[test]
    fn test_embedder_failure_propagates() {
        let e = FailingEmbedder;
        assert!(similarity_pct(&e, "some text", "other text").is_err());
    }
}
