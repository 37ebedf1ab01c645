use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relative weights for the three sub-scores. No invariant that they sum to
/// 1.0 — the final score is a raw weighted sum, not a normalized average,
/// and the caller chooses a sensible scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub similarity: f64,
    pub skills: f64,
    pub experience: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            similarity: 0.6,
            skills: 0.3,
            experience: 0.1,
        }
    }
}

impl ScoreWeights {
    /// Weights must be non-negative and finite; anything else is a caller error.
    pub fn validate(&self) -> Result<(), String> {
        for (name, w) in [
            ("weight_similarity", self.similarity),
            ("weight_skills", self.skills),
            ("weight_experience", self.experience),
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(format!("{name} must be a non-negative number, got {w}"));
            }
        }
        Ok(())
    }
}

/// One row per analyzed resume. Identified by a generated id rather than the
/// display name, so duplicate filenames cannot inherit each other's notes.
/// Mutable only in `hr_note` after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    pub resume_name: String,
    pub semantic_pct: f64,
    pub skill_pct: f64,
    pub experience_years: u32,
    pub final_score: f64,
    pub top_skills: Vec<String>,
    pub summary: String,
    /// Free-text reviewer note, set after scoring via the notes endpoint.
    #[serde(default)]
    pub hr_note: String,
}

/// The ranked outcome of one analyze run. Replaces any prior set and lives
/// for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    pub jd_name: String,
    pub jd_text: String,
    pub jd_skills: Vec<String>,
    /// Ranked by final score, descending.
    pub candidates: Vec<CandidateRecord>,
    pub analyzed_at: DateTime<Utc>,
}
