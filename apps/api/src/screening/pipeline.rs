//! One analysis run: extraction → feature computation → weighted
//! aggregation → ranking.
//!
//! Resumes are processed sequentially; the shared vocabulary and embedding
//! model are read-only, and each record is computed independently. Degraded
//! inputs (unreadable or empty documents) flow through as zero scores — the
//! batch never aborts.

use chrono::Utc;
use uuid::Uuid;

use crate::embedder::{EmbedError, Embedder};
use crate::extract::{extract_document, UploadedFile};

use super::aggregate::aggregate;
use super::experience::extract_years;
use super::models::{CandidateRecord, ResultSet, ScoreWeights};
use super::rank::rank;
use super::similarity::similarity_pct;
use super::skills::{extract_skills, skill_match_pct};
use super::vocabulary::SkillVocabulary;

/// Skills shown in the one-line summary.
const SUMMARY_SKILLS: usize = 6;
/// Skills kept on the record itself.
const RECORD_SKILLS: usize = 12;

pub fn run_screening(
    jd_file: &UploadedFile,
    resume_files: &[UploadedFile],
    weights: &ScoreWeights,
    vocabulary: &SkillVocabulary,
    embedder: &dyn Embedder,
) -> Result<ResultSet, EmbedError> {
    let jd = extract_document(jd_file);
    let jd_skills = extract_skills(&jd.raw_text, vocabulary);

    let mut records = Vec::with_capacity(resume_files.len());
    for file in resume_files {
        let resume = extract_document(file);

        let semantic_pct = similarity_pct(embedder, &resume.raw_text, &jd.raw_text)?;
        let candidate_skills = extract_skills(&resume.raw_text, vocabulary);
        let skill_pct = skill_match_pct(&candidate_skills, &jd_skills);
        let years = extract_years(&resume.raw_text);
        let final_score = aggregate(semantic_pct, skill_pct, years, weights);

        let summary = summarize_candidate(
            &resume.name,
            years,
            &candidate_skills[..candidate_skills.len().min(SUMMARY_SKILLS)],
            final_score,
        );

        let mut top_skills = candidate_skills;
        top_skills.truncate(RECORD_SKILLS);

        records.push(CandidateRecord {
            id: Uuid::new_v4(),
            resume_name: resume.name,
            semantic_pct,
            skill_pct,
            experience_years: years,
            final_score,
            top_skills,
            summary,
            hr_note: String::new(),
        });
    }

    Ok(ResultSet {
        jd_name: jd.name,
        jd_text: jd.raw_text,
        jd_skills,
        candidates: rank(records),
        analyzed_at: Utc::now(),
    })
}

/// One-line candidate summary, e.g.
/// `"cv.pdf — 5 yrs exp • skills: python, sql • match 74.5%"`.
/// Zero years and an empty skill list drop their segments.
pub fn summarize_candidate(name: &str, years: u32, top_skills: &[String], score: f64) -> String {
    let mut parts = Vec::new();
    if years > 0 {
        parts.push(format!("{years} yrs exp"));
    }
    if !top_skills.is_empty() {
        parts.push(format!("skills: {}", top_skills.join(", ")));
    }
    parts.push(format!("match {}%", format_score(score)));
    format!("{name} — {}", parts.join(" • "))
}

/// Scores print with at least one decimal place: `66.0`, `66.5`, `66.55`.
pub(crate) fn format_score(score: f64) -> String {
    if score == score.trunc() {
        format!("{score:.1}")
    } else {
        format!("{score}")
    }
}
