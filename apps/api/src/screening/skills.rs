//! Skill extraction: boundary-delimited, case-insensitive matching of
//! vocabulary terms against document text.

use std::collections::HashSet;

use super::round2;
use super::vocabulary::SkillVocabulary;

/// Returns the distinct vocabulary terms present in `text`, in vocabulary
/// order. Matching is case-insensitive and bounded on both sides: a term
/// hit is rejected when the adjacent character is ASCII alphanumeric, so
/// "java" never matches inside "javascript" and "41" never yields "4".
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    let haystack = text.to_lowercase();
    vocabulary
        .iter()
        .filter(|term| contains_term(&haystack, term))
        .map(str::to_string)
        .collect()
}

/// Boundary-delimited substring search. Terms are already lowercase;
/// `haystack` must be lowercased by the caller.
fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let bytes = haystack.as_bytes();
    for (start, _) in haystack.match_indices(term) {
        let bounded_left = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let end = start + term.len();
        let bounded_right = end >= bytes.len() || !bytes[end].is_ascii_alphanumeric();
        if bounded_left && bounded_right {
            return true;
        }
    }
    false
}

/// Skill-match percentage: `|candidate ∩ jd| / max(1, |jd|) * 100`, rounded
/// to two decimals. The `max(1, …)` floor guards a JD with no recognized
/// skills.
pub fn skill_match_pct(candidate_skills: &[String], jd_skills: &[String]) -> f64 {
    let jd: HashSet<&str> = jd_skills.iter().map(String::as_str).collect();
    let overlap = candidate_skills
        .iter()
        .filter(|s| jd.contains(s.as_str()))
        .count();
    round2(overlap as f64 / jd.len().max(1) as f64 * 100.0)
}
