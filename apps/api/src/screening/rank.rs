//! Ranking and shortlist selection over scored candidate records.

use std::cmp::Ordering;

use super::models::CandidateRecord;

/// Sorts candidates by final score descending. The sort is stable:
/// candidates with identical scores keep their input order.
pub fn rank(mut records: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    records.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
    records
}

/// Two-stage shortlist over an already-ranked list: take the top
/// `max(3, n/5)` candidates as a pool, then keep only those at or above
/// `threshold_pct`. A candidate is excluded by falling outside the pool or
/// by missing the threshold — both conditions are required.
pub fn shortlist(ranked: &[CandidateRecord], threshold_pct: f64) -> Vec<CandidateRecord> {
    let pool_size = (ranked.len() / 5).max(3);
    ranked
        .iter()
        .take(pool_size)
        .filter(|r| r.final_score >= threshold_pct)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn record(name: &str, final_score: f64) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            resume_name: name.to_string(),
            semantic_pct: 0.0,
            skill_pct: 0.0,
            experience_years: 0,
            final_score,
            top_skills: vec![],
            summary: String::new(),
            hr_note: String::new(),
        }
    }

    fn names(records: &[CandidateRecord]) -> Vec<&str> {
        records.iter().map(|r| r.resume_name.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(vec![record("low", 20.0), record("high", 90.0), record("mid", 55.0)]);
        assert_eq!(names(&ranked), vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let ranked = rank(vec![
            record("first", 70.0),
            record("second", 70.0),
            record("third", 70.0),
        ]);
        assert_eq!(names(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_shortlist_pool_and_threshold_both_apply() {
        // 10 candidates: pool = max(3, 2) = 3; top 3 scores 95, 80, 60 with
        // threshold 70 → only 95 and 80 survive.
        let mut records = vec![record("a", 95.0), record("b", 80.0), record("c", 60.0)];
        for i in 0..7 {
            records.push(record(&format!("rest{i}"), 50.0));
        }
        let ranked = rank(records);
        let listed = shortlist(&ranked, 70.0);
        assert_eq!(names(&listed), vec!["a", "b"]);
    }

    #[test]
    fn test_shortlist_pool_floor_is_three() {
        let ranked = rank(vec![record("a", 90.0), record("b", 85.0)]);
        // pool = max(3, 0) = 3, but only two candidates exist
        let listed = shortlist(&ranked, 50.0);
        assert_eq!(listed.len(), 2);
    }

    #[test]
    fn test_shortlist_pool_grows_with_count() {
        // 20 candidates → pool of 4
        let records: Vec<_> = (0..20)
            .map(|i| record(&format!("c{i}"), 100.0 - i as f64))
            .collect();
        let ranked = rank(records);
        let listed = shortlist(&ranked, 0.0);
        assert_eq!(listed.len(), 4);
    }

    #[test]
    fn test_shortlist_empty_when_nobody_clears_threshold() {
        let ranked = rank(vec![record("a", 40.0), record("b", 30.0)]);
        assert!(shortlist(&ranked, 70.0).is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ranked = rank(vec![record("a", 70.0)]);
        assert_eq!(shortlist(&ranked, 70.0).len(), 1);
    }
}
