//! Weighted aggregation of the three sub-scores into one final score.

use super::models::ScoreWeights;
use super::round2;

/// Experience contributes at most this many years to the final score.
pub const EXPERIENCE_CAP_YEARS: u32 = 10;

/// `semantic*w_sim + skill*w_skills + min(years, 10)*10*w_exp`, rounded to
/// two decimals. Weights are applied as given — no normalization — so the
/// scale of the result is the caller's choice.
pub fn aggregate(semantic_pct: f64, skill_pct: f64, years: u32, weights: &ScoreWeights) -> f64 {
    let capped_years = years.min(EXPERIENCE_CAP_YEARS);
    round2(
        semantic_pct * weights.similarity
            + skill_pct * weights.skills
            + f64::from(capped_years) * 10.0 * weights.experience,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregation_example_from_defaults() {
        // 80*0.6 + 50*0.3 + 30*0.1 = 48 + 15 + 3 = 66.0
        let weights = ScoreWeights::default();
        assert_eq!(aggregate(80.0, 50.0, 3, &weights), 66.0);
    }

    #[test]
    fn test_experience_contribution_caps_at_ten_years() {
        let weights = ScoreWeights {
            similarity: 0.0,
            skills: 0.0,
            experience: 1.0,
        };
        assert_eq!(aggregate(0.0, 0.0, 10, &weights), 100.0);
        assert_eq!(aggregate(0.0, 0.0, 25, &weights), 100.0);
    }

    #[test]
    fn test_weights_are_not_normalized() {
        let weights = ScoreWeights {
            similarity: 2.0,
            skills: 0.0,
            experience: 0.0,
        };
        assert_eq!(aggregate(80.0, 0.0, 0, &weights), 160.0);
    }

    #[test]
    fn test_zero_weights_zero_score() {
        let weights = ScoreWeights {
            similarity: 0.0,
            skills: 0.0,
            experience: 0.0,
        };
        assert_eq!(aggregate(95.0, 88.0, 9, &weights), 0.0);
    }

    #[test]
    fn test_result_rounded_to_two_decimals() {
        let weights = ScoreWeights {
            similarity: 1.0 / 3.0,
            skills: 0.0,
            experience: 0.0,
        };
        assert_eq!(aggregate(100.0, 0.0, 0, &weights), 33.33);
    }

    #[test]
    fn test_weight_validation_rejects_negative_and_non_finite() {
        let negative = ScoreWeights {
            similarity: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = ScoreWeights {
            experience: f64::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());

        assert!(ScoreWeights::default().validate().is_ok());
    }
}
