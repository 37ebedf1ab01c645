//! The scoring pipeline: skill matching, semantic similarity, experience
//! extraction, weighted aggregation, ranking, and shortlist selection.

pub mod aggregate;
pub mod experience;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod rank;
pub mod similarity;
pub mod skills;
pub mod vocabulary;

/// All user-facing scores are rounded to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
