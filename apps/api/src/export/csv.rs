//! CSV serialization of candidate records, HR notes included.

use crate::errors::AppError;
use crate::screening::models::CandidateRecord;

use super::EXPORT_COLUMNS;

/// Serializes records in ranked order to CSV with the fixed column header.
/// Scores are written with two decimal places; top skills join with ", ".
pub fn to_csv(records: &[CandidateRecord]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(EXPORT_COLUMNS)
        .map_err(|e| AppError::Export(e.to_string()))?;

    for record in records {
        let semantic = format!("{:.2}", record.semantic_pct);
        let skill = format!("{:.2}", record.skill_pct);
        let years = record.experience_years.to_string();
        let final_score = format!("{:.2}", record.final_score);
        let skills = record.top_skills.join(", ");
        writer
            .write_record([
                record.resume_name.as_str(),
                semantic.as_str(),
                skill.as_str(),
                years.as_str(),
                final_score.as_str(),
                skills.as_str(),
                record.summary.as_str(),
                record.hr_note.as_str(),
            ])
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
