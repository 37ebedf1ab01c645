//! Formatted screening report: title, job-description excerpt, and a table
//! of candidate rows. The crate owns the formatting contract (columns,
//! excerpt length, truncation); rendering to an actual PDF is left to the
//! consuming sink, which gets a printable self-contained HTML document.

use crate::screening::models::{CandidateRecord, ResultSet};
use crate::screening::pipeline::format_score;

use super::EXPORT_COLUMNS;

/// JD excerpt length in characters.
const EXCERPT_CHARS: usize = 600;
/// Top Skills cell cap in characters.
const SKILLS_CELL_CHARS: usize = 120;

pub struct ScreeningReport {
    pub title: String,
    /// First 600 characters of the JD, `…` appended when truncated. None
    /// when the JD text is empty.
    pub jd_excerpt: Option<String>,
    pub rows: Vec<ReportRow>,
}

pub struct ReportRow {
    pub resume: String,
    pub semantic_pct: String,
    pub skill_pct: String,
    pub experience_years: String,
    pub final_score: String,
    /// Truncated to 120 characters.
    pub top_skills: String,
    pub summary: String,
    pub hr_note: String,
}

/// Builds the report model for the given records (full result set or a
/// shortlist cut of it).
pub fn build_report(result_set: &ResultSet, records: &[CandidateRecord]) -> ScreeningReport {
    let jd_excerpt = if result_set.jd_text.trim().is_empty() {
        None
    } else {
        Some(excerpt(&result_set.jd_text, EXCERPT_CHARS))
    };

    ScreeningReport {
        title: "Resume Screening Report".to_string(),
        jd_excerpt,
        rows: records
            .iter()
            .map(|r| ReportRow {
                resume: r.resume_name.clone(),
                semantic_pct: format_score(r.semantic_pct),
                skill_pct: format_score(r.skill_pct),
                experience_years: r.experience_years.to_string(),
                final_score: format_score(r.final_score),
                top_skills: truncate_chars(&r.top_skills.join(", "), SKILLS_CELL_CHARS),
                summary: r.summary.clone(),
                hr_note: r.hr_note.clone(),
            })
            .collect(),
    }
}

/// Renders the report as a printable standalone HTML document.
pub fn render_html(report: &ScreeningReport) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title>", escape(&report.title)));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:24px}table{border-collapse:collapse;width:100%}\
         th,td{border:1px solid #999;padding:6px;text-align:left;font-size:12px}\
         th{background:#444;color:#fff}tr:nth-child(even){background:#f7f7f7}</style>",
    );
    out.push_str("</head><body>");
    out.push_str(&format!("<h1>{}</h1>", escape(&report.title)));

    if let Some(excerpt) = &report.jd_excerpt {
        out.push_str("<h3>Job Description (excerpt):</h3>");
        out.push_str(&format!(
            "<p>{}</p>",
            escape(excerpt).replace('\n', "<br/>")
        ));
    }

    out.push_str("<table><tr>");
    for column in EXPORT_COLUMNS {
        out.push_str(&format!("<th>{}</th>", escape(column)));
    }
    out.push_str("</tr>");
    for row in &report.rows {
        out.push_str("<tr>");
        for cell in [
            &row.resume,
            &row.semantic_pct,
            &row.skill_pct,
            &row.experience_years,
            &row.final_score,
            &row.top_skills,
            &row.summary,
            &row.hr_note,
        ] {
            out.push_str(&format!("<td>{}</td>", escape(cell)));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table></body></html>");
    out
}

/// First `max` characters with `…` appended when truncated. Character-based,
/// never splits a code point.
fn excerpt(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let mut cut: String = text.chars().take(max).collect();
        cut.push('…');
        cut
    } else {
        text.to_string()
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        text.chars().take(max).collect()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn record(name: &str) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            resume_name: name.to_string(),
            semantic_pct: 80.0,
            skill_pct: 50.0,
            experience_years: 3,
            final_score: 66.0,
            top_skills: vec!["python".to_string(), "sql".to_string()],
            summary: format!("{name} — 3 yrs exp • match 66.0%"),
            hr_note: String::new(),
        }
    }

    fn result_set(jd_text: &str, candidates: Vec<CandidateRecord>) -> ResultSet {
        ResultSet {
            jd_name: "jd.txt".to_string(),
            jd_text: jd_text.to_string(),
            jd_skills: vec!["python".to_string(), "sql".to_string()],
            candidates,
            analyzed_at: Utc::now(),
        }
    }

    #[test]
    fn test_short_jd_is_not_truncated() {
        let rs = result_set("python developer wanted", vec![]);
        let report = build_report(&rs, &rs.candidates);
        assert_eq!(report.jd_excerpt.as_deref(), Some("python developer wanted"));
    }

    #[test]
    fn test_long_jd_cut_to_600_chars_with_ellipsis() {
        let rs = result_set(&"x".repeat(700), vec![]);
        let report = build_report(&rs, &rs.candidates);
        let excerpt = report.jd_excerpt.unwrap();
        assert_eq!(excerpt.chars().count(), 601);
        assert!(excerpt.ends_with('…'));
    }

    #[test]
    fn test_empty_jd_omits_excerpt() {
        let rs = result_set("   ", vec![]);
        let report = build_report(&rs, &rs.candidates);
        assert!(report.jd_excerpt.is_none());
    }

    #[test]
    fn test_top_skills_cell_capped_at_120_chars() {
        let mut rec = record("jane.pdf");
        rec.top_skills = (0..30).map(|i| format!("skill-number-{i}")).collect();
        let rs = result_set("jd", vec![rec]);
        let report = build_report(&rs, &rs.candidates);
        assert_eq!(report.rows[0].top_skills.chars().count(), 120);
    }

    #[test]
    fn test_row_carries_every_record_field() {
        let rs = result_set("jd", vec![record("jane.pdf")]);
        let report = build_report(&rs, &rs.candidates);
        let row = &report.rows[0];
        assert_eq!(row.resume, "jane.pdf");
        assert_eq!(row.semantic_pct, "80.0");
        assert_eq!(row.skill_pct, "50.0");
        assert_eq!(row.experience_years, "3");
        assert_eq!(row.final_score, "66.0");
        assert_eq!(row.top_skills, "python, sql");
    }

    #[test]
    fn test_html_render_contains_title_columns_and_rows() {
        let rs = result_set("python developer", vec![record("jane.pdf")]);
        let html = render_html(&build_report(&rs, &rs.candidates));
        assert!(html.contains("<h1>Resume Screening Report</h1>"));
        assert!(html.contains("<th>Semantic Match %</th>"));
        assert!(html.contains("<td>jane.pdf</td>"));
        assert!(html.contains("python developer"));
    }

    #[test]
    fn test_html_escapes_markup_in_fields() {
        let mut rec = record("<script>alert(1)</script>.pdf");
        rec.hr_note = "a & b".to_string();
        let rs = result_set("jd", vec![rec]);
        let html = render_html(&build_report(&rs, &rs.candidates));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
    }
}
