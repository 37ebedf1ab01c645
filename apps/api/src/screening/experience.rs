//! Years-of-experience extraction via pattern matching.

use once_cell::sync::Lazy;
use regex::Regex;

static YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*\+?\s*(?:years?|yrs)\b").expect("years pattern is valid")
});

/// Returns the integer from the first "N years"/"N yrs" mention in the
/// lowercased text, or 0 when there is none.
///
/// Known limitation, preserved for parity with the original behavior: only
/// the first mention counts, and a range like "3-5 years" yields 3.
pub fn extract_years(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    YEARS_RE
        .captures(&lowered)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or(0)
}
