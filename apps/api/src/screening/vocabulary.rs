//! Skill vocabulary — the curated list of recognized skill/technology terms.
//!
//! Loaded once at startup from a one-term-per-line file; blank lines and `#`
//! comments are ignored and entries are lowercased and deduplicated in file
//! order. A missing file falls back to the built-in default list (warn, not
//! error). Immutable for the process lifetime — no runtime reload.

use std::collections::HashSet;
use std::path::Path;

use tracing::warn;

/// Fallback vocabulary used when no skills file is bundled.
const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "machine learning",
    "deep learning",
    "nlp",
    "computer vision",
    "pandas",
    "numpy",
    "scikit-learn",
    "pytorch",
    "tensorflow",
    "django",
    "flask",
    "react",
    "node",
    "excel",
    "power bi",
    "tableau",
    "communication",
    "leadership",
];

/// Ordered, deduplicated set of lowercase skill terms.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_lines(&contents),
            Err(e) => {
                warn!(
                    "Skill vocabulary file '{}' not readable ({e}); using the built-in default list",
                    path.display()
                );
                Self::default()
            }
        }
    }

    /// Parses one term per line: trims, lowercases, skips blanks and `#`
    /// comments, keeps first occurrence of duplicates.
    pub fn from_lines(contents: &str) -> Self {
        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for line in contents.lines() {
            let term = line.trim().to_lowercase();
            if term.is_empty() || term.starts_with('#') {
                continue;
            }
            if seen.insert(term.clone()) {
                terms.push(term);
            }
        }
        SkillVocabulary { terms }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        SkillVocabulary {
            terms: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
