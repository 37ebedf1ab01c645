//! Export sinks: CSV serialization, formatted report rendering, and the QR
//! share artifact.

pub mod csv;
pub mod handlers;
pub mod qr;
pub mod report;

/// Column order shared by the CSV export and the report table.
pub const EXPORT_COLUMNS: [&str; 8] = [
    "Resume",
    "Semantic Match %",
    "Skill Match %",
    "Experience (yrs)",
    "Final Score",
    "Top Skills",
    "Summary",
    "HR Notes",
];
