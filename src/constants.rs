#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Maximum points for sentence-length uniformity.
pub const UNIFORMITY_WEIGHT: f64 = 6.0;

/// Maximum points for a clear purpose (vocabulary signal).
pub const PURPOSE_WEIGHT: f64 = 4.0;

/// Maximum points for spelling and grammar.
pub const SPELLING_AND_GRAMMAR_WEIGHT: f64 = 3.0;

/// Maximum points for length and formatting.
pub const LENGTH_PAGES_WEIGHT: f64 = 2.0;

/// Requirement name / column header for sentence uniformity.
pub const UNIFORMITY_REQ: &str = "Sentence Uniformity";

/// Requirement name / column header for clear purpose.
pub const PURPOSE_REQ: &str = "Clear Purpose";

/// Requirement name / column header for grammar and spelling.
pub const GRAMMAR_REQ: &str = "Grammar & Spelling";

/// Requirement name / column header for length and format.
pub const LENGTH_REQ: &str = "Length & Format";

/// Column header for the ceil-summed total.
pub const TOTAL_HEADER: &str = "Total Score / 15";

/// Topic reported when a group id has no roster entry.
pub const UNKNOWN_TOPIC: &str = "Unknown";

/// Topic reported when a roster entry omits its topic.
pub const MISSING_TOPIC: &str = "N/A";

/// Roster file read by the grouped layout when none is configured.
pub const DEFAULT_ROSTER_PATH: &str = "groups.json";

/// File extensions picked up from the input folder.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["pdf", "docx"];

/// Default LanguageTool server, as started by `languagetool-server --port 8081`.
pub const DEFAULT_LANGUAGETOOL_ENDPOINT: &str = "http://localhost:8081";

/// Default language handed to the grammar checker.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Suffix appended to the input folder's name for the grouped export.
pub const GROUPED_EXPORT_SUFFIX: &str = "_individual_grades.xlsx";

/// Suffix appended to the input folder's name for the per-file export.
pub const PER_FILE_EXPORT_SUFFIX: &str = ".xlsx";

/// Name of the worksheet holding the grades.
pub const WORKSHEET_NAME: &str = "Grades";
