#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, path::PathBuf, str::FromStr};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        DEFAULT_EXTENSIONS, DEFAULT_LANGUAGE, DEFAULT_LANGUAGETOOL_ENDPOINT, LENGTH_PAGES_WEIGHT,
        PURPOSE_WEIGHT, SPELLING_AND_GRAMMAR_WEIGHT, UNIFORMITY_WEIGHT,
    },
    grade::{ScoringPreset, ScoringProfile},
};

/// Points available per rubric category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightConfig {
    /// Sentence uniformity.
    pub uniformity: f64,
    /// Clear purpose.
    pub purpose:    f64,
    /// Spelling and grammar.
    pub grammar:    f64,
    /// Length and format.
    pub length:     f64,
}

impl WeightConfig {
    /// Maximum rubric total.
    pub fn total(&self) -> f64 {
        self.uniformity + self.purpose + self.grammar + self.length
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            uniformity: UNIFORMITY_WEIGHT,
            purpose:    PURPOSE_WEIGHT,
            grammar:    SPELLING_AND_GRAMMAR_WEIGHT,
            length:     LENGTH_PAGES_WEIGHT,
        }
    }
}

/// Whether rows are per student (via the roster) or per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RowLayout {
    /// One row per roster student of the file's group.
    #[default]
    Grouped,
    /// One row per file.
    PerFile,
}

impl FromStr for RowLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "grouped" | "group" => Ok(Self::Grouped),
            "per-file" | "file" => Ok(Self::PerFile),
            other => Err(format!("unknown row layout `{other}`, expected grouped or per-file")),
        }
    }
}

impl fmt::Display for RowLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grouped => write!(f, "grouped"),
            Self::PerFile => write!(f, "per-file"),
        }
    }
}

/// Everything one grading run needs to know.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct GraderConfig {
    /// Points per category.
    #[builder(default)]
    weights:               WeightConfig,
    /// Row fan-out.
    #[builder(default)]
    layout:                RowLayout,
    /// Strategies per category, plus page trimming.
    #[builder(default)]
    scoring:               ScoringProfile,
    /// File extensions picked up from the input folder.
    #[builder(default = default_extensions())]
    extensions:            Vec<String>,
    /// Roster JSON; grouped runs fall back to `groups.json` when unset.
    #[builder(into)]
    roster_path:           Option<PathBuf>,
    /// LanguageTool base URL.
    #[builder(default = DEFAULT_LANGUAGETOOL_ENDPOINT.to_string())]
    languagetool_endpoint: String,
    /// Language code for the grammar checker.
    #[builder(default = DEFAULT_LANGUAGE.to_string())]
    language:              String,
    /// Where the spreadsheet goes; next to the input folder when unset.
    #[builder(into)]
    output_dir:            Option<PathBuf>,
}

/// `pdf` and `docx`, owned.
fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for GraderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GraderConfig {
    /// Defaults overlaid with `DOCGRADE_*` environment variables. Unparseable
    /// values are logged and ignored.
    ///
    /// * `DOCGRADE_LAYOUT`: `grouped` or `per-file`
    /// * `DOCGRADE_PRESET`: `classic` or `relaxed`
    /// * `DOCGRADE_ROSTER`: roster JSON path
    /// * `DOCGRADE_EXTENSIONS`: comma separated, e.g. `pdf,docx`
    /// * `DOCGRADE_LANGUAGETOOL_URL`: LanguageTool base URL
    /// * `DOCGRADE_LANGUAGE`: language code
    /// * `DOCGRADE_OUTPUT_DIR`: spreadsheet directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(layout) = parse_env::<RowLayout>("DOCGRADE_LAYOUT") {
            config.layout = layout;
        }
        if let Some(preset) = parse_env::<ScoringPreset>("DOCGRADE_PRESET") {
            config.scoring = preset.into();
        }
        if let Some(path) = read_env("DOCGRADE_ROSTER") {
            config.roster_path = Some(PathBuf::from(path));
        }
        if let Some(exts) = read_env("DOCGRADE_EXTENSIONS") {
            let exts: Vec<String> = exts
                .split(',')
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect();
            if !exts.is_empty() {
                config.extensions = exts;
            }
        }
        if let Some(url) = read_env("DOCGRADE_LANGUAGETOOL_URL") {
            config.languagetool_endpoint = url;
        }
        if let Some(lang) = read_env("DOCGRADE_LANGUAGE") {
            config.language = lang;
        }
        if let Some(dir) = read_env("DOCGRADE_OUTPUT_DIR") {
            config.output_dir = Some(PathBuf::from(dir));
        }

        config
    }

    /// Points per category.
    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Row fan-out.
    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    /// Strategies per category.
    pub fn scoring(&self) -> &ScoringProfile {
        &self.scoring
    }

    /// Extensions picked up from the input folder.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Explicitly configured roster path, if any.
    pub fn roster_path(&self) -> Option<&PathBuf> {
        self.roster_path.as_ref()
    }

    /// LanguageTool base URL.
    pub fn languagetool_endpoint(&self) -> &str {
        &self.languagetool_endpoint
    }

    /// Grammar checker language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Explicit output directory, if any.
    pub fn output_dir(&self) -> Option<&PathBuf> {
        self.output_dir.as_ref()
    }

    /// Replaces the row layout.
    pub fn with_layout(mut self, layout: RowLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Replaces every scoring strategy with a preset's.
    pub fn with_preset(mut self, preset: ScoringPreset) -> Self {
        self.scoring = preset.into();
        self
    }

    /// Sets the roster path.
    pub fn with_roster_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.roster_path = Some(path.into());
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }
}

/// A trimmed, non-empty environment variable.
fn read_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// An environment variable parsed with `FromStr`; a bad value is logged and
/// treated as unset.
fn parse_env<T: FromStr<Err = String>>(key: &str) -> Option<T> {
    let raw = read_env(key)?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("ignoring {}: {}", key, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_fifteen() {
        assert_eq!(WeightConfig::default().total(), 15.0);
    }

    #[test]
    fn layouts_parse() {
        assert_eq!("per_file".parse::<RowLayout>(), Ok(RowLayout::PerFile));
        assert_eq!("Grouped".parse::<RowLayout>(), Ok(RowLayout::Grouped));
        assert!("sideways".parse::<RowLayout>().is_err());
    }

    #[test]
    fn builder_fills_defaults() {
        let config = GraderConfig::builder()
            .layout(RowLayout::PerFile)
            .language("en-GB")
            .build();
        assert_eq!(config.layout(), RowLayout::PerFile);
        assert_eq!(config.language(), "en-GB");
        assert_eq!(config.extensions(), ["pdf".to_string(), "docx".to_string()]);
        assert_eq!(config.languagetool_endpoint(), DEFAULT_LANGUAGETOOL_ENDPOINT);
        assert!(config.roster_path().is_none());
        assert_eq!(config.scoring(), &ScoringProfile::default());
    }
}
