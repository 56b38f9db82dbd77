#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Spelling and grammar scoring against an external checker.

use std::future::Future;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::ScoringError;
use crate::util::word_count;

/// One issue flagged by a grammar checker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrammarIssue {
    /// Human readable explanation.
    pub message: String,
    /// Character offset into the checked text.
    pub offset:  usize,
    /// Length of the flagged span.
    pub length:  usize,
    /// Identifier of the rule that fired.
    pub rule_id: String,
}

/// Failures talking to the grammar checker.
#[derive(thiserror::Error, Debug)]
pub enum GrammarError {
    /// The request never completed or the body was not the expected JSON.
    #[error("grammar service request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("grammar service returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for diagnostics.
        body:   String,
    },
}

/// Anything that can flag grammar issues in a text.
pub trait GrammarChecker {
    /// Returns every issue found in `text`.
    fn check(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<GrammarIssue>, GrammarError>> + Send;
}

/// Body of a LanguageTool `/v2/check` response; only what is counted.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    /// Flagged issues.
    matches: Vec<LanguageToolMatch>,
}

/// One entry of `matches`.
#[derive(Debug, Deserialize)]
struct LanguageToolMatch {
    /// Explanation.
    #[serde(default)]
    message: String,
    /// Offset of the flagged span.
    #[serde(default)]
    offset:  usize,
    /// Length of the flagged span.
    #[serde(default)]
    length:  usize,
    /// Rule metadata.
    rule:    Option<LanguageToolRule>,
}

/// Rule metadata of a match.
#[derive(Debug, Deserialize)]
struct LanguageToolRule {
    /// Rule identifier, e.g. `MORFOLOGIK_RULE_EN_US`.
    id: String,
}

impl From<LanguageToolMatch> for GrammarIssue {
    fn from(m: LanguageToolMatch) -> Self {
        GrammarIssue {
            message: m.message,
            offset:  m.offset,
            length:  m.length,
            rule_id: m.rule.map(|r| r.id).unwrap_or_default(),
        }
    }
}

/// Client for a LanguageTool HTTP server.
#[derive(Debug, Clone)]
pub struct LanguageToolClient {
    /// Shared HTTP client.
    http:     Client,
    /// Server base URL, without the `/v2` suffix.
    endpoint: String,
    /// Language code, e.g. `en-US`.
    language: String,
}

impl LanguageToolClient {
    /// Creates a client for the server at `endpoint` checking `language`.
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            // The service usually runs on localhost; skip system proxy lookup.
            .no_proxy()
            .build()
            .context("Failed to construct HTTP client for the grammar service")?;
        Ok(Self {
            http,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            language: language.into(),
        })
    }

    /// Server base URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Language code sent with every check.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Lists the language codes the server supports; used to check that the
    /// service is up.
    pub async fn languages(&self) -> Result<Vec<String>, GrammarError> {
        /// One entry of `/v2/languages`.
        #[derive(Deserialize)]
        struct Language {
            /// Full code, e.g. `en-US`.
            #[serde(rename = "longCode")]
            long_code: String,
        }

        let resp = self
            .http
            .get(format!("{}/v2/languages", self.endpoint))
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let langs: Vec<Language> = resp.json().await?;
        Ok(langs.into_iter().map(|l| l.long_code).collect())
    }
}

/// Turns a non-success response into [`GrammarError::Status`].
async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, GrammarError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let body = resp.text().await.unwrap_or_default();
    Err(GrammarError::Status { status, body })
}

impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        let resp = self
            .http
            .post(format!("{}/v2/check", self.endpoint))
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;
        let resp = ensure_success(resp).await?;
        let body: CheckResponse = resp.json().await?;
        Ok(body.matches.into_iter().map(GrammarIssue::from).collect())
    }
}

/// How the error density becomes a grammar score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GrammarStrategy {
    /// Loses `penalty` points per error per hundred words.
    PerHundredWords {
        /// Points lost per error-per-hundred-words.
        penalty: f64,
    },
    /// Scales the weight by the share of error-free words.
    Linear,
}

impl GrammarStrategy {
    /// Half a point per error per hundred words.
    pub fn classic() -> Self {
        Self::PerHundredWords { penalty: 0.5 }
    }

    /// Linear in error density.
    pub fn relaxed() -> Self {
        Self::Linear
    }

    /// Score from raw counts, floored at 0. No words scores 0.
    pub fn score_counts(&self, errors: usize, words: usize, weight: f64) -> f64 {
        if words == 0 {
            return 0.0;
        }
        let rate = errors as f64 / words as f64;
        let raw = match *self {
            Self::PerHundredWords { penalty } => weight - rate * 100.0 * penalty,
            Self::Linear => (1.0 - rate) * weight,
        };
        raw.max(0.0)
    }

    /// Checks `text` with `checker` and scores it out of `weight`. Empty text
    /// scores 0 without contacting the checker.
    pub async fn score<G: GrammarChecker>(
        &self,
        checker: &G,
        text: &str,
        weight: f64,
    ) -> Result<f64, ScoringError> {
        let words = word_count(text);
        if words == 0 {
            return Ok(0.0);
        }
        let issues = checker.check(text).await?;
        tracing::debug!("{} grammar issues in {} words", issues.len(), words);
        Ok(self.score_counts(issues.len(), words, weight))
    }
}

impl Default for GrammarStrategy {
    fn default() -> Self {
        Self::classic()
    }
}
