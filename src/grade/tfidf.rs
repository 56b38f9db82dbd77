#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A single-document TF-IDF transform: lowercase word tokens of two or more
//! characters, English stop words removed, smooth idf, l2-normalised.

use std::{
    collections::{BTreeMap, HashSet},
    sync::LazyLock,
};

use regex::Regex;

use super::ScoringError;

/// Tokens of at least two word characters.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token regex"));

/// Stop-word lookup built from [`ENGLISH_STOP_WORDS`].
static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Turns a document into weighted terms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer {
    /// Keep only the most frequent terms, if set.
    max_features: Option<usize>,
}

impl TfidfVectorizer {
    /// A vectorizer keeping every term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `max_features` terms, most frequent first.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Lowercased, stop-word-filtered tokens of `text`.
    pub fn tokenize(text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        TOKEN
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|t| !STOP_WORDS.contains(t))
            .map(str::to_string)
            .collect()
    }

    /// Fits the vocabulary on `text` alone and returns `(term, weight)` pairs
    /// sorted by term. Fails when nothing survives stop-word removal.
    pub fn fit_transform(&self, text: &str) -> Result<Vec<(String, f64)>, ScoringError> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for token in Self::tokenize(text) {
            *counts.entry(token).or_default() += 1;
        }
        if counts.is_empty() {
            return Err(ScoringError::EmptyVocabulary);
        }

        if let Some(limit) = self.max_features
            && counts.len() > limit
        {
            let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked.truncate(limit);
            counts = ranked.into_iter().collect();
        }

        // one document, every term occurs in it: ln((1 + 1) / (1 + 1)) + 1
        let n_docs = 1.0_f64;
        let doc_freq = 1.0_f64;
        let idf = ((1.0 + n_docs) / (1.0 + doc_freq)).ln() + 1.0;

        let raw: Vec<(String, f64)> = counts
            .into_iter()
            .map(|(term, tf)| (term, tf as f64 * idf))
            .collect();
        let norm = raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();

        Ok(raw.into_iter().map(|(t, w)| (t, w / norm)).collect())
    }
}

/// English stop words removed before weighting terms.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can", "cannot",
    "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else", "elsewhere",
    "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything", "everywhere",
    "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five", "for", "former",
    "formerly", "forty", "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter", "hereby", "herein",
    "hereupon", "hers", "herself", "him", "himself", "his", "how", "however", "hundred", "i", "ie",
    "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its", "itself", "keep", "last",
    "latter", "latterly", "least", "less", "ltd", "made", "many", "may", "me", "meanwhile",
    "might", "mill", "mine", "more", "moreover", "most", "mostly", "move", "much", "must", "my",
    "myself", "name", "namely", "neither", "never", "nevertheless", "next", "nine", "no",
    "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of", "off", "often",
    "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our", "ours",
    "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put", "rather", "re",
    "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several", "she", "should",
    "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "system", "take", "ten",
    "than", "that", "the", "their", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third",
    "this", "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when", "whence",
    "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever",
    "whether", "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why",
    "will", "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];
