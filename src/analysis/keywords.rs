use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::error::AnalyzerError;

const URGENT_KEYWORDS: &[&str] = &[
    "urgent", "asap", "immediate", "critical", "emergency",
    "deadline", "today", "now", "important", "priority",
];

const WORK_KEYWORDS: &[&str] = &[
    "meeting", "project", "task", "deadline", "report",
    "review", "approval", "budget", "client", "team",
];

const PROMOTION_KEYWORDS: &[&str] = &[
    "sale", "discount", "offer", "deal", "promotion",
    "subscribe", "unsubscribe", "marketing", "newsletter",
];

const SPAM_INDICATORS: &[&str] = &[
    "winner", "congratulations", "claim", "prize",
    "click here", "act now", "limited time", "free money",
];

const SOCIAL_DOMAINS: &[&str] = &["linkedin", "facebook", "twitter", "instagram"];

const IMPORTANT_SENDERS: &[&str] = &["boss", "ceo", "director", "manager"];

/// Keyword tables driving urgency, categorization and priority.
///
/// Loaded once when the analyzer is built and never mutated afterwards.
/// A JSON file may override any subset of the tables; missing tables keep
/// the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordTables {
    pub urgent: Vec<String>,
    pub work: Vec<String>,
    pub promotion: Vec<String>,
    pub spam: Vec<String>,
    pub social_domains: Vec<String>,
    pub important_senders: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        KeywordTables {
            urgent: owned_words(URGENT_KEYWORDS),
            work: owned_words(WORK_KEYWORDS),
            promotion: owned_words(PROMOTION_KEYWORDS),
            spam: owned_words(SPAM_INDICATORS),
            social_domains: owned_words(SOCIAL_DOMAINS),
            important_senders: owned_words(IMPORTANT_SENDERS),
        }
    }
}

impl KeywordTables {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        info!("Loading keyword tables from {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| AnalyzerError::Keywords(format!("{}: {}", path.display(), e)))?;

        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, AnalyzerError> {
        let tables: KeywordTables = serde_json::from_str(content)
            .map_err(|e| AnalyzerError::Keywords(e.to_string()))?;

        // Matching happens on lowercased text
        let tables = tables.lowercased();
        debug!(
            "Keyword tables: {} urgent, {} work, {} promotion, {} spam",
            tables.urgent.len(),
            tables.work.len(),
            tables.promotion.len(),
            tables.spam.len()
        );

        Ok(tables)
    }

    fn lowercased(self) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> { words.into_iter().map(|w| w.to_lowercase()).collect() };
        KeywordTables {
            urgent: lower(self.urgent),
            work: lower(self.work),
            promotion: lower(self.promotion),
            spam: lower(self.spam),
            social_domains: lower(self.social_domains),
            important_senders: lower(self.important_senders),
        }
    }
}

/// Number of distinct keywords of `words` found as substrings of `text`
pub fn count_present(words: &[String], text: &str) -> usize {
    words.iter().filter(|word| text.contains(word.as_str())).count()
}

pub fn any_present(words: &[String], text: &str) -> bool {
    words.iter().any(|word| text.contains(word.as_str()))
}

fn owned_words(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}
