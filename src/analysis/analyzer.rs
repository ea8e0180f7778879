use chrono::{Local, TimeZone, Utc};
use log::{debug, warn};
use regex::{Regex, RegexSet};

use crate::email::RawEmail;
use super::error::AnalyzerError;
use super::keywords::{any_present, count_present, KeywordTables};
use super::sentiment::{LexiconSentiment, SentimentScorer};
use super::types::{AnalyzedEmail, Badge, BadgeType, Category, Sentiment};

/// Characters of the body that take part in scoring
const BODY_SCORING_CHARS: usize = 500;
/// Characters of the composite text fed to the sentiment scorer
const SENTIMENT_CHARS: usize = 500;
const SUMMARY_SOURCE_CHARS: usize = 150;
const SUMMARY_MAX_CHARS: usize = 150;

const ACTION_PATTERNS: &[&str] = &[
    r"(?i)\b(please|kindly|could you|can you)\b",
    r"(?i)\b(review|approve|sign|respond|reply|confirm)\b",
    r"(?i)\b(need|require|request)\b",
    r"\?",
];

/// Scores, categorizes and annotates single emails.
///
/// All patterns are compiled and keyword tables loaded at construction;
/// `analyze` itself only reads them.
pub struct Analyzer {
    keywords: KeywordTables,
    same_day: Regex,
    next_day: Regex,
    this_week: Regex,
    action: RegexSet,
    deadline: Regex,
    whitespace: Regex,
    sentiment: Box<dyn SentimentScorer>,
}

impl Analyzer {
    pub fn new() -> Result<Self, AnalyzerError> {
        Self::with_keywords(KeywordTables::default())
    }

    pub fn with_keywords(keywords: KeywordTables) -> Result<Self, AnalyzerError> {
        Ok(Analyzer {
            keywords,
            same_day: Regex::new(r"\b(today|tonight|eod|end of day)\b")?,
            next_day: Regex::new(r"\b(tomorrow|asap)\b")?,
            this_week: Regex::new(r"\bthis week\b")?,
            action: RegexSet::new(ACTION_PATTERNS)?,
            deadline: Regex::new(r"(?i)\b(deadline|due date|by \w+day)\b")?,
            whitespace: Regex::new(r"\s+")?,
            sentiment: Box::new(LexiconSentiment::new()),
        })
    }

    /// Replace the sentiment scorer (the lexicon scorer is used by default)
    pub fn with_sentiment_scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.sentiment = scorer;
        self
    }

    pub fn keywords(&self) -> &KeywordTables {
        &self.keywords
    }

    /// Analyze one email.
    ///
    /// Missing display fields get defaults and a failing sentiment scorer
    /// yields a neutral sentiment. The only error is an empty `id`.
    pub fn analyze(&self, email: &RawEmail) -> Result<AnalyzedEmail, AnalyzerError> {
        if email.id.trim().is_empty() {
            return Err(AnalyzerError::InvalidInput("email id is missing".to_string()));
        }

        let subject = email.subject.as_deref().unwrap_or("");
        let snippet = email.snippet.as_deref().unwrap_or("");
        let body = email.body.as_deref().unwrap_or("");
        let sender = email.sender.as_deref().unwrap_or("").to_lowercase();

        let text = format!(
            "{} {} {}",
            subject,
            snippet,
            first_chars(body, BODY_SCORING_CHARS)
        )
        .to_lowercase();

        let urgency_score = self.urgency_score(&text);
        let category = self.categorize(&text, &sender);
        let sentiment = self.sentiment(&text);
        let has_action_items = self.has_action_items(&text);
        let priority_score = self.priority_score(urgency_score, category, has_action_items, &sender);

        debug!(
            "Email {}: category={}, urgency={}, priority={}, sentiment={:?}, action={}",
            email.id, category, urgency_score, priority_score, sentiment, has_action_items
        );

        let timestamp = email.timestamp.unwrap_or_else(|| Utc::now().timestamp());

        Ok(AnalyzedEmail {
            id: email.id.clone(),
            sender: email.sender.clone().unwrap_or_else(|| "Unknown".to_string()),
            subject: email.subject.clone().unwrap_or_else(|| "No Subject".to_string()),
            snippet: snippet.to_string(),
            timestamp,
            date: format_date(timestamp),
            category,
            priority_score,
            urgency_score,
            sentiment,
            has_action_items,
            summary: self.summary(snippet, body),
            badges: self.badges(urgency_score, has_action_items, &text),
        })
    }

    /// Urgency from 0 to 10
    fn urgency_score(&self, text: &str) -> u32 {
        let mut score = 2 * count_present(&self.keywords.urgent, text) as u32;

        if self.same_day.is_match(text) {
            score += 3;
        }
        if self.next_day.is_match(text) {
            score += 2;
        }
        if self.this_week.is_match(text) {
            score += 1;
        }

        score.min(10)
    }

    /// First matching rule wins: spam, promotion, work, social, then work-low
    fn categorize(&self, text: &str, sender: &str) -> Category {
        if count_present(&self.keywords.spam, text) >= 2 {
            return Category::Spam;
        }

        if count_present(&self.keywords.promotion, text) >= 2 || text.contains("unsubscribe") {
            return Category::Promotion;
        }

        match count_present(&self.keywords.work, text) {
            0 => {}
            1 => return Category::WorkMedium,
            _ => return Category::WorkHigh,
        }

        if any_present(&self.keywords.social_domains, sender) {
            return Category::Social;
        }

        Category::WorkLow
    }

    /// Any scorer failure maps to neutral
    fn sentiment(&self, text: &str) -> Sentiment {
        match self.sentiment.polarity(first_chars(text, SENTIMENT_CHARS)) {
            Ok(polarity) if polarity.is_finite() => Sentiment::from_polarity(polarity),
            Ok(polarity) => {
                warn!("Sentiment scorer returned {}, defaulting to neutral", polarity);
                Sentiment::Neutral
            }
            Err(e) => {
                warn!("Sentiment analysis failed, defaulting to neutral: {}", e);
                Sentiment::Neutral
            }
        }
    }

    fn has_action_items(&self, text: &str) -> bool {
        self.action.is_match(text)
    }

    /// Priority from 0 to 100
    fn priority_score(&self, urgency: u32, category: Category, has_action: bool, sender: &str) -> u32 {
        let mut score = urgency * 5 + category.weight();

        if has_action {
            score += 20;
        }

        if any_present(&self.keywords.important_senders, sender) {
            score += 15;
        }

        score.min(100)
    }

    fn summary(&self, snippet: &str, body: &str) -> String {
        let source = if snippet.is_empty() { body } else { snippet };
        let source = first_chars(source, SUMMARY_SOURCE_CHARS);

        let summary = self.whitespace.replace_all(source, " ").trim().to_string();

        if summary.chars().count() > SUMMARY_MAX_CHARS - 3 {
            format!("{}...", first_chars(&summary, SUMMARY_MAX_CHARS - 3))
        } else {
            summary
        }
    }

    fn badges(&self, urgency: u32, has_action: bool, text: &str) -> Vec<Badge> {
        let mut badges = Vec::new();

        if urgency >= 7 {
            badges.push(Badge::new(BadgeType::Urgent));
        } else if urgency >= 4 {
            badges.push(Badge::new(BadgeType::Important));
        }

        if has_action {
            badges.push(Badge::new(BadgeType::Action));
        }

        if self.deadline.is_match(text) {
            badges.push(Badge::new(BadgeType::Deadline));
        }

        if text.contains("attachment") || text.contains("attached") {
            badges.push(Badge::new(BadgeType::Attachment));
        }

        badges
    }
}

/// Prefix of `s` holding at most `n` characters
fn first_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

fn format_date(timestamp: i64) -> String {
    let date = match Local.timestamp_opt(timestamp, 0).earliest() {
        Some(date) => date,
        None => {
            warn!("Timestamp {} out of range, using current date", timestamp);
            Local::now()
        }
    };
    date.format("%Y-%m-%d %H:%M").to_string()
}
