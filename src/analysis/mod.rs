/// Email analysis engine: scoring, categorization, badges and statistics
pub mod analyzer;
pub mod error;
pub mod keywords;
pub mod sentiment;
pub mod statistics;
pub mod types;

pub use analyzer::Analyzer;
pub use error::{AnalyzerError, SentimentError};
pub use keywords::KeywordTables;
pub use sentiment::{LexiconSentiment, SentimentScorer};
pub use statistics::summarize;
pub use types::{AnalyzedEmail, Badge, BadgeType, Category, Sentiment, StatisticsSummary};
