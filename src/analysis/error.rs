use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid analyzer pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("unable to load keyword tables: {0}")]
    Keywords(String),
}

/// Failure of a sentiment scorer. Never surfaces past the analyzer.
#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("polarity is not a finite number: {0}")]
    NonFinite(f64),

    #[error("sentiment scorer failed: {0}")]
    Scorer(String),
}
