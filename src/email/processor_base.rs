use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::analysis::{AnalyzedEmail, Analyzer};
use crate::report::TriageReport;
use super::common::{ProcessingResult, RawEmail};

/// Where the emails to triage come from
pub trait EmailSource: Send + Sync {
    /// Fetch at most `limit` normalized emails
    fn fetch_emails<'a>(&'a self, limit: Option<usize>) ->
        Pin<Box<dyn Future<Output = Result<Vec<RawEmail>>> + Send + 'a>>;

    /// Get the name of this source (for logging)
    fn source_name(&self) -> &str;
}

/// Fetches, analyzes, ranks and summarizes emails from a source
pub struct TriageProcessor<S: EmailSource> {
    analyzer: Analyzer,
    source: S,
}

impl<S: EmailSource> TriageProcessor<S> {
    pub fn new(analyzer: Analyzer, source: S) -> Self {
        info!("Initializing triage processor for {}", source.source_name());
        TriageProcessor { analyzer, source }
    }

    pub async fn run(&self, limit: Option<usize>) -> Result<TriageReport> {
        info!("Starting email triage from {}", self.source.source_name());

        let raw_emails = self.source.fetch_emails(limit).await
            .with_context(|| format!("Error fetching emails from {}", self.source.source_name()))?;

        let (emails, result) = self.analyze_all(&raw_emails);

        info!(
            "Triage completed: {} email(s) analyzed, {} rejected",
            result.emails_analyzed, result.emails_failed
        );

        Ok(TriageReport::new(emails))
    }

    /// Analyze every email and rank by priority, highest first.
    ///
    /// Emails rejected by the analyzer are logged and left out. The sort is
    /// stable, so equal priorities keep the source order.
    pub fn analyze_all(&self, raw_emails: &[RawEmail]) -> (Vec<AnalyzedEmail>, ProcessingResult) {
        let mut result = ProcessingResult::new();
        let mut emails = Vec::with_capacity(raw_emails.len());

        for (index, raw) in raw_emails.iter().enumerate() {
            match self.analyzer.analyze(raw) {
                Ok(email) => {
                    result.success();
                    emails.push(email);
                }
                Err(e) => {
                    result.failure();
                    warn!("⚠️  Email #{} skipped: {}", index + 1, e);
                }
            }
        }

        emails.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        (emails, result)
    }
}
