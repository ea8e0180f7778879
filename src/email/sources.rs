use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;

use anyhow::{Context, Result};
use log::{error, info};

use crate::config::{FetchConfig, GmailConfig};
use crate::gmail_client::GmailClient;
use super::common::RawEmail;
use super::processor_base::EmailSource;

/// Recent messages from the user's Gmail inbox
pub struct GmailSource {
    gmail: GmailConfig,
    fetch: FetchConfig,
}

impl GmailSource {
    pub fn new(gmail: GmailConfig, fetch: FetchConfig) -> Self {
        GmailSource { gmail, fetch }
    }

    async fn fetch_recent(&self, limit: Option<usize>) -> Result<Vec<RawEmail>> {
        let client = GmailClient::new(&self.gmail).await
            .context("Unable to connect to Gmail API")?;

        let mut message_ids = client
            .search_recent_emails(self.fetch.hours, self.fetch.max_results)
            .await?;

        if let Some(limit) = limit {
            message_ids.truncate(limit);
        }

        let mut emails = Vec::with_capacity(message_ids.len());

        // A message that cannot be fetched is skipped, not fatal
        for (index, message_id) in message_ids.iter().enumerate() {
            match client.fetch_raw_email(message_id, self.fetch.body_max_chars).await {
                Ok(email) => emails.push(email),
                Err(e) => error!(
                    "❌ Error fetching email {}/{} ({}): {}",
                    index + 1,
                    message_ids.len(),
                    message_id,
                    e
                ),
            }
        }

        info!("📥 {} email(s) fetched out of {}", emails.len(), message_ids.len());

        Ok(emails)
    }
}

impl EmailSource for GmailSource {
    fn fetch_emails<'a>(&'a self, limit: Option<usize>) ->
        Pin<Box<dyn Future<Output = Result<Vec<RawEmail>>> + Send + 'a>> {
        Box::pin(self.fetch_recent(limit))
    }

    fn source_name(&self) -> &str {
        "Gmail"
    }
}

/// JSON array of `RawEmail` records, e.g. an export of a previous fetch
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    async fn read_emails(&self, limit: Option<usize>) -> Result<Vec<RawEmail>> {
        info!("Reading emails from {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Unable to read {}", self.path.display()))?;

        let mut emails: Vec<RawEmail> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid email list in {}", self.path.display()))?;

        if let Some(limit) = limit {
            emails.truncate(limit);
        }

        Ok(emails)
    }
}

impl EmailSource for JsonFileSource {
    fn fetch_emails<'a>(&'a self, limit: Option<usize>) ->
        Pin<Box<dyn Future<Output = Result<Vec<RawEmail>>> + Send + 'a>> {
        Box::pin(self.read_emails(limit))
    }

    fn source_name(&self) -> &str {
        "JSON file"
    }
}
