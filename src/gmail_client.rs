use anyhow::{Result, Context};
use google_gmail1::{Gmail, hyper, hyper_rustls, oauth2};
use log::{info, debug, warn};

use crate::config::GmailConfig;
use crate::email::RawEmail;

pub struct GmailClient {
    hub: Gmail<hyper_rustls::HttpsConnector<hyper::client::HttpConnector>>,
}

impl GmailClient {
    pub async fn new(config: &GmailConfig) -> Result<Self> {
        info!("Connecting to Gmail API via OAuth2");

        // Read OAuth2 client credentials from file
        let secret = oauth2::read_application_secret(&config.credentials_path)
            .await
            .context("Unable to read OAuth2 client credentials file")?;

        // Tokens are cached on disk so the browser consent only happens once
        let auth = oauth2::InstalledFlowAuthenticator::builder(
            secret,
            oauth2::InstalledFlowReturnMethod::HTTPRedirect,
        )
        .persist_tokens_to_disk(&config.token_cache_path)
        .build()
        .await
        .context("Unable to create OAuth2 authenticator")?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()?
            .https_or_http()
            .enable_http1()
            .build();

        let client = hyper::Client::builder().build(connector);
        let hub = Gmail::new(client, auth);

        info!("✅ Gmail API connection established successfully");

        Ok(GmailClient { hub })
    }

    /// IDs of the messages received during the last `hours`
    pub async fn search_recent_emails(&self, hours: u32, max_results: u32) -> Result<Vec<String>> {
        info!("Searching for emails received in the last {} hour(s)", hours);

        let user_id = "me";
        let query = recent_query(chrono::Utc::now().timestamp(), hours);

        debug!("Search criteria: {}", query);

        let result = self.hub
            .users()
            .messages_list(user_id)
            .q(&query)
            .max_results(max_results)
            .add_scope(google_gmail1::api::Scope::Readonly)
            .doit()
            .await
            .context("Error searching for recent emails")?;

        let message_ids: Vec<String> = result.1
            .messages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|msg| msg.id)
            .collect();

        info!("Found {} email(s) in the last {} hour(s)", message_ids.len(), hours);

        Ok(message_ids)
    }

    /// Retrieve a message and normalize it for the analyzer
    pub async fn fetch_raw_email(&self, message_id: &str, body_max_chars: usize) -> Result<RawEmail> {
        debug!("Complete email retrieval for ID: {}", message_id);

        let user_id = "me";

        // RAW format still carries the snippet and internalDate
        let result = self.hub
            .users()
            .messages_get(user_id, message_id)
            .format("raw")
            .add_scope(google_gmail1::api::Scope::Readonly)
            .doit()
            .await;

        let message = match result {
            Ok((_, msg)) => msg,
            Err(e) => {
                warn!("Error retrieving in RAW format: {}", e);
                return Err(anyhow::anyhow!("Unable to retrieve email {}: {}", message_id, e));
            }
        };

        let raw_bytes = message.raw
            .context("No raw content in email")?;

        debug!("Email retrieved, size: {} bytes", raw_bytes.len());

        parse_raw_message(
            message_id,
            &raw_bytes,
            message.snippet,
            message.internal_date,
            body_max_chars,
        )
    }
}

/// Gmail search query for messages newer than `hours` before `now`
fn recent_query(now: i64, hours: u32) -> String {
    let after = now - i64::from(hours) * 3600;
    format!("after:{}", after)
}

/// Build a `RawEmail` from an RFC822 message and the Gmail metadata
pub fn parse_raw_message(
    message_id: &str,
    raw: &[u8],
    snippet: Option<String>,
    internal_date_ms: Option<i64>,
    body_max_chars: usize,
) -> Result<RawEmail> {
    let parsed_email = mail_parser::MessageParser::default()
        .parse(raw)
        .context("Unable to parse email")?;

    let sender = parsed_email.from()
        .and_then(|addrs| addrs.first())
        .and_then(|addr| {
            match (&addr.name, &addr.address) {
                (Some(name), Some(email)) => Some(format!("{} <{}>", name, email)),
                (None, Some(email)) => Some(email.to_string()),
                (Some(name), None) => Some(name.to_string()),
                (None, None) => None,
            }
        });

    let subject = parsed_email.subject().map(|s| s.to_string());

    // mail-parser converts HTML-only messages to text here
    let body = parsed_email.body_text(0)
        .map(|text| truncate_chars(&text, body_max_chars));

    if body.is_none() {
        debug!("No text body in email {}", message_id);
    }

    // internalDate is in milliseconds; fall back on the Date header
    let timestamp = internal_date_ms
        .map(|ms| ms / 1000)
        .or_else(|| parsed_email.date().map(|date| date.to_timestamp()));

    if timestamp.is_none() {
        warn!("No date in email {}, current date will be used", message_id);
    }

    Ok(RawEmail {
        id: message_id.to_string(),
        sender,
        subject,
        snippet,
        body,
        timestamp,
    })
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
