/// Common structures for email triage
use serde::{Deserialize, Serialize};

/// Normalized email handed to the analyzer by a mail source.
///
/// Absent fields are `None` and receive display defaults during analysis;
/// present but empty fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEmail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    /// Epoch seconds
    #[serde(default)]
    pub timestamp: Option<i64>,
}

/// Outcome counters of a triage run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProcessingResult {
    pub emails_analyzed: usize,
    pub emails_failed: usize,
}

impl ProcessingResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self) {
        self.emails_analyzed += 1;
    }

    pub fn failure(&mut self) {
        self.emails_failed += 1;
    }
}
