use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::{summarize, AnalyzedEmail, Category, StatisticsSummary};

/// Ranked emails and their statistics.
///
/// Serializes to the envelope the web frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub success: bool,
    pub total_emails: usize,
    pub emails: Vec<AnalyzedEmail>,
    pub stats: StatisticsSummary,
}

/// Display groups, in display order. Urgent emails are pulled out of
/// their category into the first group.
const GROUPS: &[(Option<Category>, &str)] = &[
    (None, "🔴 URGENT"),
    (Some(Category::WorkHigh), "🟠 HIGH PRIORITY"),
    (Some(Category::WorkMedium), "🟡 MEDIUM PRIORITY"),
    (Some(Category::WorkLow), "🟢 LOW PRIORITY"),
    (Some(Category::Promotion), "📧 PROMOTIONS"),
    (Some(Category::Social), "👥 SOCIAL"),
    (Some(Category::Spam), "🗑️ SPAM"),
];

impl TriageReport {
    /// Build a report from emails already sorted by priority
    pub fn new(emails: Vec<AnalyzedEmail>) -> Self {
        let stats = summarize(&emails);
        TriageReport {
            success: true,
            total_emails: emails.len(),
            emails,
            stats,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Terminal rendering, grouped like the web dashboard
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", "=".repeat(80));
        let _ = writeln!(out, "📬 SMART INBOX - {} email(s)", self.stats.total);
        let _ = writeln!(
            out,
            "🔴 Urgent: {}   ✅ Action needed: {}   ⏱️  Estimated time: {} min",
            self.stats.urgent, self.stats.action_needed, self.stats.estimated_time
        );
        let _ = writeln!(out, "{}", "=".repeat(80));

        if self.emails.is_empty() {
            let _ = writeln!(out, "No emails found.");
            return out;
        }

        for (category, title) in GROUPS {
            let group: Vec<&AnalyzedEmail> = self.emails
                .iter()
                .filter(|email| match category {
                    None => email.is_urgent(),
                    Some(category) => !email.is_urgent() && email.category == *category,
                })
                .collect();

            if group.is_empty() {
                continue;
            }

            let _ = writeln!(out, "\n{} ({})", title, group.len());
            let _ = writeln!(out, "{}", "-".repeat(60));

            for email in group {
                render_card(&mut out, email);
            }
        }

        out
    }
}

fn render_card(out: &mut String, email: &AnalyzedEmail) {
    let _ = writeln!(out, "📧 {}  [{}]  {}", email.sender, email.category.label().replace('-', " "), email.date);
    let _ = writeln!(out, "   {}", email.subject);

    if !email.badges.is_empty() {
        let badges: Vec<&str> = email.badges.iter().map(|b| b.label.as_str()).collect();
        let _ = writeln!(out, "   {}", badges.join("  "));
    }

    if !email.summary.is_empty() {
        let _ = writeln!(out, "   {}", email.summary);
    }

    let _ = writeln!(
        out,
        "   Priority Score: {}/100 | Urgency: {}/10\n",
        email.priority_score, email.urgency_score
    );
}
