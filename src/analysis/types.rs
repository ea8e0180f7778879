/// Output records of the analysis engine
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category assigned to an email, evaluated in a fixed rule order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Spam,
    Promotion,
    WorkHigh,
    WorkMedium,
    WorkLow,
    Social,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Spam => "spam",
            Category::Promotion => "promotion",
            Category::WorkHigh => "work-high",
            Category::WorkMedium => "work-medium",
            Category::WorkLow => "work-low",
            Category::Social => "social",
        }
    }

    /// Contribution of the category to the priority score
    pub fn weight(&self) -> u32 {
        match self {
            Category::WorkHigh => 30,
            Category::WorkMedium => 20,
            Category::WorkLow => 10,
            Category::Promotion => 5,
            Category::Social => 5,
            Category::Spam => 0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Map a polarity (roughly -1.0..=1.0) onto the three buckets
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.3 {
            Sentiment::Positive
        } else if polarity < -0.3 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeType {
    Urgent,
    Important,
    Action,
    Deadline,
    Attachment,
}

impl BadgeType {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeType::Urgent => "🔴 URGENT",
            BadgeType::Important => "🟠 Important",
            BadgeType::Action => "✅ Action Needed",
            BadgeType::Deadline => "📅 Deadline",
            BadgeType::Attachment => "📎 Attachment",
        }
    }
}

/// Short labeled tag displayed next to an email.
///
/// The label is serialized as `text`, which is what the web frontend reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
    #[serde(rename = "text")]
    pub label: String,
}

impl Badge {
    pub fn new(badge_type: BadgeType) -> Self {
        Badge {
            badge_type,
            label: badge_type.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedEmail {
    pub id: String,
    pub sender: String,
    pub subject: String,
    pub snippet: String,
    pub timestamp: i64,
    pub date: String,
    pub category: Category,
    pub priority_score: u32,
    pub urgency_score: u32,
    pub sentiment: Sentiment,
    pub has_action_items: bool,
    pub summary: String,
    pub badges: Vec<Badge>,
}

impl AnalyzedEmail {
    pub fn is_urgent(&self) -> bool {
        self.urgency_score >= 7
    }
}

/// Dashboard statistics over a batch of analyzed emails
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub total: usize,
    pub urgent: usize,
    pub action_needed: usize,
    pub by_category: HashMap<Category, usize>,
    /// Minutes, five per email needing action
    pub estimated_time: usize,
}
