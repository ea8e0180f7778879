use super::types::{AnalyzedEmail, StatisticsSummary};

/// Minutes budgeted per email that needs action
const MINUTES_PER_ACTION: usize = 5;

/// Aggregate dashboard statistics in a single pass.
///
/// An empty slice gives zero counts and an empty category map.
pub fn summarize(emails: &[AnalyzedEmail]) -> StatisticsSummary {
    let mut stats = StatisticsSummary::default();

    for email in emails {
        stats.total += 1;
        *stats.by_category.entry(email.category).or_insert(0) += 1;

        if email.is_urgent() {
            stats.urgent += 1;
        }

        if email.has_action_items {
            stats.action_needed += 1;
        }
    }

    stats.estimated_time = stats.action_needed * MINUTES_PER_ACTION;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::types::{Category, Sentiment};

    fn analyzed(id: &str, category: Category, urgency: u32, action: bool) -> AnalyzedEmail {
        AnalyzedEmail {
            id: id.to_string(),
            sender: "Unknown".to_string(),
            subject: "No Subject".to_string(),
            snippet: String::new(),
            timestamp: 0,
            date: "1970-01-01 00:00".to_string(),
            category,
            priority_score: 0,
            urgency_score: urgency,
            sentiment: Sentiment::Neutral,
            has_action_items: action,
            summary: String::new(),
            badges: Vec::new(),
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = summarize(&[]);
        assert_eq!(stats, StatisticsSummary::default());
        assert!(stats.by_category.is_empty());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.estimated_time, 0);
    }

    #[test]
    fn test_counts() {
        let emails = vec![
            analyzed("1", Category::WorkHigh, 7, true),
            analyzed("2", Category::WorkHigh, 6, true),
            analyzed("3", Category::Spam, 10, false),
            analyzed("4", Category::Social, 0, true),
        ];

        let stats = summarize(&emails);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.urgent, 2);
        assert_eq!(stats.action_needed, 3);
        assert_eq!(stats.estimated_time, 15);
        assert_eq!(stats.by_category.len(), 3);
        assert_eq!(stats.by_category[&Category::WorkHigh], 2);
        assert_eq!(stats.by_category[&Category::Spam], 1);
        assert_eq!(stats.by_category[&Category::Social], 1);
        assert!(!stats.by_category.contains_key(&Category::Promotion));
    }
}
