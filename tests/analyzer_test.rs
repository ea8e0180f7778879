use proptest::prelude::*;

use smartinbox::analysis::{summarize, Analyzer, BadgeType, Category, Sentiment};
use smartinbox::email::RawEmail;

fn raw(subject: &str, snippet: &str, body: &str, sender: &str) -> RawEmail {
    RawEmail {
        id: "msg".to_string(),
        sender: Some(sender.to_string()),
        subject: Some(subject.to_string()),
        snippet: Some(snippet.to_string()),
        body: Some(body.to_string()),
        timestamp: Some(1_700_000_000),
    }
}

const URGENT_KEYWORDS: &[&str] = &[
    "urgent", "asap", "immediate", "critical", "emergency",
    "deadline", "today", "now", "important", "priority",
];

#[test]
fn test_empty_email_is_low_priority_and_neutral() {
    let analyzer = Analyzer::new().expect("Failed to build analyzer");
    let email = analyzer.analyze(&raw("", "", "", "someone@example.com"))
        .expect("Failed to analyze email");

    assert_eq!(email.category, Category::WorkLow);
    assert_eq!(email.urgency_score, 0);
    assert!(!email.has_action_items);
    assert_eq!(email.sentiment, Sentiment::Neutral);
    assert_eq!(email.priority_score, 10);
    assert!(email.badges.is_empty());
}

#[test]
fn test_manager_deadline_email() {
    let analyzer = Analyzer::new().expect("Failed to build analyzer");
    let email = analyzer.analyze(&raw("URGENT: project deadline today", "", "", "manager@co.com"))
        .expect("Failed to analyze email");

    // urgent + deadline + today keywords, plus the same-day pattern
    assert_eq!(email.urgency_score, 9);
    assert_eq!(email.category, Category::WorkHigh);
    assert_eq!(email.priority_score, (9 * 5 + 30 + 15).min(100));
    assert_eq!(email.subject, "URGENT: project deadline today");

    let badges: Vec<BadgeType> = email.badges.iter().map(|b| b.badge_type).collect();
    assert_eq!(badges, vec![BadgeType::Urgent, BadgeType::Deadline]);
}

#[test]
fn test_promotion_email() {
    let analyzer = Analyzer::new().expect("Failed to build analyzer");
    let email = analyzer.analyze(&raw(
        "",
        "50% off sale! Limited time offer, unsubscribe here",
        "",
        "promo@shop.com",
    ))
    .expect("Failed to analyze email");

    assert_eq!(email.category, Category::Promotion);
    assert_eq!(email.summary, "50% off sale! Limited time offer, unsubscribe here");
}

#[test]
fn test_spam_wins_over_promotion() {
    let analyzer = Analyzer::new().expect("Failed to build analyzer");
    let email = analyzer.analyze(&raw(
        "Congratulations winner",
        "Big sale and discount newsletter",
        "",
        "deals@shop.com",
    ))
    .expect("Failed to analyze email");

    assert_eq!(email.category, Category::Spam);
}

#[test]
fn test_statistics_of_nothing() {
    let stats = summarize(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.urgent, 0);
    assert_eq!(stats.action_needed, 0);
    assert_eq!(stats.estimated_time, 0);
    assert!(stats.by_category.is_empty());
}

#[test]
fn test_urgency_grows_with_distinct_keywords() {
    let analyzer = Analyzer::new().expect("Failed to build analyzer");
    let mut previous = 0;

    for n in 0..=URGENT_KEYWORDS.len() {
        let subject = URGENT_KEYWORDS[..n].join(" ");
        let email = analyzer.analyze(&raw(&subject, "", "", "")).expect("Failed to analyze email");
        assert!(email.urgency_score >= previous, "urgency dropped with {} keywords", n);
        assert!(email.urgency_score <= 10);
        previous = email.urgency_score;
    }

    assert_eq!(previous, 10);
}

proptest! {
    #[test]
    fn prop_scores_stay_in_range(
        subject in ".{0,80}",
        snippet in ".{0,200}",
        body in ".{0,800}",
        sender in ".{0,40}",
    ) {
        let analyzer = Analyzer::new().unwrap();
        let email = analyzer.analyze(&raw(&subject, &snippet, &body, &sender)).unwrap();

        prop_assert!(email.urgency_score <= 10);
        prop_assert!(email.priority_score <= 100);
        prop_assert!(email.summary.chars().count() <= 150);
    }

    #[test]
    fn prop_repeating_keywords_never_exceeds_ten(
        words in proptest::collection::vec(proptest::sample::select(URGENT_KEYWORDS), 0..50),
    ) {
        let analyzer = Analyzer::new().unwrap();
        let subject = words.join(" today tonight tomorrow this week ");
        let email = analyzer.analyze(&raw(&subject, "", "", "")).unwrap();

        prop_assert!(email.urgency_score <= 10);
    }

    #[test]
    fn prop_long_summary_is_truncated_with_ellipsis(snippet in "[a-z]{148,400}") {
        let analyzer = Analyzer::new().unwrap();
        let email = analyzer.analyze(&raw("", &snippet, "", "")).unwrap();

        prop_assert_eq!(email.summary.chars().count(), 150);
        prop_assert!(email.summary.ends_with("..."));
        prop_assert!(snippet.starts_with(email.summary.trim_end_matches("...")));
    }
}
