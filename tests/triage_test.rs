use std::io::Write;

use smartinbox::analysis::{Analyzer, BadgeType, Category, Sentiment};
use smartinbox::email::{JsonFileSource, TriageProcessor};

#[test]
fn test_triage_sample_inbox() {
    let processor = TriageProcessor::new(
        Analyzer::new().expect("Failed to build analyzer"),
        JsonFileSource::new("data_test/inbox_sample.json"),
    );

    let report = tokio_test::block_on(processor.run(None))
        .expect("Failed to triage sample inbox");

    // The record without an id is skipped
    assert_eq!(report.total_emails, 5);

    let ids: Vec<&str> = report.emails.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "18c1f0a2b3c4d5e7",
            "18c1f0a2b3c4d5ea",
            "18c1f0a2b3c4d5e6",
            "18c1f0a2b3c4d5e8",
            "18c1f0a2b3c4d5e9",
        ]
    );

    let urgent = &report.emails[0];
    assert_eq!(urgent.category, Category::WorkHigh);
    assert_eq!(urgent.urgency_score, 9);
    assert_eq!(urgent.priority_score, 90);

    let review = &report.emails[1];
    assert_eq!(review.category, Category::WorkHigh);
    assert!(review.has_action_items);
    assert_eq!(review.priority_score, 50);
    assert_eq!(review.sentiment, Sentiment::Positive);
    assert_eq!(review.summary, "Could you review the attached numbers by Friday?");
    let badges: Vec<BadgeType> = review.badges.iter().map(|b| b.badge_type).collect();
    assert_eq!(badges, vec![BadgeType::Action, BadgeType::Deadline, BadgeType::Attachment]);

    assert_eq!(report.emails[2].category, Category::Promotion);
    assert_eq!(report.emails[3].category, Category::Social);
    assert_eq!(report.emails[4].category, Category::Spam);

    let stats = &report.stats;
    assert_eq!(stats.total, 5);
    assert_eq!(stats.urgent, 1);
    assert_eq!(stats.action_needed, 1);
    assert_eq!(stats.estimated_time, 5);
    assert_eq!(stats.by_category[&Category::WorkHigh], 2);
    assert_eq!(stats.by_category[&Category::Promotion], 1);
    assert_eq!(stats.by_category[&Category::Social], 1);
    assert_eq!(stats.by_category[&Category::Spam], 1);

    println!("✅ Sample inbox triaged: {} emails", report.total_emails);
}

#[test]
fn test_triage_with_limit() {
    let processor = TriageProcessor::new(
        Analyzer::new().expect("Failed to build analyzer"),
        JsonFileSource::new("data_test/inbox_sample.json"),
    );

    let report = tokio_test::block_on(processor.run(Some(2)))
        .expect("Failed to triage sample inbox");

    assert_eq!(report.total_emails, 2);
    assert_eq!(report.emails[0].id, "18c1f0a2b3c4d5e7");
}

#[test]
fn test_triage_rejects_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "{{ not a list").expect("Failed to write temp file");

    let processor = TriageProcessor::new(
        Analyzer::new().expect("Failed to build analyzer"),
        JsonFileSource::new(file.path()),
    );

    let result = tokio_test::block_on(processor.run(None));
    assert!(result.is_err());
}

#[test]
fn test_triage_missing_file() {
    let processor = TriageProcessor::new(
        Analyzer::new().expect("Failed to build analyzer"),
        JsonFileSource::new("data_test/does_not_exist.json"),
    );

    assert!(tokio_test::block_on(processor.run(None)).is_err());
}
