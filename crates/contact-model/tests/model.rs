//! Tests for contact-model types.

use std::collections::BTreeMap;

use contact_model::{
    MatchStatus, MatchSummary, MergedRecord, RunReport, SourceOutcome, SourceSummary,
};

fn row(status: MatchStatus, member_count: usize) -> MergedRecord {
    MergedRecord {
        status,
        member_count,
        values: BTreeMap::new(),
    }
}

#[test]
fn match_summary_counts_groups_and_records() {
    let rows = vec![
        row(MatchStatus::Email, 3),
        row(MatchStatus::Email, 2),
        row(MatchStatus::FirstNameLastName, 2),
        row(MatchStatus::Unmatched, 1),
    ];
    let summary = MatchSummary::from_rows(&rows);

    assert_eq!(summary.total_groups, 4);
    assert_eq!(summary.total_records, 8);
    assert_eq!(summary.groups_with(MatchStatus::Email), 2);
    assert_eq!(summary.records_with(MatchStatus::Email), 5);
    assert_eq!(summary.groups_with(MatchStatus::Linkedin), 0);
    assert_eq!(summary.duplicates_removed(), 4);
}

#[test]
fn report_serializes() {
    let report = RunReport {
        sources: vec![
            SourceSummary {
                source_id: "crm".to_string(),
                path: "crm.csv".into(),
                outcome: SourceOutcome::Included,
                records: 2,
            },
            SourceSummary {
                source_id: "waitlist".to_string(),
                path: "waitlist.csv".into(),
                outcome: SourceOutcome::Skipped {
                    reason: "no email column configured".to_string(),
                },
                records: 0,
            },
        ],
        matches: MatchSummary::from_rows(&[row(MatchStatus::Email, 2)]),
        output: Some("out.csv".into()),
    };
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["sources"][0]["outcome"], "included");
    assert_eq!(json["sources"][1]["outcome"], "skipped");
    assert_eq!(json["matches"]["groups_by_status"]["MATCHED_ON_EMAIL"], 1);

    let round: RunReport = serde_json::from_value(json).expect("deserialize report");
    assert_eq!(round, report);
    assert_eq!(round.excluded_sources(), 1);
}
