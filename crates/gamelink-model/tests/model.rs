use gamelink_model::{
    CatalogEntry, ReviewRecord, Source, StoreRecord, UnifiedRecord, unified_columns,
};

#[test]
fn source_blocks_follow_field_order() {
    let columns = unified_columns();
    let review_block: Vec<&str> = columns[1..=ReviewRecord::FIELDS.len()]
        .iter()
        .map(String::as_str)
        .collect();
    let expected: Vec<String> = ReviewRecord::FIELDS
        .iter()
        .map(|f| format!("mc_{f}"))
        .collect();
    assert_eq!(review_block, expected);
}

#[test]
fn matched_row_renders_both_sides() {
    let row = UnifiedRecord {
        title: "Game A".to_string(),
        review: Some(ReviewRecord {
            title: Some("Game A".to_string()),
            metascore: Some(80.0),
            ..ReviewRecord::default()
        }),
        store: Some(StoreRecord {
            title: Some("Game A".to_string()),
            review_score_approx: Some(85.0),
            ..StoreRecord::default()
        }),
        match_confidence: 1.0,
        is_matched: true,
        combined_score: Some(82.0),
    };
    let columns = unified_columns();
    let cells = row.cells();
    let cell = |name: &str| {
        let idx = columns.iter().position(|c| c == name).unwrap();
        cells[idx].clone()
    };
    assert_eq!(cell("mc_metascore"), "80");
    assert_eq!(cell("steam_review_score_approx"), "85");
    assert_eq!(cell("is_matched"), "true");
    assert_eq!(cell("combined_score"), "82");
}

#[test]
fn entries_report_their_source() {
    assert_eq!(ReviewRecord::SOURCE, Source::Metacritic);
    assert_eq!(StoreRecord::SOURCE, Source::Steam);
}
