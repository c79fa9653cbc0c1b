use chrono::{TimeZone, Utc};

use super::{SECONDARY_DISPLAY_LIMIT, Selection, rank_recommendations, select_for_display};
use crate::model::{Priority, Recommendation};

fn rec(id: &str, priority: Priority) -> Recommendation {
    Recommendation {
        id: id.to_string(),
        priority,
        title: format!("Recommendation {}", id),
        description: String::new(),
        action: String::new(),
        weather_based: false,
        created_at: Utc.with_ymd_and_hms(2024, 8, 30, 9, 0, 0).unwrap(),
        hive_id: None,
    }
}

fn ids<'a>(recs: &[&'a Recommendation]) -> Vec<&'a str> {
    recs.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_empty_input_is_all_clear() {
    let selection = select_for_display(&[]);

    assert_eq!(selection, Selection::AllClear);
    assert!(selection.is_empty());
    assert!(selection.foregrounded().is_none());
    assert!(selection.secondary().is_empty());
    assert_eq!(selection.secondary_total_count(), 0);
}

#[test]
fn test_single_recommendation_has_no_secondary() {
    let recs = vec![rec("A", Priority::Low)];
    let selection = select_for_display(&recs);

    assert!(!selection.is_empty());
    assert_eq!(selection.foregrounded().unwrap().id, "A");
    assert!(selection.secondary().is_empty());
    assert_eq!(selection.secondary_total_count(), 0);
}

#[test]
fn test_high_beats_medium() {
    let recs = vec![rec("A", Priority::Medium), rec("B", Priority::High)];
    let selection = select_for_display(&recs);

    assert_eq!(selection.foregrounded().unwrap().id, "B");
    assert_eq!(ids(selection.secondary()), vec!["A"]);
    assert_eq!(selection.secondary_total_count(), 1);
}

#[test]
fn test_tie_break_keeps_first_occurrence() {
    let recs = vec![
        rec("low", Priority::Low),
        rec("high-1", Priority::High),
        rec("high-2", Priority::High),
        rec("medium", Priority::Medium),
    ];
    let selection = select_for_display(&recs);

    assert_eq!(selection.foregrounded().unwrap().id, "high-1");
    assert_eq!(ids(selection.secondary()), vec!["high-2", "medium"]);
    assert_eq!(selection.secondary_total_count(), 3);
}

#[test]
fn test_secondary_is_capped_but_count_is_not() {
    let recs: Vec<_> = (0..7)
        .map(|i| rec(&format!("r{}", i), Priority::Medium))
        .collect();
    let selection = select_for_display(&recs);

    assert_eq!(selection.secondary().len(), SECONDARY_DISPLAY_LIMIT);
    assert_eq!(selection.secondary_total_count(), 6);
    assert_eq!(ids(selection.secondary()), vec!["r1", "r2"]);
}

#[test]
fn test_input_is_not_reordered() {
    let recs = vec![
        rec("A", Priority::Low),
        rec("B", Priority::Medium),
        rec("C", Priority::High),
    ];
    let _ = select_for_display(&recs);

    let order: Vec<_> = recs.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C"]);
}

#[test]
fn test_rank_recommendations_orders_all_items() {
    let recs = vec![
        rec("A", Priority::Low),
        rec("B", Priority::High),
        rec("C", Priority::Low),
        rec("D", Priority::Medium),
        rec("E", Priority::High),
    ];

    let ranked = rank_recommendations(&recs);
    assert_eq!(ids(&ranked), vec!["B", "E", "D", "A", "C"]);
}

#[test]
fn test_selection_is_stable_across_calls() {
    let recs = vec![
        rec("A", Priority::Medium),
        rec("B", Priority::Medium),
        rec("C", Priority::Medium),
    ];

    let first = select_for_display(&recs);
    let second = select_for_display(&recs);
    let third = select_for_display(&recs);

    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(first.foregrounded().unwrap().id, "A");
}
