use log::debug;

use crate::model::Recommendation;

#[cfg(test)]
mod selection_tests;

/// Maximum number of non-foregrounded recommendations shown at once.
pub const SECONDARY_DISPLAY_LIMIT: usize = 2;

/// The outcome of selecting recommendations for display.
///
/// `AllClear` is the explicit "no recommendations" state. It is a normal,
/// user-visible outcome and not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    AllClear,
    Foregrounded {
        /// The highest-priority recommendation, promoted to primary display
        top: &'a Recommendation,
        /// The ranked remainder, capped at [`SECONDARY_DISPLAY_LIMIT`]
        secondary: Vec<&'a Recommendation>,
        /// Number of recommendations besides `top`, regardless of how many
        /// are in `secondary`
        secondary_total_count: usize,
    },
}

impl<'a> Selection<'a> {
    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::AllClear)
    }

    pub fn foregrounded(&self) -> Option<&'a Recommendation> {
        match self {
            Selection::AllClear => None,
            Selection::Foregrounded { top, .. } => Some(*top),
        }
    }

    pub fn secondary(&self) -> &[&'a Recommendation] {
        match self {
            Selection::AllClear => &[],
            Selection::Foregrounded { secondary, .. } => secondary.as_slice(),
        }
    }

    pub fn secondary_total_count(&self) -> usize {
        match self {
            Selection::AllClear => 0,
            Selection::Foregrounded {
                secondary_total_count,
                ..
            } => *secondary_total_count,
        }
    }
}

/// Order recommendations by priority, highest first.
///
/// The sort is stable: recommendations sharing a priority keep their input
/// order. The input slice is not modified.
pub fn rank_recommendations(recommendations: &[Recommendation]) -> Vec<&Recommendation> {
    let mut ranked: Vec<&Recommendation> = recommendations.iter().collect();
    ranked.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    ranked
}

/// Pick the recommendation to foreground and the ones to list beneath it.
///
/// The foregrounded recommendation has the highest priority; when several
/// share it, the one appearing first in `recommendations` wins. The
/// remaining recommendations follow in the same ranked order, of which only
/// the first [`SECONDARY_DISPLAY_LIMIT`] are returned.
///
/// This never fails: an empty input yields [`Selection::AllClear`].
pub fn select_for_display(recommendations: &[Recommendation]) -> Selection<'_> {
    // Strictly greater keeps the first occurrence on ties
    let Some((top_index, top)) = recommendations
        .iter()
        .enumerate()
        .reduce(|best, candidate| {
            if candidate.1.priority > best.1.priority {
                candidate
            } else {
                best
            }
        })
    else {
        debug!("No recommendations to display");
        return Selection::AllClear;
    };

    let secondary_total_count = recommendations.len() - 1;
    let mut secondary: Vec<&Recommendation> = Vec::with_capacity(SECONDARY_DISPLAY_LIMIT);
    for (index, rec) in recommendations.iter().enumerate() {
        if index == top_index {
            continue;
        }
        match secondary.iter().position(|kept| kept.priority < rec.priority) {
            Some(position) => {
                secondary.insert(position, rec);
                secondary.truncate(SECONDARY_DISPLAY_LIMIT);
            }
            None if secondary.len() < SECONDARY_DISPLAY_LIMIT => secondary.push(rec),
            None => {}
        }
    }

    debug!(
        "Foregrounding recommendation {} ({}), {} more available",
        top.id, top.priority, secondary_total_count
    );

    Selection::Foregrounded {
        top,
        secondary,
        secondary_total_count,
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::Priority;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn arb_priority() -> impl Strategy<Value = Priority> {
        prop_oneof![Just(Priority::High), Just(Priority::Medium), Just(Priority::Low)]
    }

    fn arb_recommendations() -> impl Strategy<Value = Vec<Recommendation>> {
        prop::collection::vec((arb_priority(), any::<bool>()), 0..20).prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (priority, weather_based))| Recommendation {
                    id: format!("rec-{}", i),
                    priority,
                    title: format!("Recommendation {}", i),
                    description: String::new(),
                    action: String::new(),
                    weather_based,
                    created_at: Utc.with_ymd_and_hms(2024, 8, 30, 9, 0, 0).unwrap(),
                    hive_id: None,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_empty_iff_no_input(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            prop_assert_eq!(selection.is_empty(), recs.is_empty());
            prop_assert_eq!(selection.foregrounded().is_none(), recs.is_empty());
        }

        #[test]
        fn prop_foregrounded_has_maximum_rank(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            if let Some(top) = selection.foregrounded() {
                for rec in &recs {
                    prop_assert!(top.priority.rank() >= rec.priority.rank());
                }
            }
        }

        #[test]
        fn prop_foregrounded_is_first_of_its_priority(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            if let Some(top) = selection.foregrounded() {
                let first = recs.iter().find(|r| r.priority == top.priority).unwrap();
                prop_assert_eq!(&first.id, &top.id);
            }
        }

        #[test]
        fn prop_secondary_count_and_cap(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            prop_assert_eq!(selection.secondary_total_count(), recs.len().saturating_sub(1));
            prop_assert!(selection.secondary().len() <= SECONDARY_DISPLAY_LIMIT);
            prop_assert_eq!(
                selection.secondary().len(),
                recs.len().saturating_sub(1).min(SECONDARY_DISPLAY_LIMIT)
            );
        }

        #[test]
        fn prop_secondary_excludes_foregrounded(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            if let Some(top) = selection.foregrounded() {
                for rec in selection.secondary() {
                    prop_assert!(!std::ptr::eq(*rec, top));
                    prop_assert_ne!(&rec.id, &top.id);
                }
            }
        }

        #[test]
        fn prop_selection_is_idempotent(recs in arb_recommendations()) {
            let before = recs.clone();
            let first = select_for_display(&recs);
            let second = select_for_display(&recs);
            prop_assert_eq!(first, second);
            prop_assert_eq!(recs, before);
        }

        #[test]
        fn prop_selection_matches_full_ranking(recs in arb_recommendations()) {
            let selection = select_for_display(&recs);
            let ranked = rank_recommendations(&recs);
            prop_assert_eq!(selection.foregrounded(), ranked.first().copied());
            let expected: Vec<&Recommendation> = ranked
                .into_iter()
                .skip(1)
                .take(SECONDARY_DISPLAY_LIMIT)
                .collect();
            prop_assert_eq!(selection.secondary(), expected.as_slice());
        }

        #[test]
        fn prop_ranking_is_a_stable_permutation(recs in arb_recommendations()) {
            let ranked = rank_recommendations(&recs);
            prop_assert_eq!(ranked.len(), recs.len());
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].priority >= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    // ids are "rec-<input index>", equal priorities keep input order
                    let a: usize = pair[0].id[4..].parse().unwrap();
                    let b: usize = pair[1].id[4..].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
