/// Gallery filtering
///
/// One filter token is active at any time: either the wildcard ("All") or a
/// single category. Applying a filter is the only bulk mutation of card
/// visibility — `plan_filter` turns the selection into a set of staggered
/// show transitions and immediate hide transitions for the reveal machine.

use crate::state::project::{capitalize, Card};
use crate::state::reveal::RevealState;

/// The currently selected filter: the wildcard or one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterToken {
    All,
    Category(String),
}

impl FilterToken {
    /// Case-insensitive category match; the wildcard matches everything.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            FilterToken::All => true,
            FilterToken::Category(token) => token.to_lowercase() == category.to_lowercase(),
        }
    }
}

/// One button in the filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterControl {
    pub token: FilterToken,
    pub label: String,
}

/// Build the filter controls: the wildcard first, then one control per
/// distinct non-empty category in the order categories were first seen.
/// Labels are the category with its first character uppercased.
pub fn build_filters<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<FilterControl> {
    let mut controls = vec![FilterControl {
        token: FilterToken::All,
        label: "All".to_string(),
    }];

    let mut seen: Vec<&str> = Vec::new();
    for category in categories {
        if category.trim().is_empty() || seen.contains(&category) {
            continue;
        }
        seen.push(category);
        controls.push(FilterControl {
            token: FilterToken::Category(category.to_string()),
            label: capitalize(category),
        });
    }

    controls
}

/// A show transition to schedule, delayed by the card's ordinal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledShow {
    pub index: usize,
    pub epoch: u64,
    pub delay_ms: u64,
}

/// A hide transition whose completion fires after the fade duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub index: usize,
    pub epoch: u64,
}

/// Everything a filter application needs to set in motion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterPlan {
    pub shows: Vec<ScheduledShow>,
    pub hides: Vec<ScheduledHide>,
    /// How many cards the filter leaves visible — zero means the
    /// empty-state indicator should appear.
    pub visible_count: usize,
}

/// Apply `token` over the card set: matching cards move toward visible with
/// a per-index stagger, the rest move toward hidden. Cards already in the
/// right state are left alone, which makes re-applying the active filter a
/// no-op beyond reaffirming what is already visible.
pub fn plan_filter(
    token: &FilterToken,
    cards: &[Card],
    reveals: &mut [RevealState],
    stagger_ms: u64,
) -> FilterPlan {
    let mut plan = FilterPlan::default();

    for (index, (card, reveal)) in cards.iter().zip(reveals.iter_mut()).enumerate() {
        if token.matches(&card.category) {
            plan.visible_count += 1;
            if let Some(epoch) = reveal.begin_show() {
                plan.shows.push(ScheduledShow {
                    index,
                    epoch,
                    delay_ms: index as u64 * stagger_ms,
                });
            }
        } else if let Some(epoch) = reveal.begin_hide() {
            plan.hides.push(ScheduledHide { index, epoch });
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::project::ProjectRecord;
    use crate::state::reveal::Visibility;

    fn cards_with_categories(categories: &[&str]) -> Vec<Card> {
        categories
            .iter()
            .map(|category| {
                let record = ProjectRecord {
                    id: None,
                    title: format!("{} project", category),
                    desc: String::new(),
                    category: category.to_string(),
                    tech: vec![],
                    screenshots: vec![],
                    image: None,
                    live: None,
                    badges: vec![],
                };
                Card::from_record(&record, 80)
            })
            .collect()
    }

    fn settle(reveals: &mut [RevealState], plan: &FilterPlan) {
        for show in &plan.shows {
            reveals[show.index].complete_show(show.epoch);
        }
        for hide in &plan.hides {
            reveals[hide.index].complete_hide(hide.epoch);
        }
    }

    #[test]
    fn test_controls_follow_first_seen_order_and_capitalize() {
        let cards = cards_with_categories(&["web", "web", "design", "data", "design"]);
        let controls = build_filters(cards.iter().map(|c| c.category.as_str()));

        let labels: Vec<&str> = controls.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["All", "Web", "Design", "Data"]);
        assert_eq!(controls[0].token, FilterToken::All);
    }

    #[test]
    fn test_wildcard_shows_every_card() {
        let cards = cards_with_categories(&["web", "design", "data"]);
        let mut reveals = vec![RevealState::hidden(); cards.len()];

        let plan = plan_filter(&FilterToken::All, &cards, &mut reveals, 60);
        assert_eq!(plan.visible_count, 3);
        assert_eq!(plan.shows.len(), 3);
        settle(&mut reveals, &plan);

        assert!(reveals
            .iter()
            .all(|r| r.visibility() == Visibility::Showing));
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let cards = cards_with_categories(&["Web", "design"]);
        let mut reveals = vec![RevealState::hidden(); cards.len()];

        let plan = plan_filter(
            &FilterToken::Category("web".to_string()),
            &cards,
            &mut reveals,
            60,
        );
        settle(&mut reveals, &plan);

        assert_eq!(plan.visible_count, 1);
        assert_eq!(reveals[0].visibility(), Visibility::Showing);
        assert_eq!(reveals[1].visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_stagger_delay_is_proportional_to_ordinal_index() {
        let cards = cards_with_categories(&["web", "web", "web"]);
        let mut reveals = vec![RevealState::hidden(); cards.len()];

        let plan = plan_filter(&FilterToken::All, &cards, &mut reveals, 60);
        let delays: Vec<u64> = plan.shows.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 60, 120]);
    }

    #[test]
    fn test_reapplying_active_filter_is_idempotent() {
        let cards = cards_with_categories(&["web", "design"]);
        let mut reveals = vec![RevealState::hidden(); cards.len()];

        let token = FilterToken::Category("web".to_string());
        let first = plan_filter(&token, &cards, &mut reveals, 60);
        settle(&mut reveals, &first);
        let visible_after_first: Vec<Visibility> =
            reveals.iter().map(|r| r.visibility()).collect();

        let second = plan_filter(&token, &cards, &mut reveals, 60);
        assert!(second.shows.is_empty());
        assert!(second.hides.is_empty());
        assert_eq!(second.visible_count, first.visible_count);
        let visible_after_second: Vec<Visibility> =
            reveals.iter().map(|r| r.visibility()).collect();
        assert_eq!(visible_after_first, visible_after_second);
    }

    #[test]
    fn test_unmatched_filter_reports_zero_visible() {
        let cards = cards_with_categories(&["web", "design"]);
        let mut reveals = vec![RevealState::hidden(); cards.len()];
        // Show everything first, then filter to a category nothing has
        let all = plan_filter(&FilterToken::All, &cards, &mut reveals, 60);
        settle(&mut reveals, &all);

        let plan = plan_filter(
            &FilterToken::Category("games".to_string()),
            &cards,
            &mut reveals,
            60,
        );
        assert_eq!(plan.visible_count, 0);
        assert_eq!(plan.hides.len(), 2);
    }
}
