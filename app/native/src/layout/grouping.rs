//! Card grouping - partitions cards into titled, prioritized groups.
//!
//! Completion is checked first: every completed card lands in the completed
//! group regardless of kind. Active cards are split by quiz-ness. Empty groups
//! are omitted and the result is ordered by descending priority.

use serde::Serialize;

use super::ClassifiedCard;
use crate::config::{GroupSpec, GroupingConfig};

/// Which partition a group represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Quizzes,
    Materials,
    Completed,
}

/// A titled partition of cards laid out independently.
#[derive(Debug, Clone)]
pub struct CardGroup<'a> {
    pub kind: GroupKind,
    pub title: String,
    pub cards: Vec<ClassifiedCard<'a>>,
    pub priority: i32,
    pub show_header: bool,
    pub is_completed: bool,
}

impl<'a> CardGroup<'a> {
    fn new(kind: GroupKind, spec: &GroupSpec, cards: Vec<ClassifiedCard<'a>>) -> Self {
        Self {
            kind,
            title: spec.title.clone(),
            cards,
            priority: spec.priority,
            show_header: false,
            is_completed: kind == GroupKind::Completed,
        }
    }
}

/// Partitions classified cards into ordered groups.
///
/// Relative card order inside each group follows the input order.
#[must_use]
pub fn group_cards<'a>(
    cards: &[ClassifiedCard<'a>],
    config: &GroupingConfig,
) -> Vec<CardGroup<'a>> {
    let mut quizzes = Vec::new();
    let mut materials = Vec::new();
    let mut completed = Vec::new();

    for classified in cards {
        if classified.card.is_completed {
            completed.push(*classified);
        } else if classified.class.is_quiz() {
            quizzes.push(*classified);
        } else {
            materials.push(*classified);
        }
    }

    let mut groups = Vec::with_capacity(3);

    if !quizzes.is_empty() {
        let mut group = CardGroup::new(GroupKind::Quizzes, &config.quizzes, quizzes);
        group.show_header = group.cards.len() > config.quiz_header_min;
        groups.push(group);
    }

    if !materials.is_empty() {
        groups.push(CardGroup::new(GroupKind::Materials, &config.materials, materials));
    }

    if !completed.is_empty() {
        let mut group = CardGroup::new(GroupKind::Completed, &config.completed, completed);
        group.show_header = true;
        groups.push(group);
    }

    // Stable: equal configured priorities keep the quizzes/materials/completed order.
    groups.sort_by(|a, b| b.priority.cmp(&a.priority));
    groups
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::card::Card;
    use crate::layout::size_class::classify;

    fn classified(cards: &[Card]) -> Vec<ClassifiedCard<'_>> {
        cards.iter().map(|card| ClassifiedCard { card, class: classify(card) }).collect()
    }

    fn ids(group: &CardGroup<'_>) -> Vec<u128> {
        group.cards.iter().map(|c| c.card.id.as_u128()).collect()
    }

    #[test]
    fn test_group_empty() {
        let groups = group_cards(&[], &GroupingConfig::default());
        assert!(groups.is_empty());
    }

    #[test]
    fn test_group_order_and_membership() {
        let mut cards = Vec::new();
        for i in 0..3 {
            cards.push(Card::new(Uuid::from_u128(i), "done", "").completed());
        }
        for i in 10..12 {
            cards.push(Card::quiz(Uuid::from_u128(i), "quiz", 3));
        }
        for i in 20..24 {
            cards.push(Card::new(Uuid::from_u128(i), "material", "body"));
        }

        let input = classified(&cards);
        let groups = group_cards(&input, &GroupingConfig::default());

        let kinds: Vec<_> = groups.iter().map(|g| g.kind).collect();
        assert_eq!(kinds, vec![GroupKind::Quizzes, GroupKind::Materials, GroupKind::Completed]);
        let priorities: Vec<_> = groups.iter().map(|g| g.priority).collect();
        assert_eq!(priorities, vec![100, 80, 10]);

        assert_eq!(ids(&groups[0]), vec![10, 11]);
        assert_eq!(ids(&groups[1]), vec![20, 21, 22, 23]);
        assert_eq!(ids(&groups[2]), vec![0, 1, 2]);
    }

    #[test]
    fn test_completed_quiz_goes_to_completed() {
        let cards = vec![Card::quiz(Uuid::from_u128(1), "quiz", 6).completed()];
        let input = classified(&cards);
        let groups = group_cards(&input, &GroupingConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].kind, GroupKind::Completed);
        assert!(groups[0].is_completed);
        assert!(groups[0].show_header);
    }

    #[test]
    fn test_single_quiz_hides_header() {
        let cards = vec![Card::quiz(Uuid::from_u128(1), "quiz", 2)];
        let input = classified(&cards);
        let groups = group_cards(&input, &GroupingConfig::default());
        assert!(!groups[0].show_header);
    }

    #[test]
    fn test_multiple_quizzes_show_header() {
        let cards = vec![
            Card::quiz(Uuid::from_u128(1), "quiz", 2),
            Card::quiz(Uuid::from_u128(2), "quiz", 2),
        ];
        let input = classified(&cards);
        let groups = group_cards(&input, &GroupingConfig::default());
        assert!(groups[0].show_header);
    }

    #[test]
    fn test_materials_never_show_header() {
        let cards: Vec<_> = (0..5).map(|i| Card::new(Uuid::from_u128(i), "m", "")).collect();
        let input = classified(&cards);
        let groups = group_cards(&input, &GroupingConfig::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Materials");
        assert!(!groups[0].show_header);
        assert!(!groups[0].is_completed);
    }

    #[test]
    fn test_custom_priorities_reorder_groups() {
        let mut config = GroupingConfig::default();
        config.completed.priority = 200;

        let cards = vec![
            Card::new(Uuid::from_u128(1), "m", ""),
            Card::new(Uuid::from_u128(2), "done", "").completed(),
        ];
        let input = classified(&cards);
        let groups = group_cards(&input, &config);

        assert_eq!(groups[0].kind, GroupKind::Completed);
        assert_eq!(groups[1].kind, GroupKind::Materials);
    }
}
