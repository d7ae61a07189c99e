//! Turns raw physics contacts into game-level outcomes.

use std::collections::HashSet;

use flap_engine::{CollisionPair, EntityId};

use crate::category::Category;

/// What a contact means for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contact {
    /// The bird passed through a score trigger.
    Score { trigger: EntityId },
    /// The bird touched a pipe, the ground or the ceiling.
    Crash,
}

/// Classify one contact-begin event. Order of the two bodies does not matter.
pub fn classify(pair: &CollisionPair) -> Option<Contact> {
    if !pair.started {
        return None;
    }
    let a = Category::from_bits(pair.category_a)?;
    let b = Category::from_bits(pair.category_b)?;
    match (a, b) {
        (Category::Bird, Category::ScoreTrigger) => Some(Contact::Score { trigger: pair.entity_b }),
        (Category::ScoreTrigger, Category::Bird) => Some(Contact::Score { trigger: pair.entity_a }),
        (Category::Bird, Category::Obstacle) | (Category::Obstacle, Category::Bird) => {
            Some(Contact::Crash)
        }
        _ => None,
    }
}

/// Classify a step's events, dropping repeats of the same score contact.
pub fn resolve(events: &[CollisionPair]) -> Vec<Contact> {
    let mut seen = HashSet::new();
    events
        .iter()
        .filter_map(classify)
        .filter(|c| !matches!(c, Contact::Score { .. }) || seen.insert(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIRD: EntityId = EntityId(1);
    const PIPE: EntityId = EntityId(2);
    const TRIGGER: EntityId = EntityId(3);

    fn touch(a: (EntityId, Category), b: (EntityId, Category)) -> CollisionPair {
        CollisionPair::began((a.0, a.1.bits()), (b.0, b.1.bits()))
    }

    #[test]
    fn either_order_classifies_the_same() {
        let fwd = touch((BIRD, Category::Bird), (TRIGGER, Category::ScoreTrigger));
        let rev = touch((TRIGGER, Category::ScoreTrigger), (BIRD, Category::Bird));
        assert_eq!(classify(&fwd), Some(Contact::Score { trigger: TRIGGER }));
        assert_eq!(classify(&rev), classify(&fwd));

        let crash = touch((PIPE, Category::Obstacle), (BIRD, Category::Bird));
        assert_eq!(classify(&crash), Some(Contact::Crash));
    }

    #[test]
    fn unrelated_and_ending_contacts_are_ignored() {
        assert_eq!(classify(&touch((PIPE, Category::Obstacle), (TRIGGER, Category::ScoreTrigger))), None);
        assert_eq!(classify(&touch((PIPE, Category::Obstacle), (PIPE, Category::Obstacle))), None);

        let mut ended = touch((BIRD, Category::Bird), (PIPE, Category::Obstacle));
        ended.started = false;
        assert_eq!(classify(&ended), None);

        let unknown = CollisionPair::began((BIRD, 0b1000), (PIPE, Category::Obstacle.bits()));
        assert_eq!(classify(&unknown), None);
    }

    #[test]
    fn duplicate_score_events_in_one_step_collapse() {
        let events = [
            touch((BIRD, Category::Bird), (TRIGGER, Category::ScoreTrigger)),
            touch((TRIGGER, Category::ScoreTrigger), (BIRD, Category::Bird)),
            touch((BIRD, Category::Bird), (EntityId(9), Category::ScoreTrigger)),
        ];
        assert_eq!(
            resolve(&events),
            vec![Contact::Score { trigger: TRIGGER }, Contact::Score { trigger: EntityId(9) }]
        );
    }
}
