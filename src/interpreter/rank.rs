//! Ranker: orders actions by confidence, highest first

use std::cmp::Ordering;

use super::intent::ParsedAction;

/// Sort by confidence descending. The sort is stable, so equal confidences
/// keep catalog order. Only the first action of a given intent is kept.
pub fn rank(actions: Vec<ParsedAction>) -> Vec<ParsedAction> {
    let mut ranked: Vec<ParsedAction> = Vec::with_capacity(actions.len());
    for action in actions {
        if !ranked.iter().any(|a| a.intent() == action.intent()) {
            ranked.push(action);
        }
    }

    ranked.sort_by(|a, b| {
        b.confidence()
            .partial_cmp(&a.confidence())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::intent::{Intent, Params};

    fn action(intent: Intent, confidence: f64) -> ParsedAction {
        ParsedAction::new(intent, Params::new(), confidence, "test")
    }

    fn intents(actions: &[ParsedAction]) -> Vec<Intent> {
        actions.iter().map(|a| a.intent()).collect()
    }

    #[test]
    fn test_sorted_by_confidence() {
        let ranked = rank(vec![
            action(Intent::WindowControl, 0.7),
            action(Intent::AppLaunch, 0.8),
            action(Intent::Screenshot, 0.9),
        ]);
        assert_eq!(intents(&ranked), vec![Intent::Screenshot, Intent::AppLaunch, Intent::WindowControl]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        for _ in 0..10 {
            let ranked = rank(vec![
                action(Intent::Click, 0.8),
                action(Intent::KeyPress, 0.8),
                action(Intent::Type, 0.95),
            ]);
            assert_eq!(intents(&ranked), vec![Intent::Type, Intent::Click, Intent::KeyPress]);
        }
    }

    #[test]
    fn test_duplicate_intent_keeps_first() {
        let ranked = rank(vec![action(Intent::Click, 0.5), action(Intent::Click, 0.9)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].confidence(), 0.5);
    }
}
