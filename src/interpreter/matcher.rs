//! Matcher
//!
//! Runs the catalog against one command segment. Each intent contributes at
//! most one candidate: the first of its rules that matches.

use super::catalog::Catalog;
use super::intent::{Intent, ParamValue, Params};

/// An unvalidated, unranked match for one intent
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub intent: Intent,
    /// Raw text captures keyed by slot name
    pub slots: Params,
    pub confidence: f64,
    /// Index of the winning rule inside its intent group
    pub rule: usize,
}

/// Match a command against every intent of the catalog.
///
/// Matching is case-insensitive and need not consume the whole input.
/// Captures keep the case of the input; empty captures are left out.
pub fn match_text(catalog: &Catalog, text: &str) -> Vec<Candidate> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for group in catalog.groups() {
        for (index, rule) in group.rules.iter().enumerate() {
            let Some(caps) = rule.regex().captures(text) else {
                continue;
            };

            let mut slots = Params::new();
            for (i, name) in rule.slots().iter().enumerate() {
                if let Some(m) = caps.get(i + 1) {
                    let value = m.as_str().trim();
                    if !value.is_empty() {
                        slots.insert(name.clone(), ParamValue::text(value));
                    }
                }
            }

            log::trace!("{} matched rule #{} with {} slot(s)", group.intent, index, slots.len());
            candidates.push(Candidate {
                intent: group.intent,
                slots,
                confidence: rule.confidence(),
                rule: index,
            });
            break;
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intents(candidates: &[Candidate]) -> Vec<Intent> {
        candidates.iter().map(|c| c.intent).collect()
    }

    #[test]
    fn test_empty_input() {
        let catalog = Catalog::builtin().unwrap();
        assert!(match_text(&catalog, "").is_empty());
        assert!(match_text(&catalog, "   \t").is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(match_text(&catalog, "bonjour comment vas-tu").is_empty());
    }

    #[test]
    fn test_first_rule_wins_per_intent() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = match_text(&catalog, "clique sur valider à 10, 20");
        let click = candidates.iter().find(|c| c.intent == Intent::Click).unwrap();
        assert_eq!(click.rule, 0);
        assert_eq!(click.slots.text("target"), Some("valider"));
        assert_eq!(click.slots.text("x"), Some("10"));
        assert_eq!(click.slots.text("y"), Some("20"));
        assert_eq!(candidates.iter().filter(|c| c.intent == Intent::Click).count(), 1);
    }

    #[test]
    fn test_captures_keep_case() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = match_text(&catalog, "  Écris 'Bonjour le monde'  ");
        assert_eq!(intents(&candidates), vec![Intent::Type]);
        assert_eq!(candidates[0].slots.text("text"), Some("Bonjour le monde"));
        assert_eq!(candidates[0].confidence, 0.95);
    }

    #[test]
    fn test_absent_slot_is_not_inserted() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = match_text(&catalog, "scroll vers le haut");
        assert_eq!(candidates[0].intent, Intent::Scroll);
        assert_eq!(candidates[0].slots.text("direction"), Some("haut"));
        assert!(!candidates[0].slots.contains("amount"));
    }

    #[test]
    fn test_several_intents_in_catalog_order() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = match_text(&catalog, "appuie sur Entrée");
        assert_eq!(intents(&candidates), vec![Intent::Click, Intent::KeyPress]);
    }

    #[test]
    fn test_partial_mouse_move() {
        let catalog = Catalog::builtin().unwrap();
        let candidates = match_text(&catalog, "déplace la souris");
        assert_eq!(intents(&candidates), vec![Intent::MouseMove]);
        assert!(candidates[0].slots.is_empty());
        assert_eq!(candidates[0].confidence, 0.5);
    }
}
