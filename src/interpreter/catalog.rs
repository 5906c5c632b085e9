//! Pattern Catalog
//!
//! An ordered set of pattern rules grouped by intent. Groups follow
//! [`Intent::ALL`]; rules inside a group keep their declaration order, which
//! is their precedence. The catalog is built once and never mutated.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::intent::Intent;
use crate::utils::{Error, Result};

/// Declarative form of a rule, as written in the built-in table or a config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub intent: Intent,
    pub pattern: String,
    #[serde(default)]
    pub slots: Vec<String>,
    pub confidence: f64,
}

impl RuleSpec {
    pub fn new(intent: Intent, pattern: &str, slots: &[&str], confidence: f64) -> Self {
        Self {
            intent,
            pattern: pattern.to_string(),
            slots: slots.iter().map(|s| s.to_string()).collect(),
            confidence,
        }
    }
}

/// A compiled rule
#[derive(Debug, Clone)]
pub struct PatternRule {
    intent: Intent,
    regex: Regex,
    slots: Vec<String>,
    confidence: f64,
}

impl PatternRule {
    fn compile(spec: &RuleSpec) -> Result<Self> {
        if !(0.0..=1.0).contains(&spec.confidence) {
            return Err(Error::InvalidConfidence {
                intent: spec.intent,
                confidence: spec.confidence,
            });
        }

        let regex = Regex::new(&format!("(?i){}", spec.pattern)).map_err(|e| Error::InvalidPattern {
            intent: spec.intent,
            pattern: spec.pattern.clone(),
            message: e.to_string(),
        })?;

        // captures_len counts the implicit whole-match group
        let groups = regex.captures_len() - 1;
        if groups != spec.slots.len() {
            return Err(Error::SlotMismatch {
                intent: spec.intent,
                pattern: spec.pattern.clone(),
                slots: spec.slots.len(),
                groups,
            });
        }

        Ok(Self {
            intent: spec.intent,
            regex,
            slots: spec.slots.clone(),
            confidence: spec.confidence,
        })
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}

/// All rules of one intent
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub intent: Intent,
    pub rules: Vec<PatternRule>,
}

/// The immutable pattern catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    groups: Vec<RuleGroup>,
}

impl Catalog {
    /// Catalog made of the built-in rules only
    pub fn builtin() -> Result<Self> {
        CatalogBuilder::new().with_builtin_rules().build()
    }

    /// Rule groups in catalog-declaration order
    pub fn groups(&self) -> &[RuleGroup] {
        &self.groups
    }

    pub fn rules_for(&self, intent: Intent) -> &[PatternRule] {
        self.groups
            .iter()
            .find(|g| g.intent == intent)
            .map(|g| g.rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rules.len()).sum()
    }
}

/// Collects rule specs and compiles them into a [`Catalog`]
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    specs: Vec<RuleSpec>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin_rules(mut self) -> Self {
        self.specs.extend(builtin_rules());
        self
    }

    pub fn rule(mut self, spec: RuleSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn rules(mut self, specs: impl IntoIterator<Item = RuleSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Compile every rule. Fails on the first invalid rule or on an intent
    /// left without any rule.
    pub fn build(self) -> Result<Catalog> {
        let mut groups = Vec::with_capacity(Intent::ALL.len());

        for intent in Intent::ALL {
            let rules = self
                .specs
                .iter()
                .filter(|spec| spec.intent == intent)
                .map(PatternRule::compile)
                .collect::<Result<Vec<_>>>()?;

            if rules.is_empty() {
                return Err(Error::MissingRules { intent });
            }
            groups.push(RuleGroup { intent, rules });
        }

        log::debug!(
            "catalog built: {} rules over {} intents",
            groups.iter().map(|g| g.rules.len()).sum::<usize>(),
            groups.len()
        );
        Ok(Catalog { groups })
    }
}

// ==================== Built-in Rules ====================

const BUILTIN_RULES: &[(Intent, &str, &[&str], f64)] = &[
    // Click
    (
        Intent::Click,
        r"\bcli(?:c|ck|que[rz]?)\s+(?:sur\s+)?(?:(.+?)\s+)?(?:à|a|en)\s+(-?\d+)(?:\s*[,;x]\s*|\s+)(-?\d+)",
        &["target", "x", "y"],
        0.9,
    ),
    (Intent::Click, r"\bcli(?:c|ck|que[rz]?)\s+(?:sur\s+)?(.+)", &["target"], 0.9),
    (Intent::Click, r"\bappu(?:ie|ye)[rsz]?\s+(?:sur\s+)?(.+)", &["target"], 0.8),
    // Type
    (
        Intent::Type,
        r#"\b(?:[ée]cri(?:s|t|re|vez)|tape[rz]?|saisi(?:s|r|ssez)?)\s+["'«“‘]\s*(.+)\s*["'»”’]"#,
        &["text"],
        0.95,
    ),
    (
        Intent::Type,
        r"\b(?:[ée]cri(?:s|t|re|vez)|tape[rz]?|saisi(?:s|r|ssez)?)\s+(.+)",
        &["text"],
        0.8,
    ),
    // Screenshot
    (
        Intent::Screenshot,
        r"\b(?:capture|photo|image|screenshot)s?(?:\s+(?:d['’]\s*|de\s+l['’]\s*|du\s+|de\s+)?[ée]cran)?",
        &[],
        0.9,
    ),
    (Intent::Screenshot, r"\bcopie\s+(?:de\s+)?l['’e]\s*[ée]cran", &[], 0.8),
    // FindText
    (
        Intent::FindText,
        r#"\b(?:trouve|cherche|recherche)[rz]?\s+(?:le\s+texte\s+)?["'«“‘]\s*(.+)\s*["'»”’]"#,
        &["text"],
        0.9,
    ),
    (Intent::FindText, r"(?:\bo[uù]\s+est|\bmontre[\s-]moi)\s+(.+?)\s*\??\s*$", &["text"], 0.7),
    (
        Intent::FindText,
        r"\b(?:trouve|cherche|recherche)[rz]?\s+(?:le\s+texte\s+)?(.+)",
        &["text"],
        0.6,
    ),
    // Scroll
    (
        Intent::Scroll,
        r"\b(?:scroll(?:e|er)?|d[ée]fil(?:e|er|ez))\s+(?:(?:vers|en)\s+(?:le\s+|la\s+|l['’]\s*)?|à\s+)?(haut|bas|gauche|droite|up|down|left|right)\b(?:\s+de\s+(\d+))?",
        &["direction", "amount"],
        0.9,
    ),
    (Intent::Scroll, r"\b(?:scroll(?:e|er)?|d[ée]fil(?:e|er|ez))\s+(?:de\s+)?(-?\d+)", &["amount"], 0.8),
    // KeyPress
    (
        Intent::KeyPress,
        r"\b(?:appu(?:ie|ye)[rsz]?|presse[rz]?)\s+sur\s+(?:la\s+)?(?:touche\s+)?([^+]+)$",
        &["key"],
        0.8,
    ),
    (
        Intent::KeyPress,
        r"\b((?:ctrl|control|alt|shift|maj|cmd|win)(?:\s*\+\s*[^\s+]+)+)",
        &["combination"],
        0.9,
    ),
    (Intent::KeyPress, r"\btouche\s+([^\s,.;!?]+)", &["key"], 0.7),
    // WindowControl
    (
        Intent::WindowControl,
        r"\b(fermer|ferme|ouvrir|ouvre|minimiser|minimise|maximiser|maximise|r[ée]duire|r[ée]duis|agrandir|agrandis|redimensionner|redimensionne)\s+(?:la\s+|cette\s+|une\s+)?fen[êe]tre",
        &["action"],
        0.9,
    ),
    (Intent::WindowControl, r"\b(fermer|ferme|ouvrir|ouvre|quitter|quitte)\s+(.+)", &["action", "target"], 0.7),
    // AppLaunch
    (Intent::AppLaunch, r"\b(?:lance[rz]?|ouvr(?:e|ir|ez)|d[ée]marre[rz]?)\s+(.+)", &["app_name"], 0.8),
    (Intent::AppLaunch, r"\bva\s+sur\s+(.+)", &["website"], 0.7),
    // FileOperation
    (
        Intent::FileOperation,
        r"\b(cr[ée]e)[rz]?\s+(?:(?:un|une|le|la|nouveau|nouvel|nouvelle)\s+)*(dossier|fichier|r[ée]pertoire)\s+(.+)",
        &["operation", "kind", "filename"],
        0.9,
    ),
    (Intent::FileOperation, r"\b(supprime|efface)[rz]?\s+(.+)", &["operation", "filename"], 0.8),
    // MouseMove
    (
        Intent::MouseMove,
        r"\b(?:d[ée]place|bouge)[rz]?\s+(?:la\s+)?souris\s+(?:vers\s+|à\s+|en\s+)?(-?\d+)(?:\s*[,;x]\s*|\s+)(-?\d+)",
        &["x", "y"],
        0.9,
    ),
    (Intent::MouseMove, r"\bva\s+(?:vers\s+|à\s+)?(-?\d+)(?:\s*[,;x]\s*|\s+)(-?\d+)", &["x", "y"], 0.8),
    (Intent::MouseMove, r"\b(?:d[ée]place|bouge)[rz]?\s+(?:la\s+)?souris", &[], 0.5),
    // Wait
    (
        Intent::Wait,
        r"\b(?:attend(?:s|re|ez)?|patiente[rz]?)\s+(\d+(?:[.,]\d+)?)\s*(secondes?|sec|s|minutes?|min|mn)\b",
        &["duration", "unit"],
        0.9,
    ),
    (
        Intent::Wait,
        r"\b(?:pause|d[ée]lai)\s+(?:de\s+)?(\d+(?:[.,]\d+)?)(?:\s*(secondes?|sec|s|minutes?|min|mn)\b)?",
        &["duration", "unit"],
        0.8,
    ),
    (Intent::Wait, r"\b(?:attend(?:s|re|ez)?|patiente[rz]?)\s+(\d+(?:[.,]\d+)?)", &["duration"], 0.7),
    // OcrRead
    (
        Intent::OcrRead,
        r"\b(?:lis|lire|dis[\s-]moi)\s+(?:ce\s+qui\s+est\s+)?(?:[ée]crit|affich[ée])",
        &[],
        0.9,
    ),
    (Intent::OcrRead, r"\bque\s+dit\s+l['’e]\s*[ée]cran", &[], 0.8),
    (
        Intent::OcrRead,
        r"\blis\s+(?:l['’]\s*|le\s+texte\s+(?:de\s+l['’]\s*)?)[ée]cran",
        &[],
        0.8,
    ),
];

/// The built-in rule table as specs
pub fn builtin_rules() -> Vec<RuleSpec> {
    BUILTIN_RULES
        .iter()
        .map(|(intent, pattern, slots, confidence)| RuleSpec::new(*intent, pattern, slots, *confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_every_intent() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.groups().len(), Intent::ALL.len());
        for (group, intent) in catalog.groups().iter().zip(Intent::ALL) {
            assert_eq!(group.intent, intent);
            assert!(!group.rules.is_empty());
        }
        assert_eq!(catalog.rule_count(), BUILTIN_RULES.len());
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let catalog = Catalog::builtin().unwrap();
        let click = catalog.rules_for(Intent::Click);
        assert_eq!(click[0].slots(), &["target", "x", "y"]);
        assert_eq!(click[1].slots(), &["target"]);
        assert_eq!(click[2].confidence(), 0.8);
        assert!(click.iter().all(|rule| rule.intent() == Intent::Click));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let err = CatalogBuilder::new()
            .with_builtin_rules()
            .rule(RuleSpec::new(Intent::Click, r"clique (", &["target"], 0.5))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { intent: Intent::Click, .. }));
        assert!(err.is_catalog_error());
    }

    #[test]
    fn test_slot_mismatch_is_rejected() {
        let err = CatalogBuilder::new()
            .with_builtin_rules()
            .rule(RuleSpec::new(Intent::Wait, r"dors (\d+)", &["duration", "unit"], 0.5))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::SlotMismatch {
                intent: Intent::Wait,
                pattern: r"dors (\d+)".to_string(),
                slots: 2,
                groups: 1,
            }
        );
    }

    #[test]
    fn test_confidence_out_of_range_is_rejected() {
        let err = CatalogBuilder::new()
            .with_builtin_rules()
            .rule(RuleSpec::new(Intent::Screenshot, r"snap", &[], 1.5))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfidence { .. }));
    }

    #[test]
    fn test_intent_without_rules_is_rejected() {
        let err = CatalogBuilder::new()
            .rule(RuleSpec::new(Intent::Click, r"clique", &[], 0.9))
            .build()
            .unwrap_err();
        assert_eq!(err, Error::MissingRules { intent: Intent::Type });
    }

    #[test]
    fn test_extra_rules_come_after_builtin_ones() {
        let catalog = CatalogBuilder::new()
            .with_builtin_rules()
            .rule(RuleSpec::new(Intent::Screenshot, r"\bsnap\b", &[], 0.6))
            .build()
            .unwrap();
        let rules = catalog.rules_for(Intent::Screenshot);
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[2].confidence(), 0.6);
    }

    #[test]
    fn test_rule_spec_from_json() {
        let spec: RuleSpec = serde_json::from_str(
            r#"{"intent": "app_launch", "pattern": "run (.+)", "slots": ["app_name"], "confidence": 0.75}"#,
        )
        .unwrap();
        assert_eq!(spec, RuleSpec::new(Intent::AppLaunch, "run (.+)", &["app_name"], 0.75));
    }
}
