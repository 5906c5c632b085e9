//! Natural-language command interpreter
//!
//! Turns a typed or transcribed command into ranked, typed, validated
//! actions:
//!
//! ```text
//! text -> decompose -> per segment: match -> normalize -> rank -> validate
//! ```
//!
//! The [`Interpreter`] owns an immutable catalog and holds no per-call state,
//! so one instance can be shared across threads.

pub mod catalog;
pub mod compose;
pub mod describe;
pub mod help;
pub mod intent;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod rank;
pub mod validate;

pub use catalog::{Catalog, CatalogBuilder, RuleSpec};
pub use help::get_action_help;
pub use intent::{ActionOrigin, Intent, ParamValue, Params, ParsedAction};
pub use validate::{ScreenSize, ValidationResult, Validator};

use crate::config::Config;
use crate::utils::Result;
use compose::Decomposer;

/// Command interpreter
#[derive(Debug, Clone)]
pub struct Interpreter {
    catalog: Catalog,
    decomposer: Decomposer,
    validator: Validator,
}

impl Interpreter {
    /// Interpreter over the built-in catalog, without screen bounds
    pub fn new() -> Result<Self> {
        Self::with_catalog(Catalog::builtin()?, Validator::default())
    }

    /// Interpreter with extra rules and screen bounds taken from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = CatalogBuilder::new()
            .with_builtin_rules()
            .rules(config.extra_rules.iter().cloned())
            .build()?;
        Self::with_catalog(catalog, Validator::new(config.screen))
    }

    pub fn with_catalog(catalog: Catalog, validator: Validator) -> Result<Self> {
        Ok(Self {
            catalog,
            decomposer: Decomposer::new()?,
            validator,
        })
    }

    /// Replace the screen bounds used to validate mouse moves
    pub fn with_screen(mut self, screen: ScreenSize) -> Self {
        self.validator = Validator::new(Some(screen));
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Interpret a single command. Candidates of every matching intent are
    /// returned, best first; an empty list means nothing was recognized.
    pub fn parse_command(&self, text: &str) -> Vec<ParsedAction> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }
        log::debug!("analysing '{}'", text);

        let actions = matcher::match_text(&self.catalog, text)
            .into_iter()
            .map(|candidate| {
                let params = normalize::normalize(candidate.intent, candidate.slots);
                ParsedAction::new(candidate.intent, params, candidate.confidence, text)
            })
            .collect();
        let ranked = rank::rank(actions);

        if ranked.is_empty() {
            log::debug!("no action recognized");
        } else {
            log::debug!("{} action(s) detected", ranked.len());
            for action in ranked.iter().take(3) {
                log::debug!(
                    "  - {}: {} (conf: {})",
                    action.intent(),
                    action.description(),
                    action.confidence()
                );
            }
        }
        ranked
    }

    /// Interpret a compound command. Every segment contributes all of its
    /// candidates; a pause is inserted ahead of each later segment.
    pub fn parse_complex_command(&self, text: &str) -> Vec<ParsedAction> {
        let segments = self
            .decomposer
            .decompose(text)
            .iter()
            .map(|segment| self.parse_command(segment))
            .collect();
        compose::assemble(segments)
    }

    /// Like [`Interpreter::parse_complex_command`], keeping only the best
    /// action of each segment
    pub fn plan_complex_command(&self, text: &str) -> Vec<ParsedAction> {
        let segments = self
            .decomposer
            .decompose(text)
            .iter()
            .map(|segment| {
                let mut actions = self.parse_command(segment);
                actions.truncate(1);
                actions
            })
            .collect();
        compose::assemble(segments)
    }

    /// Check whether an action may be executed
    pub fn validate_action(&self, action: &ParsedAction) -> ValidationResult {
        self.validator.validate(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn intents(actions: &[ParsedAction]) -> Vec<Intent> {
        actions.iter().map(|a| a.intent()).collect()
    }

    #[test]
    fn test_interpreter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpreter>();
    }

    #[test]
    fn test_original_text_is_the_trimmed_segment() {
        let interpreter = Interpreter::new().unwrap();
        let actions = interpreter.parse_command("  Lance Firefox ");
        assert_eq!(actions[0].intent(), Intent::AppLaunch);
        assert_eq!(actions[0].original_text(), "Lance Firefox");
        assert_eq!(actions[0].parameters().text("app_name"), Some("Firefox"));
    }

    #[test]
    fn test_ambiguous_command_exposes_all_candidates() {
        let interpreter = Interpreter::new().unwrap();
        let actions = interpreter.parse_command("ouvre Word");
        assert_eq!(intents(&actions), vec![Intent::AppLaunch, Intent::WindowControl]);
        assert_eq!(actions[1].parameters().text("action"), Some("open"));
    }

    #[test]
    fn test_plan_keeps_best_action_per_segment() {
        let interpreter = Interpreter::new().unwrap();
        let plan = interpreter.plan_complex_command("appuie sur Entrée puis ouvre Word");
        assert_eq!(intents(&plan), vec![Intent::Click, Intent::Wait, Intent::AppLaunch]);
        assert!(plan[1].is_synthetic());

        let all = interpreter.parse_complex_command("appuie sur Entrée puis ouvre Word");
        assert_eq!(
            intents(&all),
            vec![Intent::Click, Intent::KeyPress, Intent::Wait, Intent::AppLaunch, Intent::WindowControl]
        );
    }

    #[test]
    fn test_from_config_uses_extra_rules_and_screen() {
        let config = Config {
            screen: Some(ScreenSize::new(800, 600)),
            extra_rules: vec![RuleSpec::new(Intent::Screenshot, r"\bsnap\b", &[], 0.6)],
            ..Config::default()
        };
        let interpreter = Interpreter::from_config(&config).unwrap();

        let actions = interpreter.parse_command("snap");
        assert_eq!(intents(&actions), vec![Intent::Screenshot]);

        let moves = interpreter.parse_command("déplace la souris vers 900, 10");
        assert!(!interpreter.validate_action(&moves[0]).valid);
    }

    #[test]
    fn test_with_screen() {
        let interpreter = Interpreter::new().unwrap().with_screen(ScreenSize::new(100, 100));
        let moves = interpreter.parse_command("va à 50, 150");
        let result = interpreter.validate_action(&moves[0]);
        assert_eq!(result.message, "coordinates off screen: (50, 150)");
    }
}
