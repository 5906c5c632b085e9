//! Structured Feedback Module
//!
//! Machine-readable output of an interpretation:
//! - the ranked actions with their typed parameters
//! - the validation verdict of each action
//! - JSON rendering for the UI and scripts

use serde::Serialize;

use crate::interpreter::{Interpreter, ParsedAction, ValidationResult};

// ==================== Interpretation Report ====================

/// One action with its validation verdict
#[derive(Debug, Clone, Serialize)]
pub struct ActionReport {
    #[serde(flatten)]
    pub action: ParsedAction,

    pub validation: ValidationResult,
}

/// Complete interpretation of one command
#[derive(Debug, Clone, Serialize)]
pub struct InterpretationReport {
    /// Command as received
    pub input: String,

    /// Whether the command was decomposed on connectives
    pub compound: bool,

    /// Whether at least one matched action came out
    pub recognized: bool,

    /// Actions, best first within each segment
    pub actions: Vec<ActionReport>,
}

impl InterpretationReport {
    /// Interpret `input` and validate every resulting action
    pub fn build(interpreter: &Interpreter, input: &str, compound: bool) -> Self {
        let actions = if compound {
            interpreter.parse_complex_command(input)
        } else {
            interpreter.parse_command(input)
        };
        Self::from_actions(interpreter, input, compound, actions)
    }

    pub fn from_actions(
        interpreter: &Interpreter,
        input: &str,
        compound: bool,
        actions: Vec<ParsedAction>,
    ) -> Self {
        let recognized = actions.iter().any(|a| !a.is_synthetic());
        let actions = actions
            .into_iter()
            .map(|action| ActionReport {
                validation: interpreter.validate_action(&action),
                action,
            })
            .collect();

        Self {
            input: input.to_string(),
            compound,
            recognized,
            actions,
        }
    }

    /// Top-ranked action, if any
    pub fn best(&self) -> Option<&ActionReport> {
        self.actions.first()
    }

    /// Output as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Output as compact JSON (for programmatic use)
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    #[test]
    fn test_report_json_shape() {
        let interpreter = Interpreter::new().unwrap();
        let report = InterpretationReport::build(&interpreter, "clique à 100, 200", false);
        let value: Value = serde_json::from_str(&report.to_json_compact()).unwrap();

        assert_eq!(value["recognized"], json!(true));
        assert_eq!(value["actions"][0]["intent"], json!("click"));
        assert_eq!(value["actions"][0]["parameters"], json!({"x": 100, "y": 200}));
        assert_eq!(value["actions"][0]["origin"], json!("matched"));
        assert_eq!(value["actions"][0]["validation"]["valid"], json!(true));
    }

    #[test]
    fn test_unrecognized_command() {
        let interpreter = Interpreter::new().unwrap();
        let report = InterpretationReport::build(&interpreter, "quel temps fait-il", true);
        assert!(!report.recognized);
        assert!(report.best().is_none());
        assert!(report.to_json().contains("\"actions\": []"));
    }

    #[test]
    fn test_validation_failures_are_reported() {
        let interpreter = Interpreter::new().unwrap();
        let report = InterpretationReport::build(&interpreter, "attends 2 minutes", false);
        let best = report.best().unwrap();
        assert!(!best.validation.valid);
        assert_eq!(best.validation.message, "invalid delay: 120s");
    }
}
