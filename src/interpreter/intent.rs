//! Intent Layer: what a command asks the system to do
//!
//! An [`Intent`] is the closed set of system actions a command can express.
//! A [`ParsedAction`] is an intent with typed parameters, a confidence and
//! a description, ready for validation and execution.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::describe::describe;

/// Categories of system action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Click,
    Type,
    Screenshot,
    FindText,
    Scroll,
    KeyPress,
    WindowControl,
    AppLaunch,
    FileOperation,
    MouseMove,
    Wait,
    OcrRead,
}

impl Intent {
    /// Every intent, in catalog-declaration order
    pub const ALL: [Intent; 12] = [
        Intent::Click,
        Intent::Type,
        Intent::Screenshot,
        Intent::FindText,
        Intent::Scroll,
        Intent::KeyPress,
        Intent::WindowControl,
        Intent::AppLaunch,
        Intent::FileOperation,
        Intent::MouseMove,
        Intent::Wait,
        Intent::OcrRead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Click => "click",
            Intent::Type => "type",
            Intent::Screenshot => "screenshot",
            Intent::FindText => "find_text",
            Intent::Scroll => "scroll",
            Intent::KeyPress => "key_press",
            Intent::WindowControl => "window_control",
            Intent::AppLaunch => "app_launch",
            Intent::FileOperation => "file_operation",
            Intent::MouseMove => "mouse_move",
            Intent::Wait => "wait",
            Intent::OcrRead => "ocr_read",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==================== Parameters ====================

/// A typed parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn text(s: impl Into<String>) -> Self {
        ParamValue::Text(s.into())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Int(i) => write!(f, "{}", i),
            ParamValue::Float(x) => write!(f, "{}", x),
            ParamValue::Text(s) => f.write_str(s),
            ParamValue::List(items) => f.write_str(&items.join("+")),
        }
    }
}

/// Parameter map of an action, keyed by slot name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        self.0.insert(name.into(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Integer value; text slots are not coerced here
    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float value, widening integers
    pub fn float(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            ParamValue::Float(x) => Some(*x),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            ParamValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn list(&self, name: &str) -> Option<&[String]> {
        match self.get(name)? {
            ParamValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ==================== Parsed Action ====================

/// Where an action came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionOrigin {
    /// Produced by a pattern rule
    Matched,
    /// Inserted by the interpreter (pauses between compound segments)
    Synthetic,
}

/// Duration of the pause inserted between compound segments
pub const PAUSE_SECONDS: f64 = 0.5;

/// Confidence of the pause inserted between compound segments
pub const PAUSE_CONFIDENCE: f64 = 0.8;

/// A typed, described action ready for validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedAction {
    intent: Intent,
    parameters: Params,
    confidence: f64,
    original_text: String,
    description: String,
    origin: ActionOrigin,
}

impl ParsedAction {
    /// Create a matched action; the description is derived from the parameters
    pub fn new(intent: Intent, parameters: Params, confidence: f64, original_text: &str) -> Self {
        let description = describe(intent, &parameters);
        Self {
            intent,
            parameters,
            confidence: clamp_confidence(confidence),
            original_text: original_text.to_string(),
            description,
            origin: ActionOrigin::Matched,
        }
    }

    /// The automatic pause placed between two compound segments
    pub fn pause() -> Self {
        let mut parameters = Params::new();
        parameters.insert("seconds", ParamValue::Float(PAUSE_SECONDS));
        Self {
            intent: Intent::Wait,
            parameters,
            confidence: PAUSE_CONFIDENCE,
            original_text: "automatic delay".to_string(),
            description: "automatic pause between actions".to_string(),
            origin: ActionOrigin::Synthetic,
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn parameters(&self) -> &Params {
        &self.parameters
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn origin(&self) -> ActionOrigin {
        self.origin
    }

    pub fn is_synthetic(&self) -> bool {
        self.origin == ActionOrigin::Synthetic
    }
}

fn clamp_confidence(confidence: f64) -> f64 {
    if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    }
}
