//! Validator: decides whether an action may be handed to automation
//!
//! Checks are per intent. Intents without a rule always pass.

use serde::{Deserialize, Serialize};

use super::intent::{Intent, ParsedAction};

/// Hard ceiling on a single wait, in seconds
pub const MAX_WAIT_SECONDS: f64 = 60.0;

/// Screen dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y)
    }
}

/// Outcome of a validation check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: "valid action".to_string(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

impl From<ValidationResult> for (bool, String) {
    fn from(result: ValidationResult) -> Self {
        (result.valid, result.message)
    }
}

/// Per-intent action checks, with optional screen bounds
#[derive(Debug, Clone, Default)]
pub struct Validator {
    screen: Option<ScreenSize>,
}

impl Validator {
    pub fn new(screen: Option<ScreenSize>) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> Option<ScreenSize> {
        self.screen
    }

    pub fn validate(&self, action: &ParsedAction) -> ValidationResult {
        let params = action.parameters();
        match action.intent() {
            Intent::Click => {
                let has_target = params.text("target").is_some_and(|t| !t.trim().is_empty());
                let has_coords = params.int("x").is_some() && params.int("y").is_some();
                if !has_target && !has_coords {
                    return ValidationResult::fail("click target not specified");
                }
            }
            Intent::Type => {
                if params.text("text").map_or(true, str::is_empty) {
                    return ValidationResult::fail("text to type not specified");
                }
            }
            Intent::MouseMove => {
                let (Some(x), Some(y)) = (params.int("x"), params.int("y")) else {
                    return ValidationResult::fail("missing move coordinates");
                };
                if let Some(screen) = self.screen {
                    if !screen.contains(x, y) {
                        return ValidationResult::fail(format!("coordinates off screen: ({}, {})", x, y));
                    }
                }
            }
            Intent::Wait => {
                let seconds = params.float("seconds").unwrap_or(0.0);
                if seconds <= 0.0 || seconds > MAX_WAIT_SECONDS || seconds.is_nan() {
                    return ValidationResult::fail(format!("invalid delay: {}s", seconds));
                }
            }
            Intent::Screenshot
            | Intent::FindText
            | Intent::Scroll
            | Intent::KeyPress
            | Intent::WindowControl
            | Intent::AppLaunch
            | Intent::FileOperation
            | Intent::OcrRead => {}
        }
        ValidationResult::ok()
    }
}
