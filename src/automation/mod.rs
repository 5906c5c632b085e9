//! Automation boundary
//!
//! Converts parsed actions into typed back-end commands and runs them
//! through an [`Automation`] back end. Every action is validated first;
//! failures are reported per action as an [`Outcome`] and never abort the
//! rest of the plan.

mod dry_run;

pub use dry_run::DryRun;

use std::fmt;

use serde::Serialize;

use crate::interpreter::{Intent, ParsedAction, ScreenSize, Validator};
use crate::utils::{Error, Result};

// ==================== Commands ====================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Text(String),
    Position { x: i64, y: i64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Keys {
    Single(String),
    Chord(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchTarget {
    App(String),
    Website(String),
}

/// A typed back-end operation, one per intent
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Click { target: ClickTarget },
    Type { text: String },
    Screenshot,
    FindText { text: String },
    Scroll { clicks: i64, horizontal: bool },
    KeyPress { keys: Keys },
    Window { action: String, target: Option<String> },
    Launch { target: LaunchTarget },
    File { operation: String, kind: Option<String>, filename: String },
    MouseMove { x: i64, y: i64 },
    Wait { seconds: f64 },
    OcrRead,
}

impl Command {
    /// Build the command for an action. Fails when a parameter the back end
    /// needs is missing.
    pub fn from_action(action: &ParsedAction) -> Result<Self> {
        let intent = action.intent();
        let params = action.parameters();
        let text = |name: &'static str| {
            params
                .text(name)
                .map(str::to_string)
                .ok_or(Error::MissingParameter { intent, name })
        };
        let coordinate = |name: &'static str| params.int(name).ok_or(Error::MissingParameter { intent, name });

        let command = match intent {
            Intent::Click => match (params.int("x"), params.int("y")) {
                (Some(x), Some(y)) => Command::Click {
                    target: ClickTarget::Position { x, y },
                },
                _ => Command::Click {
                    target: ClickTarget::Text(text("target")?),
                },
            },
            Intent::Type => Command::Type { text: text("text")? },
            Intent::Screenshot => Command::Screenshot,
            Intent::FindText => Command::FindText { text: text("text")? },
            Intent::Scroll => Command::Scroll {
                clicks: params.int("clicks").unwrap_or(1),
                horizontal: params.bool("horizontal").unwrap_or(false),
            },
            Intent::KeyPress => match params.list("keys") {
                Some(keys) => Command::KeyPress {
                    keys: Keys::Chord(keys.to_vec()),
                },
                None => Command::KeyPress {
                    keys: Keys::Single(text("key")?),
                },
            },
            Intent::WindowControl => Command::Window {
                action: text("action")?,
                target: params.text("target").map(str::to_string),
            },
            Intent::AppLaunch => match params.text("app_name") {
                Some(name) => Command::Launch {
                    target: LaunchTarget::App(name.to_string()),
                },
                None => Command::Launch {
                    target: LaunchTarget::Website(text("website")?),
                },
            },
            Intent::FileOperation => Command::File {
                operation: text("operation")?,
                kind: params.text("kind").map(str::to_string),
                filename: text("filename")?,
            },
            Intent::MouseMove => Command::MouseMove {
                x: coordinate("x")?,
                y: coordinate("y")?,
            },
            Intent::Wait => Command::Wait {
                seconds: params
                    .float("seconds")
                    .ok_or(Error::MissingParameter { intent, name: "seconds" })?,
            },
            Intent::OcrRead => Command::OcrRead,
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Click { target: ClickTarget::Text(t) } => write!(f, "click({})", t),
            Command::Click { target: ClickTarget::Position { x, y } } => write!(f, "click({}, {})", x, y),
            Command::Type { text } => write!(f, "type({:?})", text),
            Command::Screenshot => write!(f, "screenshot()"),
            Command::FindText { text } => write!(f, "find_text({:?})", text),
            Command::Scroll { clicks, horizontal } => write!(f, "scroll({}, horizontal={})", clicks, horizontal),
            Command::KeyPress { keys: Keys::Single(key) } => write!(f, "key_press({})", key),
            Command::KeyPress { keys: Keys::Chord(keys) } => write!(f, "hotkey({})", keys.join("+")),
            Command::Window { action, target } => match target {
                Some(target) => write!(f, "window({}, {})", action, target),
                None => write!(f, "window({})", action),
            },
            Command::Launch { target: LaunchTarget::App(name) } => write!(f, "launch({})", name),
            Command::Launch { target: LaunchTarget::Website(site) } => write!(f, "open_website({})", site),
            Command::File { operation, filename, .. } => write!(f, "file({}, {})", operation, filename),
            Command::MouseMove { x, y } => write!(f, "mouse_move({}, {})", x, y),
            Command::Wait { seconds } => write!(f, "wait({}s)", seconds),
            Command::OcrRead => write!(f, "ocr_read()"),
        }
    }
}

// ==================== Back End ====================

/// An automation back end (mouse, keyboard, screen, applications)
pub trait Automation {
    fn execute(&mut self, command: &Command) -> Result<()>;

    /// Screen bounds, when the back end can report them
    fn screen_size(&self) -> Option<ScreenSize> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Status {
    Done,
    /// Blocked by validation; the message is meant for the user
    Rejected(String),
    Failed(String),
}

/// Result of running one action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub intent: Intent,
    pub description: String,
    #[serde(flatten)]
    pub status: Status,
}

impl Outcome {
    pub fn succeeded(&self) -> bool {
        self.status == Status::Done
    }
}

/// Validate and run each action in order.
///
/// The validator's screen bounds take precedence; otherwise the back end
/// is asked for its own.
pub fn execute_plan(
    actions: &[ParsedAction],
    validator: &Validator,
    backend: &mut dyn Automation,
) -> Vec<Outcome> {
    let gate = Validator::new(validator.screen().or_else(|| backend.screen_size()));

    actions
        .iter()
        .map(|action| {
            let status = match run_action(action, &gate, backend) {
                Ok(()) => Status::Done,
                Err(Error::Rejected(reason)) => {
                    log::warn!("action blocked: {}", reason);
                    Status::Rejected(reason)
                }
                Err(e) => {
                    log::warn!("action failed: {}", e);
                    Status::Failed(e.to_string())
                }
            };
            Outcome {
                intent: action.intent(),
                description: action.description().to_string(),
                status,
            }
        })
        .collect()
}

fn run_action(action: &ParsedAction, gate: &Validator, backend: &mut dyn Automation) -> Result<()> {
    let check = gate.validate(action);
    if !check.valid {
        return Err(Error::Rejected(check.message));
    }
    let command = Command::from_action(action)?;
    log::info!("executing {}", command);
    backend.execute(&command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Interpreter;
    use pretty_assertions::assert_eq;

    fn first(text: &str) -> ParsedAction {
        Interpreter::new().unwrap().parse_command(text).remove(0)
    }

    #[test]
    fn test_commands_from_actions() {
        assert_eq!(
            Command::from_action(&first("clique à 100, 200")).unwrap(),
            Command::Click { target: ClickTarget::Position { x: 100, y: 200 } }
        );
        assert_eq!(
            Command::from_action(&first("clique sur OK")).unwrap(),
            Command::Click { target: ClickTarget::Text("OK".to_string()) }
        );
        assert_eq!(
            Command::from_action(&first("ctrl+c")).unwrap(),
            Command::KeyPress { keys: Keys::Chord(vec!["ctrl".to_string(), "c".to_string()]) }
        );
        assert_eq!(
            Command::from_action(&first("scroll vers la droite")).unwrap(),
            Command::Scroll { clicks: 3, horizontal: true }
        );
        assert_eq!(
            Command::from_action(&first("va sur wikipedia.org")).unwrap(),
            Command::Launch { target: LaunchTarget::Website("wikipedia.org".to_string()) }
        );
    }

    #[test]
    fn test_missing_parameter() {
        let err = Command::from_action(&first("déplace la souris")).unwrap_err();
        assert_eq!(err, Error::MissingParameter { intent: Intent::MouseMove, name: "x" });
    }

    struct Flaky {
        ran: Vec<Command>,
    }

    impl Automation for Flaky {
        fn execute(&mut self, command: &Command) -> Result<()> {
            if *command == Command::OcrRead {
                return Err(Error::Backend("no OCR engine".to_string()));
            }
            self.ran.push(command.clone());
            Ok(())
        }

        fn screen_size(&self) -> Option<ScreenSize> {
            Some(ScreenSize::new(640, 480))
        }
    }

    #[test]
    fn test_plan_is_gated_and_never_aborts() {
        let interpreter = Interpreter::new().unwrap();
        let plan = interpreter
            .plan_complex_command("lis ce qui est écrit puis déplace la souris vers 900, 10 puis prends une capture");
        let mut backend = Flaky { ran: Vec::new() };
        let outcomes = execute_plan(&plan, interpreter.validator(), &mut backend);

        let statuses: Vec<&Status> = outcomes.iter().map(|o| &o.status).collect();
        assert_eq!(
            statuses,
            vec![
                &Status::Failed("Automation back end error: no OCR engine".to_string()),
                &Status::Done,
                &Status::Rejected("coordinates off screen: (900, 10)".to_string()),
                &Status::Done,
                &Status::Done,
            ]
        );
        assert_eq!(
            backend.ran,
            vec![Command::Wait { seconds: 0.5 }, Command::Wait { seconds: 0.5 }, Command::Screenshot]
        );
    }
}
