//! voxctl
//!
//! Natural-language command interpreter for desktop automation. Typed or
//! transcribed commands ("clique sur OK puis attends 2 secondes") become
//! ordered, typed, validated actions for an automation back end.

pub mod automation;
pub mod config;
pub mod feedback;
pub mod interpreter;
pub mod utils;
pub mod wake;

pub use interpreter::{get_action_help, Intent, Interpreter, ParsedAction, ValidationResult};
pub use utils::{Error, Result};
