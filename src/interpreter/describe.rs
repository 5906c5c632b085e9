//! Human-readable action descriptions, spoken back before execution

use super::intent::{Intent, Params};

/// Longest typed text quoted verbatim in a description
const MAX_QUOTED: usize = 30;

pub fn describe(intent: Intent, params: &Params) -> String {
    match intent {
        Intent::Click => {
            let target = params.text("target").unwrap_or("position");
            match (params.int("x"), params.int("y")) {
                (Some(x), Some(y)) => format!("Click {} at ({}, {})", target, x, y),
                _ => format!("Click {}", target),
            }
        }
        Intent::Type => format!("Type '{}'", truncate(params.text("text").unwrap_or(""))),
        Intent::Screenshot => "Take a screenshot".to_string(),
        Intent::FindText => format!("Find the text '{}'", params.text("text").unwrap_or("")),
        Intent::Scroll => {
            let orientation = if params.bool("horizontal").unwrap_or(false) {
                "horizontal"
            } else {
                "vertical"
            };
            format!("Scroll {} by {}", orientation, params.int("clicks").unwrap_or(1))
        }
        Intent::KeyPress => match params.list("keys") {
            Some(keys) => format!("Shortcut {}", keys.join("+")),
            None => format!("Press {}", params.text("key").unwrap_or("")),
        },
        Intent::WindowControl => {
            let action = params.text("action").unwrap_or("control");
            let target = params.text("target").unwrap_or("window");
            format!("{} {}", capitalize(action), target)
        }
        Intent::AppLaunch => {
            let name = params.text("app_name").or_else(|| params.text("website")).unwrap_or("");
            format!("Launch {}", name)
        }
        Intent::FileOperation => {
            let operation = params.text("operation").unwrap_or("file operation");
            let filename = params.text("filename").unwrap_or("");
            match params.text("kind") {
                Some(kind) => format!("{} {} {}", capitalize(operation), kind, filename),
                None => format!("{} {}", capitalize(operation), filename),
            }
        }
        Intent::MouseMove => {
            let x = params.int("x").unwrap_or(0);
            let y = params.int("y").unwrap_or(0);
            format!("Move mouse to ({}, {})", x, y)
        }
        Intent::Wait => format!("Wait {} second(s)", params.float("seconds").unwrap_or(1.0)),
        Intent::OcrRead => "Read the text on screen".to_string(),
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_QUOTED {
        let head: String = text.chars().take(MAX_QUOTED).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
