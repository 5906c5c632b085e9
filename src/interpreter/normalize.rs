//! Parameter Normalizer
//!
//! Turns raw text captures into typed parameters, per intent. Never fails:
//! a value that cannot be coerced is left out, and the validator reports the
//! incomplete action later. Applying it to already-normalized parameters
//! yields the same parameters.

use super::intent::{Intent, ParamValue, Params};
use super::lexicon;

/// Magnitude of a direction-only scroll
const SCROLL_STEP: i64 = 3;

/// Duration used when a wait duration cannot be read
const DEFAULT_WAIT_SECONDS: f64 = 1.0;

/// Normalize the parameters of one intent
pub fn normalize(intent: Intent, raw: Params) -> Params {
    let mut params = raw;
    match intent {
        Intent::Click | Intent::MouseMove => normalize_coordinates(&mut params),
        Intent::Scroll => normalize_scroll(&mut params),
        Intent::Wait => normalize_wait(&mut params),
        Intent::KeyPress => normalize_keys(&mut params),
        Intent::WindowControl => canonicalize(&mut params, "action"),
        Intent::FileOperation => {
            canonicalize(&mut params, "operation");
            lowercase(&mut params, "kind");
        }
        Intent::Type
        | Intent::Screenshot
        | Intent::FindText
        | Intent::AppLaunch
        | Intent::OcrRead => {}
    }
    params
}

// ==================== Coercion Helpers ====================

fn to_int(value: &ParamValue) -> Option<i64> {
    match value {
        ParamValue::Int(i) => Some(*i),
        ParamValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn to_float(value: &ParamValue) -> Option<f64> {
    match value {
        ParamValue::Float(x) => Some(*x),
        ParamValue::Int(i) => Some(*i as f64),
        ParamValue::Text(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

fn to_lower_text(value: &ParamValue) -> Option<String> {
    match value {
        ParamValue::Text(s) => Some(s.trim().to_lowercase()),
        _ => None,
    }
}

fn lowercase(params: &mut Params, name: &str) {
    if let Some(text) = params.get(name).and_then(to_lower_text) {
        params.insert(name, ParamValue::Text(text));
    }
}

fn canonicalize(params: &mut Params, name: &str) {
    if let Some(ParamValue::Text(word)) = params.get(name) {
        let canon = lexicon::normalize(word);
        params.insert(name, ParamValue::Text(canon));
    }
}

// ==================== Per-intent Rules ====================

/// Coordinates are all-or-nothing
fn normalize_coordinates(params: &mut Params) {
    let x = params.get("x").map(to_int);
    let y = params.get("y").map(to_int);

    match (x, y) {
        (Some(Some(x)), Some(Some(y))) => {
            params.insert("x", ParamValue::Int(x));
            params.insert("y", ParamValue::Int(y));
        }
        (None, None) => {}
        _ => {
            params.remove("x");
            params.remove("y");
        }
    }
}

/// Signed magnitude and orientation of a scroll direction word
pub fn scroll_direction(word: &str) -> (i64, bool) {
    match word.trim().to_lowercase().as_str() {
        "haut" | "up" => (SCROLL_STEP, false),
        "bas" | "down" => (-SCROLL_STEP, false),
        "gauche" | "left" => (-SCROLL_STEP, true),
        "droite" | "right" => (SCROLL_STEP, true),
        _ => (1, false),
    }
}

fn normalize_scroll(params: &mut Params) {
    let direction = params.get("direction").and_then(to_lower_text);
    let amount = params.get("amount").and_then(to_int);

    if let Some(direction) = &direction {
        let (clicks, horizontal) = scroll_direction(direction);
        params.insert("direction", ParamValue::Text(direction.clone()));
        params.insert("clicks", ParamValue::Int(clicks));
        params.insert("horizontal", ParamValue::Bool(horizontal));
    }

    // The amount sets the magnitude, the direction keeps the sign
    if let Some(amount) = amount {
        let clicks = match params.int("clicks") {
            Some(signed) if direction.is_some() && signed < 0 => -amount.abs(),
            Some(_) if direction.is_some() => amount.abs(),
            _ => amount,
        };
        params.insert("clicks", ParamValue::Int(clicks));
        if !params.contains("horizontal") {
            params.insert("horizontal", ParamValue::Bool(false));
        }
    }
}

fn normalize_wait(params: &mut Params) {
    let Some(duration) = params.get("duration").map(to_float) else {
        return;
    };

    let unit = params.get("unit").and_then(to_lower_text);
    if let Some(unit) = &unit {
        params.insert("unit", ParamValue::Text(unit.clone()));
    }
    let in_minutes = unit.as_deref().is_some_and(|u| u.starts_with("min") || u == "mn");

    let seconds = match duration {
        Some(value) if in_minutes => value * 60.0,
        Some(value) => value,
        None => DEFAULT_WAIT_SECONDS,
    };
    params.insert("seconds", ParamValue::Float(seconds));
}

/// Canonical key name for a French or English key word
pub fn key_name(word: &str) -> String {
    let key = word.trim().trim_matches(|c: char| ".,;:!?".contains(c)).to_lowercase();
    let mapped = match key.as_str() {
        "entrée" | "entree" => "enter",
        "espace" => "space",
        "retour" => "backspace",
        "suppr" | "supprimer" => "delete",
        "échap" | "echap" | "échappe" => "escape",
        "tabulation" => "tab",
        "maj" | "majuscule" => "shift",
        "control" | "contrôle" => "ctrl",
        "haut" => "up",
        "bas" => "down",
        "gauche" => "left",
        "droite" => "right",
        _ => return key,
    };
    mapped.to_string()
}

fn normalize_keys(params: &mut Params) {
    if let Some(ParamValue::Text(combo)) = params.remove("combination") {
        let keys: Vec<String> = combo
            .replace('+', " ")
            .split_whitespace()
            .map(key_name)
            .filter(|k| !k.is_empty())
            .collect();
        params.insert("keys", ParamValue::List(keys));
    }

    if let Some(ParamValue::List(keys)) = params.get("keys") {
        let keys = keys.iter().map(|k| key_name(k)).collect();
        params.insert("keys", ParamValue::List(keys));
    }

    if let Some(ParamValue::Text(key)) = params.get("key") {
        let key = key_name(key);
        params.insert("key", ParamValue::Text(key));
    }
}
