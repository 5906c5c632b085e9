//! Composite Decomposer
//!
//! Splits a compound command on sequencing connectives and reassembles the
//! per-segment actions, with an automatic pause ahead of every segment after
//! the first.

use regex::{Regex, RegexBuilder};

use super::intent::ParsedAction;
use crate::utils::{Error, Result};

/// Sequencing connectives, compound forms first
pub const CONNECTIVES: &[&str] = &[
    " et puis ",
    " et ensuite ",
    " puis ",
    " ensuite ",
    " après ",
    " et ",
    " and then ",
    " then ",
    " and ",
];

/// Splits compound commands into segments
#[derive(Debug, Clone)]
pub struct Decomposer {
    separators: Vec<Regex>,
}

impl Decomposer {
    pub fn new() -> Result<Self> {
        let separators = CONNECTIVES
            .iter()
            .map(|connective| {
                RegexBuilder::new(&regex::escape(connective))
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| Error::InvalidConnective {
                        connective: connective.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { separators })
    }

    /// Split on each connective in turn, across all current segments.
    /// Segments are trimmed and empty ones dropped.
    pub fn decompose(&self, text: &str) -> Vec<String> {
        let mut segments = vec![text.to_string()];
        for separator in &self.separators {
            segments = segments
                .iter()
                .flat_map(|segment| separator.split(segment).map(str::to_string).collect::<Vec<_>>())
                .collect();
        }

        segments
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Flatten per-segment actions, inserting a pause before every segment
/// after the first that produced at least one action
pub fn assemble(segments: Vec<Vec<ParsedAction>>) -> Vec<ParsedAction> {
    let mut all = Vec::new();
    for (index, actions) in segments.into_iter().enumerate() {
        if index > 0 && !actions.is_empty() {
            all.push(ParsedAction::pause());
        }
        all.extend(actions);
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::intent::{Intent, Params};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_segment() {
        let d = Decomposer::new().unwrap();
        assert_eq!(d.decompose("  clique sur OK "), vec!["clique sur OK"]);
    }

    #[test]
    fn test_split_on_connectives() {
        let d = Decomposer::new().unwrap();
        assert_eq!(
            d.decompose("prends une capture puis clique sur OK ensuite attends 2 secondes"),
            vec!["prends une capture", "clique sur OK", "attends 2 secondes"]
        );
        assert_eq!(d.decompose("ouvre Chrome et ensuite va sur google"), vec!["ouvre Chrome", "va sur google"]);
        assert_eq!(d.decompose("Scroll down THEN take a capture"), vec!["Scroll down", "take a capture"]);
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let d = Decomposer::new().unwrap();
        assert_eq!(d.decompose(" puis clique puis  puis tape a"), vec!["clique", "tape a"]);
        assert!(d.decompose("   ").is_empty());
    }

    #[test]
    fn test_assemble_inserts_pauses() {
        let shot = ParsedAction::new(Intent::Screenshot, Params::new(), 0.9, "capture");
        let read = ParsedAction::new(Intent::OcrRead, Params::new(), 0.9, "lis ce qui est écrit");
        let all = assemble(vec![vec![shot.clone()], vec![], vec![read.clone()]]);

        assert_eq!(all.len(), 3);
        assert_eq!(all[0], shot);
        assert!(all[1].is_synthetic());
        assert_eq!(all[2], read);
    }

    #[test]
    fn test_no_pause_before_first_segment() {
        let shot = ParsedAction::new(Intent::Screenshot, Params::new(), 0.9, "capture");
        let all = assemble(vec![vec![shot]]);
        assert_eq!(all.len(), 1);
        assert!(!all[0].is_synthetic());
    }
}
