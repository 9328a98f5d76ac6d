//! Keyword routing of free-text input
//!
//! Plain substring matching, checked in a fixed order: exit words, then
//! information, plan, and clarification keywords. The first hit wins, so
//! "clarify my plan" is a plan request.

use tracing::debug;

/// What a line of input is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Information,
    Plan,
    Clarification,
    Exit,
    Unrecognized,
}

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];
const INFORMATION_KEYWORDS: [&str; 2] = ["information", "about"];
const PLAN_KEYWORDS: [&str; 2] = ["plan", "objective"];
const CLARIFICATION_KEYWORDS: [&str; 2] = ["clarify", "next steps"];

pub fn route(input: &str) -> Intent {
    let normalized = input.trim().to_lowercase();

    let intent = if EXIT_WORDS.contains(&normalized.as_str()) {
        Intent::Exit
    } else if contains_any(&normalized, &INFORMATION_KEYWORDS) {
        Intent::Information
    } else if contains_any(&normalized, &PLAN_KEYWORDS) {
        Intent::Plan
    } else if contains_any(&normalized, &CLARIFICATION_KEYWORDS) {
        Intent::Clarification
    } else {
        Intent::Unrecognized
    };

    debug!(%input, ?intent, "route: classified");
    intent
}

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}
