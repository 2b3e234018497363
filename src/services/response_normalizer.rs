//! Normalization of raw model output into reasoning text and a JSON candidate.
//!
//! Reasoning models emit a `<think>...</think>` block before their answer and
//! often wrap the answer in markdown fences even when told not to. Both are
//! removed here so the remainder can be handed straight to the JSON parser.

use once_cell::sync::Lazy;
use regex::Regex;

static THINK_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<think>(.*?)</think>").expect("valid think block pattern"));

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*```(?:json)?\s*").expect("valid code fence pattern"));

/// Raw model output split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOutput {
    /// Trimmed inner text of the first reasoning block, empty if there was none.
    pub thinking: String,
    /// Everything else, with reasoning blocks and fence markers removed.
    pub candidate: String,
}

/// Split `raw` into reasoning and a JSON candidate.
///
/// - Only the first `<think>` block is kept as `thinking`, but every block is
///   removed from the candidate.
/// - An unclosed `<think>` is not a block and stays in the candidate.
/// - Fence markers are removed wherever they occur, including nested fences.
pub fn normalize_model_output(raw: &str) -> NormalizedOutput {
    let (thinking, remainder) = match THINK_BLOCK.captures(raw) {
        Some(captures) => (
            captures[1].trim().to_string(),
            THINK_BLOCK.replace_all(raw, "").into_owned(),
        ),
        None => (String::new(), raw.to_string()),
    };

    let candidate = CODE_FENCE
        .replace_all(remainder.trim(), "")
        .trim()
        .to_string();

    NormalizedOutput {
        thinking,
        candidate,
    }
}
