use regex::Regex;
use std::sync::OnceLock;

fn thinking_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)<thinking>.*?</thinking>|<think>.*?</think>|<reasoning>.*?</reasoning>")
            .expect("valid thinking regex")
    })
}

fn code_fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Only unwrap a fence spanning the whole text; fences inside a prompt are content.
        Regex::new(r"(?s)\A```[A-Za-z0-9_-]*\r?\n?(.*?)\r?\n?```\z").expect("valid fence regex")
    })
}

/// Cleans the prompt-construction output before it reaches the image model.
///
/// Chat-tuned models like to wrap the requested prompt in a code fence or a pair of
/// quotation marks, and occasionally leak reasoning blocks. The image endpoint wants
/// the bare text.
pub fn clean_composed_prompt(text: &str) -> String {
    let without_thinking = thinking_block_re().replace_all(text, "");
    let mut out = without_thinking.trim().to_string();

    if let Some(caps) = code_fence_re().captures(&out) {
        out = caps[1].trim().to_string();
    }

    // At most one pair of wrapping quotes; quoted fragments inside stay.
    if out.len() >= 2 && out.starts_with('"') && out.ends_with('"') {
        out = out[1..out.len() - 1].trim().to_string();
    }

    out
}
