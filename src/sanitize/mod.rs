use anyhow::{Context, Result};
use regex::Regex;

/// Strips markup from player names before they reach storage.
pub struct NameSanitizer {
    script_block_regex: Regex,
    tag_regex: Regex,
}

impl NameSanitizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            script_block_regex: compile_script_block_regex()?,
            tag_regex: compile_tag_regex()?,
        })
    }

    /// Removes script/style elements including their contents, then any
    /// remaining tags, and trims surrounding whitespace. Plain text passes
    /// through unchanged. Names are not required to be unique, so no
    /// further normalization happens here.
    pub fn clean(&self, raw: &str) -> String {
        let without_blocks = self.script_block_regex.replace_all(raw, "");
        let without_tags = self.tag_regex.replace_all(&without_blocks, "");
        without_tags.trim().to_string()
    }
}

fn compile_script_block_regex() -> Result<Regex> {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>")
        .context("Failed to compile script block regex")
}

fn compile_tag_regex() -> Result<Regex> {
    Regex::new(r"<[^>]*>").context("Failed to compile tag regex")
}
