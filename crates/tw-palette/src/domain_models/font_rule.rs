//! Google font rules
//!
//! Google Fonts hands out two snippets: an embed (`<style>@import url(...)</style>`)
//! and a CSS rule (`font-family: 'Roboto', sans-serif;`). The rule is turned
//! into Tailwind `fontFamily` entries keyed by the first family name.

use anyhow::bail;
use regex::Regex;
use std::sync::OnceLock;

const DECLARATION_PREFIX: &str = "font-family:";

/// One `fontFamily` entry: `'nova-mono': ['Nova Mono', 'monospace']`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRule {
    /// Tailwind key, derived from the first family
    pub key: String,
    /// Font stack in declaration order
    pub families: Vec<String>,
}

impl FontRule {
    /// Build a rule from a font stack; `None` when the stack is empty
    pub fn from_families(families: Vec<String>) -> Option<Self> {
        let first = families.first()?;
        let key = first
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        if key.is_empty() {
            return None;
        }
        Some(Self { key, families })
    }
}

/// Remove the `<style>` wrapper Google Fonts puts around the `@import`
pub fn strip_style_tag(embed: &str) -> String {
    embed
        .replace("<style>", "")
        .replace("</style>", "")
        .trim()
        .to_string()
}

/// Parse a CSS rule into font rules.
///
/// Input starting with `font-family:` may hold several declarations, each
/// yielding one rule. Anything else is read as a single font stack.
pub fn parse_font_rules(rule: &str) -> anyhow::Result<Vec<FontRule>> {
    let rule = rule.trim();

    static DECLARATION_REGEX: OnceLock<Regex> = OnceLock::new();

    let stacks: Vec<&str> = if rule.starts_with(DECLARATION_PREFIX) {
        let re = DECLARATION_REGEX.get_or_init(|| {
            // Everything between `font-family:` and the next `;`
            Regex::new(r"font-family:\s*([^;]*)").unwrap()
        });
        re.captures_iter(rule)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    } else {
        vec![rule]
    };

    let rules: Vec<FontRule> = stacks
        .into_iter()
        .filter_map(|stack| FontRule::from_families(split_families(stack)))
        .collect();

    if rules.is_empty() {
        bail!("no font family found in {:?}", rule);
    }

    log::debug!("Parsed {} font rule(s)", rules.len());
    Ok(rules)
}

/// Split a font stack on commas, dropping quotes and the trailing `;`
fn split_families(stack: &str) -> Vec<String> {
    stack
        .trim()
        .trim_end_matches(';')
        .split(',')
        .map(|family| family.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|family| !family.is_empty())
        .map(str::to_string)
        .collect()
}
