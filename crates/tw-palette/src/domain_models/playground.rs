//! Playground content and the edits the palette can apply to it

use crate::domain_models::FontRule;
use anyhow::bail;
use regex::Regex;
use std::sync::OnceLock;
use tw_playground_sync::{Snapshot, SyncRequest};

const DEFAULT_HTML: &str = r#"<div class="bg-slate-900 min-h-screen flex items-center justify-center">
  <ul class="list-disc border border-slate-700 px-4 py-3 list-inside rounded-lg">
    <li class="text-rose-400">Blood is rose</li>
    <li class="text-lime-600">Leaf is lime</li>
    <li class="text-blue-800">Sea is blue</li>
    <li class="text-cyan-200">Sky is cyan</li>
  </ul>
</div>
"#;

const DEFAULT_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

const DEFAULT_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  theme: {
    extend: {
      // ...
    },
  },
  plugins: [],
}
"#;

/// The three sources of a playground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundContent {
    pub html: String,
    pub css: String,
    pub config: String,
}

impl Default for PlaygroundContent {
    fn default() -> Self {
        Self {
            html: DEFAULT_HTML.to_string(),
            css: DEFAULT_CSS.to_string(),
            config: DEFAULT_CONFIG.to_string(),
        }
    }
}

fn plugins_regex() -> &'static Regex {
    static PLUGINS_REGEX: OnceLock<Regex> = OnceLock::new();
    PLUGINS_REGEX.get_or_init(|| Regex::new(r"plugins:\s*\[([^\]]*)\]").unwrap())
}

fn require_regex() -> &'static Regex {
    static REQUIRE_REGEX: OnceLock<Regex> = OnceLock::new();
    REQUIRE_REGEX.get_or_init(|| Regex::new(r#"require\(\s*['"]([^'"]+)['"]\s*\)"#).unwrap())
}

impl PlaygroundContent {
    /// Plugins required in the config, in order
    pub fn plugins(&self) -> Vec<String> {
        let Some(list) = plugins_regex().captures(&self.config).and_then(|c| c.get(1)) else {
            return Vec::new();
        };
        require_regex()
            .captures_iter(list.as_str())
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Add `require('<plugin>')` to the `plugins` array.
    ///
    /// Returns `None` when the plugin is already present.
    pub fn with_plugin(&self, plugin: &str) -> anyhow::Result<Option<Self>> {
        if self.plugins().iter().any(|p| p == plugin) {
            return Ok(None);
        }

        let Some(captures) = plugins_regex().captures(&self.config) else {
            bail!("config has no plugins array");
        };
        let (Some(whole), Some(list)) = (captures.get(0), captures.get(1)) else {
            bail!("config has no plugins array");
        };

        let existing = list.as_str().trim().trim_end_matches(',').trim_end();
        let entry = format!("require('{}')", plugin);
        let updated = if existing.is_empty() {
            format!("plugins: [{}]", entry)
        } else {
            format!("plugins: [{}, {}]", existing, entry)
        };

        let mut config = String::with_capacity(self.config.len() + updated.len());
        config.push_str(&self.config[..whole.start()]);
        config.push_str(&updated);
        config.push_str(&self.config[whole.end()..]);

        Ok(Some(Self {
            config,
            ..self.clone()
        }))
    }

    /// Prepend the font embed to the CSS and register the rules under
    /// `theme.extend.fontFamily`.
    ///
    /// Rules whose key is already configured are skipped. Returns `None` when
    /// nothing changed.
    pub fn with_font(&self, css_embed: &str, rules: &[FontRule]) -> anyhow::Result<Option<Self>> {
        static FONT_FAMILY_REGEX: OnceLock<Regex> = OnceLock::new();
        static EXTEND_REGEX: OnceLock<Regex> = OnceLock::new();

        let mut updated = self.clone();

        if !css_embed.is_empty() && !self.css.contains(css_embed) {
            updated.css = format!("{}\n{}", css_embed, self.css);
        }

        let entries: String = rules
            .iter()
            .filter(|rule| !self.config.contains(&format!("'{}':", rule.key)))
            .map(|rule| {
                let families = rule
                    .families
                    .iter()
                    .map(|f| format!("'{}'", f))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("\n        '{}': [{}],", rule.key, families)
            })
            .collect();

        if !entries.is_empty() {
            let font_family =
                FONT_FAMILY_REGEX.get_or_init(|| Regex::new(r"fontFamily:\s*\{").unwrap());
            let extend = EXTEND_REGEX.get_or_init(|| Regex::new(r"extend:\s*\{").unwrap());

            let (at, insert) = if let Some(m) = font_family.find(&self.config) {
                (m.end(), entries)
            } else if let Some(m) = extend.find(&self.config) {
                (m.end(), format!("\n      fontFamily: {{{}\n      }},", entries))
            } else {
                bail!("config has no theme.extend block");
            };
            updated.config.insert_str(at, &insert);
        }

        if updated == *self {
            Ok(None)
        } else {
            Ok(Some(updated))
        }
    }

    /// Snapshot of this content for the given Tailwind version
    pub fn to_snapshot(&self, version: &str) -> Snapshot {
        Snapshot {
            version: version.to_string(),
            html: self.html.clone(),
            css: self.css.clone(),
            config: self.config.clone(),
        }
    }

    /// Sync request updating `id`, or creating a new snapshot when `None`
    pub fn to_sync_request(&self, id: Option<&str>, version: &str) -> SyncRequest {
        SyncRequest::new(id.map(str::to_string), self.to_snapshot(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roboto() -> FontRule {
        FontRule {
            key: "roboto".to_string(),
            families: vec!["Roboto".to_string(), "sans-serif".to_string()],
        }
    }

    #[test]
    fn test_default_content() {
        let content = PlaygroundContent::default();
        assert!(content.css.starts_with("@tailwind base;"));
        assert!(content.config.contains("plugins: []"));
        assert!(content.plugins().is_empty());
    }

    #[test]
    fn test_with_plugin_appends() {
        let content = PlaygroundContent::default()
            .with_plugin("@tailwindcss/forms")
            .unwrap()
            .unwrap();
        assert!(content.config.contains("plugins: [require('@tailwindcss/forms')]"));

        let content = content
            .with_plugin("@tailwindcss/typography")
            .unwrap()
            .unwrap();
        assert_eq!(
            content.plugins(),
            vec!["@tailwindcss/forms", "@tailwindcss/typography"]
        );
    }

    #[test]
    fn test_with_plugin_is_idempotent() {
        let content = PlaygroundContent::default()
            .with_plugin("@tailwindcss/forms")
            .unwrap()
            .unwrap();
        assert_eq!(content.with_plugin("@tailwindcss/forms").unwrap(), None);
    }

    #[test]
    fn test_with_plugin_needs_plugins_array() {
        let content = PlaygroundContent {
            config: "module.exports = {}".to_string(),
            ..PlaygroundContent::default()
        };
        assert!(content.with_plugin("@tailwindcss/forms").is_err());
    }

    #[test]
    fn test_with_font_adds_embed_and_family() {
        let embed = "@import url('https://fonts.googleapis.com/css2?family=Roboto');";
        let content = PlaygroundContent::default()
            .with_font(embed, &[roboto()])
            .unwrap()
            .unwrap();

        assert!(content.css.starts_with(embed));
        assert!(content.css.contains("@tailwind base;"));
        assert!(content.config.contains("fontFamily: {"));
        assert!(content.config.contains("'roboto': ['Roboto', 'sans-serif'],"));
    }

    #[test]
    fn test_with_font_reuses_font_family_block() {
        let nova = FontRule {
            key: "nova-mono".to_string(),
            families: vec!["Nova Mono".to_string(), "monospace".to_string()],
        };
        let content = PlaygroundContent::default()
            .with_font("", &[roboto()])
            .unwrap()
            .unwrap()
            .with_font("", &[nova])
            .unwrap()
            .unwrap();

        assert_eq!(content.config.matches("fontFamily:").count(), 1);
        assert!(content.config.contains("'nova-mono': ['Nova Mono', 'monospace'],"));
        assert!(content.config.contains("'roboto': ['Roboto', 'sans-serif'],"));
    }

    #[test]
    fn test_with_font_twice_changes_nothing() {
        let embed = "@import url(x);";
        let content = PlaygroundContent::default()
            .with_font(embed, &[roboto()])
            .unwrap()
            .unwrap();
        assert_eq!(content.with_font(embed, &[roboto()]).unwrap(), None);
    }

    #[test]
    fn test_sync_request_carries_content() {
        let content = PlaygroundContent::default();
        let request = content.to_sync_request(Some("abc"), "3");
        assert_eq!(request.id.as_deref(), Some("abc"));
        assert_eq!(request.snapshot.html, content.html);
        assert_eq!(request.snapshot.version, "3");
    }
}
