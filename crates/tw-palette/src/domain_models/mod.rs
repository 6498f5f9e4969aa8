//! Domain models
//!
//! Plain data types and pure edits, independent of the UI.

pub mod font_rule;
pub mod playground;

pub use font_rule::{parse_font_rules, strip_style_tag, FontRule};
pub use playground::PlaygroundContent;
