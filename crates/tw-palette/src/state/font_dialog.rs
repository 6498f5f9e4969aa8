//! Google fonts dialog state

/// Input field of the font dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontDialogField {
    /// `<style>@import url(...)</style>` snippet
    #[default]
    CssEmbed,
    /// `font-family: ...;` snippet
    CssRule,
}

impl FontDialogField {
    pub fn next(self) -> Self {
        match self {
            Self::CssEmbed => Self::CssRule,
            Self::CssRule => Self::CssEmbed,
        }
    }

    pub fn prev(self) -> Self {
        // Two fields, so previous and next coincide
        self.next()
    }
}

/// Font dialog form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDialogState {
    pub css_embed: String,
    pub css_rule: String,
    pub focused_field: FontDialogField,
    /// Reason the last submission was rejected
    pub error: Option<String>,
}

impl FontDialogState {
    /// Text of the focused field
    pub fn focused_value_mut(&mut self) -> &mut String {
        match self.focused_field {
            FontDialogField::CssEmbed => &mut self.css_embed,
            FontDialogField::CssRule => &mut self.css_rule,
        }
    }
}
