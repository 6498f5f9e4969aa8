//! Keystrokes aimed at the focused text field
//!
//! The palette search box and the two font dialog fields both receive these;
//! each view maps them onto its own actions.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputAction {
    Char(char),
    /// Drop the last character; on an empty palette query this goes up a level
    Backspace,
    /// Ctrl+U or Super+Backspace: empty the field
    ClearLine,
    /// Close the palette or cancel the font dialog
    Escape,
    /// Run the highlighted palette option or submit the font form
    Confirm,
}
