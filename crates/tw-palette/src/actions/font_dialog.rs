//! Google fonts dialog actions

/// Actions for the font entry dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontDialogAction {
    /// Show an empty dialog
    Open,
    /// Hide the dialog without submitting
    Close,
    /// Character typed into the focused field
    Char(char),
    /// Backspace in the focused field
    Backspace,
    /// Clear the focused field
    ClearField,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Parse the fields and forward the font to the playground
    Submit,
    /// Submission was rejected; shown inside the dialog
    Rejected(String),
}
