//! Panel capabilities
//!
//! Views declare what kind of keyboard input they accept. The keyboard
//! middleware uses this to decide whether a character key is text or a command.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view supports
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PanelCapabilities: u32 {
        /// Character keys are routed to a text field
        const TEXT_INPUT      = 0b0000_0001;
        /// Up/down arrows move through a list of items
        const ITEM_NAVIGATION = 0b0000_0010;
        /// Left arrow navigates one level out
        const BACK_NAVIGATION = 0b0000_0100;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(&self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(&self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }

    pub fn supports_back_navigation(&self) -> bool {
        self.contains(Self::BACK_NAVIGATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_capabilities() {
        let caps = PanelCapabilities::default();
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
        assert!(!caps.supports_back_navigation());
    }

    #[test]
    fn test_combined_capabilities() {
        let caps = PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION;
        assert!(caps.accepts_text_input());
        assert!(caps.supports_item_navigation());
        assert!(!caps.supports_back_navigation());
    }
}
