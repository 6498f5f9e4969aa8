//! Menu tree data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node inside a [`crate::MenuTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Side effects a menu option can request from the host application.
///
/// The controller never executes these itself; they are handed to the
/// [`crate::EffectHandler`] passed to [`crate::CommandMenuController::select`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Apply a change to the playground configuration, e.g.
    /// `("add plugin", "@tailwindcss/forms")`
    UpdateConfig { action: String, payload: String },
    /// Show the Google fonts entry dialog
    OpenFontDialog,
    /// Hide the command palette
    ClosePalette,
}

/// What happens when an option is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Make the given node the current node
    Navigate(NodeId),
    /// Hand an effect to the host application
    Invoke(Effect),
    /// Run several transitions in order
    Composite(Vec<Transition>),
}

impl Transition {
    /// Every `Navigate` target, in execution order
    pub fn navigation_targets(&self) -> Vec<NodeId> {
        let mut targets = Vec::new();
        self.collect_targets(&mut targets);
        targets
    }

    fn collect_targets(&self, targets: &mut Vec<NodeId>) {
        match self {
            Self::Navigate(id) => targets.push(*id),
            Self::Invoke(_) => {}
            Self::Composite(steps) => {
                for step in steps {
                    step.collect_targets(targets);
                }
            }
        }
    }
}

/// A single entry within a menu level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Display text, also the filter key
    pub label: String,
    /// Disabled options are shown but never activated
    pub disabled: bool,
    /// Transition run on selection; `None` for informational entries
    pub action: Option<Transition>,
}

impl MenuOption {
    /// Enabled option with an action
    pub fn new(label: impl Into<String>, action: Transition) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            action: Some(action),
        }
    }

    /// Enabled option without an action
    pub fn info(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            action: None,
        }
    }

    /// Visible but not selectable option
    pub fn disabled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
            action: None,
        }
    }

    /// Whether selecting this option does anything
    pub fn is_selectable(&self) -> bool {
        !self.disabled && self.action.is_some()
    }
}

/// One level of the menu hierarchy.
///
/// Nodes are immutable once the tree is built. The `parent` link is a lookup
/// handle into the same arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    pub(crate) label: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) options: Vec<MenuOption>,
}

impl MenuNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node this one is drilled into from; `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Options in display order
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_constructors() {
        let nav = MenuOption::new("add plugins", Transition::Navigate(NodeId(1)));
        assert!(nav.is_selectable());

        let info = MenuOption::info("version 3");
        assert!(!info.disabled);
        assert!(!info.is_selectable());

        let screenshot = MenuOption::disabled("take screenshot");
        assert!(screenshot.disabled);
        assert!(screenshot.action.is_none());
    }

    #[test]
    fn test_navigation_targets_walk_composites() {
        let transition = Transition::Composite(vec![
            Transition::Invoke(Effect::ClosePalette),
            Transition::Navigate(NodeId(2)),
            Transition::Composite(vec![Transition::Navigate(NodeId(0))]),
        ]);
        assert_eq!(transition.navigation_targets(), vec![NodeId(2), NodeId(0)]);
    }

    #[test]
    fn test_effect_tagging() {
        let text = to_toml(&Effect::UpdateConfig {
            action: "add plugin".to_string(),
            payload: "@tailwindcss/forms".to_string(),
        });
        assert!(text.contains("effect = \"update_config\""));
    }

    fn to_toml(effect: &Effect) -> String {
        #[derive(Serialize)]
        struct Wrapper<'a> {
            invoke: &'a Effect,
        }
        toml::to_string(&Wrapper { invoke: effect }).unwrap()
    }
}
