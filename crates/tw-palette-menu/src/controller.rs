//! Command menu controller
//!
//! Owns the current menu level and the search query of one open palette.
//! Every operation is total: when a precondition does not hold the call is a
//! no-op.

use crate::effects::EffectHandler;
use crate::filter::filter_options;
use crate::model::{MenuNode, MenuOption, NodeId, Transition};
use crate::tree::MenuTree;
use std::sync::Arc;

/// Mutable state of one palette instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    pub current_node: NodeId,
    pub query: String,
}

impl ControllerState {
    fn at(root: NodeId) -> Self {
        Self {
            current_node: root,
            query: String::new(),
        }
    }
}

/// Navigable, filterable view over a shared [`MenuTree`]
#[derive(Debug, Clone)]
pub struct CommandMenuController {
    tree: Arc<MenuTree>,
    state: ControllerState,
}

impl CommandMenuController {
    /// Create a controller positioned at the root with an empty query
    pub fn new(tree: impl Into<Arc<MenuTree>>) -> Self {
        let tree = tree.into();
        let state = ControllerState::at(tree.root());
        Self { tree, state }
    }

    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Reset to the root with an empty query
    pub fn open(&mut self) {
        self.state = ControllerState::at(self.tree.root());
        log::debug!("Command menu opened at '{}'", self.current_label());
    }

    /// Tear down the state; the next `open` starts fresh
    pub fn close(&mut self) {
        self.state = ControllerState::at(self.tree.root());
        log::debug!("Command menu closed");
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.state.query = text.into();
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn current_node_id(&self) -> NodeId {
        self.state.current_node
    }

    pub fn current_node(&self) -> &MenuNode {
        self.node(self.state.current_node)
    }

    pub fn current_label(&self) -> &str {
        self.current_node().label()
    }

    pub fn is_at_root(&self) -> bool {
        self.state.current_node == self.tree.root()
    }

    /// Labels from the parent (if any) to the current node
    pub fn breadcrumb(&self) -> Vec<&str> {
        let current = self.current_node();
        current
            .parent()
            .map(|p| self.node(p).label())
            .into_iter()
            .chain(std::iter::once(current.label()))
            .collect()
    }

    /// Options to display for the current node and query.
    ///
    /// Never empty: when the query matches nothing, the tree's disabled
    /// "no results" placeholder is returned on its own.
    pub fn visible_options(&self) -> Vec<&MenuOption> {
        let filtered = filter_options(self.current_node().options(), &self.state.query);
        if filtered.is_empty() {
            vec![self.tree.placeholder()]
        } else {
            filtered
        }
    }

    /// Select the option at `index` of [`Self::visible_options`].
    ///
    /// Disabled options (including the placeholder) and options without an
    /// action do nothing. Otherwise the action runs: `Navigate` steps move the
    /// current node, `Invoke` steps go to `effects`, and afterwards the query
    /// is cleared so the next level starts unfiltered.
    ///
    /// The index must refer to the list as currently visible; an index past
    /// its end is ignored.
    pub fn select(&mut self, index: usize, effects: &mut impl EffectHandler) {
        let action = match self.visible_options().get(index) {
            Some(option) if !option.disabled => option.action.clone(),
            Some(option) => {
                log::debug!("Ignoring disabled option '{}'", option.label);
                return;
            }
            None => {
                log::debug!("Ignoring selection of index {} past the visible list", index);
                return;
            }
        };

        let Some(action) = action else {
            return;
        };

        self.apply(&action, effects);
        self.state.query.clear();
    }

    /// Move to the parent node.
    ///
    /// Only when the query is empty; while filtering, a back gesture edits
    /// the text instead. No-op at the root.
    pub fn go_back(&mut self) {
        if !self.state.query.is_empty() {
            return;
        }
        if let Some(parent) = self.current_node().parent() {
            log::debug!(
                "Command menu back from '{}' to '{}'",
                self.current_label(),
                self.node(parent).label()
            );
            self.state.current_node = parent;
        }
    }

    fn apply(&mut self, transition: &Transition, effects: &mut impl EffectHandler) {
        match transition {
            Transition::Navigate(target) => {
                if self.tree.node(*target).is_some() {
                    self.state.current_node = *target;
                    log::debug!("Command menu navigated to '{}'", self.current_label());
                } else {
                    log::warn!("Ignoring navigation to unknown menu node {}", target);
                }
            }
            Transition::Invoke(effect) => effects.handle(effect),
            Transition::Composite(steps) => {
                for step in steps {
                    self.apply(step, effects);
                }
            }
        }
    }

    // Node ids held by the controller always come from its own tree.
    fn node(&self, id: NodeId) -> &MenuNode {
        match self.tree.node(id) {
            Some(node) => node,
            None => unreachable!("menu node {} is not part of the tree", id),
        }
    }
}
