//! Menu tree arena and two-pass construction
//!
//! Nodes are declared first without back-references. `build` then walks the
//! tree breadth-first from the root and records, for every node, the node it
//! is first drilled into from. Navigating to an ancestor (e.g. "back to Home"
//! after applying a plugin) is a jump, not a drill-down, and leaves parent
//! links untouched.

use crate::filter::NO_RESULTS_LABEL;
use crate::model::{MenuNode, MenuOption, NodeId};
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised while building a menu tree
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MenuError {
    /// A definition refers to a node key that was never declared
    #[error("Unknown menu node: {0}")]
    UnknownNode(String),

    /// A node handle does not belong to this tree
    #[error("Menu node {0} does not exist")]
    UnknownNodeId(NodeId),

    /// Two definitions share the same key
    #[error("Duplicate menu node: {0}")]
    DuplicateNode(String),

    /// A node would get two parents
    #[error("Menu node '{child}' is drilled into from both '{first}' and '{second}'")]
    SharedChild {
        child: String,
        first: String,
        second: String,
    },

    /// An option navigates to the node it belongs to
    #[error("Menu node '{0}' navigates to itself")]
    SelfNavigation(String),

    /// A node can not be reached from the root
    #[error("Menu node '{0}' is not reachable from the root")]
    Unreachable(String),
}

/// Immutable forest of menu nodes with a designated root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTree {
    nodes: Vec<MenuNode>,
    root: NodeId,
    placeholder: MenuOption,
}

impl MenuTree {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    /// Iterate over all nodes with their handles
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &MenuNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Look up a node by its label
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes().find(|(_, n)| n.label == label).map(|(id, _)| id)
    }

    /// Synthetic entry shown when a query matches nothing
    pub fn placeholder(&self) -> &MenuOption {
        &self.placeholder
    }

    /// Number of levels from the root to `id` (root is 0)
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Walk the parent chain of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut next = self.node(id).and_then(|n| n.parent);
        std::iter::from_fn(move || {
            let current = next?;
            next = self.node(current).and_then(|n| n.parent);
            Some(current)
        })
    }
}

/// Builder for [`MenuTree`]
#[derive(Debug, Default)]
pub struct MenuTreeBuilder {
    nodes: Vec<MenuNode>,
    no_results_label: Option<String>,
    errors: Vec<MenuError>,
}

impl MenuTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node without options
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        self.nodes.push(MenuNode {
            label: label.into(),
            parent: None,
            options: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Append an option to a declared node
    pub fn add_option(&mut self, node: NodeId, option: MenuOption) -> &mut Self {
        match self.nodes.get_mut(node.0) {
            Some(n) => n.options.push(option),
            None => self.errors.push(MenuError::UnknownNodeId(node)),
        }
        self
    }

    /// Override the label of the no-results placeholder
    pub fn no_results_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.no_results_label = Some(label.into());
        self
    }

    /// Validate the declared nodes and wire parent links
    pub fn build(self, root: NodeId) -> Result<MenuTree, MenuError> {
        let Self {
            mut nodes,
            no_results_label,
            errors,
        } = self;

        if let Some(err) = errors.into_iter().next() {
            return Err(err);
        }
        if root.0 >= nodes.len() {
            return Err(MenuError::UnknownNodeId(root));
        }

        for node in &nodes {
            for option in &node.options {
                let Some(action) = &option.action else {
                    continue;
                };
                if let Some(target) = action
                    .navigation_targets()
                    .into_iter()
                    .find(|t| t.0 >= nodes.len())
                {
                    return Err(MenuError::UnknownNodeId(target));
                }
            }
        }

        let mut parents: Vec<Option<NodeId>> = vec![None; nodes.len()];
        let mut visited = vec![false; nodes.len()];
        let mut queue = VecDeque::from([root]);
        visited[root.0] = true;

        while let Some(current) = queue.pop_front() {
            let targets: Vec<NodeId> = nodes[current.0]
                .options
                .iter()
                .filter_map(|o| o.action.as_ref())
                .flat_map(|a| a.navigation_targets())
                .collect();

            for target in targets {
                if target == current {
                    return Err(MenuError::SelfNavigation(nodes[current.0].label.clone()));
                }
                if is_ancestor(&parents, target, current) {
                    continue;
                }
                if !visited[target.0] {
                    visited[target.0] = true;
                    parents[target.0] = Some(current);
                    queue.push_back(target);
                    continue;
                }
                match parents[target.0] {
                    Some(parent) if parent == current => {}
                    Some(parent) => {
                        return Err(MenuError::SharedChild {
                            child: nodes[target.0].label.clone(),
                            first: nodes[parent.0].label.clone(),
                            second: nodes[current.0].label.clone(),
                        });
                    }
                    // only the root is visited without a parent, and the root
                    // is an ancestor of everything
                    None => {}
                }
            }
        }

        if let Some(idx) = visited.iter().position(|v| !v) {
            return Err(MenuError::Unreachable(nodes[idx].label.clone()));
        }

        for (node, parent) in nodes.iter_mut().zip(parents) {
            node.parent = parent;
        }

        log::debug!(
            "Built menu tree with {} nodes, root '{}'",
            nodes.len(),
            nodes[root.0].label
        );

        Ok(MenuTree {
            nodes,
            root,
            placeholder: MenuOption::disabled(
                no_results_label.unwrap_or_else(|| NO_RESULTS_LABEL.to_string()),
            ),
        })
    }
}

/// Whether `candidate` is `node` itself or one of its ancestors
fn is_ancestor(parents: &[Option<NodeId>], candidate: NodeId, node: NodeId) -> bool {
    let mut cursor = Some(node);
    while let Some(id) = cursor {
        if id == candidate {
            return true;
        }
        cursor = parents[id.0];
    }
    false
}
