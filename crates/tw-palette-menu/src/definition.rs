//! Menus as plain data
//!
//! A [`MenuDefinition`] names nodes by string keys and can be written in TOML:
//!
//! ```toml
//! root = "home"
//!
//! [[nodes]]
//! id = "home"
//! label = "Home"
//!
//! [[nodes.options]]
//! label = "add plugins"
//! action = { navigate = "plugins" }
//!
//! [[nodes.options]]
//! label = "take screenshot"
//! disabled = true
//! ```

use crate::model::{Effect, MenuOption, NodeId, Transition};
use crate::tree::{MenuError, MenuTree, MenuTreeBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Serializable description of a whole menu tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDefinition {
    /// Key of the root node
    pub root: String,
    /// Label of the placeholder shown when nothing matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_results_label: Option<String>,
    pub nodes: Vec<NodeDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<TransitionDefinition>,
}

/// [`Transition`] with nodes referenced by key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionDefinition {
    Navigate(String),
    Invoke(Effect),
    Composite(Vec<TransitionDefinition>),
}

impl MenuTree {
    /// Build a tree from its data description.
    ///
    /// Fails on duplicate or unknown node keys and on any structural problem
    /// reported by [`MenuTreeBuilder::build`].
    pub fn from_definition(definition: &MenuDefinition) -> Result<Self, MenuError> {
        let mut builder = MenuTreeBuilder::new();
        let mut ids: HashMap<&str, NodeId> = HashMap::new();

        for node in &definition.nodes {
            let id = builder.add_node(node.label.as_str());
            if ids.insert(node.id.as_str(), id).is_some() {
                return Err(MenuError::DuplicateNode(node.id.clone()));
            }
        }

        for node in &definition.nodes {
            let id = ids[node.id.as_str()];
            for option in &node.options {
                let action = option
                    .action
                    .as_ref()
                    .map(|a| resolve(a, &ids))
                    .transpose()?;
                builder.add_option(
                    id,
                    MenuOption {
                        label: option.label.clone(),
                        disabled: option.disabled,
                        action,
                    },
                );
            }
        }

        if let Some(label) = &definition.no_results_label {
            builder.no_results_label(label.as_str());
        }

        let root = ids
            .get(definition.root.as_str())
            .copied()
            .ok_or_else(|| MenuError::UnknownNode(definition.root.clone()))?;

        builder.build(root)
    }
}

fn resolve(
    definition: &TransitionDefinition,
    ids: &HashMap<&str, NodeId>,
) -> Result<Transition, MenuError> {
    Ok(match definition {
        TransitionDefinition::Navigate(key) => Transition::Navigate(
            ids.get(key.as_str())
                .copied()
                .ok_or_else(|| MenuError::UnknownNode(key.clone()))?,
        ),
        TransitionDefinition::Invoke(effect) => Transition::Invoke(effect.clone()),
        TransitionDefinition::Composite(steps) => Transition::Composite(
            steps
                .iter()
                .map(|s| resolve(s, ids))
                .collect::<Result<_, _>>()?,
        ),
    })
}
