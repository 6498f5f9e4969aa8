//! # tw-palette-menu
//!
//! The state machine behind the playground command palette: a statically
//! defined menu tree, a search query that filters the options of the current
//! level, and drill-down / back navigation between levels.
//!
//! ## Design Principles
//!
//! This crate is **instrumented** in the same way as a widget crate: it never
//! performs side effects itself. Menu options carry a [`Transition`] value
//! instead of a closure. Navigation transitions are applied to the controller
//! state, every other effect is handed to a caller-supplied [`EffectHandler`].
//!
//! - The menu tree is plain data and can be loaded from a [`MenuDefinition`]
//! - Parent links are arena lookups ([`NodeId`]), never owning references
//! - Each [`CommandMenuController`] owns its own state, so several palettes
//!   can share one tree
//!
//! ## Usage
//!
//! ```rust
//! use tw_palette_menu::{CommandMenuController, Effect, EffectQueue, MenuOption, MenuTreeBuilder, Transition};
//!
//! let mut builder = MenuTreeBuilder::new();
//! let home = builder.add_node("Home");
//! let plugins = builder.add_node("Plugins");
//! builder.add_option(home, MenuOption::new("add plugins", Transition::Navigate(plugins)));
//! builder.add_option(
//!     plugins,
//!     MenuOption::new("@tailwindcss/forms", Transition::Invoke(Effect::ClosePalette)),
//! );
//! let tree = builder.build(home)?;
//!
//! let mut palette = CommandMenuController::new(tree);
//! palette.set_query("plug");
//! let mut effects = EffectQueue::default();
//! palette.select(0, &mut effects);
//! assert_eq!(palette.current_label(), "Plugins");
//! assert_eq!(palette.query(), "");
//! # Ok::<(), tw_palette_menu::MenuError>(())
//! ```

pub mod controller;
pub mod definition;
pub mod effects;
pub mod filter;
pub mod model;
pub mod tree;

// Re-export commonly used types
pub use controller::{CommandMenuController, ControllerState};
pub use definition::{MenuDefinition, NodeDefinition, OptionDefinition, TransitionDefinition};
pub use effects::{EffectHandler, EffectQueue};
pub use filter::{filter_options, match_range, NO_RESULTS_LABEL};
pub use model::{Effect, MenuNode, MenuOption, NodeId, Transition};
pub use tree::{MenuError, MenuTree, MenuTreeBuilder};
