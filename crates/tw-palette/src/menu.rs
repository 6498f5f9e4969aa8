//! The playground command menu
//!
//! ```text
//! Home
//! ├── add plugins ──────► Plugins
//! │                       ├── <plugin>  (add plugin, close, back to Home)
//! │                       └── ...
//! ├── add google fonts    (close palette, open font dialog)
//! └── take screenshot     (disabled)
//! ```

use tw_palette_config::AppConfig;
use tw_palette_menu::{Effect, MenuError, MenuOption, MenuTree, MenuTreeBuilder, Transition};

pub const PLUGINS_LABEL: &str = "Plugins";
pub const ADD_PLUGIN_ACTION: &str = "add plugin";

/// Build the palette menu for the configured plugins
pub fn playground_menu(config: &AppConfig) -> Result<MenuTree, MenuError> {
    let mut builder = MenuTreeBuilder::new();
    let home = builder.add_node(config.palette_title.as_str());
    let plugins = builder.add_node(PLUGINS_LABEL);

    builder
        .add_option(
            home,
            MenuOption::new("add plugins", Transition::Navigate(plugins)),
        )
        .add_option(
            home,
            MenuOption::new(
                "add google fonts",
                Transition::Composite(vec![
                    Transition::Invoke(Effect::ClosePalette),
                    Transition::Invoke(Effect::OpenFontDialog),
                ]),
            ),
        )
        .add_option(home, MenuOption::disabled("take screenshot"));

    for plugin in &config.plugins {
        builder.add_option(
            plugins,
            MenuOption::new(
                plugin.as_str(),
                Transition::Composite(vec![
                    Transition::Invoke(Effect::UpdateConfig {
                        action: ADD_PLUGIN_ACTION.to_string(),
                        payload: plugin.clone(),
                    }),
                    Transition::Invoke(Effect::ClosePalette),
                    Transition::Navigate(home),
                ]),
            ),
        );
    }

    let tree = builder.build(home)?;
    log::debug!(
        "Built playground menu with {} plugin option(s)",
        config.plugins.len()
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tw_palette_menu::{CommandMenuController, EffectQueue};

    #[test]
    fn test_home_level() {
        let tree = playground_menu(&AppConfig::default()).unwrap();
        let home = tree.node(tree.root()).unwrap();

        assert_eq!(home.label(), "Home");
        let labels: Vec<_> = home.options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["add plugins", "add google fonts", "take screenshot"]);
        assert!(home.options()[2].disabled);
    }

    #[test]
    fn test_plugins_follow_config() {
        let config = AppConfig {
            plugins: vec!["daisyui".to_string()],
            ..AppConfig::default()
        };
        let tree = playground_menu(&config).unwrap();
        let plugins = tree.find(PLUGINS_LABEL).unwrap();

        assert_eq!(tree.node(plugins).unwrap().options().len(), 1);
        assert_eq!(tree.node(plugins).unwrap().parent(), Some(tree.root()));
    }

    #[test]
    fn test_custom_title() {
        let config = AppConfig {
            palette_title: "Playground".to_string(),
            ..AppConfig::default()
        };
        let palette = CommandMenuController::new(playground_menu(&config).unwrap());
        assert_eq!(palette.current_label(), "Playground");
    }

    #[test]
    fn test_selecting_a_plugin() {
        let mut palette =
            CommandMenuController::new(playground_menu(&AppConfig::default()).unwrap());
        palette.select(0, &mut EffectQueue::default());
        assert_eq!(palette.current_label(), PLUGINS_LABEL);

        let mut effects = EffectQueue::default();
        palette.select(1, &mut effects);
        assert_eq!(
            effects.into_effects(),
            vec![
                Effect::UpdateConfig {
                    action: ADD_PLUGIN_ACTION.to_string(),
                    payload: "@tailwindcss/forms".to_string(),
                },
                Effect::ClosePalette,
            ]
        );
        assert!(palette.is_at_root());
    }
}
