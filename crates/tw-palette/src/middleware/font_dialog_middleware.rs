//! Font Dialog Middleware
//!
//! Parses the dialog fields on submit and forwards the font to the playground.

use crate::actions::{Action, FontDialogAction, PlaygroundAction};
use crate::dispatcher::Dispatcher;
use crate::domain_models::{parse_font_rules, strip_style_tag};
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct FontDialogMiddleware;

impl FontDialogMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FontDialogMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for FontDialogMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::FontDialog(FontDialogAction::Submit) = action {
            let form = &state.font_dialog;
            match parse_font_rules(&form.css_rule) {
                Ok(rules) => {
                    dispatcher.dispatch(Action::Playground(PlaygroundAction::AddFont {
                        css_embed: strip_style_tag(&form.css_embed),
                        rules,
                    }));
                    dispatcher.dispatch(Action::FontDialog(FontDialogAction::Close));
                }
                Err(e) => {
                    log::warn!("Rejected font submission: {}", e);
                    dispatcher.dispatch(Action::FontDialog(FontDialogAction::Rejected(
                        e.to_string(),
                    )));
                }
            }
            return false;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::FontRule;
    use crate::middleware::test_support::{app_state, dispatcher, dispatched};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_submit_forwards_font() {
        let mut state = app_state();
        state.font_dialog.css_embed = "<style>@import url(roboto);</style>".to_string();
        state.font_dialog.css_rule = "font-family: 'Roboto', sans-serif;".to_string();
        let (dispatcher, rx) = dispatcher();

        FontDialogMiddleware::new().handle(
            &Action::FontDialog(FontDialogAction::Submit),
            &state,
            &dispatcher,
        );

        let actions = dispatched(&rx);
        assert_eq!(actions.len(), 2);
        match &actions[0] {
            Action::Playground(PlaygroundAction::AddFont { css_embed, rules }) => {
                assert_eq!(css_embed, "@import url(roboto);");
                assert_eq!(
                    rules,
                    &vec![FontRule {
                        key: "roboto".to_string(),
                        families: vec!["Roboto".to_string(), "sans-serif".to_string()],
                    }]
                );
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert!(matches!(
            actions[1],
            Action::FontDialog(FontDialogAction::Close)
        ));
    }

    #[test]
    fn test_empty_rule_is_rejected() {
        let (dispatcher, rx) = dispatcher();
        FontDialogMiddleware::new().handle(
            &Action::FontDialog(FontDialogAction::Submit),
            &app_state(),
            &dispatcher,
        );
        assert!(matches!(
            dispatched(&rx).as_slice(),
            [Action::FontDialog(FontDialogAction::Rejected(_))]
        ));
    }
}
