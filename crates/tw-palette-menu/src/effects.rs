//! Effect dispatch seam between the controller and its host

use crate::model::Effect;

/// Receives the external effects requested by selected menu options.
///
/// The controller treats every call as fire-and-forget. Implementations
/// typically translate the effect into an application action.
///
/// Closures implement this trait, which is convenient in tests:
///
/// ```rust
/// use tw_palette_menu::{Effect, EffectHandler};
///
/// let mut closed = false;
/// let mut handler = |effect: &Effect| closed |= *effect == Effect::ClosePalette;
/// handler.handle(&Effect::ClosePalette);
/// assert!(closed);
/// ```
pub trait EffectHandler {
    fn handle(&mut self, effect: &Effect);
}

impl<F> EffectHandler for F
where
    F: FnMut(&Effect),
{
    fn handle(&mut self, effect: &Effect) {
        self(effect)
    }
}

/// Handler that records effects in request order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectQueue {
    effects: Vec<Effect>,
}

impl EffectQueue {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}

impl EffectHandler for EffectQueue {
    fn handle(&mut self, effect: &Effect) {
        self.effects.push(effect.clone());
    }
}
