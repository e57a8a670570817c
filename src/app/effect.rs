//! Side effects returned by the reducer, executed by EffectRunner.

use crate::app::action::Action;

#[derive(Debug, Clone)]
pub enum Effect {
    Render,

    /// Ask the source for the current payload; the result comes back as
    /// `Action::PayloadLoaded` tagged with `generation`
    FetchPayload {
        generation: u64,
    },

    CopyToClipboard {
        content: String,
        /// Shown in the status line on success, e.g. "cell", "row 12"
        description: String,
    },

    /// Runs the inner effects in order
    Sequence(Vec<Effect>),

    DispatchActions(Vec<Action>),
}

impl Effect {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render)
    }
}
