//! Executes side effects returned by the reducer.
//!
//! Results never touch state directly: they come back as actions through
//! `action_tx`, so every state change still goes through the reducer.

use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::ports::{ClipboardWriter, PayloadSource, Renderer};
use crate::app::state::AppState;

pub struct EffectRunner {
    source: Arc<dyn PayloadSource>,
    clipboard: Arc<dyn ClipboardWriter>,
    action_tx: mpsc::Sender<Action>,
}

impl EffectRunner {
    pub fn new(
        source: Arc<dyn PayloadSource>,
        clipboard: Arc<dyn ClipboardWriter>,
        action_tx: mpsc::Sender<Action>,
    ) -> Self {
        Self {
            source,
            clipboard,
            action_tx,
        }
    }

    pub async fn run<R: Renderer>(
        &self,
        effects: Vec<Effect>,
        renderer: &mut R,
        state: &mut AppState,
    ) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::Sequence(seq_effects) => {
                    for seq_effect in seq_effects {
                        self.run_single(seq_effect, renderer, state).await?;
                    }
                }
                single_effect => {
                    self.run_single(single_effect, renderer, state).await?;
                }
            }
        }
        Ok(())
    }

    async fn run_single<R: Renderer>(
        &self,
        effect: Effect,
        renderer: &mut R,
        state: &mut AppState,
    ) -> Result<()> {
        match effect {
            Effect::Render => {
                let output = renderer.draw(state)?;
                state.ui.grid = output.grid;
                state.ui.body_height = output.body_height;
                state.ui.last_visible_column = output.last_visible_column;
                Ok(())
            }

            Effect::FetchPayload { generation } => {
                let source = Arc::clone(&self.source);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    let result = source.fetch().await.map_err(|e| {
                        warn!(error = %e, "Payload fetch failed");
                        e.to_string()
                    });
                    let _ = tx.send(Action::PayloadLoaded { generation, result }).await;
                });
                Ok(())
            }

            Effect::CopyToClipboard {
                content,
                description,
            } => {
                let action = match self.clipboard.write(&content) {
                    Ok(()) => {
                        debug!(bytes = content.len(), "Copied to clipboard");
                        Action::CopySucceeded(description)
                    }
                    Err(e) => {
                        warn!(error = %e, "Clipboard write failed");
                        Action::CopyFailed(e.to_string())
                    }
                };
                let _ = self.action_tx.send(action).await;
                Ok(())
            }

            Effect::DispatchActions(actions) => {
                for action in actions {
                    let _ = self.action_tx.send(action).await;
                }
                Ok(())
            }

            // Nested sequences are flattened by `run`
            Effect::Sequence(effects) => {
                for effect in effects {
                    Box::pin(self.run_single(effect, renderer, state)).await?;
                }
                Ok(())
            }
        }
    }
}
