//! Navigation state tracker
//!
//! Folds renderer events into [`NavigationState`]. The renderer is the source
//! of truth: events are applied as they arrive, never rejected.

use serde::{Deserialize, Serialize};

use crate::command::NavigationCommand;
use crate::error::{LoadError, ValidationError};
use crate::event::RendererEvent;
use crate::renderer::Renderer;
use crate::state::NavigationState;

/// A message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub const TITLE: &'static str = "Error";

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: Self::TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_url() -> Self {
        Self::error("Invalid URL")
    }

    pub fn network_error() -> Self {
        Self::error("Network Error")
    }
}

impl From<&ValidationError> for Alert {
    fn from(err: &ValidationError) -> Self {
        Self::error(err.display_message())
    }
}

#[derive(Debug, Default)]
pub struct NavigationTracker {
    state: NavigationState,
}

impl NavigationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Apply one renderer event. Returns the alert to show, if any.
    pub fn apply(&mut self, event: RendererEvent) -> Option<Alert> {
        match event {
            RendererEvent::LoadStarted => {
                self.on_load_start();
                None
            }
            RendererEvent::LoadFinished {
                final_url,
                can_go_back,
                can_go_forward,
            } => {
                self.on_load_finish(final_url, can_go_back, can_go_forward);
                None
            }
            RendererEvent::LoadFailed { error } => self.on_load_fail(&error),
        }
    }

    pub fn on_load_start(&mut self) {
        if self.state.is_loading {
            tracing::debug!("Load started while another was in flight, superseding");
        }
        self.state.is_loading = true;
        tracing::debug!(phase = %self.state.phase(), "Load started");
    }

    pub fn on_load_finish(
        &mut self,
        final_url: impl Into<String>,
        can_go_back: bool,
        can_go_forward: bool,
    ) {
        self.state = NavigationState {
            is_loading: false,
            can_go_back,
            can_go_forward,
            current_url_text: final_url.into(),
        };

        tracing::info!(
            url = %self.state.current_url_text,
            can_go_back,
            can_go_forward,
            "Load finished"
        );
    }

    /// Cancellations only clear the loading flag. Anything else also yields
    /// a "Network Error" alert; url text and back/forward flags are kept.
    pub fn on_load_fail(&mut self, error: &LoadError) -> Option<Alert> {
        self.state.is_loading = false;

        match error.display_message() {
            None => {
                tracing::debug!("Load cancelled");
                None
            }
            Some(message) => {
                tracing::warn!(error = %error, "Load failed");
                Some(Alert::error(message))
            }
        }
    }

    /// Forward a toolbar command to the renderer. State is left alone; the
    /// renderer's start/finish events will follow.
    pub fn on_user_navigate<R: Renderer + ?Sized>(
        &self,
        command: NavigationCommand,
        renderer: &mut R,
    ) {
        tracing::debug!(command = %command, "User navigation");

        match command {
            NavigationCommand::Back => renderer.go_back(),
            NavigationCommand::Forward => renderer.go_forward(),
            NavigationCommand::Reload => renderer.reload(),
        }
    }
}
