//! Renderer lifecycle events
//!
//! The renderer reports one navigation at a time: start, then finish or fail.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RendererEvent {
    LoadStarted,
    LoadFinished {
        /// Final URL after redirects
        final_url: String,
        can_go_back: bool,
        can_go_forward: bool,
    },
    LoadFailed {
        error: LoadError,
    },
}

impl RendererEvent {
    pub fn name(&self) -> &'static str {
        match self {
            RendererEvent::LoadStarted => "load_started",
            RendererEvent::LoadFinished { .. } => "load_finished",
            RendererEvent::LoadFailed { .. } => "load_failed",
        }
    }
}

impl From<LoadError> for RendererEvent {
    fn from(error: LoadError) -> Self {
        RendererEvent::LoadFailed { error }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_from_json() {
        let event: RendererEvent = serde_json::from_str(
            r#"{"type":"load_finished","final_url":"https://a.com","can_go_back":true,"can_go_forward":false}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            RendererEvent::LoadFinished {
                final_url: "https://a.com".to_string(),
                can_go_back: true,
                can_go_forward: false,
            }
        );
        assert_eq!(event.name(), "load_finished");

        let event: RendererEvent =
            serde_json::from_str(r#"{"type":"load_failed","error":{"kind":"cancelled"}}"#).unwrap();
        assert_eq!(event, RendererEvent::from(LoadError::Cancelled));
    }
}
