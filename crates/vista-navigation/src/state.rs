//! Navigation state
//!
//! ```text
//! Idle
//!   ↓ load started
//! Loading
//!   ↓ load finished / failed
//! Idle
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationPhase {
    /// Nothing in flight
    Idle,
    /// Between a start event and its finish/fail
    Loading,
}

impl NavigationPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, NavigationPhase::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationPhase::Idle => "idle",
            NavigationPhase::Loading => "loading",
        }
    }
}

impl std::fmt::Display for NavigationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the toolbar and address bar show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Drives the activity indicator
    pub is_loading: bool,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// Address bar text; only replaced when a load finishes
    pub current_url_text: String,
}

impl NavigationState {
    pub fn phase(&self) -> NavigationPhase {
        if self.is_loading {
            NavigationPhase::Loading
        } else {
            NavigationPhase::Idle
        }
    }
}
