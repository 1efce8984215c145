//! Vista Core
//!
//! The viewer screen: address bar, renderer and toolbar wired together.
//! Rust owns the state; the renderer only draws pages and reports back.

mod config;
mod error;
mod field;
mod notify;
mod viewer;

pub use config::Config;
pub use error::CoreError;
pub use field::{AddressField, SelectAllScheduler};
pub use notify::Notifier;
pub use viewer::Viewer;

// Re-export navigation components
pub use vista_navigation::{
    Alert, LoadError, NavigationCommand, NavigationPhase, NavigationState, NavigationTracker,
    Renderer, RendererEvent, ResolvedUrl, UrlResolver, ValidationError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
