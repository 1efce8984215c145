//! Vista Navigation
//!
//! The toolkit-independent half of the viewer screen:
//! - Address bar resolution: raw text → absolute URL, or a validation failure
//! - Navigation state tracking driven by renderer lifecycle events
//!
//! Toolbar commands (`back`, `forward`, `reload`) are forwarded to the renderer
//! untouched; state only moves when the renderer reports back.

mod command;
mod error;
mod event;
mod input;
mod renderer;
mod state;
mod tracker;

pub use command::NavigationCommand;
pub use error::{LoadError, ValidationError};
pub use event::RendererEvent;
pub use input::{is_valid_scheme, ResolvedUrl, UrlResolver, DEFAULT_SCHEME};
pub use renderer::Renderer;
pub use state::{NavigationPhase, NavigationState};
pub use tracker::{Alert, NavigationTracker};

pub type Result<T> = std::result::Result<T, ValidationError>;
