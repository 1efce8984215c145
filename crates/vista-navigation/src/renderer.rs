//! The content renderer the viewer drives.
//!
//! Opaque to this crate: it fetches, displays, and keeps its own back/forward
//! list. Lifecycle changes come back as [`RendererEvent`](crate::RendererEvent)s.

use crate::input::ResolvedUrl;

pub trait Renderer {
    fn load_request(&mut self, url: &ResolvedUrl);

    fn go_back(&mut self);

    fn go_forward(&mut self);

    fn reload(&mut self);

    /// Abandon whatever is loading
    fn stop_loading(&mut self);

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;
}
