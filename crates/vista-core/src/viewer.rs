//! The viewer screen
//!
//! Owns the navigation state; the renderer draws pages and reports lifecycle
//! events back through [`Viewer::handle_event`].

use parking_lot::Mutex;
use std::sync::Arc;

use vista_navigation::{
    Alert, NavigationCommand, NavigationState, NavigationTracker, Renderer, RendererEvent,
    ResolvedUrl, UrlResolver,
};

use crate::config::Config;
use crate::field::{AddressField, SelectAllScheduler};
use crate::notify::Notifier;
use crate::Result;

pub struct Viewer<R: Renderer, N: Notifier> {
    config: Config,
    /// Input resolver for the address bar
    resolver: UrlResolver,
    tracker: NavigationTracker,
    address: Arc<Mutex<AddressField>>,
    renderer: R,
    notifier: N,
}

impl<R: Renderer, N: Notifier> Viewer<R, N> {
    pub fn new(config: Config, renderer: R, notifier: N) -> Self {
        let resolver = UrlResolver::with_scheme(config.default_scheme.clone());

        Self {
            config,
            resolver,
            tracker: NavigationTracker::new(),
            address: Arc::new(Mutex::new(AddressField::default())),
            renderer,
            notifier,
        }
    }

    /// Load the configured homepage (first appearance of the screen)
    pub fn open_home(&mut self) -> Result<ResolvedUrl> {
        let homepage = self.config.homepage.clone();
        tracing::info!(homepage = %homepage, "Opening homepage");
        Ok(self.submit(&homepage)?)
    }

    /// Resolve address bar input and hand it to the renderer.
    ///
    /// Invalid input raises an "Invalid URL" alert and changes nothing else.
    pub fn submit(&mut self, input: &str) -> vista_navigation::Result<ResolvedUrl> {
        match self.resolver.resolve(input) {
            Ok(url) => {
                tracing::info!(url = %url, "Loading");
                self.renderer.load_request(&url);
                Ok(url)
            }
            Err(e) => {
                self.notifier.show_alert(&Alert::from(&e));
                Err(e)
            }
        }
    }

    /// Submit whatever the address field currently holds (return key)
    pub fn submit_address(&mut self) -> vista_navigation::Result<ResolvedUrl> {
        let text = self.address.lock().text().to_string();
        self.submit(&text)
    }

    pub fn handle_event(&mut self, event: RendererEvent) {
        tracing::debug!(event = event.name(), "Renderer event");

        let finished = matches!(event, RendererEvent::LoadFinished { .. });

        if let Some(alert) = self.tracker.apply(event) {
            self.notifier.show_alert(&alert);
            self.renderer.stop_loading();
            return;
        }

        // Only a successful finish rewrites what the user sees in the address bar
        if finished {
            let url_text = &self.tracker.state().current_url_text;
            let mut address = self.address.lock();
            if address.text() != url_text {
                address.set_text(url_text.clone());
            }
        }
    }

    pub fn navigate(&mut self, command: NavigationCommand) {
        self.tracker.on_user_navigate(command, &mut self.renderer);
    }

    pub fn state(&self) -> &NavigationState {
        self.tracker.state()
    }

    pub fn address(&self) -> &Arc<Mutex<AddressField>> {
        &self.address
    }

    /// Select-all behavior for this viewer's address field
    pub fn select_all_scheduler(&self) -> SelectAllScheduler {
        SelectAllScheduler::new(Arc::clone(&self.address), self.config.select_all_delay())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}
