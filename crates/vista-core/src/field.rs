//! Address field focus behavior
//!
//! When the field gains focus its whole text gets selected after a short delay.
//! The pending selection is tied to that focus: losing focus (or refocusing)
//! cancels it, and a task that fires anyway checks the focus generation before
//! touching the field.

use parking_lot::Mutex;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressField {
    text: String,
    /// Byte range of selected text, `None` when nothing is selected
    selection: Option<Range<usize>>,
    focused: bool,
    /// Bumped on every focus change
    focus_generation: u64,
}

impl AddressField {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.selection = None;
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        self.selection.clone()
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.selection.clone().and_then(|range| self.text.get(range))
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn select_all(&mut self) {
        self.selection = Some(0..self.text.len());
    }

    fn focus(&mut self) -> u64 {
        self.focused = true;
        self.focus_generation += 1;
        self.focus_generation
    }

    fn blur(&mut self) {
        self.focused = false;
        self.focus_generation += 1;
        self.selection = None;
    }
}

/// Schedules the deferred select-all for one address field.
pub struct SelectAllScheduler {
    field: Arc<Mutex<AddressField>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SelectAllScheduler {
    pub fn new(field: Arc<Mutex<AddressField>>, delay: Duration) -> Self {
        Self {
            field,
            delay,
            pending: None,
        }
    }

    pub fn field(&self) -> &Arc<Mutex<AddressField>> {
        &self.field
    }

    /// Mark the field focused and schedule the select-all.
    ///
    /// # Panics
    ///
    /// Panics if called outside the context of a tokio runtime, since the
    /// pending selection is spawned with [`tokio::spawn`].
    pub fn focus_gained(&mut self) {
        self.cancel_pending();

        let generation = self.field.lock().focus();
        let field = Arc::clone(&self.field);
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut field = field.lock();
            if field.focused && field.focus_generation == generation {
                field.select_all();
                tracing::trace!(len = field.text.len(), "Selected address text");
            } else {
                tracing::trace!(generation, "Focus changed, skipping select-all");
            }
        }));
    }

    pub fn focus_lost(&mut self) {
        self.cancel_pending();
        self.field.lock().blur();
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SelectAllScheduler {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(text: &str) -> SelectAllScheduler {
        let field = Arc::new(Mutex::new(AddressField::new(text)));
        SelectAllScheduler::new(field, Duration::from_millis(100))
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
        tokio::task::yield_now().await;
    }

    #[test]
    fn test_field_text() {
        let mut field = AddressField::new("https://a.com");
        field.select_all();
        assert_eq!(field.selected_text(), Some("https://a.com"));

        field.set_text("https://b.com");
        assert_eq!(field.text(), "https://b.com");
        assert!(field.selection().is_none());
    }

    #[test]
    #[should_panic]
    fn test_focus_outside_runtime_panics() {
        let mut scheduler = scheduler("https://a.com");
        scheduler.focus_gained();
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_all_after_delay() {
        let mut scheduler = scheduler("https://qiita.com/_CHUBURA");
        scheduler.focus_gained();

        advance(50).await;
        assert!(scheduler.field().lock().selection().is_none());
        assert!(scheduler.has_pending());

        advance(100).await;
        let field = scheduler.field().lock();
        assert!(field.is_focused());
        assert_eq!(field.selected_text(), Some("https://qiita.com/_CHUBURA"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blur_cancels_select_all() {
        let mut scheduler = scheduler("https://a.com");
        scheduler.focus_gained();

        advance(50).await;
        scheduler.focus_lost();
        assert!(!scheduler.has_pending());

        advance(200).await;
        let field = scheduler.field().lock();
        assert!(!field.is_focused());
        assert!(field.selection().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_refocus_restarts_delay() {
        let mut scheduler = scheduler("https://a.com");
        scheduler.focus_gained();
        advance(80).await;

        scheduler.focus_lost();
        scheduler.focus_gained();
        advance(80).await;
        assert!(scheduler.field().lock().selection().is_none());

        advance(40).await;
        assert_eq!(scheduler.field().lock().selection(), Some(0..13));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_generation_is_ignored() {
        let field = Arc::new(Mutex::new(AddressField::new("https://a.com")));
        let mut first = SelectAllScheduler::new(Arc::clone(&field), Duration::from_millis(100));
        first.focus_gained();

        // Focus moves through another owner of the same field without
        // cancelling the first task.
        field.lock().blur();
        field.lock().focus();

        advance(150).await;
        assert!(field.lock().selection().is_none());
    }
}
