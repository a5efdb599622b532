use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::preview_controller::PreviewController;

/// Shared handle to the live preview.
pub type LivePreview = Rc<RefCell<PreviewController>>;

/// Re-renders the preview once per Document Buffer mutation.
///
/// The buffer calls `notify` from inside its own mutation callback, so the
/// preview is updated before control returns to the event loop.
#[derive(Clone)]
pub struct ChangeNotifier {
    preview: LivePreview,
    events: Rc<Cell<u64>>,
}

impl ChangeNotifier {
    pub fn new(preview: LivePreview) -> Self {
        Self {
            preview,
            events: Rc::new(Cell::new(0)),
        }
    }

    /// Report one mutation; `text` is the buffer's full content after it.
    pub fn notify(&self, text: &str) {
        self.events.set(self.events.get() + 1);
        match self.preview.try_borrow_mut() {
            Ok(mut preview) => preview.refresh(text),
            // Only reachable if a render itself mutated the buffer.
            Err(_) => log::warn!("Preview busy, mutation #{} not rendered", self.events.get()),
        }
    }

    /// Number of mutation events seen so far.
    pub fn event_count(&self) -> u64 {
        self.events.get()
    }

    pub fn preview(&self) -> &LivePreview {
        &self.preview
    }
}
