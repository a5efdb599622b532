use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
};

use super::buffer_utils::buffer_text_no_leak;
use crate::app::{ChangeNotifier, DocumentBuffer};

/// The editor's `TextBuffer`, wired to the change notifier once for its lifetime.
pub struct EditorBuffer {
    buffer: TextBuffer,
}

impl EditorBuffer {
    /// Install a fresh buffer in `editor` and report every modification to `notifier`.
    pub fn attach(editor: &mut TextEditor, notifier: ChangeNotifier) -> Self {
        let mut buffer = TextBuffer::default();
        let source = buffer.clone();
        // set_text and selection replacement arrive as one callback carrying
        // both counts; pure restyles carry neither.
        buffer.add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                notifier.notify(&buffer_text_no_leak(&source));
            }
        });
        editor.set_buffer(buffer.clone());

        Self { buffer }
    }
}

impl DocumentBuffer for EditorBuffer {
    fn text(&self) -> String {
        buffer_text_no_leak(&self.buffer)
    }

    fn set_content(&mut self, text: &str) {
        self.buffer.set_text(text);
    }
}
