use std::path::{Path, PathBuf};

/// Storage behind the editable source pane.
///
/// Implementations report every mutation (typing, deletion, `set_content`)
/// to their `ChangeNotifier` exactly once.
pub trait DocumentBuffer {
    /// Full current text.
    fn text(&self) -> String;

    /// Replace the whole content as a single mutation event.
    fn set_content(&mut self, text: &str);
}

/// The one live note: its text buffer and the file it came from, if any.
pub struct Document {
    buffer: Box<dyn DocumentBuffer>,
    file_path: Option<PathBuf>,
}

impl Document {
    pub fn new(buffer: Box<dyn DocumentBuffer>) -> Self {
        Self {
            buffer,
            file_path: None,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Replace the text wholesale; the notifier sees one event.
    pub fn replace_content(&mut self, text: &str) {
        self.buffer.set_content(text);
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_file_path(&mut self, path: PathBuf) {
        self.file_path = Some(path);
    }

    pub fn display_name(&self) -> Option<String> {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|name| name.to_string_lossy().to_string())
    }
}
