use std::path::PathBuf;
use std::sync::Arc;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and background file jobs send one of these; the dispatch
/// loop in main hands them to `AppState::handle_message`.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    FileOpen,
    FileSave,
    FileQuit,
    WindowClose,

    // View
    ToggleTheme,

    // Background file jobs
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    FileSaved {
        path: PathBuf,
        result: Result<(), String>,
    },
}

/// Delivers a message back to the event thread from any thread.
pub type Dispatch = Arc<dyn Fn(Message) + Send + Sync>;
