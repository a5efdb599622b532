use std::path::PathBuf;
use std::thread::JoinHandle;

use super::change_notifier::ChangeNotifier;
use super::document::{Document, DocumentBuffer};
use super::file_gateway::{self, FileDialogs};
use super::messages::{Dispatch, Message};
use super::settings::AppSettings;
use super::theme_controller::{Palette, ThemeController, ThemeMode};

pub const APP_TITLE: &str = "Markdown Note App";

/// Window-level presentation the shell state drives.
pub trait ShellView {
    /// Apply colors to both the editor and the preview.
    fn apply_theme(&mut self, mode: ThemeMode, palette: Palette);
    fn set_title(&mut self, title: &str);
}

enum PendingIo {
    /// `edits` is the mutation count when the load was requested.
    Load { path: PathBuf, edits: u64 },
    Save {
        path: PathBuf,
        worker: JoinHandle<Result<(), String>>,
    },
}

impl PendingIo {
    fn path(&self) -> &PathBuf {
        match self {
            PendingIo::Load { path, .. } | PendingIo::Save { path, .. } => path,
        }
    }
}

pub struct AppState {
    pub document: Document,
    pub notifier: ChangeNotifier,
    pub theme: ThemeController,
    pub settings: AppSettings,
    shell: Box<dyn ShellView>,
    dialogs: Box<dyn FileDialogs>,
    dispatch: Dispatch,
    settings_path: Option<PathBuf>,
    pending_io: Option<PendingIo>,
}

impl AppState {
    /// Compose the shell around an empty buffer and render the initial preview.
    pub fn new(
        buffer: Box<dyn DocumentBuffer>,
        notifier: ChangeNotifier,
        shell: Box<dyn ShellView>,
        dialogs: Box<dyn FileDialogs>,
        dispatch: Dispatch,
        settings: AppSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let mut state = Self {
            document: Document::new(buffer),
            notifier,
            theme: ThemeController::new(),
            settings,
            shell,
            dialogs,
            dispatch,
            settings_path,
            pending_io: None,
        };

        let text = state.document.text();
        state.notifier.preview().borrow_mut().refresh(&text);
        state.shell.apply_theme(state.theme.mode(), state.theme.palette());
        state.update_window_title();
        state
    }

    /// Handle one message. Returns `false` when the app should exit.
    pub fn handle_message(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileOpen => self.file_open(),
            Message::FileSave => self.file_save(),
            Message::ToggleTheme => self.toggle_theme(),
            Message::FileLoaded { path, result } => self.finish_open(path, result),
            Message::FileSaved { path, result } => self.finish_save(path, result),
            Message::FileQuit | Message::WindowClose => {
                self.shutdown();
                return false;
            }
        }
        true
    }

    pub fn preview_html(&self) -> String {
        self.notifier.preview().borrow().current_html().to_string()
    }

    pub fn is_io_pending(&self) -> bool {
        self.pending_io.is_some()
    }

    // --- File operations ---

    pub fn file_open(&mut self) {
        if self.refuse_while_pending("Open") {
            return;
        }
        let start_dir = self.start_dir();
        let Some(path) = self.dialogs.choose_open_path(start_dir.as_deref()) else {
            return;
        };

        match file_gateway::spawn_load(path.clone(), self.dispatch.clone()) {
            Ok(_) => {
                let edits = self.notifier.event_count();
                self.pending_io = Some(PendingIo::Load { path, edits });
            }
            Err(e) => self.report_error("Failed to open file.", &e.to_string()),
        }
    }

    pub fn file_save(&mut self) {
        if self.refuse_while_pending("Save") {
            return;
        }
        let start_dir = self.start_dir();
        let Some(path) = self.dialogs.choose_save_path(start_dir.as_deref()) else {
            return;
        };

        let text = self.document.text();
        match file_gateway::spawn_save(path.clone(), text, self.dispatch.clone()) {
            Ok(worker) => self.pending_io = Some(PendingIo::Save { path, worker }),
            Err(e) => self.report_error("Failed to save file.", &e.to_string()),
        }
    }

    fn finish_open(&mut self, path: PathBuf, result: Result<String, String>) {
        let edits_at_request = match self.pending_io.take() {
            Some(PendingIo::Load { edits, .. }) => edits,
            _ => self.notifier.event_count(),
        };
        match result {
            Ok(_) if self.notifier.event_count() != edits_at_request => {
                log::warn!("Discarding load of {}: note edited while loading", path.display());
                self.report_error(
                    "Failed to open file.",
                    "The note was edited while the file was loading. Open it again to replace the note.",
                );
            }
            Ok(text) => {
                self.document.replace_content(&text);
                self.settings.remember_directory_of(&path);
                log::info!("Opened {} ({} bytes)", path.display(), text.len());
                self.document.set_file_path(path);
                self.update_window_title();
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.report_error("Failed to open file.", &e);
            }
        }
    }

    fn finish_save(&mut self, path: PathBuf, result: Result<(), String>) {
        self.pending_io = None;
        match result {
            Ok(()) => {
                self.settings.remember_directory_of(&path);
                log::info!("Saved {}", path.display());
                self.document.set_file_path(path);
                self.update_window_title();
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", path.display(), e);
                self.report_error("Failed to save file.", &e);
            }
        }
    }

    fn refuse_while_pending(&self, command: &str) -> bool {
        match &self.pending_io {
            Some(pending) => {
                log::warn!("{} ignored: still busy with {}", command, pending.path().display());
                true
            }
            None => false,
        }
    }

    fn start_dir(&self) -> Option<PathBuf> {
        self.document
            .file_path()
            .and_then(|p| p.parent())
            .map(|p| p.to_path_buf())
            .or_else(|| self.settings.last_directory.as_ref().map(PathBuf::from))
    }

    fn report_error(&mut self, summary: &str, cause: &str) {
        self.dialogs.show_error(&format!("{}\n\n{}", summary, cause));
    }

    // --- View ---

    pub fn toggle_theme(&mut self) {
        let palette = self.theme.toggle();
        self.shell.apply_theme(self.theme.mode(), palette);
    }

    pub fn update_window_title(&mut self) {
        let title = match self.document.display_name() {
            Some(name) => format!("{} - {}", name, APP_TITLE),
            None => APP_TITLE.to_string(),
        };
        self.shell.set_title(&title);
    }

    /// Finish a running save, then persist settings before the window goes away.
    pub fn shutdown(&mut self) {
        match self.pending_io.take() {
            Some(PendingIo::Save { path, worker }) => {
                let result = worker
                    .join()
                    .unwrap_or_else(|_| Err("save worker panicked".to_string()));
                self.finish_save(path, result);
            }
            Some(PendingIo::Load { path, .. }) => {
                log::info!("Exiting before {} finished loading", path.display());
            }
            None => {}
        }
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                log::warn!("Failed to save settings: {}", e);
            }
        }
    }
}
