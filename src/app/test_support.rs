//! In-memory stand-ins for the FLTK surfaces.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use super::change_notifier::ChangeNotifier;
use super::document::DocumentBuffer;
use super::file_gateway::FileDialogs;
use super::messages::{Dispatch, Message};
use super::preview_controller::{PreviewController, PreviewRenderer, PreviewSurface};
use super::settings::AppSettings;
use super::state::{AppState, ShellView};
use super::theme_controller::{Palette, ThemeMode};

#[derive(Clone, Default)]
pub struct RecordingSurface {
    shown: Rc<RefCell<Vec<String>>>,
}

impl RecordingSurface {
    pub fn shown(&self) -> Vec<String> {
        self.shown.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.shown.borrow().last().cloned()
    }
}

impl PreviewSurface for RecordingSurface {
    fn show_html(&mut self, html: &str) {
        self.shown.borrow_mut().push(html.to_string());
    }
}

/// Buffer whose text is shared with an `EditorHandle` that plays the user.
pub struct MemoryBuffer {
    text: Rc<RefCell<String>>,
    notifier: ChangeNotifier,
}

impl DocumentBuffer for MemoryBuffer {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_content(&mut self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
        self.notifier.notify(text);
    }
}

#[derive(Clone)]
pub struct EditorHandle {
    text: Rc<RefCell<String>>,
    notifier: ChangeNotifier,
}

impl EditorHandle {
    /// One insertion event per character.
    pub fn type_text(&self, s: &str) {
        for c in s.chars() {
            self.text.borrow_mut().push(c);
            self.emit();
        }
    }

    pub fn backspace(&self) {
        let removed = self.text.borrow_mut().pop();
        if removed.is_some() {
            self.emit();
        }
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn emit(&self) {
        let current = self.text();
        self.notifier.notify(&current);
    }
}

#[derive(Clone, Default)]
pub struct RecordingShell {
    palettes: Rc<RefCell<Vec<Palette>>>,
    modes: Rc<RefCell<Vec<ThemeMode>>>,
    titles: Rc<RefCell<Vec<String>>>,
}

impl RecordingShell {
    pub fn palettes(&self) -> Vec<Palette> {
        self.palettes.borrow().clone()
    }

    pub fn modes(&self) -> Vec<ThemeMode> {
        self.modes.borrow().clone()
    }

    pub fn title(&self) -> Option<String> {
        self.titles.borrow().last().cloned()
    }
}

impl ShellView for RecordingShell {
    fn apply_theme(&mut self, mode: ThemeMode, palette: Palette) {
        self.modes.borrow_mut().push(mode);
        self.palettes.borrow_mut().push(palette);
    }

    fn set_title(&mut self, title: &str) {
        self.titles.borrow_mut().push(title.to_string());
    }
}

/// Answers dialogs from queues; an empty queue means "cancelled".
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    open_answers: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
    save_answers: Rc<RefCell<VecDeque<Option<PathBuf>>>>,
    start_dirs: Rc<RefCell<Vec<Option<PathBuf>>>>,
    errors: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDialogs {
    pub fn answer_open(&self, answer: Option<PathBuf>) {
        self.open_answers.borrow_mut().push_back(answer);
    }

    pub fn answer_save(&self, answer: Option<PathBuf>) {
        self.save_answers.borrow_mut().push_back(answer);
    }

    pub fn unused_save_answers(&self) -> usize {
        self.save_answers.borrow().len()
    }

    pub fn start_dirs(&self) -> Vec<Option<PathBuf>> {
        self.start_dirs.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl FileDialogs for ScriptedDialogs {
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.start_dirs.borrow_mut().push(start_dir.map(Path::to_path_buf));
        self.open_answers.borrow_mut().pop_front().flatten()
    }

    fn choose_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.start_dirs.borrow_mut().push(start_dir.map(Path::to_path_buf));
        self.save_answers.borrow_mut().pop_front().flatten()
    }

    fn show_error(&mut self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

/// A fully wired `AppState` plus handles to every fake surface.
pub struct Harness {
    pub state: AppState,
    pub editor: EditorHandle,
    pub notifier: ChangeNotifier,
    pub surface: RecordingSurface,
    pub shell: RecordingShell,
    pub dialogs: ScriptedDialogs,
    replies: mpsc::Receiver<Message>,
}

impl Harness {
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_settings_path(path: PathBuf) -> Self {
        Self::build(Some(path))
    }

    fn build(settings_path: Option<PathBuf>) -> Self {
        let surface = RecordingSurface::default();
        let preview = PreviewController::new(PreviewRenderer::default(), Box::new(surface.clone()));
        let notifier = ChangeNotifier::new(Rc::new(RefCell::new(preview)));

        let text = Rc::new(RefCell::new(String::new()));
        let buffer = MemoryBuffer {
            text: text.clone(),
            notifier: notifier.clone(),
        };
        let editor = EditorHandle {
            text,
            notifier: notifier.clone(),
        };

        let (tx, replies) = mpsc::channel();
        let dispatch: Dispatch = Arc::new(move |msg: Message| {
            let _ = tx.send(msg);
        });

        let shell = RecordingShell::default();
        let dialogs = ScriptedDialogs::default();
        let state = AppState::new(
            Box::new(buffer),
            notifier.clone(),
            Box::new(shell.clone()),
            Box::new(dialogs.clone()),
            dispatch,
            AppSettings::default(),
            settings_path,
        );

        Self {
            state,
            editor,
            notifier,
            surface,
            shell,
            dialogs,
            replies,
        }
    }

    /// Deliver the next background reply to the state, as the event loop would.
    pub fn pump(&mut self) -> bool {
        match self.replies.recv_timeout(Duration::from_secs(10)) {
            Ok(msg) => self.state.handle_message(msg),
            Err(_) => panic!("no reply from file worker"),
        }
    }
}
