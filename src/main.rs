use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use fltk::{app, prelude::*};

use marknote::app::{
    AppSettings, AppState, ChangeNotifier, Dispatch, Message, PreviewController, PreviewRenderer,
};
use marknote::ui::editor_buffer::EditorBuffer;
use marknote::ui::file_dialogs::NativeDialogs;
use marknote::ui::main_window::build_main_window;
use marknote::ui::menu::build_menu;
use marknote::ui::preview_pane::PreviewPane;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let mut widgets = build_main_window(&settings, &sender);
    build_menu(&mut widgets.menu, &sender);

    let preview = PreviewController::new(
        PreviewRenderer::default(),
        Box::new(PreviewPane::new(widgets.preview.clone())),
    );
    let notifier = ChangeNotifier::new(Rc::new(RefCell::new(preview)));
    let buffer = EditorBuffer::attach(&mut widgets.editor, notifier.clone());

    // Worker threads report back through the FLTK channel, which wakes app.wait().
    let dispatch: Dispatch = Arc::new(move |msg: Message| sender.send(msg));

    let mut wind = widgets.wind.clone();
    let mut state = AppState::new(
        Box::new(buffer),
        notifier,
        Box::new(widgets),
        Box::new(NativeDialogs),
        dispatch,
        settings,
        Some(AppSettings::get_config_path()),
    );

    wind.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if !state.handle_message(msg) {
                app.quit();
            }
        }
    }
}
