use fltk::{
    app::{self, Sender},
    enums::{Event, Font},
    group::Tile,
    menu::MenuBar,
    misc::HelpView,
    prelude::*,
    text::{TextEditor, WrapMode},
    window::Window,
};

use super::theme::apply_theme;
use crate::app::{APP_TITLE, AppSettings, Message, Palette, ShellView, ThemeMode};

const MENU_HEIGHT: i32 = 30;
const THEME_MENU_PATH: &str = "View/Toggle Theme";
const MIN_WIDTH: i32 = 320;
const MIN_HEIGHT: i32 = 200;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub editor: TextEditor,
    pub preview: HelpView,
}

/// Window with a menu bar over a draggable 50/50 split: source left, preview right.
pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let width = settings.window_width.max(MIN_WIDTH);
    let height = settings.window_height.max(MIN_HEIGHT);
    let pane_height = height - MENU_HEIGHT;
    let half = width / 2;
    let font_size = settings.editor_font_size();

    let mut wind = Window::new(100, 100, width, height, APP_TITLE);
    wind.set_xclass("marknote");

    let menu = MenuBar::new(0, 0, width, MENU_HEIGHT, "");

    let tile = Tile::new(0, MENU_HEIGHT, width, pane_height, None);

    let mut editor = TextEditor::new(0, MENU_HEIGHT, half, pane_height, "");
    editor.set_text_font(Font::Courier);
    editor.set_text_size(font_size);
    editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut preview = HelpView::new(half, MENU_HEIGHT, width - half, pane_height, "");
    preview.set_text_size(font_size);

    tile.end();
    wind.resizable(&tile);
    wind.end();

    // Only a real close request; Escape also fires the window callback.
    wind.set_callback({
        let s = *sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    MainWidgets {
        wind,
        menu,
        editor,
        preview,
    }
}

impl ShellView for MainWidgets {
    fn apply_theme(&mut self, mode: ThemeMode, palette: Palette) {
        apply_theme(&mut self.editor, &mut self.preview, palette);
        self.update_menu_checkbox(THEME_MENU_PATH, mode == ThemeMode::Dark);
    }

    fn set_title(&mut self, title: &str) {
        self.wind.set_label(title);
    }
}

impl MainWidgets {
    fn update_menu_checkbox(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0 {
            if let Some(mut item) = self.menu.at(idx) {
                if checked {
                    item.set();
                } else {
                    item.clear();
                }
            }
        }
    }
}
