use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("File/Save...", Shortcut::Ctrl | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // View
    menu.add("View/Toggle Theme", Shortcut::Ctrl | 't', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleTheme) });
}
