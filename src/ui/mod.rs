//! FLTK widgets and the adapters that plug them into the app layer.

pub mod buffer_utils;
pub mod editor_buffer;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod preview_pane;
pub mod theme;
