use fltk::{enums::Color, misc::HelpView, prelude::*, text::TextEditor};

use crate::app::{Palette, Rgb};

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb(rgb.0, rgb.1, rgb.2)
}

pub fn apply_theme(editor: &mut TextEditor, preview: &mut HelpView, palette: Palette) {
    let background = to_color(palette.background);
    let foreground = to_color(palette.foreground);

    editor.set_color(background);
    editor.set_text_color(foreground);
    editor.set_cursor_color(foreground);

    preview.set_color(background);
    preview.set_text_color(foreground);

    // HelpView reads its colors while laying out, so lay out the same HTML again.
    if let Some(html) = preview.value() {
        let top = preview.top_line();
        preview.set_value(&html);
        preview.set_top_line(top);
    }

    editor.redraw();
    preview.redraw();
}
