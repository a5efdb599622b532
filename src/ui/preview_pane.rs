use fltk::{misc::HelpView, prelude::*};

use crate::app::PreviewSurface;

/// Read-only HTML pane showing the rendered note.
pub struct PreviewPane {
    view: HelpView,
}

impl PreviewPane {
    pub fn new(view: HelpView) -> Self {
        Self { view }
    }
}

impl PreviewSurface for PreviewPane {
    fn show_html(&mut self, html: &str) {
        // set_value scrolls back to the top
        let top = self.view.top_line();
        self.view.set_value(html);
        self.view.set_top_line(top);
        self.view.redraw();
    }
}
