//! Markdown note editor: an editable source pane next to a live HTML preview.

pub mod app;
pub mod ui;
