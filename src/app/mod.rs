//! Application layer, independent of the widget toolkit.
//!
//! # Structure
//!
//! - `document` / `change_notifier` - the note text and its mutation hook
//! - `preview_controller` - markdown conversion and the live preview
//! - `file_gateway` - open/save on a worker thread
//! - `theme_controller` - light/dark palettes
//! - `state.rs` - `AppState`, which owns all of the above and handles messages

pub mod change_notifier;
pub mod document;
pub mod error;
pub mod file_filters;
pub mod file_gateway;
pub mod messages;
pub mod preview_controller;
pub mod settings;
pub mod state;
pub mod theme_controller;

#[cfg(test)]
pub(crate) mod test_support;

pub use change_notifier::{ChangeNotifier, LivePreview};
pub use document::{Document, DocumentBuffer};
pub use error::{AppError, Result};
pub use messages::{Dispatch, Message};
pub use preview_controller::{PreviewController, PreviewRenderer, PreviewSurface};
pub use settings::AppSettings;
pub use state::{APP_TITLE, AppState, ShellView};
pub use theme_controller::{Palette, Rgb, ThemeController, ThemeMode};
