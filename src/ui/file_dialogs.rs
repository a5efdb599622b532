use std::path::{Path, PathBuf};

use fltk::dialog::{self, FileDialogType, NativeFileChooser};

use crate::app::file_filters::note_files_filter;
use crate::app::file_gateway::FileDialogs;

/// Platform file choosers plus FLTK's modal alert.
pub struct NativeDialogs;

impl FileDialogs for NativeDialogs {
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_dialog(FileDialogType::BrowseFile, start_dir)
    }

    fn choose_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        native_dialog(FileDialogType::BrowseSaveFile, start_dir)
    }

    fn show_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

fn native_dialog(kind: FileDialogType, start_dir: Option<&Path>) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_filter(&note_files_filter());
    if let Some(dir) = start_dir {
        if let Err(e) = nfc.set_directory(&dir) {
            log::debug!("Cannot start dialog in {}: {:?}", dir.display(), e);
        }
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}
