use std::fs;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use super::error::{AppError, Result};
use super::messages::{Dispatch, Message};

/// Native file choosers and the modal error box.
pub trait FileDialogs {
    /// `None` when the user cancels.
    fn choose_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    /// `None` when the user cancels.
    fn choose_save_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    fn show_error(&mut self, message: &str);
}

/// Read the whole file into memory before anything touches the document.
///
/// Invalid UTF-8 is decoded lossily rather than refused. NUL bytes are
/// refused: the editor buffer is a C string and would cut the text there.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    if bytes.contains(&0) {
        return Err(AppError::Content(format!(
            "{} contains NUL bytes and cannot be edited as text",
            path.display()
        )));
    }
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            log::warn!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Write `text` to `path`, replacing any existing file.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)?;
    Ok(())
}

/// Read `path` on a worker thread and report `Message::FileLoaded`.
pub fn spawn_load(path: PathBuf, dispatch: Dispatch) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name("marknote-io".to_string())
        .spawn(move || {
            let result = read_document(&path).map_err(|e| e.to_string());
            dispatch(Message::FileLoaded { path, result });
        })?;
    Ok(handle)
}

/// Write a snapshot of the text on a worker thread and report `Message::FileSaved`.
///
/// The handle yields the same result, so a caller that is exiting can join it.
pub fn spawn_save(
    path: PathBuf,
    text: String,
    dispatch: Dispatch,
) -> Result<JoinHandle<std::result::Result<(), String>>> {
    let handle = thread::Builder::new()
        .name("marknote-io".to_string())
        .spawn(move || {
            let result = write_document(&path, &text).map_err(|e| e.to_string());
            dispatch(Message::FileSaved {
                path,
                result: result.clone(),
            });
            result
        })?;
    Ok(handle)
}
