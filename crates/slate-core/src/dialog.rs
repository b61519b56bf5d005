//! Modal prompts the editor needs from its front end.
//!
//! Each call blocks until the user answers, exactly like a native modal
//! dialog; nothing else runs on the UI thread meanwhile.

use std::path::PathBuf;

/// Answer to "save before continuing?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    /// Save the document, then carry on.
    Save,
    /// Carry on without saving.
    Discard,
    /// Abandon the operation.
    Cancel,
}

/// A named group of file extensions offered by open/save choosers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// Filters offered when opening or saving a document.
pub const TEXT_FILTERS: &[FileFilter] = &[
    FileFilter {
        name: "Text Files",
        extensions: &["txt", "md", "py"],
    },
    FileFilter {
        name: "All Files",
        extensions: &["*"],
    },
];

/// Appended by "Save As" when the chosen name has no extension.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Blocking user prompts.
pub trait Dialogs {
    /// Asks whether unsaved changes should be saved first.
    fn confirm_discard(&mut self) -> DiscardChoice;

    /// Asks for a file to open. `None` means the user cancelled.
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// Asks for a file to save to. `None` means the user cancelled.
    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);

    fn show_info(&mut self, title: &str, message: &str);
}
