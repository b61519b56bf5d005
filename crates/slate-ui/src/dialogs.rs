//! Native modal dialogs.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use slate_core::{Dialogs, DiscardChoice, FileFilter};

/// [`Dialogs`] backed by the platform's blocking dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDialogs;

impl NativeDialogs {
    fn file_dialog(filters: &[FileFilter]) -> FileDialog {
        filters.iter().fold(FileDialog::new(), |dialog, filter| {
            dialog.add_filter(filter.name, filter.extensions)
        })
    }

    fn message(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Dialogs for NativeDialogs {
    fn confirm_discard(&mut self) -> DiscardChoice {
        let answer = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("Unsaved changes")
            .set_description("You have unsaved changes. Save before continuing?")
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        discard_choice(answer)
    }

    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        Self::file_dialog(filters).pick_file()
    }

    fn pick_save_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        Self::file_dialog(filters).save_file()
    }

    fn show_error(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Error, title, message);
    }

    fn show_info(&mut self, title: &str, message: &str) {
        Self::message(MessageLevel::Info, title, message);
    }
}

/// Yes saves, No discards, anything else (including closing the dialog)
/// cancels.
fn discard_choice(answer: MessageDialogResult) -> DiscardChoice {
    match answer {
        MessageDialogResult::Yes => DiscardChoice::Save,
        MessageDialogResult::No => DiscardChoice::Discard,
        _ => DiscardChoice::Cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_choice_mapping() {
        assert_eq!(discard_choice(MessageDialogResult::Yes), DiscardChoice::Save);
        assert_eq!(discard_choice(MessageDialogResult::No), DiscardChoice::Discard);
        assert_eq!(discard_choice(MessageDialogResult::Cancel), DiscardChoice::Cancel);
        assert_eq!(discard_choice(MessageDialogResult::Ok), DiscardChoice::Cancel);
    }
}
