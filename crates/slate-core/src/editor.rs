//! Application state and document lifecycle.
//!
//! `Editor` is the one place session state lives: the document, the
//! active theme and the store it is persisted to. A front end turns
//! toolkit events into calls here and redraws from the accessors.

use std::path::{Path, PathBuf};

use crate::dialog::{DEFAULT_EXTENSION, Dialogs, DiscardChoice, TEXT_FILTERS};
use crate::document::Document;
use crate::metrics::StatusLine;
use crate::settings::{Settings, SettingsStore, ThemeName};
use crate::CoreResult;

/// Window title shown for an untitled document.
pub const APP_TITLE: &str = "Slate";

/// The editor's session state.
pub struct Editor {
    /// The open document
    document: Document,

    /// Persisted settings, including the active theme
    settings: Settings,

    /// Where settings are persisted
    store: SettingsStore,
}

impl Editor {
    /// Starts a session with an empty document and the stored settings.
    pub fn new(store: SettingsStore) -> Self {
        let settings = store.load();
        tracing::info!("Loaded settings (theme: {})", settings.theme);
        Self {
            document: Document::new(),
            settings,
            store,
        }
    }

    // ==================== Getters ====================

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme(&self) -> ThemeName {
        self.settings.theme
    }

    /// `Slate` for an untitled document, `Slate - <path>` otherwise.
    pub fn title(&self) -> String {
        match self.document.path() {
            Some(path) => format!("{} - {}", APP_TITLE, path.display()),
            None => APP_TITLE.to_string(),
        }
    }

    /// Status bar contents for the caret at 0-based `(line, column)`.
    pub fn status(&self, caret: (usize, usize)) -> StatusLine {
        StatusLine::compute(&self.document.text(), caret)
    }

    // ==================== Editing ====================

    /// Records an edit made in the text widget.
    pub fn edit(&mut self, text: &str) {
        self.document.apply_edit(text);
    }

    // ==================== Theme ====================

    /// Switches to the other theme and persists the choice.
    ///
    /// A failed write is logged and otherwise ignored; the new theme
    /// stays active for this session either way.
    pub fn toggle_theme(&mut self) -> ThemeName {
        self.settings.theme = self.settings.theme.toggled();
        if let Err(e) = self.store.save(&self.settings) {
            tracing::warn!("Failed to save settings: {}", e);
        }
        tracing::info!("Theme changed to {}", self.settings.theme);
        self.settings.theme
    }

    // ==================== Document lifecycle ====================

    /// Replaces the document with an empty one.
    ///
    /// Returns `false` if the user cancelled at the unsaved-changes prompt.
    pub fn new_document<D: Dialogs + ?Sized>(&mut self, dialogs: &mut D) -> bool {
        if !self.confirm_discard(dialogs) {
            return false;
        }
        self.document.replace_with(Document::new());
        tracing::info!("New document");
        true
    }

    /// Asks for a file and opens it.
    ///
    /// Returns `true` only if a new document was loaded.
    pub fn open<D: Dialogs + ?Sized>(&mut self, dialogs: &mut D) -> bool {
        if !self.confirm_discard(dialogs) {
            return false;
        }
        let Some(path) = dialogs.pick_open_path(TEXT_FILTERS) else {
            return false;
        };
        match self.open_path(&path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Open failed: {}", e);
                dialogs.show_error("Error", &format!("Failed to open file: {}", e));
                false
            }
        }
    }

    /// Loads `path` as the new document without any prompting.
    ///
    /// On failure the current document is left exactly as it was.
    pub fn open_path(&mut self, path: &Path) -> CoreResult<()> {
        let next = Document::from_file(path)?;
        self.document.replace_with(next);
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    /// Saves to the known path, or asks for one if there is none.
    ///
    /// Returns `true` if the document was written.
    pub fn save<D: Dialogs + ?Sized>(&mut self, dialogs: &mut D) -> bool {
        match self.document.path().map(Path::to_path_buf) {
            Some(path) => self.write_reporting(&path, dialogs),
            None => self.save_as(dialogs),
        }
    }

    /// Asks for a path, then saves there.
    ///
    /// The document only adopts the new path once it has been written.
    pub fn save_as<D: Dialogs + ?Sized>(&mut self, dialogs: &mut D) -> bool {
        let Some(path) = dialogs.pick_save_path(TEXT_FILTERS) else {
            return false;
        };
        self.write_reporting(&with_default_extension(path), dialogs)
    }

    /// Writes the document to `path` and adopts it on success.
    pub fn save_to(&mut self, path: &Path) -> CoreResult<()> {
        self.document.write_to(path)?;
        self.document.mark_saved(path);
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    fn write_reporting<D: Dialogs + ?Sized>(&mut self, path: &Path, dialogs: &mut D) -> bool {
        match self.save_to(path) {
            Ok(()) => {
                dialogs.show_info("Saved", "File saved successfully");
                true
            }
            Err(e) => {
                tracing::warn!("Save failed: {}", e);
                dialogs.show_error("Error", &format!("Failed to save file: {}", e));
                false
            }
        }
    }

    /// Gate in front of anything that throws the document away.
    ///
    /// Clean documents pass straight through. For a dirty one the user
    /// picks: Cancel stops here, Save attempts a save and then carries
    /// on, Discard carries on.
    fn confirm_discard<D: Dialogs + ?Sized>(&mut self, dialogs: &mut D) -> bool {
        if !self.document.is_dirty() {
            return true;
        }
        match dialogs.confirm_discard() {
            DiscardChoice::Cancel => false,
            DiscardChoice::Save => {
                self.save(dialogs);
                true
            }
            DiscardChoice::Discard => true,
        }
    }
}

fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(DEFAULT_EXTENSION)
    }
}
