//! The document being edited.
//!
//! ## Dirty tracking
//!
//! A document is either [`DocState::Clean`] or [`DocState::Dirty`]:
//!
//! ```text
//!            any edit
//!   Clean ─────────────▶ Dirty
//!     ▲                    │
//!     └────────────────────┘
//!        successful save
//! ```
//!
//! The front end owns the live text widget and reports each edit through
//! [`Document::apply_edit`]; the document keeps the canonical copy in a
//! rope so it can be counted, written out and reloaded without touching
//! the widget.
//!
//! ## Line endings
//!
//! The rope always holds `\n` breaks, which is what the widget hands back.
//! A file whose first break is `\r\n` is remembered as [`LineEnding::CrLf`]
//! and written back that way.

use ropey::Rope;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Whether the buffer differs from what was last saved or loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocState {
    #[default]
    Clean,
    Dirty,
}

/// Line break written to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// The style of the first line break in `text`.
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(i) if text[..i].ends_with('\r') => LineEnding::CrLf,
            _ => LineEnding::Lf,
        }
    }
}

/// Text buffer plus its file path and dirty state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Buffer contents
    rope: Rope,

    /// File path (None until opened or saved)
    path: Option<PathBuf>,

    /// Clean/dirty state
    state: DocState,

    line_ending: LineEnding,

    /// Bumped each time the buffer is replaced wholesale
    generation: u64,
}

impl Document {
    /// Creates an empty, clean, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clean, untitled document holding `text`.
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&text.replace("\r\n", "\n")),
            line_ending: LineEnding::detect(text),
            ..Self::default()
        }
    }

    /// Reads a UTF-8 file into a new clean document.
    ///
    /// Nothing is constructed unless the whole file was read, so a failed
    /// open never disturbs the document it was meant to replace.
    pub fn from_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::with_text(&content)
        })
    }

    /// Writes the buffer to `path`.
    ///
    /// The text goes to a temporary sibling first and is renamed over the
    /// target once fully flushed, so a failure leaves any existing file
    /// as it was.
    pub fn write_to(&self, path: impl AsRef<Path>) -> CoreResult<()> {
        let path = path.as_ref();
        let write_err = |source| CoreError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let tmp = temp_sibling(path);
        let result = (|| -> std::io::Result<()> {
            let mut file = std::fs::File::create(&tmp)?;
            for chunk in self.rope.chunks() {
                match self.line_ending {
                    LineEnding::Lf => file.write_all(chunk.as_bytes())?,
                    LineEnding::CrLf => file.write_all(chunk.replace('\n', "\r\n").as_bytes())?,
                }
            }
            file.sync_all()?;
            std::fs::rename(&tmp, path)
        })();

        if result.is_err() {
            let _ = std::fs::remove_file(&tmp);
        }
        result.map_err(write_err)
    }

    // ==================== Getters ====================

    /// Returns all text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn state(&self) -> DocState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == DocState::Dirty
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    // ==================== Transitions ====================

    /// Records an edit made in the text widget. Clean → Dirty.
    pub fn apply_edit(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.state = DocState::Dirty;
    }

    /// Records a successful save to `path`. Dirty → Clean.
    pub fn mark_saved(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
        self.state = DocState::Clean;
    }

    /// Takes over `next`, marking this as a wholesale replacement.
    pub(crate) fn replace_with(&mut self, next: Document) {
        let generation = self.generation.wrapping_add(1);
        *self = next;
        self.generation = generation;
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    path.with_file_name(format!(".{}.slate-tmp", name))
}
