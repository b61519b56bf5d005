//! # Slate Core
//!
//! Editor state with no GUI attached.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        Editor                         │
//! │  ┌────────────┐  ┌──────────────┐  ┌───────────────┐ │
//! │  │  Document  │  │   Settings   │  │ SettingsStore │ │
//! │  └────────────┘  └──────────────┘  └───────────────┘ │
//! │        │                                              │
//! │        ▼                                              │
//! │  ┌────────────┐  ┌──────────────┐  ┌───────────────┐ │
//! │  │  metrics   │  │    gutter    │  │    keymap     │ │
//! │  └────────────┘  └──────────────┘  └───────────────┘ │
//! └──────────────────────────────────────────────────────┘
//!                          │ Dialogs
//!                          ▼
//!                  front end (slate-ui)
//! ```
//!
//! Everything a modal prompt would normally block on goes through the
//! [`Dialogs`] trait, so the whole document lifecycle can be driven from
//! tests with a scripted implementation.

pub mod dialog;
pub mod document;
pub mod editor;
pub mod gutter;
pub mod keymap;
pub mod metrics;
pub mod settings;

pub use dialog::{Dialogs, DiscardChoice, FileFilter};
pub use document::{DocState, Document, LineEnding};
pub use editor::Editor;
pub use gutter::{GutterLabel, TextLayout, UniformLines};
pub use keymap::{EditorCommand, Keymap, Shortcut};
pub use metrics::StatusLine;
pub use settings::{Settings, SettingsStore, ThemeName};

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Settings error: {0}")]
    Settings(#[from] settings::SettingsError),
}
