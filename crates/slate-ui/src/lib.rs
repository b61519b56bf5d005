//! # Slate UI
//!
//! The iced front end for `slate-core`.
//!
//! ## Architecture
//!
//! The UI follows the Elm architecture (TEA):
//! - **Model**: [`App`] wraps the core `Editor` plus widget-only state
//!   (the text widget's content, scroll viewport, undo snapshots, icons)
//! - **Message**: Events that can occur
//! - **Update**: applies a message by calling into the `Editor`
//! - **View**: draws the top bar, gutter, text area and status bar from
//!   the active theme's tokens
//!
//! Every modal prompt goes through `slate_core::Dialogs`; the native
//! implementation lives in [`dialogs`].

pub mod app;
pub mod dialogs;
pub mod icons;
pub mod style;
pub mod theme;

pub use app::{App, Flags, run};
pub use theme::Theme;
