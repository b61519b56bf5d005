use std::path::PathBuf;

use iced::widget::{scrollable, text_editor};
use iced::{Subscription, Task, keyboard, window};
use slate_core::{Dialogs, Editor, Keymap, SettingsStore, StatusLine};

pub mod history;
pub mod messages;
pub mod update;
pub mod view;

pub use history::History;
pub use messages::*;

use crate::dialogs::NativeDialogs;
use crate::icons::{self, IconSet};
use crate::style::EditorStyle;
use crate::theme::Theme;

/// Startup configuration.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Where the theme choice is persisted
    pub settings: SettingsStore,
    /// Where menu icons are looked up
    pub icons_dir: PathBuf,
}

impl Flags {
    /// Per-user settings file and the installed icon directory.
    ///
    /// Without a per-user config directory, settings go to
    /// `slate-settings.toml` in the working directory.
    pub fn resolve() -> Self {
        let settings = SettingsStore::default_location().unwrap_or_else(|e| {
            tracing::warn!("{}; using the working directory for settings", e);
            SettingsStore::new("slate-settings.toml")
        });
        Self {
            settings,
            icons_dir: icons::assets_dir(),
        }
    }
}

pub struct App {
    editor: Editor,
    dialogs: Box<dyn Dialogs>,

    /// Widget-side copy of the buffer
    content: text_editor::Content,
    /// Document generation `content` was built from
    generation: u64,
    history: History,

    keymap: Keymap,
    icons: IconSet,
    icons_dir: PathBuf,
    status: StatusLine,

    /// Scroll position and height of the text viewport
    scroll_offset: f32,
    scroll_x: f32,
    viewport_height: Option<f32>,
    window_width: f32,
    /// Columns in the longest line, which sets the text area's width
    widest_line: usize,

    menu_open: bool,
    style: EditorStyle,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::with_dialogs(flags, Box::new(NativeDialogs)), Task::none())
    }

    /// Builds the application around any [`Dialogs`] implementation.
    pub fn with_dialogs(flags: Flags, dialogs: Box<dyn Dialogs>) -> Self {
        let editor = Editor::new(flags.settings);
        let icons = IconSet::load(&flags.icons_dir, editor.theme());
        tracing::info!(
            "Loaded {} icons from {}",
            icons.len(),
            flags.icons_dir.display()
        );

        let style = EditorStyle::default();
        let content = text_editor::Content::with_text(&editor.document().text());

        Self {
            widest_line: widest_line(&content),
            content,
            generation: editor.document().generation(),
            status: editor.status((0, 0)),
            editor,
            dialogs,
            history: History::new(),
            keymap: Keymap::default(),
            icons,
            icons_dir: flags.icons_dir,
            scroll_offset: 0.0,
            scroll_x: 0.0,
            viewport_height: None,
            window_width: style.window_width,
            menu_open: false,
            style,
        }
    }

    pub fn title(&self) -> String {
        self.editor.title()
    }

    pub fn theme(&self) -> iced::Theme {
        self.colors().base()
    }

    /// Color tokens of the active theme.
    pub fn colors(&self) -> &'static Theme {
        Theme::get(self.editor.theme())
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    /// Text currently shown in the editor widget.
    pub fn buffer_text(&self) -> String {
        buffer_text(&self.content)
    }

    /// Width of the unwrapped text area: the longest line, but never
    /// narrower than the space beside the gutter.
    pub(crate) fn text_width(&self) -> f32 {
        let available = self.window_width - self.style.gutter_width;
        self.style.text_width(self.widest_line).max(available)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers))),
            window::resize_events().map(|(_, size)| Message::WindowResized(size)),
        ])
    }
}

/// Joins the widget's lines with `\n`, without adding a trailing newline.
pub(crate) fn buffer_text(content: &text_editor::Content) -> String {
    let mut text = String::new();
    for (i, line) in content.lines().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(&line);
    }
    text
}

/// Display columns of the longest line. Non-ASCII characters count
/// double so wide glyphs are not clipped.
pub(crate) fn widest_line(content: &text_editor::Content) -> usize {
    content
        .lines()
        .map(|line| line.chars().map(|c| if c.is_ascii() { 1 } else { 2 }).sum())
        .max()
        .unwrap_or(0)
}

pub(crate) fn editor_scroll_id() -> scrollable::Id {
    scrollable::Id::new("editor")
}

pub fn run(flags: Flags) -> iced::Result {
    let style = EditorStyle::default();
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .theme(App::theme)
        .window_size(iced::Size::new(style.window_width, style.window_height))
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
