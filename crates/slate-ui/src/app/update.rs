use iced::widget::{scrollable, text_editor};
use iced::{Task, keyboard};
use slate_core::{EditorCommand, Shortcut};

use super::{App, Message, buffer_text, editor_scroll_id, widest_line};
use crate::icons::IconSet;
use crate::style::EditorStyle;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NewFile => {
                self.menu_open = false;
                self.editor.new_document(self.dialogs.as_mut());
                return self.sync_document();
            }

            Message::OpenFile => {
                self.menu_open = false;
                self.editor.open(self.dialogs.as_mut());
                return self.sync_document();
            }

            Message::Save => {
                self.menu_open = false;
                self.editor.save(self.dialogs.as_mut());
            }

            Message::SaveAs => {
                self.menu_open = false;
                self.editor.save_as(self.dialogs.as_mut());
            }

            Message::Exit => {
                self.menu_open = false;
                tracing::info!("Exiting");
                return iced::exit();
            }

            Message::Undo => {
                self.menu_open = false;
                match self.history.undo(buffer_text(&self.content)) {
                    Some(previous) => self.restore(previous),
                    None => tracing::debug!("Nothing to undo"),
                }
            }

            Message::Redo => {
                self.menu_open = false;
                match self.history.redo(buffer_text(&self.content)) {
                    Some(next) => self.restore(next),
                    None => tracing::debug!("Nothing to redo"),
                }
            }

            Message::EditorAction(action) => {
                return self.handle_editor_action(action);
            }

            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().y;
                self.scroll_x = viewport.absolute_offset().x;
                self.viewport_height = Some(viewport.bounds().height);
                tracing::trace!(
                    "Viewport at {} (height {})",
                    self.scroll_offset,
                    viewport.bounds().height
                );
            }

            Message::WindowResized(size) => {
                self.window_width = size.width;
            }

            Message::ToggleTheme => {
                self.menu_open = false;
                let theme = self.editor.toggle_theme();
                self.icons = IconSet::load(&self.icons_dir, theme);
            }

            Message::ToggleFileMenu => {
                self.menu_open = !self.menu_open;
            }

            Message::CloseFileMenu => {
                self.menu_open = false;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }
        }

        Task::none()
    }

    fn handle_editor_action(&mut self, action: text_editor::Action) -> Task<Message> {
        self.menu_open = false;

        let is_scroll = matches!(action, text_editor::Action::Scroll { .. });
        let before = action.is_edit().then(|| buffer_text(&self.content));

        self.content.perform(action);

        // Backspace at the start or Delete at the end change nothing
        if let Some(before) = before {
            let after = buffer_text(&self.content);
            if after != before {
                self.history.record(before);
                self.editor.edit(&after);
                self.widest_line = widest_line(&self.content);
            }
        }
        self.refresh_status();

        if is_scroll {
            Task::none()
        } else {
            self.follow_caret()
        }
    }

    pub fn handle_key_pressed(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> Task<Message> {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            self.menu_open = false;
            return Task::none();
        }

        let Some(shortcut) = shortcut_from(&key, modifiers) else {
            return Task::none();
        };

        match self.keymap.lookup(shortcut) {
            Some(command) => {
                tracing::debug!("{} -> {:?}", shortcut, command);
                self.update(command_message(command))
            }
            None => Task::none(),
        }
    }

    /// Rebuilds the widget after the document was replaced.
    fn sync_document(&mut self) -> Task<Message> {
        let generation = self.editor.document().generation();
        if generation == self.generation {
            return Task::none();
        }

        self.generation = generation;
        self.content = text_editor::Content::with_text(&self.editor.document().text());
        self.widest_line = widest_line(&self.content);
        self.history.clear();
        self.refresh_status();
        self.scroll_offset = 0.0;
        self.scroll_x = 0.0;

        scrollable::scroll_to(
            editor_scroll_id(),
            scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
        )
    }

    /// Shows `text` after an undo or redo step.
    fn restore(&mut self, text: String) {
        self.content = text_editor::Content::with_text(&text);
        self.widest_line = widest_line(&self.content);
        self.editor.edit(&text);
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let (line, index) = self.content.cursor_position();
        let column = self
            .content
            .line(line)
            .map_or(index, |text| char_column(&text, index));
        self.status = self.editor.status((line, column));
    }

    /// Scrolls just far enough to keep the caret's line visible.
    fn follow_caret(&self) -> Task<Message> {
        let Some(height) = self.viewport_height else {
            return Task::none();
        };
        let (line, _) = self.content.cursor_position();

        match caret_scroll_target(&self.style, line, self.scroll_offset, height) {
            Some(y) => scrollable::scroll_to(
                editor_scroll_id(),
                scrollable::AbsoluteOffset { x: self.scroll_x, y },
            ),
            None => Task::none(),
        }
    }
}

/// Characters before byte offset `index` of `line`. iced reports the
/// caret as a byte offset.
fn char_column(line: &str, index: usize) -> usize {
    line.char_indices().take_while(|(i, _)| *i < index).count()
}

/// Ctrl-chords on a single character. Alt combinations are never
/// shortcuts.
fn shortcut_from(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    if !modifiers.control() || modifiers.alt() {
        return None;
    }
    let keyboard::Key::Character(c) = key else {
        return None;
    };
    let mut chars = c.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(Shortcut::new(true, modifiers.shift(), ch)),
        _ => None,
    }
}

fn command_message(command: EditorCommand) -> Message {
    match command {
        EditorCommand::New => Message::NewFile,
        EditorCommand::Open => Message::OpenFile,
        EditorCommand::Save => Message::Save,
        EditorCommand::SaveAs => Message::SaveAs,
        EditorCommand::Undo => Message::Undo,
        EditorCommand::Redo => Message::Redo,
    }
}

/// New scroll offset that brings `line` into a viewport of `height`
/// currently scrolled to `offset`, or `None` if it is already visible.
fn caret_scroll_target(style: &EditorStyle, line: usize, offset: f32, height: f32) -> Option<f32> {
    let line_height = style.line_height_px();
    let top = style.text_padding + line as f32 * line_height;
    let bottom = top + line_height + style.text_padding;

    if top - style.text_padding < offset {
        Some((top - style.text_padding).max(0.0))
    } else if bottom > offset + height {
        Some((bottom - height).max(0.0))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use slate_core::{Dialogs, DiscardChoice, FileFilter, SettingsStore, ThemeName};
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct ScriptedDialogs {
        discard: VecDeque<DiscardChoice>,
        open_paths: VecDeque<PathBuf>,
        save_paths: VecDeque<PathBuf>,
    }

    impl Dialogs for ScriptedDialogs {
        fn confirm_discard(&mut self) -> DiscardChoice {
            self.discard.pop_front().unwrap_or(DiscardChoice::Cancel)
        }

        fn pick_open_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
            self.open_paths.pop_front()
        }

        fn pick_save_path(&mut self, _filters: &[FileFilter]) -> Option<PathBuf> {
            self.save_paths.pop_front()
        }

        fn show_error(&mut self, _title: &str, _message: &str) {}

        fn show_info(&mut self, _title: &str, _message: &str) {}
    }

    fn app_in(dir: &Path, dialogs: ScriptedDialogs) -> App {
        let flags = Flags {
            settings: SettingsStore::new(dir.join("settings.toml")),
            icons_dir: dir.join("icons"),
        };
        App::with_dialogs(flags, Box::new(dialogs))
    }

    fn type_char(app: &mut App, c: char) {
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Insert(c),
        )));
    }

    fn ctrl(key: &str) -> Message {
        Message::KeyPressed(
            keyboard::Key::Character(key.into()),
            keyboard::Modifiers::CTRL,
        )
    }

    #[test]
    fn test_typing_marks_dirty_and_updates_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());
        assert_eq!(app.status().to_string(), "Ln 1, Col 0 | Words: 0 | Chars: 0");

        type_char(&mut app, 'h');
        type_char(&mut app, 'i');

        assert!(app.editor().document().is_dirty());
        assert_eq!(app.buffer_text(), "hi");
        assert_eq!(app.editor().document().text(), "hi");
        assert_eq!(app.status().to_string(), "Ln 1, Col 2 | Words: 1 | Chars: 2");
    }

    #[test]
    fn test_column_counts_characters() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());

        type_char(&mut app, 'é');
        type_char(&mut app, '中');

        assert_eq!(app.status().to_string(), "Ln 1, Col 2 | Words: 1 | Chars: 2");
    }

    #[test]
    fn test_char_column() {
        assert_eq!(char_column("abc", 2), 2);
        assert_eq!(char_column("é中x", 5), 2);
        assert_eq!(char_column("é中x", 6), 3);
        assert_eq!(char_column("", 0), 0);
    }

    #[test]
    fn test_backspace_at_start_keeps_document_clean() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("abc.txt");
        std::fs::write(&file, "abc").unwrap();

        let dialogs = ScriptedDialogs {
            open_paths: VecDeque::from([file]),
            ..Default::default()
        };
        let mut app = app_in(dir.path(), dialogs);
        let _ = app.update(Message::OpenFile);
        assert!(!app.editor().document().is_dirty());

        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Backspace,
        )));

        assert_eq!(app.buffer_text(), "abc");
        assert!(!app.editor().document().is_dirty());
        assert_eq!(app.title(), format!("Slate - {}", dir.path().join("abc.txt").display()));
    }

    #[test]
    fn test_crlf_file_counts_the_same_before_and_after_editing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("dos.txt");
        std::fs::write(&file, "ab\r\ncd").unwrap();

        let dialogs = ScriptedDialogs {
            open_paths: VecDeque::from([file.clone()]),
            ..Default::default()
        };
        let mut app = app_in(dir.path(), dialogs);
        let _ = app.update(Message::OpenFile);
        assert_eq!(app.status().to_string(), "Ln 1, Col 0 | Words: 2 | Chars: 5");

        type_char(&mut app, 'x');
        assert_eq!(app.status().to_string(), "Ln 1, Col 1 | Words: 2 | Chars: 6");

        let _ = app.update(ctrl("s"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "xab\r\ncd");
    }

    #[test]
    fn test_long_line_widens_text_area() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());
        let resting = app.text_width();
        assert!((resting - (app.style.window_width - app.style.gutter_width)).abs() < 1e-3);

        for _ in 0..300 {
            type_char(&mut app, 'w');
        }
        let _ = app.update(Message::EditorAction(text_editor::Action::Edit(
            text_editor::Edit::Enter,
        )));
        type_char(&mut app, 'x');

        assert!(app.text_width() >= app.style.text_width(300));
        assert_eq!(app.status().to_string(), "Ln 2, Col 1 | Words: 2 | Chars: 302");

        let _ = app.update(Message::WindowResized(iced::Size::new(10_000.0, 600.0)));
        assert!((app.text_width() - (10_000.0 - app.style.gutter_width)).abs() < 1e-3);
    }

    #[test]
    fn test_undo_and_redo_shortcuts() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());
        type_char(&mut app, 'a');
        type_char(&mut app, 'b');

        let _ = app.update(ctrl("z"));
        assert_eq!(app.buffer_text(), "a");
        assert_eq!(app.editor().document().text(), "a");

        let _ = app.update(ctrl("y"));
        assert_eq!(app.buffer_text(), "ab");
    }

    #[test]
    fn test_cancelled_prompt_keeps_typed_text() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "elsewhere").unwrap();

        let dialogs = ScriptedDialogs {
            discard: VecDeque::from([DiscardChoice::Cancel, DiscardChoice::Cancel]),
            open_paths: VecDeque::from([file]),
            ..Default::default()
        };
        let mut app = app_in(dir.path(), dialogs);
        type_char(&mut app, 'x');

        let _ = app.update(Message::NewFile);
        assert_eq!(app.buffer_text(), "x");

        let _ = app.update(Message::OpenFile);
        assert_eq!(app.buffer_text(), "x");
        assert!(app.editor().document().is_dirty());
    }

    #[test]
    fn test_open_after_discard() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "one two\nthree").unwrap();

        let dialogs = ScriptedDialogs {
            discard: VecDeque::from([DiscardChoice::Discard]),
            open_paths: VecDeque::from([file.clone()]),
            ..Default::default()
        };
        let mut app = app_in(dir.path(), dialogs);
        type_char(&mut app, 'x');

        let _ = app.update(ctrl("o"));

        assert_eq!(app.buffer_text(), "one two\nthree");
        assert!(!app.editor().document().is_dirty());
        assert_eq!(app.title(), format!("Slate - {}", file.display()));
        assert_eq!(app.status().to_string(), "Ln 1, Col 0 | Words: 3 | Chars: 13");

        // history does not reach into the previous document
        let _ = app.update(ctrl("z"));
        assert_eq!(app.buffer_text(), "one two\nthree");
    }

    #[test]
    fn test_save_as_shortcut() {
        let dir = tempfile::tempdir().unwrap();
        let dialogs = ScriptedDialogs {
            save_paths: VecDeque::from([dir.path().join("out")]),
            ..Default::default()
        };
        let mut app = app_in(dir.path(), dialogs);
        type_char(&mut app, 'z');

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Character("S".into()),
            keyboard::Modifiers::CTRL | keyboard::Modifiers::SHIFT,
        ));

        let saved = dir.path().join("out.txt");
        assert_eq!(std::fs::read_to_string(&saved).unwrap(), "z");
        assert!(!app.editor().document().is_dirty());
    }

    #[test]
    fn test_theme_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());
        type_char(&mut app, 'q');

        let _ = app.update(Message::ToggleTheme);

        assert_eq!(app.editor().theme(), ThemeName::Dark);
        assert!(app.colors().is_dark());
        assert_eq!(app.buffer_text(), "q");

        let reopened = app_in(dir.path(), ScriptedDialogs::default());
        assert_eq!(reopened.editor().theme(), ThemeName::Dark);
    }

    #[test]
    fn test_menu_closes_on_escape() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path(), ScriptedDialogs::default());

        let _ = app.update(Message::ToggleFileMenu);
        assert!(app.menu_open);

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(keyboard::key::Named::Escape),
            keyboard::Modifiers::empty(),
        ));
        assert!(!app.menu_open);
    }

    #[test]
    fn test_shortcut_from_key() {
        let ctrl = keyboard::Modifiers::CTRL;
        let key = keyboard::Key::Character("s".into());

        assert_eq!(shortcut_from(&key, ctrl), Some(Shortcut::new(true, false, 's')));
        assert_eq!(shortcut_from(&key, keyboard::Modifiers::empty()), None);
        assert_eq!(shortcut_from(&key, ctrl | keyboard::Modifiers::ALT), None);
        assert_eq!(
            shortcut_from(&keyboard::Key::Named(keyboard::key::Named::Tab), ctrl),
            None
        );
    }

    #[test]
    fn test_caret_scroll_target() {
        let style = EditorStyle::default();
        let lh = style.line_height_px();

        // visible already
        assert_eq!(caret_scroll_target(&style, 0, 0.0, 200.0), None);

        // below the viewport: scroll so the line's bottom edge shows
        let target = caret_scroll_target(&style, 20, 0.0, 100.0).unwrap();
        let bottom = style.text_padding + 21.0 * lh + style.text_padding;
        assert!((target - (bottom - 100.0)).abs() < 1e-3);

        // above the viewport: scroll up to the line's top
        let target = caret_scroll_target(&style, 2, 500.0, 100.0).unwrap();
        assert!((target - 2.0 * lh).abs() < 1e-3);
    }
}
