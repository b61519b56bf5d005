use iced::{Size, keyboard};
use iced::widget::{scrollable, text_editor};

#[derive(Debug, Clone)]
pub enum Message {
    // File operations
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    Exit,

    // Edit operations
    Undo,
    Redo,

    // Editor
    EditorAction(text_editor::Action),
    Scrolled(scrollable::Viewport),
    WindowResized(Size),

    // Top bar
    ToggleTheme,
    ToggleFileMenu,
    CloseFileMenu,

    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
