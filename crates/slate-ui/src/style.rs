//! Style definitions for UI components.
//!
//! Every widget that shows a theme color is styled through one of the
//! functions here, so a theme switch is a full repaint: the next `view`
//! call re-runs them all against the new [`Theme`].

use iced::widget::{button, container, scrollable, text_editor};
use iced::widget::text::Wrapping;
use iced::{Background, Border, Color, Font};

use crate::theme::Theme;

/// Layout constants for the editor view.
#[derive(Debug, Clone, Copy)]
pub struct EditorStyle {
    pub gutter_width: f32,
    /// Gap between a line number and the gutter's right edge
    pub line_number_padding: f32,
    pub font_size: f32,
    /// Line height as a multiple of the font size
    pub line_height: f32,
    /// Padding inside the text area
    pub text_padding: f32,
    /// Advance of one monospace column as a multiple of the font size
    pub column_width: f32,
    pub icon_size: f32,
    pub top_bar_height: f32,
    pub status_bar_height: f32,
    pub window_width: f32,
    pub window_height: f32,
}

impl EditorStyle {
    pub const FONT: Font = Font::MONOSPACE;

    /// One visual row per line; long lines scroll sideways.
    pub const WRAPPING: Wrapping = Wrapping::None;

    /// Line height in pixels.
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }

    /// Width that fits `columns` characters plus the caret and padding.
    pub fn text_width(&self, columns: usize) -> f32 {
        (columns + 1) as f32 * self.font_size * self.column_width + 2.0 * self.text_padding
    }
}

impl Default for EditorStyle {
    fn default() -> Self {
        Self {
            gutter_width: 40.0,
            line_number_padding: 5.0,
            font_size: 14.0,
            line_height: 1.3,
            text_padding: 4.0,
            column_width: 0.62,
            icon_size: 16.0,
            top_bar_height: 30.0,
            status_bar_height: 24.0,
            window_width: 800.0,
            window_height: 600.0,
        }
    }
}

/// Window background.
pub fn window(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.bg.to_iced())),
        text_color: Some(theme.fg.to_iced()),
        ..Default::default()
    }
}

/// Top bar holding the menu and the theme button.
pub fn top_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.bg.to_iced())),
        border: Border {
            color: theme.gutter_bg.to_iced(),
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn text_area(theme: &Theme) -> text_editor::Style {
    text_editor::Style {
        background: Background::Color(theme.bg.to_iced()),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        icon: theme.gutter_fg.to_iced(),
        placeholder: theme.gutter_fg.to_iced(),
        value: theme.fg.to_iced(),
        selection: theme.select_bg.to_iced(),
    }
}

/// Scrollbars: status color thumb on a gutter color trough.
pub fn scrollbar(theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let thumb = match status {
        scrollable::Status::Dragged { .. } => theme.select_bg,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered,
            is_horizontal_scrollbar_hovered,
        } if is_vertical_scrollbar_hovered || is_horizontal_scrollbar_hovered => theme.button_hover,
        _ => theme.status_bg,
    };

    let rail = || scrollable::Rail {
        background: Some(Background::Color(theme.gutter_bg.to_iced())),
        border: Border::default(),
        scroller: scrollable::Scroller {
            color: thumb.to_iced(),
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail(),
        horizontal_rail: rail(),
        gap: None,
    }
}

pub fn status_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.status_bg.to_iced())),
        text_color: Some(theme.status_fg.to_iced()),
        ..Default::default()
    }
}

/// The light/dark switch: hover color on hover, selection colors while
/// pressed.
pub fn theme_button(theme: &Theme, status: button::Status) -> button::Style {
    let (bg, fg) = match status {
        button::Status::Hovered => (theme.button_hover, theme.status_fg),
        button::Status::Pressed => (theme.select_bg, theme.select_fg),
        _ => (theme.status_bg, theme.status_fg),
    };
    button::Style {
        background: Some(Background::Color(bg.to_iced())),
        text_color: fg.to_iced(),
        border: Border::default(),
        ..Default::default()
    }
}

/// "File" entry in the top bar.
pub fn menu_title(theme: &Theme, status: button::Status, open: bool) -> button::Style {
    let (bg, fg) = match status {
        _ if open => (theme.select_bg, theme.select_fg),
        button::Status::Hovered => (theme.button_hover, theme.fg),
        _ => (theme.bg, theme.fg),
    };
    button::Style {
        background: Some(Background::Color(bg.to_iced())),
        text_color: fg.to_iced(),
        border: Border::default(),
        ..Default::default()
    }
}

/// Dropdown menu body.
pub fn menu(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.bg.to_iced())),
        text_color: Some(theme.fg.to_iced()),
        border: Border {
            color: theme.status_bg.to_iced(),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let (bg, fg) = match status {
        button::Status::Hovered | button::Status::Pressed => (theme.select_bg, theme.select_fg),
        _ => (theme.bg, theme.fg),
    };
    button::Style {
        background: Some(Background::Color(bg.to_iced())),
        text_color: fg.to_iced(),
        border: Border::default(),
        ..Default::default()
    }
}

pub fn menu_separator(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.status_bg.to_iced())),
        ..Default::default()
    }
}
