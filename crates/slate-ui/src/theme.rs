//! Theme registry.
//!
//! Exactly two themes exist, looked up by [`ThemeName`]. They are plain
//! `const` data, so switching back and forth always yields the very same
//! tokens. How the tokens land on each widget lives in [`crate::style`].

use slate_core::ThemeName;

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds an opaque color from `0xRRGGBB`.
    pub const fn hex(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xff) as f32 / 255.0,
            ((rgb >> 8) & 0xff) as f32 / 255.0,
            (rgb & 0xff) as f32 / 255.0,
        )
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// The named color tokens of one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: ThemeName,

    /// Window and text area background
    pub bg: Color,
    /// Text color
    pub fg: Color,

    pub gutter_bg: Color,
    pub gutter_fg: Color,

    pub select_bg: Color,
    pub select_fg: Color,

    /// Status bar, scrollbar thumb and resting theme button
    pub status_bg: Color,
    pub status_fg: Color,

    pub button_hover: Color,
}

pub static LIGHT: Theme = Theme {
    name: ThemeName::Light,
    bg: Color::hex(0xffffff),
    fg: Color::hex(0x1e1e1e),
    gutter_bg: Color::hex(0xf0f0f0),
    gutter_fg: Color::hex(0x858585),
    select_bg: Color::hex(0xadd6ff),
    select_fg: Color::hex(0x000000),
    status_bg: Color::hex(0xe4e4e4),
    status_fg: Color::hex(0x333333),
    button_hover: Color::hex(0xd0d0d0),
};

pub static DARK: Theme = Theme {
    name: ThemeName::Dark,
    bg: Color::hex(0x1e1e1e),
    fg: Color::hex(0xd4d4d4),
    gutter_bg: Color::hex(0x252526),
    gutter_fg: Color::hex(0x858585),
    select_bg: Color::hex(0x264f78),
    select_fg: Color::hex(0xffffff),
    status_bg: Color::hex(0x333333),
    status_fg: Color::hex(0xcccccc),
    button_hover: Color::hex(0x505050),
};

impl Theme {
    /// Looks up a theme by name.
    pub fn get(name: ThemeName) -> &'static Theme {
        match name {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }

    pub fn is_dark(&self) -> bool {
        self.name.is_dark()
    }

    /// The built-in iced palette matching this theme, used for anything
    /// not styled explicitly.
    pub fn base(&self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }

    /// Label for the button that switches away from this theme.
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() { "Light" } else { "Dark" }
    }
}
