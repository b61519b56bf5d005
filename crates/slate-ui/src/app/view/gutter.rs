//! Line-number gutter canvas.

use iced::widget::canvas;
use iced::widget::text::{LineHeight, Shaping};
use iced::{Pixels, Point, Rectangle, Renderer, alignment, mouse};
use slate_core::gutter::{self, GutterLabel, UniformLines};

use crate::style::EditorStyle;
use crate::theme::Theme;

/// Draws the numbers of the lines visible in the text area.
///
/// The canvas sits beside the scrollable and is exactly as tall as the
/// text viewport, so its own bounds give the viewport height.
#[derive(Debug, Clone)]
pub struct Gutter {
    pub line_count: usize,
    pub scroll_offset: f32,
    pub colors: &'static Theme,
    pub style: EditorStyle,
}

impl Gutter {
    /// Labels for a viewport `viewport_height` pixels tall.
    pub fn labels(&self, viewport_height: f32) -> Vec<GutterLabel> {
        gutter::layout(&UniformLines {
            line_count: self.line_count,
            line_height: self.style.line_height_px(),
            top_padding: self.style.text_padding,
            scroll_offset: self.scroll_offset,
            viewport_height: Some(viewport_height),
        })
    }

    /// Right edge the numbers are aligned to.
    pub fn label_x(&self) -> f32 {
        self.style.gutter_width - self.style.line_number_padding
    }
}

impl<Message> canvas::Program<Message> for Gutter {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), self.colors.gutter_bg.to_iced());

        let labels = self.labels(bounds.height);
        tracing::trace!("Drawing {} line numbers", labels.len());

        for label in labels {
            frame.fill_text(canvas::Text {
                content: label.number.to_string(),
                position: Point::new(self.label_x(), label.y),
                color: self.colors.gutter_fg.to_iced(),
                size: Pixels(self.style.font_size),
                line_height: LineHeight::Relative(self.style.line_height),
                font: EditorStyle::FONT,
                horizontal_alignment: alignment::Horizontal::Right,
                vertical_alignment: alignment::Vertical::Top,
                shaping: Shaping::Basic,
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::LIGHT;

    fn gutter(line_count: usize, scroll_offset: f32) -> Gutter {
        Gutter {
            line_count,
            scroll_offset,
            colors: &LIGHT,
            style: EditorStyle::default(),
        }
    }

    #[test]
    fn test_numbers_sit_at_x_35() {
        assert_eq!(gutter(1, 0.0).label_x(), 35.0);
    }

    #[test]
    fn test_labels_follow_scroll() {
        let style = EditorStyle::default();
        let lh = style.line_height_px();

        let top = gutter(500, 0.0).labels(100.0);
        assert_eq!(top[0].number, 1);
        assert_eq!(top[0].y, style.text_padding);

        // the top padding scrolls away, so line 10 peeks in above line 11
        let scrolled = gutter(500, 10.0 * lh).labels(100.0);
        assert_eq!(scrolled[0].number, 10);
        assert!(scrolled[0].y < 0.0);
        assert_eq!(scrolled[1].number, 11);
        assert!((scrolled[1].y - style.text_padding).abs() < 1e-3);
    }

    #[test]
    fn test_zero_height_draws_nothing() {
        assert!(gutter(50, 0.0).labels(0.0).is_empty());
    }
}
