use iced::widget::{canvas, row, scrollable, text, text_editor};
use iced::{Element, Length};

use super::gutter::Gutter;
use crate::app::{App, Message, editor_scroll_id};
use crate::style::{self, EditorStyle};

impl App {
    /// Gutter and text area side by side.
    ///
    /// The text widget grows to fit its content and an outer scrollable
    /// does the scrolling, so the scroll offset the gutter follows is
    /// reported back through `Message::Scrolled`. Lines do not wrap; the
    /// widget is as wide as the longest line and scrolls sideways.
    pub fn view_editor(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let layout = self.style;

        let editor = text_editor(&self.content)
            .font(EditorStyle::FONT)
            .size(layout.font_size)
            .line_height(text::LineHeight::Relative(layout.line_height))
            .padding(layout.text_padding)
            .width(self.text_width())
            .wrapping(EditorStyle::WRAPPING)
            .style(move |_, _| style::text_area(colors))
            .on_action(Message::EditorAction);

        let text_area = scrollable(editor)
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::default(),
                horizontal: scrollable::Scrollbar::default(),
            })
            .id(editor_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled)
            .style(move |_, status| style::scrollbar(colors, status));

        let gutter = canvas(Gutter {
            line_count: self.content.line_count(),
            scroll_offset: self.scroll_offset,
            colors,
            style: layout,
        })
        .width(Length::Fixed(layout.gutter_width))
        .height(Length::Fill);

        row![gutter, text_area].height(Length::Fill).into()
    }
}
