pub mod editor;
pub mod gutter;
pub mod menu;

use iced::widget::{button, column, container, horizontal_space, row, stack, text};
use iced::{Alignment, Element, Length, Padding, alignment};

use crate::app::{App, Message};
use crate::style;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let content = column![
            self.view_top_bar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let main_view = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| style::window(colors));

        // The stack is always present so the editor keeps its widget
        // state (scroll position, focus) while the menu opens and closes.
        stack![main_view, self.view_menu_layer()].into()
    }

    pub fn view_top_bar(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let menu_open = self.menu_open;

        let file_menu = button(text("File").size(12))
            .padding(Padding::from([4, 10]))
            .style(move |_, status| style::menu_title(colors, status, menu_open))
            .on_press(Message::ToggleFileMenu);

        let theme_toggle = button(text(colors.toggle_label()).size(12))
            .padding(Padding::from([4, 10]))
            .style(move |_, status| style::theme_button(colors, status))
            .on_press(Message::ToggleTheme);

        let bar = row![file_menu, horizontal_space(), theme_toggle]
            .padding(Padding::from([2, 6]))
            .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .height(Length::Fixed(self.style.top_bar_height))
            .style(move |_| style::top_bar(colors))
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let colors = self.colors();

        container(text(self.status.to_string()).size(12))
            .padding(Padding::from([4, 8]))
            .width(Length::Fill)
            .height(Length::Fixed(self.style.status_bar_height))
            .align_y(alignment::Vertical::Center)
            .style(move |_| style::status_bar(colors))
            .into()
    }
}
