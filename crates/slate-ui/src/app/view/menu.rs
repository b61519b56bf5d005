use iced::widget::image::{Handle, Image};
use iced::widget::{Space, button, column, container, horizontal_space, mouse_area, row, stack, text};
use iced::{Alignment, Element, Length, Padding};
use slate_core::EditorCommand;

use crate::app::{App, Message};
use crate::icons::IconKind;
use crate::style;

const MENU_WIDTH: f32 = 220.0;

impl App {
    /// The open File menu and the click-away area behind it, or nothing.
    pub fn view_menu_layer(&self) -> Element<'_, Message> {
        if !self.menu_open {
            return Space::new(0, 0).into();
        }

        let dismiss = mouse_area(Space::new(Length::Fill, Length::Fill))
            .on_press(Message::CloseFileMenu);

        let dropdown = column![
            Space::with_height(Length::Fixed(self.style.top_bar_height)),
            row![Space::with_width(Length::Fixed(6.0)), self.view_file_menu()],
        ];

        stack![dismiss, dropdown].into()
    }

    fn view_file_menu(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let items = column![
            self.menu_item(IconKind::New, "New", Some(EditorCommand::New), Message::NewFile),
            self.menu_item(IconKind::Open, "Open", Some(EditorCommand::Open), Message::OpenFile),
            self.menu_item(IconKind::Save, "Save", Some(EditorCommand::Save), Message::Save),
            self.menu_item(IconKind::SaveAs, "Save As", Some(EditorCommand::SaveAs), Message::SaveAs),
            self.menu_separator(),
            self.menu_item(IconKind::Exit, "Exit", None, Message::Exit),
        ]
        .width(Length::Fixed(MENU_WIDTH))
        .padding(4);

        container(items).style(move |_| style::menu(colors)).into()
    }

    /// A menu entry: icon, label, then the accelerator right-aligned.
    fn menu_item<'a>(
        &'a self,
        icon: IconKind,
        label: &'a str,
        command: Option<EditorCommand>,
        msg: Message,
    ) -> Element<'a, Message> {
        let colors = self.colors();
        let size = self.style.icon_size;

        let icon: Element<'a, Message> = match self.icons.get(icon) {
            Some(icon) => Image::<Handle>::new(icon.handle().clone())
                .width(size)
                .height(size)
                .into(),
            None => Space::new(size, size).into(),
        };

        let accelerator = command
            .and_then(|c| self.keymap.shortcut_for(c))
            .map(|s| s.to_string())
            .unwrap_or_default();

        button(
            row![
                icon,
                text(label).size(12),
                horizontal_space(),
                text(accelerator).size(11).color(colors.gutter_fg.to_iced()),
            ]
            .spacing(8)
            .width(Length::Fill)
            .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 12]))
        .style(move |_, status| style::menu_item(colors, status))
        .on_press(msg)
        .into()
    }

    fn menu_separator(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let line = container(Space::new(Length::Fill, 1)).style(move |_| style::menu_separator(colors));
        container(line).padding(Padding::from([4, 8])).into()
    }
}
