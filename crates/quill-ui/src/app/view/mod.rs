pub mod dialogs;
pub mod editor;
pub mod menus;

use iced::{Element, Length, Background};
use iced::widget::{column, container, Space, mouse_area, stack};

use crate::app::{App, Message, Modal};
use crate::theme::colors;

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = column![
            self.view_menu_bar(),
            self.view_editor(),
            self.view_status_bar(),
        ];

        let main_view: Element<'_, Message> = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if let Some(modal) = &self.modal {
            let (dialog, dismiss) = match modal {
                Modal::Font(picker) => (self.view_font_modal(picker), Message::FontCancel),
                Modal::Print(print) => (self.view_print_modal(print), Message::PrintCancel),
                Modal::About(info) => (self.view_about_modal(info), Message::HideAbout),
            };

            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(colors::BACKDROP)),
                            ..Default::default()
                        })
                )
                .on_press(dismiss),
                dialog,
            ]
            .into()
        } else if self.active_menu.is_some() {
            stack![
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseMenu),
                main_view,
                self.view_menu_dropdown(),
            ]
            .into()
        } else {
            main_view
        }
    }
}
