use iced::{Element, Length, Padding, Color, Theme, Border, Background};
use iced::widget::{column, row, text, button, container, Space, Column, Row, horizontal_space};

use quill_core::{Command, Menu};

use crate::app::{App, Message};
use crate::theme::colors;

/// Approximate rendered width of a menu-bar button per label character.
const MENU_CHAR_WIDTH: f32 = 7.0;
/// Horizontal padding plus spacing around each menu-bar button.
const MENU_BUTTON_EXTRA: f32 = 22.0;

impl App {
    pub fn view_menu_bar(&self) -> Element<'_, Message> {
        let mut menu_items: Vec<Element<'_, Message>> = Vec::new();

        for menu in Menu::ALL {
            let is_active = self.active_menu == Some(menu);

            let menu_btn = button(
                text(menu.label()).size(12).color(if is_active {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_SECONDARY
                }),
            )
            .padding(Padding::from([6, 10]))
            .style(move |_: &Theme, status: button::Status| {
                let bg = if is_active {
                    colors::BG_ACTIVE
                } else {
                    match status {
                        button::Status::Hovered => colors::BG_HOVER,
                        _ => colors::BG_MEDIUM,
                    }
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::ToggleMenu(menu));

            menu_items.push(menu_btn.into());
        }

        menu_items.push(horizontal_space().into());

        let menu_bar = Row::with_children(menu_items)
            .spacing(2)
            .padding(Padding::from([4, 8]))
            .align_y(iced::Alignment::Center);

        container(menu_bar)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// A dropdown entry. Disabled entries are grayed out and ignore clicks.
    pub fn menu_item<'a>(command: Command, enabled: bool, checked: bool) -> Element<'a, Message> {
        let text_color = if enabled { colors::TEXT_PRIMARY } else { colors::TEXT_MUTED };
        let check = if checked { "✓" } else { "" };

        let btn = button(
            row![
                text(check).size(12).color(colors::ACCENT).width(Length::Fixed(16.0)),
                text(command.display_name()).size(12).color(text_color),
                horizontal_space(),
                text(command.shortcut()).size(11).color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 12]))
        .style(move |_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered if enabled => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color,
                border: Border::default(),
                ..Default::default()
            }
        });

        if enabled {
            btn.on_press(Message::Command(command)).into()
        } else {
            btn.into()
        }
    }

    pub fn menu_separator<'a>() -> Element<'a, Message> {
        container(Space::new(Length::Fill, 1))
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BORDER)),
                ..Default::default()
            })
            .into()
    }

    pub fn view_menu_dropdown(&self) -> Element<'_, Message> {
        let Some(menu) = self.active_menu else {
            return Space::new(0, 0).into();
        };

        let mut items: Vec<Element<'_, Message>> = Vec::new();

        for command in menu.commands() {
            // Group separators
            if matches!(command, Command::Print | Command::Exit | Command::Cut | Command::Bold) {
                items.push(Self::menu_separator());
            }
            items.push(Self::menu_item(
                command,
                self.window.is_enabled(command),
                self.is_checked(command),
            ));
        }

        let menu_content = Column::with_children(items)
            .width(Length::Fixed(240.0))
            .padding(4);

        let menu_box = container(menu_content)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 6.0.into(),
                },
                ..Default::default()
            });

        column![
            Space::with_height(Length::Fixed(32.0)),
            row![
                Space::with_width(Length::Fixed(menu_offset(menu))),
                menu_box,
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

/// Left edge of `menu`'s dropdown, lined up under its menu-bar button.
fn menu_offset(menu: Menu) -> f32 {
    let mut x = 8.0;
    for m in Menu::ALL {
        if m == menu {
            break;
        }
        x += m.label().len() as f32 * MENU_CHAR_WIDTH + MENU_BUTTON_EXTRA;
    }
    x
}
