use iced::{Element, Length, Padding, Color, Theme, Border, Background};
use iced::widget::{column, row, text, button, container, Space, text_input, pick_list, slider, checkbox};

use quill_core::font::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use quill_core::{AboutInfo, FontFamily};

use crate::app::{App, FontPicker, Message, PrintDialog};
use crate::theme::{self, colors};

impl App {
    pub fn view_font_modal(&self, picker: &FontPicker) -> Element<'_, Message> {
        let font = &picker.font;

        let modal_content = column![
            text("Select Font").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            row![
                text("Family").size(13).color(colors::TEXT_SECONDARY).width(Length::Fixed(70.0)),
                pick_list(FontFamily::ALL, Some(font.family), Message::FontFamilySelected)
                    .text_size(13)
                    .width(Length::Fill),
            ]
            .align_y(iced::Alignment::Center),
            Space::with_height(8),
            row![
                text("Size").size(13).color(colors::TEXT_SECONDARY).width(Length::Fixed(70.0)),
                slider(MIN_FONT_SIZE..=MAX_FONT_SIZE, font.size, Message::FontSizeChanged)
                    .step(1.0),
                Space::with_width(12),
                text(format!("{}pt", font.size)).size(13).color(colors::TEXT_PRIMARY),
            ]
            .align_y(iced::Alignment::Center),
            Space::with_height(8),
            row![
                checkbox("Bold", font.bold).on_toggle(Message::FontBoldToggled).text_size(13),
                Space::with_width(16),
                checkbox("Italic", font.italic).on_toggle(Message::FontItalicToggled).text_size(13),
                Space::with_width(16),
                checkbox("Underline", font.underline)
                    .on_toggle(Message::FontUnderlineToggled)
                    .text_size(13),
            ],
            Space::with_height(16),
            container(
                text("The quick brown fox jumps over the lazy dog")
                    .font(theme::iced_font(font))
                    .size(font.size)
                    .color(colors::TEXT_PRIMARY),
            )
            .padding(12)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }),
            Space::with_height(16),
            row![
                secondary_button("Cancel", Message::FontCancel),
                Space::with_width(12),
                primary_button("OK", Message::FontConfirm),
            ]
            .align_y(iced::Alignment::Center),
        ]
        .padding(24)
        .width(Length::Fixed(460.0));

        modal_frame(modal_content.into())
    }

    pub fn view_print_modal<'a>(&'a self, dialog: &'a PrintDialog) -> Element<'a, Message> {
        let mut modal_content = column![
            text("Print").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            text(format!("Document: {}", dialog.title))
                .size(12)
                .color(colors::TEXT_MUTED),
            text(format!("Spooler: {}", dialog.device))
                .size(12)
                .color(colors::TEXT_MUTED),
            Space::with_height(12),
            text("Printer").size(12).color(colors::TEXT_SECONDARY),
            Space::with_height(4),
            text_input("System default", &dialog.printer_input)
                .on_input(Message::PrintPrinterChanged)
                .on_submit(Message::PrintConfirm)
                .padding(Padding::from([8, 12]))
                .size(13),
            Space::with_height(8),
            text("Copies").size(12).color(colors::TEXT_SECONDARY),
            Space::with_height(4),
            text_input("1", &dialog.copies_input)
                .on_input(Message::PrintCopiesChanged)
                .on_submit(Message::PrintConfirm)
                .padding(Padding::from([8, 12]))
                .size(13),
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        if let Some(error) = &dialog.error {
            modal_content = modal_content
                .push(Space::with_height(8))
                .push(text(error).size(12).color(Color::from_rgb(0.9, 0.4, 0.4)));
        }

        modal_content = modal_content.push(Space::with_height(16)).push(
            row![
                secondary_button("Cancel", Message::PrintCancel),
                Space::with_width(12),
                primary_button("Print", Message::PrintConfirm),
            ]
            .align_y(iced::Alignment::Center),
        );

        modal_frame(modal_content.into())
    }

    pub fn view_about_modal(&self, info: &AboutInfo) -> Element<'_, Message> {
        let modal_content = column![
            text(info.name).size(20).color(colors::ACCENT),
            Space::with_height(8),
            text(info.description)
                .size(13)
                .color(colors::TEXT_SECONDARY),
            Space::with_height(12),
            text(format!("Version {}", info.version)).size(12).color(colors::TEXT_MUTED),
            Space::with_height(20),
            primary_button("Close", Message::HideAbout),
        ]
        .padding(24)
        .width(Length::Fixed(340.0))
        .align_x(iced::Alignment::Center);

        modal_frame(modal_content.into())
    }
}

/// Centers a dialog body in a bordered panel.
fn modal_frame<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(
        container(content)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            })
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn primary_button(label: &str, msg: Message) -> Element<'_, Message> {
    button(text(label).size(13).color(Color::WHITE))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::ACCENT_HOVER,
                _ => colors::ACCENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: Color::WHITE,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}

fn secondary_button(label: &str, msg: Message) -> Element<'_, Message> {
    button(text(label).size(13).color(colors::TEXT_PRIMARY))
        .padding(Padding::from([8, 20]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => colors::BG_LIGHT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            }
        })
        .on_press(msg)
        .into()
}
