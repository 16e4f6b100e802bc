use iced::{Element, Length, Padding, Color, Theme, Border, Background};
use iced::widget::{row, text, container, Space, horizontal_space, text_editor};

use quill_core::{Command, TextSurface};

use crate::app::{App, Message};
use crate::theme::{self, colors};

impl App {
    pub fn view_editor(&self) -> Element<'_, Message> {
        let surface = self.window.surface();
        let font = surface.font();

        text_editor(surface.content())
            .height(Length::Fill)
            .padding(Padding { top: 16.0, right: 20.0, bottom: 16.0, left: 16.0 })
            .font(theme::iced_font(font))
            .size(font.size)
            .style(|_theme: &Theme, _status| text_editor::Style {
                background: Background::Color(colors::BG_DARK),
                border: Border {
                    width: 0.0,
                    radius: 0.0.into(),
                    color: Color::TRANSPARENT,
                },
                icon: colors::TEXT_MUTED,
                placeholder: colors::TEXT_MUTED,
                value: colors::TEXT_PRIMARY,
                selection: colors::SELECTION,
            })
            .key_binding(|key_press| {
                text_editor::Binding::from_key_press(key_press).map(route_clipboard)
            })
            .on_action(Message::EditorAction)
            .into()
    }

    pub fn view_status_bar(&self) -> Element<'_, Message> {
        let surface = self.window.surface();
        let (line, col) = surface.cursor_position();

        let file_info = self
            .window
            .document()
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string());

        let status_content = row![
            text(&self.status_message)
                .size(12)
                .color(colors::TEXT_SECONDARY),
            horizontal_space(),
            text(file_info).size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(24),
            text(format!("Ln {}, Col {}", line + 1, col + 1)).size(12).color(colors::TEXT_PRIMARY),
            Space::with_width(24),
            text(surface.font().describe()).size(12).color(colors::ACCENT),
            Space::with_width(24),
            text("UTF-8").size(12).color(colors::TEXT_SECONDARY),
            Space::with_width(12),
        ]
        .padding(Padding::from([6, 12]))
        .align_y(iced::Alignment::Center);

        container(status_content)
            .width(Length::Fill)
            .height(28)
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
}

/// Sends the widget's clipboard shortcuts through the command table, so they
/// obey the clipboard capability and use the system clipboard.
fn route_clipboard(binding: text_editor::Binding<Message>) -> text_editor::Binding<Message> {
    match binding {
        text_editor::Binding::Copy => text_editor::Binding::Custom(Message::Command(Command::Copy)),
        text_editor::Binding::Cut => text_editor::Binding::Custom(Message::Command(Command::Cut)),
        text_editor::Binding::Paste => text_editor::Binding::Custom(Message::Command(Command::Paste)),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_editor::Binding;

    fn routed_command(binding: Binding<Message>) -> Option<Command> {
        match route_clipboard(binding) {
            Binding::Custom(Message::Command(command)) => Some(command),
            _ => None,
        }
    }

    #[test]
    fn test_clipboard_bindings_become_commands() {
        assert_eq!(routed_command(Binding::Copy), Some(Command::Copy));
        assert_eq!(routed_command(Binding::Cut), Some(Command::Cut));
        assert_eq!(routed_command(Binding::Paste), Some(Command::Paste));
    }

    #[test]
    fn test_other_bindings_untouched() {
        assert!(matches!(route_clipboard(Binding::Backspace), Binding::Backspace));
        assert!(matches!(route_clipboard(Binding::SelectAll), Binding::SelectAll));
        assert_eq!(routed_command(Binding::Enter), None);
    }
}
