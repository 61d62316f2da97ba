use crate::ui::messages::explorer_message::ExplorerMessage;
use iced::widget::{button, column, row, text, text_editor};
use iced::{Element, Length};
use std::path::{Path, PathBuf};

/// Editable view of a text file opened from the listing.
pub struct TextPreview {
    uri: PathBuf,
    content: text_editor::Content,
    modified: bool,
}

impl TextPreview {
    pub fn new(uri: PathBuf, text: &str) -> Self {
        Self {
            uri,
            content: text_editor::Content::with_text(text),
            modified: false,
        }
    }

    pub fn uri(&self) -> &Path {
        &self.uri
    }

    pub fn text(&self) -> String {
        self.content.text()
    }

    pub fn edit(&mut self, action: text_editor::Action) {
        if action.is_edit() {
            self.modified = true;
        }
        self.content.perform(action);
    }

    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    pub fn view(&'_ self) -> Element<'_, ExplorerMessage> {
        let name = self
            .uri
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let title = if self.modified {
            format!("{name} *")
        } else {
            name
        };

        column![
            text(title).size(20),
            text_editor(&self.content)
                .on_action(ExplorerMessage::PreviewEdited)
                .height(Length::Fill),
            row![
                button(text("Save")).on_press_maybe(
                    self.modified.then_some(ExplorerMessage::PreviewSave)
                ),
                button(text("Close"))
                    .on_press(ExplorerMessage::PreviewClose)
                    .style(button::secondary),
            ]
            .spacing(10),
        ]
        .spacing(10)
        .into()
    }
}
