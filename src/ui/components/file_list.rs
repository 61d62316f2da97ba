use crate::domain::entities::file_entry::FileEntry;
use crate::ui::messages::explorer_message::ExplorerMessage;
use crate::ui::utils::format::{format_date, format_file_size};
use iced::widget::{button, column, row, scrollable, text};
use iced::{Element, Length};
use std::path::Path;

const GRID_COLUMNS: usize = 4;

pub struct FileList {
    pub files: Vec<FileEntry>,
}

impl FileList {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn set_files(&mut self, files: Vec<FileEntry>) {
        self.files = files;
    }

    pub fn view<'a>(
        &'a self,
        selected: Option<&Path>,
        grid_view: bool,
    ) -> Element<'a, ExplorerMessage> {
        if self.files.is_empty() {
            return text("This folder is empty").into();
        }

        let content = if grid_view {
            self.grid()
        } else {
            self.rows(selected)
        };
        scrollable(content).height(Length::Fill).into()
    }

    fn rows<'a>(&'a self, selected: Option<&Path>) -> Element<'a, ExplorerMessage> {
        let file_rows: Vec<Element<'a, ExplorerMessage>> = self
            .files
            .iter()
            .map(|file| {
                let is_selected = selected == Some(file.uri.as_path());
                row![
                    entry_button(file).width(Length::FillPortion(4)),
                    text(details(file)).width(Length::FillPortion(2)),
                    text(file.modification_time.map(format_date).unwrap_or_default())
                        .width(Length::FillPortion(2)),
                    button(text(if is_selected { "Selected" } else { "Select" }))
                        .on_press(ExplorerMessage::Selected(file.uri.clone()))
                        .style(if is_selected {
                            button::primary
                        } else {
                            button::secondary
                        }),
                    button(text("Delete"))
                        .on_press(ExplorerMessage::DeletePressed(file.uri.clone()))
                        .style(button::danger),
                ]
                .spacing(10)
                .padding(3)
                .into()
            })
            .collect();

        column(file_rows).into()
    }

    fn grid<'a>(&'a self) -> Element<'a, ExplorerMessage> {
        let grid_rows: Vec<Element<'a, ExplorerMessage>> = self
            .files
            .chunks(GRID_COLUMNS)
            .map(|chunk| {
                let cells: Vec<Element<'a, ExplorerMessage>> = chunk
                    .iter()
                    .map(|file| {
                        column![entry_button(file).width(Length::Fill), text(details(file))]
                            .width(Length::FillPortion(1))
                            .into()
                    })
                    .collect();
                row(cells).spacing(10).padding(3).into()
            })
            .collect();

        column(grid_rows).spacing(10).into()
    }
}

fn entry_button(file: &FileEntry) -> button::Button<'_, ExplorerMessage> {
    let label = if file.is_directory {
        format!("{}/", file.name)
    } else {
        file.name.clone()
    };
    button(text(label))
        .on_press(ExplorerMessage::EntryPressed(file.clone()))
        .style(button::text)
}

fn details(file: &FileEntry) -> String {
    match (&file.mime_type, file.size) {
        (Some(category), Some(size)) => format!("{category} · {}", format_file_size(size)),
        _ => "Folder".to_string(),
    }
}

