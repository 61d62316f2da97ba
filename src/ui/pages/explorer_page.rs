use crate::domain::entities::file_entry::FileEntry;
use crate::domain::entities::file_type::PreviewKind;
use crate::domain::entities::media::EntryKind;
use crate::domain::entities::navigation::NavigationSnapshot;
use crate::domain::entities::settings::Settings;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::file_explorer_use_case::FileExplorerUseCase;
use crate::domain::ports::secondary::camera::Camera;
use crate::domain::ports::secondary::document_picker::DocumentPicker;
use crate::domain::ports::secondary::media_library::MediaLibrary;
use crate::domain::services::listing;
use crate::infrastructure::filesystem::drive_space::available_space;
use crate::ui::components::file_list::FileList;
use crate::ui::components::search::Search;
use crate::ui::components::text_preview::TextPreview;
use crate::ui::messages::explorer_message::ExplorerMessage;
use crate::ui::utils::format::format_file_size;
use crate::utils::dialogs::popup_error;
use iced::futures::{Stream, stream};
use iced::widget::{button, column, row, text, text_input};
use iced::{Alignment, Element, Length, Subscription, Task};
use std::hash::{Hash, Hasher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

pub struct ExplorerPage {
    explorer_use_case: Arc<dyn FileExplorerUseCase>,
    document_picker: Arc<dyn DocumentPicker>,
    camera: Arc<dyn Camera>,
    media_library: Arc<dyn MediaLibrary>,
    snapshot: NavigationSnapshot,
    search: Search,
    file_list: FileList,
    new_name: String,
    selected: Option<PathBuf>,
    rename_input: String,
    destination_input: String,
    preview: Option<TextPreview>,
    free_space: Option<u64>,
}

impl ExplorerPage {
    pub fn new(
        explorer_use_case: Arc<dyn FileExplorerUseCase>,
        document_picker: Arc<dyn DocumentPicker>,
        camera: Arc<dyn Camera>,
        media_library: Arc<dyn MediaLibrary>,
    ) -> (Self, Task<ExplorerMessage>) {
        let snapshot = explorer_use_case.snapshot();
        let page = Self {
            explorer_use_case,
            document_picker,
            camera,
            media_library,
            snapshot,
            search: Search::new(),
            file_list: FileList::new(),
            new_name: String::new(),
            selected: None,
            rename_input: String::new(),
            destination_input: String::new(),
            preview: None,
            free_space: None,
        };

        let task = page.perform(|use_case| use_case.initialize(), ExplorerMessage::Finished);
        (page, task)
    }

    pub fn title(&self) -> String {
        self.explorer_use_case.current_directory_name()
    }

    /// Every navigation change published by the explorer service.
    pub fn subscription(&self) -> Subscription<ExplorerMessage> {
        Subscription::run_with(
            SnapshotFeed(self.explorer_use_case.subscribe()),
            snapshot_changes,
        )
    }

    pub fn view(&'_ self, settings: &Settings) -> Element<'_, ExplorerMessage> {
        if let Some(preview) = &self.preview {
            return column![preview.view()].padding(20).into();
        }

        column![
            self.header(),
            self.search.view(),
            self.create_bar(),
            self.listing(settings),
            self.selection_bar(),
            self.recent_files(),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }

    pub fn update(&mut self, message: ExplorerMessage, settings: &Settings) -> Task<ExplorerMessage> {
        match message {
            ExplorerMessage::SnapshotChanged(snapshot) => {
                self.show(snapshot, settings);
                Task::none()
            }
            ExplorerMessage::Refresh => self.perform(
                |use_case| use_case.refresh_files().map(|_| ()),
                ExplorerMessage::Finished,
            ),
            ExplorerMessage::Finished(result) => {
                report(result);
                Task::none()
            }
            ExplorerMessage::EntryPressed(file) => self.open(file),
            ExplorerMessage::RecentPressed(uri) => {
                if uri.is_dir() {
                    self.navigate(uri)
                } else {
                    self.open_file(uri)
                }
            }
            ExplorerMessage::Opened(result) => {
                match result {
                    Ok((uri, Some(content))) => self.preview = Some(TextPreview::new(uri, &content)),
                    Ok((uri, None)) => {
                        debug!(path = %uri.display(), "No in-app preview");
                        self.select(uri);
                    }
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::BackPressed => {
                self.clear_selection();
                self.perform(|use_case| use_case.go_back(), ExplorerMessage::Finished)
            }
            ExplorerMessage::SearchChanged(query) => {
                self.explorer_use_case.set_search_query(&query);
                self.search.query = query;
                Task::none()
            }
            ExplorerMessage::SearchClear => {
                self.explorer_use_case.set_search_query("");
                self.search.query.clear();
                Task::none()
            }
            ExplorerMessage::NewNameChanged(name) => {
                self.new_name = name;
                Task::none()
            }
            ExplorerMessage::CreatePressed(kind) => {
                let name = self.new_name.clone();
                self.perform(
                    move |use_case| use_case.create(kind, &name, ""),
                    ExplorerMessage::Created,
                )
            }
            ExplorerMessage::Created(result) => {
                match result {
                    Ok(_) => self.new_name.clear(),
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::DeletePressed(uri) => {
                if self.selected.as_deref() == Some(uri.as_path()) {
                    self.clear_selection();
                }
                self.perform(move |use_case| use_case.delete(&uri), ExplorerMessage::Finished)
            }
            ExplorerMessage::Selected(uri) => {
                self.select(uri);
                Task::none()
            }
            ExplorerMessage::RenameInputChanged(name) => {
                self.rename_input = name;
                Task::none()
            }
            ExplorerMessage::RenameSubmit => {
                let Some(uri) = self.selected.clone() else {
                    return Task::none();
                };
                let name = self.rename_input.clone();
                self.perform(
                    move |use_case| use_case.rename(&uri, &name),
                    ExplorerMessage::Renamed,
                )
            }
            ExplorerMessage::Renamed(result) => {
                match result {
                    Ok(renamed) => self.selected = Some(renamed),
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::DestinationChanged(destination) => {
                self.destination_input = destination;
                Task::none()
            }
            ExplorerMessage::CopySubmit => {
                let Some(uri) = self.selected.clone() else {
                    return Task::none();
                };
                let destination = PathBuf::from(&self.destination_input);
                self.perform(
                    move |use_case| use_case.copy_to(&uri, &destination).map(|_| ()),
                    ExplorerMessage::Finished,
                )
            }
            ExplorerMessage::MoveSubmit => {
                let Some(uri) = self.selected.clone() else {
                    return Task::none();
                };
                let destination = PathBuf::from(&self.destination_input);
                self.perform(
                    move |use_case| use_case.move_to(&uri, &destination),
                    ExplorerMessage::Moved,
                )
            }
            ExplorerMessage::Moved(result) => {
                match result {
                    Ok(_) => self.clear_selection(),
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::ImportPressed => {
                let picker = self.document_picker.clone();
                self.perform(
                    move |use_case| use_case.import_document(picker.as_ref()),
                    ExplorerMessage::Imported,
                )
            }
            ExplorerMessage::Imported(result) => {
                match result {
                    Ok(Some(path)) => debug!(path = %path.display(), "Imported"),
                    Ok(None) => {}
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::CapturePressed => {
                let camera = self.camera.clone();
                let media_library = self.media_library.clone();
                self.perform(
                    move |use_case| use_case.capture_photo(camera.as_ref(), media_library.as_ref()),
                    ExplorerMessage::Captured,
                )
            }
            ExplorerMessage::Captured(result) => {
                report(result);
                Task::none()
            }
            ExplorerMessage::PreviewEdited(action) => {
                if let Some(preview) = &mut self.preview {
                    preview.edit(action);
                }
                Task::none()
            }
            ExplorerMessage::PreviewSave => {
                let Some(preview) = &self.preview else {
                    return Task::none();
                };
                let uri = preview.uri().to_path_buf();
                let content = preview.text();
                self.perform(
                    move |use_case| use_case.save_text(&uri, &content),
                    ExplorerMessage::PreviewSaved,
                )
            }
            ExplorerMessage::PreviewSaved(result) => {
                match result {
                    Ok(()) => {
                        if let Some(preview) = &mut self.preview {
                            preview.mark_saved();
                        }
                    }
                    Err(error) => popup_error(error),
                }
                Task::none()
            }
            ExplorerMessage::PreviewClose => {
                self.preview = None;
                Task::none()
            }
        }
    }

    /// Re-projects the current listing after the sort or hidden-file
    /// preferences changed.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.file_list.set_files(listing::visible_files(
            &self.snapshot.files,
            &self.snapshot.search_query,
            settings.default_sort,
            settings.show_hidden_files,
        ));
    }

    fn show(&mut self, snapshot: NavigationSnapshot, settings: &Settings) {
        if snapshot.current_path != self.snapshot.current_path || self.free_space.is_none() {
            self.free_space = available_space(&snapshot.current_path);
        }
        self.search.query.clone_from(&snapshot.search_query);
        self.snapshot = snapshot;
        self.apply_settings(settings);
    }

    /// Runs a use case command on the blocking pool and reports its outcome
    /// through `done`.
    fn perform<T>(
        &self,
        command: impl FnOnce(&dyn FileExplorerUseCase) -> Result<T, DomainError> + Send + 'static,
        done: impl FnOnce(Result<T, String>) -> ExplorerMessage + Send + 'static,
    ) -> Task<ExplorerMessage>
    where
        T: Send + 'static,
    {
        let use_case = self.explorer_use_case.clone();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    command(use_case.as_ref()).map_err(|error| error.to_string())
                })
                .await
                .map_err(|error| error.to_string())
                .and_then(|result| result)
            },
            done,
        )
    }

    fn select(&mut self, uri: PathBuf) {
        self.rename_input = uri
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.destination_input = self.snapshot.current_path.display().to_string();
        self.selected = Some(uri);
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.rename_input.clear();
        self.destination_input.clear();
    }

    fn open(&mut self, file: FileEntry) -> Task<ExplorerMessage> {
        if file.is_directory {
            self.navigate(file.uri)
        } else {
            self.open_file(file.uri)
        }
    }

    fn navigate(&mut self, uri: PathBuf) -> Task<ExplorerMessage> {
        self.clear_selection();
        self.perform(
            move |use_case| use_case.set_current_path(&uri),
            ExplorerMessage::Finished,
        )
    }

    fn open_file(&self, uri: PathBuf) -> Task<ExplorerMessage> {
        self.perform(
            move |use_case| {
                let content = match use_case.open_file(&uri)? {
                    PreviewKind::Text => Some(use_case.read_text(&uri)?),
                    _ => None,
                };
                Ok((uri, content))
            },
            ExplorerMessage::Opened,
        )
    }

    fn header(&'_ self) -> Element<'_, ExplorerMessage> {
        let back_button = button(text("Back")).on_press_maybe(
            self.explorer_use_case
                .can_go_back()
                .then_some(ExplorerMessage::BackPressed),
        );
        let free_space = self
            .free_space
            .map(|bytes| format!("{} free", format_file_size(bytes)))
            .unwrap_or_default();

        row![
            back_button,
            text(self.title()).size(24).width(Length::Fill),
            text(free_space),
            button(text("Refresh"))
                .on_press(ExplorerMessage::Refresh)
                .style(button::secondary),
        ]
        .spacing(10)
        .align_y(Alignment::Center)
        .into()
    }

    fn create_bar(&'_ self) -> Element<'_, ExplorerMessage> {
        let has_name = !self.new_name.trim().is_empty();
        row![
            text_input("New file or folder name", &self.new_name)
                .on_input(ExplorerMessage::NewNameChanged)
                .padding(10)
                .width(Length::Fill),
            button(text("New file"))
                .on_press_maybe(has_name.then_some(ExplorerMessage::CreatePressed(EntryKind::File))),
            button(text("New folder")).on_press_maybe(
                has_name.then_some(ExplorerMessage::CreatePressed(EntryKind::Folder))
            ),
            button(text("Import"))
                .on_press(ExplorerMessage::ImportPressed)
                .style(button::secondary),
            button(text("Photo"))
                .on_press(ExplorerMessage::CapturePressed)
                .style(button::secondary),
        ]
        .spacing(10)
        .into()
    }

    fn listing(&'_ self, settings: &Settings) -> Element<'_, ExplorerMessage> {
        if self.snapshot.loading() && self.snapshot.files.is_empty() {
            return text("Loading...").into();
        }
        if let Some(error) = self.snapshot.error() {
            return column![
                text(format!("Cannot list this folder: {error}")),
                button(text("Retry")).on_press(ExplorerMessage::Refresh),
            ]
            .spacing(10)
            .into();
        }
        self.file_list
            .view(self.selected.as_deref(), settings.grid_view)
    }

    fn selection_bar(&'_ self) -> Element<'_, ExplorerMessage> {
        if self.selected.is_none() {
            return column![].into();
        }

        column![
            row![
                text_input("New name", &self.rename_input)
                    .on_input(ExplorerMessage::RenameInputChanged)
                    .on_submit(ExplorerMessage::RenameSubmit)
                    .padding(10)
                    .width(Length::Fill),
                button(text("Rename")).on_press(ExplorerMessage::RenameSubmit),
            ]
            .spacing(10),
            row![
                text_input("Destination folder", &self.destination_input)
                    .on_input(ExplorerMessage::DestinationChanged)
                    .padding(10)
                    .width(Length::Fill),
                button(text("Copy here")).on_press(ExplorerMessage::CopySubmit),
                button(text("Move here")).on_press(ExplorerMessage::MoveSubmit),
            ]
            .spacing(10),
        ]
        .spacing(10)
        .into()
    }

    fn recent_files(&'_ self) -> Element<'_, ExplorerMessage> {
        if self.snapshot.recent_files.is_empty() {
            return column![].into();
        }

        let entries: Vec<Element<'_, ExplorerMessage>> = self
            .snapshot
            .recent_files
            .iter()
            .map(|uri| {
                let label = uri
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                button(text(label))
                    .on_press(ExplorerMessage::RecentPressed(uri.clone()))
                    .style(button::text)
                    .into()
            })
            .collect();

        column![text("Recent files").size(18), row(entries).spacing(10)]
            .spacing(5)
            .into()
    }
}

fn report<T>(result: Result<T, String>) {
    if let Err(error) = result {
        popup_error(error);
    }
}

/// Receiver of the navigation snapshots. Every receiver of the service hashes
/// alike, so the stream is started once and kept across view updates.
struct SnapshotFeed(watch::Receiver<NavigationSnapshot>);

impl Hash for SnapshotFeed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        "navigation-snapshots".hash(state);
    }
}

fn snapshot_changes(feed: &SnapshotFeed) -> impl Stream<Item = ExplorerMessage> + use<> {
    let mut receiver = feed.0.clone();
    // Emit the current state first; it may have changed before subscribing.
    receiver.mark_changed();
    stream::unfold(receiver, |mut receiver| async move {
        receiver.changed().await.ok()?;
        let snapshot = receiver.borrow_and_update().clone();
        Some((ExplorerMessage::SnapshotChanged(snapshot), receiver))
    })
}
