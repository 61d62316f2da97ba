use crate::domain::entities::settings::ThemeMode;
use crate::ui::app_factory::FileExplorerAppService;
use crate::ui::messages::app_message::AppMessage;
use crate::ui::pages::explorer_page::ExplorerPage;
use crate::ui::pages::settings_page::SettingsPage;
use iced::widget::{button, column, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Explorer,
    Settings,
}

pub struct FileExplorerApp {
    explorer_page: ExplorerPage,
    settings_page: SettingsPage,
    current_page: Page,
}

impl FileExplorerApp {
    pub fn new(service: FileExplorerAppService) -> (Self, Task<AppMessage>) {
        let (explorer_page, task) = ExplorerPage::new(
            service.explorer_use_case,
            service.document_picker,
            service.camera,
            service.media_library,
        );
        let settings_page = SettingsPage::new(service.settings_use_case);

        (
            Self {
                explorer_page,
                settings_page,
                current_page: Page::Explorer,
            },
            task.map(AppMessage::Explorer),
        )
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "{} (v{})",
            match self.current_page {
                Page::Explorer => self.explorer_page.title(),
                Page::Settings => SettingsPage::title(),
            },
            env!("CARGO_PKG_VERSION")
        )
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        match self.settings_page.settings().theme {
            ThemeMode::Light | ThemeMode::Auto => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    pub fn view(&'_ self) -> Element<'_, AppMessage> {
        let content = match self.current_page {
            Page::Explorer => self
                .explorer_page
                .view(self.settings_page.settings())
                .map(AppMessage::Explorer),
            Page::Settings => self.settings_page.view().map(AppMessage::Settings),
        };

        column![self.nav_bar(), content].padding(20).into()
    }

    pub fn update(&mut self, message: AppMessage) -> Task<AppMessage> {
        match message {
            AppMessage::GoToExplorer => {
                if self.current_page == Page::Settings {
                    self.current_page = Page::Explorer;
                    // Sort and hidden-file preferences may have changed
                    self.explorer_page
                        .apply_settings(self.settings_page.settings());
                }
                Task::none()
            }
            AppMessage::GoToSettings => {
                self.current_page = Page::Settings;
                Task::none()
            }
            AppMessage::Explorer(msg) => self
                .explorer_page
                .update(msg, self.settings_page.settings())
                .map(AppMessage::Explorer),
            AppMessage::Settings(msg) => self.settings_page.update(msg).map(AppMessage::Settings),
        }
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        self.explorer_page.subscription().map(AppMessage::Explorer)
    }

    fn nav_bar(&'_ self) -> Element<'_, AppMessage> {
        row![
            button(text("Files").align_x(Alignment::Center))
                .on_press(AppMessage::GoToExplorer)
                .style(match self.current_page {
                    Page::Explorer => button::primary,
                    Page::Settings => button::secondary,
                })
                .width(Length::Fill),
            button(text("Settings").align_x(Alignment::Center))
                .on_press(AppMessage::GoToSettings)
                .style(match self.current_page {
                    Page::Explorer => button::secondary,
                    Page::Settings => button::primary,
                })
                .width(Length::Fill)
        ]
        .spacing(10)
        .into()
    }
}
