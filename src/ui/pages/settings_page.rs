use crate::domain::entities::settings::{Settings, SettingsPatch, ThemeMode};
use crate::domain::entities::sort::{SortBy, SortOrder, SortPreference};
use crate::domain::ports::primary::settings_use_case::SettingsUseCase;
use crate::ui::messages::settings_message::SettingsMessage;
use iced::widget::{button, column, row, text};
use iced::{Element, Length, Task};
use std::sync::Arc;

pub struct SettingsPage {
    settings_use_case: Arc<dyn SettingsUseCase>,
    settings: Settings,
}

impl SettingsPage {
    pub fn new(settings_use_case: Arc<dyn SettingsUseCase>) -> Self {
        let settings = settings_use_case.settings();
        Self {
            settings_use_case,
            settings,
        }
    }

    pub fn title() -> String {
        "Settings".to_string()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update(&mut self, message: SettingsMessage) -> Task<SettingsMessage> {
        let patch = match message {
            SettingsMessage::ThemeSelected(theme) => SettingsPatch {
                theme: Some(theme),
                ..SettingsPatch::default()
            },
            SettingsMessage::ShowHiddenFilesToggled(show) => SettingsPatch {
                show_hidden_files: Some(show),
                ..SettingsPatch::default()
            },
            SettingsMessage::GridViewToggled(grid_view) => SettingsPatch {
                grid_view: Some(grid_view),
                ..SettingsPatch::default()
            },
            SettingsMessage::AutoBackupToggled(auto_backup) => SettingsPatch {
                auto_backup: Some(auto_backup),
                ..SettingsPatch::default()
            },
            SettingsMessage::SortBySelected(by) => SettingsPatch {
                default_sort: Some(SortPreference {
                    by,
                    ..self.settings.default_sort
                }),
                ..SettingsPatch::default()
            },
            SettingsMessage::SortOrderToggled => SettingsPatch {
                default_sort: Some(SortPreference {
                    order: self.settings.default_sort.order.toggle(),
                    ..self.settings.default_sort
                }),
                ..SettingsPatch::default()
            },
            SettingsMessage::Reset => {
                self.settings = self.settings_use_case.reset_settings();
                return Task::none();
            }
        };
        self.settings = self.settings_use_case.update_settings(patch);
        Task::none()
    }

    pub fn view(&'_ self) -> Element<'_, SettingsMessage> {
        let theme_row = row![
            text("Theme").width(Length::Fixed(160.0)),
            choice("Light", self.settings.theme == ThemeMode::Light)
                .on_press(SettingsMessage::ThemeSelected(ThemeMode::Light)),
            choice("Dark", self.settings.theme == ThemeMode::Dark)
                .on_press(SettingsMessage::ThemeSelected(ThemeMode::Dark)),
            choice("Auto", self.settings.theme == ThemeMode::Auto)
                .on_press(SettingsMessage::ThemeSelected(ThemeMode::Auto)),
        ]
        .spacing(10);

        let sort = self.settings.default_sort;
        let sort_row = row![
            text("Sort by").width(Length::Fixed(160.0)),
            choice("Name", sort.by == SortBy::Name)
                .on_press(SettingsMessage::SortBySelected(SortBy::Name)),
            choice("Date", sort.by == SortBy::Date)
                .on_press(SettingsMessage::SortBySelected(SortBy::Date)),
            choice("Size", sort.by == SortBy::Size)
                .on_press(SettingsMessage::SortBySelected(SortBy::Size)),
            choice("Type", sort.by == SortBy::Type)
                .on_press(SettingsMessage::SortBySelected(SortBy::Type)),
            button(text(match sort.order {
                SortOrder::Asc => "Ascending",
                SortOrder::Desc => "Descending",
            }))
            .on_press(SettingsMessage::SortOrderToggled)
            .style(button::secondary),
        ]
        .spacing(10);

        column![
            theme_row,
            sort_row,
            switch(
                "Show hidden files",
                self.settings.show_hidden_files,
                SettingsMessage::ShowHiddenFilesToggled
            ),
            switch(
                "Grid view",
                self.settings.grid_view,
                SettingsMessage::GridViewToggled
            ),
            switch(
                "Auto backup",
                self.settings.auto_backup,
                SettingsMessage::AutoBackupToggled
            ),
            button(text("Reset to defaults"))
                .on_press(SettingsMessage::Reset)
                .style(button::danger),
        ]
        .spacing(20)
        .padding(20)
        .into()
    }
}

fn choice(label: &str, active: bool) -> button::Button<'_, SettingsMessage> {
    button(text(label)).style(if active {
        button::primary
    } else {
        button::secondary
    })
}

fn switch<'a>(
    label: &'a str,
    value: bool,
    on_toggle: fn(bool) -> SettingsMessage,
) -> Element<'a, SettingsMessage> {
    row![
        text(label).width(Length::Fixed(160.0)),
        choice(if value { "On" } else { "Off" }, value).on_press(on_toggle(!value)),
    ]
    .spacing(10)
    .into()
}
