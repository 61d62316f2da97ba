use crate::ui::messages::explorer_message::ExplorerMessage;
use crate::ui::messages::settings_message::SettingsMessage;

#[derive(Clone, Debug)]
pub enum AppMessage {
    GoToExplorer,
    GoToSettings,
    Explorer(ExplorerMessage),
    Settings(SettingsMessage),
}
