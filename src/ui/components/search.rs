use crate::ui::messages::explorer_message::ExplorerMessage;
use iced::widget::{button, row, text, text_input};
use iced::{Element, Length};

pub struct Search {
    pub query: String,
}

impl Search {
    pub fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    pub fn view(&'_ self) -> Element<'_, ExplorerMessage> {
        let search_input = text_input("Search files...", &self.query)
            .on_input(ExplorerMessage::SearchChanged)
            .padding(10)
            .width(Length::Fill);

        let clear_button = button(text("Clear"))
            .on_press(ExplorerMessage::SearchClear)
            .padding(10);

        row![search_input, clear_button].spacing(10).into()
    }
}
