use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::fmt::Display;
use std::process::exit;
use tracing::error;

/// Logs `error` and shows it in a blocking native dialog.
pub fn popup_error(error: impl Display) {
    let description = error.to_string();
    error!(error = %description, "Reported to the user");
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("File Explorer")
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn popup_error_and_exit(error: impl Display) -> ! {
    popup_error(error);
    exit(1)
}
