/// Native message dialogs
///
/// Both dialogs are modal and block the update loop until answered,
/// which keeps every state transition synchronous.

use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::config::APP_TITLE;
use crate::state::screen::Confirmation;

const DELETE_TITLE: &str = "Are you sure you want to delete?";
const DELETE_LABEL: &str = "Delete";
const CANCEL_LABEL: &str = "Cancel";

/// Ask before removing a profile
pub fn confirm_delete(name: &str) -> Confirmation {
    let result = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(DELETE_TITLE)
        .set_description(name)
        .set_buttons(MessageButtons::OkCancelCustom(
            DELETE_LABEL.to_string(),
            CANCEL_LABEL.to_string(),
        ))
        .show();

    confirmation_from(result)
}

/// Show a one-button notice (refused edit, refused save)
pub fn notify(message: &str) {
    let _ = MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(APP_TITLE)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Backends report custom buttons by label; some fall back to Ok/Cancel
fn confirmation_from(result: MessageDialogResult) -> Confirmation {
    match result {
        MessageDialogResult::Custom(label) if label == DELETE_LABEL => Confirmation::Delete,
        MessageDialogResult::Ok | MessageDialogResult::Yes => Confirmation::Delete,
        _ => Confirmation::Cancel,
    }
}
