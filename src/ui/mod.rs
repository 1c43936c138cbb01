/// UI building blocks for the profile screen
///
/// - `profile_row.rs` - accordion row: header, read-only details, edit form
/// - `avatar.rs` - profile picture or initials badge
/// - `dialogs.rs` - native confirmation and notice dialogs

pub mod avatar;
pub mod dialogs;
pub mod profile_row;
