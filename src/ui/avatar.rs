use iced::widget::{container, image, text};
use iced::{Border, Element, Length, Theme};
use std::path::PathBuf;

use crate::state::data::Profile;
use crate::Message;

/// Avatar edge length in logical pixels
const AVATAR_SIZE: f32 = 40.0;

/// Profile picture when it resolves to a local file, otherwise an initials badge.
/// Remote pictures are never fetched.
pub fn view<'a>(profile: &Profile) -> Element<'a, Message> {
    match local_picture(&profile.picture) {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fixed(AVATAR_SIZE))
            .height(Length::Fixed(AVATAR_SIZE))
            .into(),
        None => container(text(profile.initials()).size(14))
            .center_x(Length::Fixed(AVATAR_SIZE))
            .center_y(Length::Fixed(AVATAR_SIZE))
            .style(badge)
            .into(),
    }
}

/// Resolve a picture reference to a readable local file
///
/// Accepts plain paths and `file://` URIs; anything with another scheme is remote.
pub fn local_picture(picture: &str) -> Option<PathBuf> {
    let raw = picture.strip_prefix("file://").unwrap_or(picture);
    if raw.is_empty() || raw.contains("://") {
        return None;
    }

    let path = PathBuf::from(raw);
    path.is_file().then_some(path)
}

fn badge(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.primary.weak.color.into()),
        text_color: Some(palette.primary.weak.text),
        border: Border {
            radius: (AVATAR_SIZE / 2.0).into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/celebrities.json");

    #[test]
    fn test_remote_pictures_are_not_local() {
        assert_eq!(local_picture("https://randomuser.me/api/portraits/men/1.jpg"), None);
        assert_eq!(local_picture(""), None);
    }

    #[test]
    fn test_missing_file_is_not_local() {
        assert_eq!(local_picture("/definitely/not/here.png"), None);
    }

    #[test]
    fn test_existing_file_resolves() {
        assert_eq!(local_picture(DATASET_PATH), Some(PathBuf::from(DATASET_PATH)));

        let uri = format!("file://{}", DATASET_PATH);
        assert_eq!(local_picture(&uri), Some(PathBuf::from(DATASET_PATH)));
    }
}
