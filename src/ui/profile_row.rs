/// Accordion row for a single profile
///
/// Collapsed rows show only the header. The expanded row shows either
/// the read-only details or, while editing, the edit form fed from the
/// session draft.
use iced::font::Weight;
use iced::widget::{button, column, container, horizontal_space, pick_list, row, text, text_input, Column};
use iced::{Alignment, Border, Element, Font, Length, Theme};

use super::avatar;
use crate::state::data::{Gender, Profile, ProfileField};
use crate::state::selection::{EditSession, Selection};
use crate::Message;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

const LABEL_SIZE: u16 = 12;

pub fn view<'a>(profile: &'a Profile, selection: &'a Selection) -> Element<'a, Message> {
    let is_expanded = selection.expanded() == Some(profile.id);

    let header = button(
        row![
            avatar::view(profile),
            text(profile.full_name()).size(16).font(BOLD).width(Length::Fill),
            text(if is_expanded { "-" } else { "+" }).size(18),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    )
    .on_press(Message::ToggleProfile(profile.id))
    .style(button::text)
    .padding(10)
    .width(Length::Fill);

    let mut body = column![header];

    if is_expanded {
        let content = match selection.session() {
            Some(session) => edit_form(session),
            None => details(profile),
        };

        body = body.push(
            container(content)
                .padding(10)
                .width(Length::Fill)
                .style(details_background),
        );
    }

    container(body).width(Length::Fill).style(card).into()
}

/// Read-only detail view with Edit / Delete
fn details<'a>(profile: &'a Profile) -> Element<'a, Message> {
    column![
        row![
            labelled(ProfileField::Age, text(format!("{} Years", profile.age)).size(LABEL_SIZE)),
            labelled(ProfileField::Gender, text(profile.gender.to_string()).size(LABEL_SIZE)),
            labelled(ProfileField::Country, text(&profile.country).size(LABEL_SIZE)),
        ]
        .spacing(10),
        labelled(ProfileField::Description, text(&profile.description).size(LABEL_SIZE)),
        row![
            horizontal_space(),
            button(text("Edit").font(BOLD))
                .on_press(Message::EditProfile(profile.id))
                .style(button::primary),
            button(text("Delete").font(BOLD))
                .on_press(Message::DeleteProfile(profile.id))
                .style(button::danger),
        ]
        .spacing(20),
    ]
    .spacing(8)
    .into()
}

/// Edit form bound to the staged draft, with Save / Cancel
fn edit_form<'a>(session: &'a EditSession) -> Element<'a, Message> {
    let draft = &session.draft;

    column![
        row![
            labelled(ProfileField::Age, input(ProfileField::Age, &draft.age)),
            labelled(ProfileField::Gender, gender_picker(&draft.gender)),
            labelled(ProfileField::Country, input(ProfileField::Country, &draft.country)),
        ]
        .spacing(10),
        labelled(
            ProfileField::Description,
            input(ProfileField::Description, &draft.description),
        ),
        row![
            horizontal_space(),
            button(text("Save").font(BOLD))
                .on_press(Message::SaveEdit)
                .style(button::success),
            button(text("Cancel").font(BOLD))
                .on_press(Message::CancelEdit)
                .style(button::secondary),
        ]
        .spacing(20),
    ]
    .spacing(8)
    .into()
}

fn labelled<'a>(field: ProfileField, value: impl Into<Element<'a, Message>>) -> Column<'a, Message> {
    column![text(field.label()).size(LABEL_SIZE).font(BOLD), value.into()]
        .spacing(4)
        .width(Length::Fill)
}

fn input<'a>(field: ProfileField, value: &'a str) -> Element<'a, Message> {
    text_input("", value)
        .on_input(move |text| Message::FieldChanged(field, text))
        .padding(8)
        .size(LABEL_SIZE)
        .into()
}

/// Drop-down over the named genders; a free-text gender shows as the placeholder
fn gender_picker<'a>(gender: &Gender) -> Element<'a, Message> {
    let selected = (!gender.is_custom()).then(|| gender.clone());

    pick_list(Gender::options(), selected, Message::GenderPicked)
        .placeholder(gender.to_string())
        .text_size(LABEL_SIZE)
        .padding(8)
        .into()
}

fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..container::Style::default()
    }
}

fn details_background(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        ..container::Style::default()
    }
}
